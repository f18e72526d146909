//! Catalog items and their grouping by slot

use crate::math::color::HexColor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Numeric identifier issued by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Wardrobe category an item fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotType {
    /// Shirts, blouses, tees
    Top,
    /// Trousers, skirts, shorts
    Bottom,
    /// Footwear
    Shoes,
    /// Bags, jewellery, hats
    Accessories,
    /// Jackets and pullovers
    #[serde(alias = "pullover")]
    Outerwear,
}

impl SlotType {
    /// Every slot in canonical assembly order
    pub const ALL: [Self; 5] = [
        Self::Top,
        Self::Bottom,
        Self::Shoes,
        Self::Accessories,
        Self::Outerwear,
    ];

    /// Slots every outfit must fill
    pub const REQUIRED: [Self; 3] = [Self::Top, Self::Bottom, Self::Shoes];

    /// Slots filled only when the catalog has something for them
    pub const OPTIONAL: [Self; 2] = [Self::Accessories, Self::Outerwear];

    /// Whether the slot must be present in every outfit
    pub const fn is_required(self) -> bool {
        matches!(self, Self::Top | Self::Bottom | Self::Shoes)
    }

    /// Position in [`SlotType::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase wire name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Shoes => "shoes",
            Self::Accessories => "accessories",
            Self::Outerwear => "outerwear",
        }
    }

    /// Parse a wire name, accepting `pullover` for outerwear
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            "shoes" => Some(Self::Shoes),
            "accessories" => Some(Self::Accessories),
            "outerwear" | "pullover" => Some(Self::Outerwear),
            _ => None,
        }
    }
}

impl fmt::Display for SlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tagged wardrobe photograph
///
/// Read-only for the engine; the catalog owns creation and deletion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItem {
    /// Catalog identifier
    pub id: ItemId,
    /// Category the item fills
    pub slot: SlotType,
    /// Free-form style tags
    pub vibes: BTreeSet<String>,
    /// Normalized dominant color
    pub color: HexColor,
    /// Opaque image handle
    pub image_ref: String,
}

impl ClothingItem {
    /// Create an item, normalizing the raw color
    pub fn new(id: u64, slot: SlotType, color: &str) -> Self {
        Self {
            id: ItemId(id),
            slot,
            vibes: BTreeSet::new(),
            color: HexColor::parse(color),
            image_ref: String::new(),
        }
    }

    /// Attach vibe tags
    #[must_use]
    pub fn with_vibes<I, S>(mut self, vibes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vibes.extend(vibes.into_iter().map(Into::into));
        self
    }

    /// Attach the image handle
    #[must_use]
    pub fn with_image_ref(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = image_ref.into();
        self
    }

    /// Whether the item carries the given vibe
    pub fn has_vibe(&self, vibe: &str) -> bool {
        self.vibes.contains(vibe)
    }
}

/// Catalog snapshot grouped by slot
///
/// Each pool keeps catalog iteration order, which decides nearest-color ties.
#[derive(Debug, Clone, Default)]
pub struct SlotPools<'a> {
    pools: [Vec<&'a ClothingItem>; 5],
}

impl<'a> SlotPools<'a> {
    /// Group a catalog snapshot by slot
    pub fn from_items(items: &'a [ClothingItem]) -> Self {
        let mut pools: [Vec<&'a ClothingItem>; 5] = Default::default();
        for item in items {
            if let Some(pool) = pools.get_mut(item.slot.index()) {
                pool.push(item);
            }
        }
        Self { pools }
    }

    /// Items available for a slot, in catalog order
    pub fn pool(&self, slot: SlotType) -> &[&'a ClothingItem] {
        self.pools
            .get(slot.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of items available for a slot
    pub fn pool_size(&self, slot: SlotType) -> usize {
        self.pool(slot).len()
    }

    /// Whether every required slot has at least one item
    pub fn covers_required(&self) -> bool {
        SlotType::REQUIRED
            .iter()
            .all(|&slot| self.pool_size(slot) > 0)
    }

    /// Smallest required pool, the number of distinct required-slot assignments
    /// that can be made without reusing an item
    pub fn required_capacity(&self) -> usize {
        SlotType::REQUIRED
            .iter()
            .map(|&slot| self.pool_size(slot))
            .min()
            .unwrap_or(0)
    }

    /// Total number of grouped items
    pub fn len(&self) -> usize {
        self.pools.iter().map(Vec::len).sum()
    }

    /// Whether no items were grouped
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
