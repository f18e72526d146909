//! Outfit candidates and their canonical dedup keys

use crate::wardrobe::item::{ClothingItem, ItemId, SlotType};
use serde::Serialize;
use std::fmt;

/// Strategy that produced a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Nearest-color match against a curated palette
    Palette,
    /// Vibe-weighted random draw refined for color harmony
    Random,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Palette => f.write_str("palette"),
            Self::Random => f.write_str("random"),
        }
    }
}

/// Canonical identity of a candidate: its item ids sorted ascending, joined by `-`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DedupKey(String);

impl DedupKey {
    /// Build the key for a set of ids, independent of their order
    pub fn from_ids(ids: impl IntoIterator<Item = ItemId>) -> Self {
        let mut ids: Vec<ItemId> = ids.into_iter().collect();
        ids.sort_unstable();
        let joined = ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("-");
        Self(joined)
    }

    /// Key text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DedupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One assembled outfit borrowing items from a catalog snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutfitCandidate<'a> {
    /// Chosen items, one role per entry
    pub items: Vec<&'a ClothingItem>,
    /// Vibe the candidate was biased toward
    pub vibe: Option<String>,
    /// Strategy that produced it
    pub strategy: Strategy,
}

impl<'a> OutfitCandidate<'a> {
    /// Create a candidate
    pub const fn new(
        items: Vec<&'a ClothingItem>,
        vibe: Option<String>,
        strategy: Strategy,
    ) -> Self {
        Self {
            items,
            vibe,
            strategy,
        }
    }

    /// Ids of the chosen items in role order
    pub fn item_ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id).collect()
    }

    /// Canonical dedup key
    pub fn dedup_key(&self) -> DedupKey {
        DedupKey::from_ids(self.items.iter().map(|item| item.id))
    }

    /// Whether the given item is already part of the outfit
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Item filling a slot, if any
    pub fn item_for(&self, slot: SlotType) -> Option<&'a ClothingItem> {
        self.items.iter().copied().find(|item| item.slot == slot)
    }

    /// Whether top, bottom, and shoes are all present
    pub fn has_required_slots(&self) -> bool {
        SlotType::REQUIRED
            .iter()
            .all(|&slot| self.item_for(slot).is_some())
    }

    /// Whether no id appears twice
    pub fn has_unique_items(&self) -> bool {
        let mut ids = self.item_ids();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        ids.len() == total
    }

    /// Both structural invariants hold
    pub fn is_valid(&self) -> bool {
        self.has_required_slots() && self.has_unique_items()
    }
}
