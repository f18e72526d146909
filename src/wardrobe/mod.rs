//! Wardrobe data model
//!
//! Items as served by the catalog, the slot grouping the generators work
//! over, assembled outfits, and the palette table.

/// Catalog items, slot types, and slot pools
pub mod item;
/// Outfit candidates and dedup keys
pub mod outfit;
/// Curated palette table and palette loading
pub mod palette;

pub use item::{ClothingItem, ItemId, SlotPools, SlotType};
pub use outfit::{DedupKey, OutfitCandidate, Strategy};
pub use palette::Palette;
