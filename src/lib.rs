//! Outfit generation for tagged wardrobe catalogs
//!
//! Items carry a slot, free-form vibe tags, and a dominant color. Generation
//! matches the catalog against curated color palettes, then samples
//! vibe-weighted random outfits refined for color harmony, all under a
//! bounded attempt budget and with duplicate outfits filtered out.

#![forbid(unsafe_code)]

/// Outfit generation engine: palette matching, random assembly, and orchestration
pub mod algorithm;
/// Collaborator boundaries, configuration, CLI, and error handling
pub mod io;
/// Color math
pub mod math;
/// Wardrobe data model and palette table
pub mod wardrobe;

pub use io::error::{EngineError, Result};
