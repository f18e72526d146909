//! Outfit generation engine
//!
//! A run groups the catalog by slot, matches every curated palette, then
//! samples vibe-biased random outfits refined for color harmony until the
//! target or the attempt ceiling is reached. Both passes share one dedup
//! registry.

/// Vibe-biased random assembly
pub mod assembler;
/// Bounded ordered set of outfit keys
pub mod dedup;
/// Color-harmony local search
pub mod harmony;
/// Run sequencing, bounds, and lifecycle
pub mod orchestrator;
/// Nearest-color palette matching
pub mod palette_matcher;
/// Injectable random source
pub mod random;
/// Frequency-weighted vibe sampling
pub mod vibe;
