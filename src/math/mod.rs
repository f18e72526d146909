//! Mathematical utilities for the engine

/// Hex color normalization and RGB distance
pub mod color;
