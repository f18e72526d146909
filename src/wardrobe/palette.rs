//! Curated color palettes used for nearest-color outfit matching

use crate::io::error::{EngineError, Result, WithPath, invalid_parameter};
use crate::math::color::{HexColor, parse_rgb};
use std::path::Path;

/// Curated palette table, each row ordered top to bottom as published
pub const CURATED_PALETTES: &[&[&str]] = &[
    &["#41A67E", "#05339C", "#1055C9", "#E5C95F"],
    &["#662222", "#842A3B", "#A3485A", "#F5DAA7"],
    &["#4E56C0", "#9B5DE0", "#D78FEE", "#FDCFFA"],
    &["#80A1BA", "#91C4C3", "#B4DEBD", "#FFF7DD"],
    &["#432323", "#2F5755", "#5A9690", "#E0D9D9"],
    &["#0046FF", "#73C8D2", "#F5F1DC", "#FF9013"],
    &["#D97D55", "#F4E9D7", "#B8C4A9", "#6FA4AF"],
    &["#696FC7", "#A7AAE1", "#F5D3C4", "#F2AEBB"],
    &["#000B58", "#003161", "#006A67", "#FDEB9E"],
    &["#19183B", "#708993", "#A1C2BD", "#E7F2EF"],
    &["#F5EFE6", "#E8DFCA", "#6D94C5", "#CBDCEB"],
    &["#96A78D", "#B6CEB4", "#D9EDCF", "#F0F0F0"],
    &["#FFECC0", "#FFC29B", "#F39F9F", "#B95E82"],
    &["#F5D2D2", "#F8F7BA", "#D8E3C3", "#A3CCDA"],
    &["#84994F", "#FFE797", "#FCB53B", "#B45253"],
    &["#6B3F69", "#8D5F8C", "#A376A2", "#DDC3C3"],
    &["#EF7722", "#FAA533", "#EBEBEB", "#0BA6DF"],
    &["#1B3C53", "#234C6A", "#456882", "#D2C1B6"],
    // Reversed orderings of earlier rows, plus late additions
    &["#E7F2EF", "#A1C2BD", "#708993", "#19183B"],
    &["#CBDCEB", "#6D94C5", "#E8DFCA", "#F5EFE6"],
    &["#F0F0F0", "#D9E9CF", "#B6CEB4", "#96A78D"],
    &["#A3CCDA", "#BDE3C3", "#F8F7BA", "#F5D2D2"],
    &["#DDC3C3", "#A376A2", "#8D5F8C", "#6B3F69"],
    &["#D2C1B6", "#456882", "#234C6A", "#1B3C53"],
    &["#FFD5D5", "#FDAAAA", "#3A6F43", "#59AC77"],
    &["#F2AEBB", "#F5D3C4", "#A7AAE1", "#696FC7"],
    &["#F5DAA7", "#A3485A", "#842A3B", "#662222"],
];

/// Ordered, non-empty list of known reference colors
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<HexColor>,
}

impl Palette {
    /// Build a palette from hex strings
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidParameter`] if the list is empty or any
    /// entry is not a `#rgb` / `#rrggbb` color.
    pub fn new<S: AsRef<str>>(colors: &[S]) -> Result<Self> {
        if colors.is_empty() {
            return Err(invalid_parameter(
                "palette",
                &"[]",
                &"a palette needs at least one color",
            ));
        }

        let colors = colors
            .iter()
            .map(|raw| {
                parse_rgb(raw.as_ref())
                    .map(HexColor::from_rgb)
                    .ok_or_else(|| {
                        invalid_parameter("palette", &raw.as_ref(), &"not a #rgb or #rrggbb color")
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { colors })
    }

    /// Reference colors in table order
    pub fn colors(&self) -> &[HexColor] {
        &self.colors
    }

    /// Distance from a color to the closest reference color
    pub fn nearest_distance(&self, color: &HexColor) -> f64 {
        self.colors
            .iter()
            .map(|reference| reference.distance(color))
            .fold(f64::INFINITY, f64::min)
    }
}

/// The built-in palette table
pub fn curated_palettes() -> Vec<Palette> {
    CURATED_PALETTES
        .iter()
        .filter_map(|row| Palette::new(*row).ok())
        .collect()
}

/// Parse a palette table from a JSON array of color arrays
///
/// # Errors
///
/// Returns an error if the document is not an array of string arrays or if
/// any palette fails [`Palette::new`].
pub fn palettes_from_json(json: &str, origin: &Path) -> Result<Vec<Palette>> {
    let rows: Vec<Vec<String>> =
        serde_json::from_str(json).map_err(|source| EngineError::CatalogFormat {
            path: origin.to_path_buf(),
            source,
        })?;
    rows.iter().map(|row| Palette::new(row.as_slice())).collect()
}

/// Load a palette table from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails [`palettes_from_json`]
pub fn load_palettes(path: &Path) -> Result<Vec<Palette>> {
    let json = std::fs::read_to_string(path).with_path(path, "read palette table")?;
    palettes_from_json(&json, path)
}
