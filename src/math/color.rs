//! Hex color normalization and Euclidean RGB distance

use crate::io::configuration::{UNKNOWN_COLOR_DISTANCE, UNKNOWN_COLOR_HEX};
use serde::{Serialize, Serializer};
use std::fmt;

/// 8-bit RGB coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Euclidean distance between two coordinates
    pub fn distance(self, other: Self) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        dr.mul_add(dr, dg.mul_add(dg, db * db)).sqrt()
    }
}

/// Normalized item color
///
/// Always carries a lowercase `#rrggbb` string. Inputs that do not match
/// `#rgb` or `#rrggbb` become [`UNKNOWN_COLOR_HEX`] with no coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor {
    hex: String,
    rgb: Option<Rgb>,
}

impl HexColor {
    /// Normalize raw catalog input, never failing
    pub fn parse(raw: &str) -> Self {
        parse_rgb(raw).map_or_else(Self::unknown, Self::from_rgb)
    }

    /// Normalize optional catalog input, treating absence as unknown
    pub fn parse_optional(raw: Option<&str>) -> Self {
        raw.map_or_else(Self::unknown, Self::parse)
    }

    /// Build a known color from its coordinate
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            hex: format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b),
            rgb: Some(rgb),
        }
    }

    /// The unknown-color placeholder
    pub fn unknown() -> Self {
        Self {
            hex: UNKNOWN_COLOR_HEX.to_string(),
            rgb: None,
        }
    }

    /// Normalized `#rrggbb` form
    pub fn as_hex(&self) -> &str {
        &self.hex
    }

    /// RGB coordinate, absent for unknown colors
    pub const fn rgb(&self) -> Option<Rgb> {
        self.rgb
    }

    /// Whether the input failed to normalize
    pub const fn is_unknown(&self) -> bool {
        self.rgb.is_none()
    }

    /// Distance to another color, see [`distance`]
    pub fn distance(&self, other: &Self) -> f64 {
        distance(self, other)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex)
    }
}

/// Normalize a hex color string to lowercase `#rrggbb`
///
/// Expands `#abc` shorthand. Unparseable input yields [`UNKNOWN_COLOR_HEX`].
pub fn normalize(raw: &str) -> String {
    HexColor::parse(raw).hex
}

/// Parse `#rgb` / `#rrggbb` (hash optional, case-insensitive) into a coordinate
pub fn parse_rgb(raw: &str) -> Option<Rgb> {
    let digits = raw.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return None,
    };

    let value = u32::from_str_radix(&expanded, 16).ok()?;
    Some(Rgb {
        r: ((value >> 16) & 0xff) as u8,
        g: ((value >> 8) & 0xff) as u8,
        b: (value & 0xff) as u8,
    })
}

/// Euclidean RGB distance between two colors
///
/// Returns [`UNKNOWN_COLOR_DISTANCE`] if either side is unknown.
pub fn distance(a: &HexColor, b: &HexColor) -> f64 {
    match (a.rgb, b.rgb) {
        (Some(a), Some(b)) => a.distance(b),
        _ => UNKNOWN_COLOR_DISTANCE,
    }
}
