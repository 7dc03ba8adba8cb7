//! Hex color handling for toolbar colors and canvas backgrounds.

use peniko::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Color parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Color must start with '#': {0}")]
    MissingHash(String),
    #[error("Color must have 3 or 6 hex digits: {0}")]
    InvalidLength(String),
    #[error("Invalid hex digit in color: {0}")]
    InvalidDigit(String),
}

/// An opaque RGB color written as `#rrggbb`.
///
/// Serialized as its hex string so it can travel through JSON config and
/// toolbar payloads unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    /// RGBA bytes with full opacity.
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self::black()
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(s.to_string()))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit(s.to_string()));
        }

        let channel = |hex: &str| {
            u8::from_str_radix(hex, 16).map_err(|_| ColorError::InvalidDigit(s.to_string()))
        };

        match digits.len() {
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            // Shorthand: each digit doubles (#f80 == #ff8800)
            3 => {
                let r = channel(&digits[0..1])?;
                let g = channel(&digits[1..2])?;
                let b = channel(&digits[2..3])?;
                Ok(Self::new(r * 17, g * 17, b * 17))
            }
            _ => Err(ColorError::InvalidLength(s.to_string())),
        }
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<HexColor> for Color {
    fn from(color: HexColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, 255)
    }
}

impl From<Color> for HexColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b)
    }
}

/// Quick-pick colors offered next to the custom color input.
pub const PRESET_COLORS: [HexColor; 8] = [
    HexColor::new(0x00, 0x00, 0x00),
    HexColor::new(0xef, 0x44, 0x44),
    HexColor::new(0xf9, 0x73, 0x16),
    HexColor::new(0xea, 0xb3, 0x08),
    HexColor::new(0x22, 0xc5, 0x5e),
    HexColor::new(0x3b, 0x82, 0xf6),
    HexColor::new(0x8b, 0x5c, 0xf6),
    HexColor::new(0xec, 0x48, 0x99),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_form() {
        let color: HexColor = "#3B82F6".parse().unwrap();
        assert_eq!(color, HexColor::new(0x3b, 0x82, 0xf6));
        assert_eq!(color.to_string(), "#3b82f6");
    }

    #[test]
    fn test_parse_shorthand() {
        let color: HexColor = "#f80".parse().unwrap();
        assert_eq!(color, HexColor::new(0xff, 0x88, 0x00));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("000000".parse::<HexColor>(), Err(ColorError::MissingHash(_))));
        assert!(matches!("#12345".parse::<HexColor>(), Err(ColorError::InvalidLength(_))));
        assert!(matches!("#gg0000".parse::<HexColor>(), Err(ColorError::InvalidDigit(_))));
        assert!(matches!("#ééé".parse::<HexColor>(), Err(ColorError::InvalidDigit(_))));
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&HexColor::white()).unwrap();
        assert_eq!(json, "\"#ffffff\"");

        let back: HexColor = serde_json::from_str("\"#000\"").unwrap();
        assert_eq!(back, HexColor::black());
        assert!(serde_json::from_str::<HexColor>("\"red\"").is_err());
    }

    #[test]
    fn test_peniko_conversion() {
        let color = HexColor::new(10, 20, 30);
        let peniko: Color = color.into();
        assert_eq!(HexColor::from(peniko), color);
    }

    #[test]
    fn test_preset_palette() {
        assert_eq!(PRESET_COLORS[0], HexColor::black());
        for (i, color) in PRESET_COLORS.iter().enumerate() {
            assert!(!PRESET_COLORS[i + 1..].contains(color), "duplicate preset {color}");
            assert_eq!(color.to_string().parse::<HexColor>().unwrap(), *color);
        }
    }
}
