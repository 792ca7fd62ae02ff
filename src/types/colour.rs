//! Colour type and parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::{AvatarError, Result};

/// An opaque RGB colour value.
///
/// Rendered output never carries alpha: every canvas cell ends up exactly
/// one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RRGGBB` (6 digits)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);
        let digits: Vec<char> = hex.chars().collect();

        match digits.len() {
            3 => {
                // #RGB -> #RRGGBB
                let r = parse_hex_digit(digits[0])?;
                let g = parse_hex_digit(digits[1])?;
                let b = parse_hex_digit(digits[2])?;
                Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 if hex.is_ascii() => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                Ok(Self::rgb(r, g, b))
            }
            _ => Err(AvatarError::Config {
                message: format!("Invalid hex colour: {}", s),
                help: Some("Use #RGB or #RRGGBB format".to_string()),
            }),
        }
    }

    /// Shift every channel by `amount`, clamping to `[0, 255]`.
    pub fn brighten(self, amount: i32) -> Self {
        Self::rgb(
            clamp_channel(self.r as i32 + amount),
            clamp_channel(self.g as i32 + amount),
            clamp_channel(self.b as i32 + amount),
        )
    }

    /// Add per-channel offsets, clamping to `[0, 255]`.
    pub fn offset(self, dr: i32, dg: i32, db: i32) -> Self {
        Self::rgb(
            clamp_channel(self.r as i32 + dr),
            clamp_channel(self.g as i32 + dg),
            clamp_channel(self.b as i32 + db),
        )
    }

    /// Convert to an RGB triple.
    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Convert to an opaque RGBA quadruple.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl FromStr for Colour {
    type Err = AvatarError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| AvatarError::Config {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| AvatarError::Config {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_6digit() {
        let c = Colour::from_hex("#0C0D11").unwrap();
        assert_eq!(c, Colour::rgb(12, 13, 17));

        let c = Colour::from_hex("4ec373").unwrap();
        assert_eq!(c, Colour::rgb(0x4e, 0xc3, 0x73));
    }

    #[test]
    fn test_from_hex_3digit() {
        let c = Colour::from_hex("#ABC").unwrap();
        assert_eq!(c, Colour::rgb(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Colour::from_hex("#GGG").is_err());
        assert!(Colour::from_hex("#12345").is_err());
        assert!(Colour::from_hex("#FF000080").is_err());
        assert!(Colour::from_hex("").is_err());
    }

    #[test]
    fn test_brighten_clamps() {
        let c = Colour::rgb(250, 128, 3);
        assert_eq!(c.brighten(10), Colour::rgb(255, 138, 13));
        assert_eq!(c.brighten(-10), Colour::rgb(240, 118, 0));
        assert_eq!(c.brighten(0), c);
    }

    #[test]
    fn test_offset_per_channel() {
        let bg = Colour::rgb(12, 13, 17);
        assert_eq!(bg.offset(3, 0, 0), Colour::rgb(15, 13, 17));
        assert_eq!(bg.offset(0, 300, -20), Colour::rgb(12, 255, 0));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Colour::rgb(255, 0, 0)), "#FF0000");
        assert_eq!(Colour::from_hex("#8892a4").unwrap().to_string(), "#8892A4");
    }
}
