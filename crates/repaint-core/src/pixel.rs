//! Pixel types.
//!
//! Two color representations are used across the workspace:
//!
//! - [`Rgba`] - four normalized `f32` channels in [0, 1], the working
//!   format of texture buffers
//! - [`Rgba8`] - four `u8` channels, the storage format of per-building
//!   tint colors
//!
//! # Memory Layout
//!
//! Both types are `#[repr(C)]` so a buffer of samples has the same layout
//! as an interleaved `[R G B A R G B A ...]` array.
//!
//! # Example
//!
//! ```
//! use repaint_core::{Rgba, Rgba8};
//!
//! let tint: Rgba8 = "ff8000".parse().unwrap();
//! let sample = Rgba::from(tint);
//! assert_eq!(sample.r, 1.0);
//! assert_eq!(sample.a, 1.0);
//! ```

use crate::CoreError;
use std::fmt;
use std::str::FromStr;

/// Normalized RGBA sample.
///
/// Channels are nominally in [0, 1]. Constructors do not clamp; code that
/// quantizes samples (see [`Rgba8::from`]) clamps at that boundary.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
    /// Alpha channel
    pub a: f32,
}

impl Rgba {
    /// Creates a sample from all four channels.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque sample.
    #[inline]
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Returns a copy with the green channel replaced.
    #[inline]
    pub const fn with_green(self, g: f32) -> Self {
        Self { g, ..self }
    }
}

/// 8-bit RGBA color.
///
/// Parses from and formats as hexadecimal `RRGGBB` / `RRGGBBAA`, with an
/// optional leading `#`. Six-digit literals are opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Rgba8 {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl Rgba8 {
    /// Creates a color from all four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Returns channels as `[r, g, b, a]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Builds a color from `[r, g, b, a]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }
}

impl From<Rgba8> for Rgba {
    fn from(c: Rgba8) -> Self {
        Self::new(
            f32::from(c.r) / 255.0,
            f32::from(c.g) / 255.0,
            f32::from(c.b) / 255.0,
            f32::from(c.a) / 255.0,
        )
    }
}

impl From<Rgba> for Rgba8 {
    fn from(c: Rgba) -> Self {
        Self::new(quantize(c.r), quantize(c.g), quantize(c.b), quantize(c.a))
    }
}

/// Maps a normalized channel to 0..=255, treating NaN as 0.
#[inline]
fn quantize(v: f32) -> u8 {
    if v.is_nan() {
        return 0;
    }
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl FromStr for Rgba8 {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if !(hex.len() == 6 || hex.len() == 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CoreError::InvalidColor(s.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| CoreError::InvalidColor(s.to_string()))
        };

        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

impl fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_rgb() {
        let c: Rgba8 = "#1a2B3c".parse().unwrap();
        assert_eq!(c, Rgba8::new(0x1a, 0x2b, 0x3c, 255));
    }

    #[test]
    fn test_parse_rgba() {
        let c: Rgba8 = "10203040".parse().unwrap();
        assert_eq!(c, Rgba8::new(0x10, 0x20, 0x30, 0x40));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Rgba8>().is_err());
        assert!("12345".parse::<Rgba8>().is_err());
        assert!("gg0000".parse::<Rgba8>().is_err());
        assert!("#ff00ff0".parse::<Rgba8>().is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        let c = Rgba8::new(1, 2, 254, 255);
        assert_eq!(c.to_string(), "#0102feff");
        assert_eq!(c.to_string().parse::<Rgba8>().unwrap(), c);
    }

    #[test]
    fn test_float_conversion() {
        let f = Rgba::from(Rgba8::new(255, 0, 51, 255));
        assert_relative_eq!(f.r, 1.0);
        assert_relative_eq!(f.g, 0.0);
        assert_relative_eq!(f.b, 0.2);

        let back = Rgba8::from(Rgba::new(1.5, -0.2, 0.2, f32::NAN));
        assert_eq!(back, Rgba8::new(255, 0, 51, 0));
    }

    #[test]
    fn test_with_green_keeps_other_channels() {
        let px = Rgba::new(0.1, 0.2, 0.3, 0.4).with_green(0.9);
        assert_eq!(px, Rgba::new(0.1, 0.9, 0.3, 0.4));
    }
}
