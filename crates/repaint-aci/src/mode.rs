//! Per-prefab colorize mode.

use std::fmt;
use std::str::FromStr;

/// How a building prefab's ACI maps are rewritten when it loads.
///
/// A prefab has exactly one mode, so it can never be both colorized and
/// inverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorizeMode {
    /// Leave textures untouched.
    #[default]
    None,
    /// Rebuild green from the XYS map alone.
    Colorized,
    /// Rebuild green as the complement of ACI x XYS.
    Inverted,
}

impl ColorizeMode {
    /// The `invert` flag to pass to [`crate::recolor`], or `None` when no
    /// recolor call should happen.
    #[inline]
    pub fn invert_flag(self) -> Option<bool> {
        match self {
            Self::None => None,
            Self::Colorized => Some(false),
            Self::Inverted => Some(true),
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Colorized => "colorized",
            Self::Inverted => "inverted",
        }
    }
}

impl fmt::Display for ColorizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ColorizeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "off" => Ok(Self::None),
            "colorize" | "colorized" => Ok(Self::Colorized),
            "invert" | "inverted" => Ok(Self::Inverted),
            other => Err(format!(
                "unknown colorize mode '{}': expected none, colorized or inverted",
                other
            )),
        }
    }
}
