//! # repaint-transfer
//!
//! Transfer curves between gamma-encoded and linear values.
//!
//! Texture channels are stored gamma-encoded (perceptual). Blending must
//! happen in linear light, so every recolor step decodes, mixes, and
//! re-encodes through the curves in this crate.
//!
//! # Terminology
//!
//! - **EOTF**: encoded -> linear
//! - **OETF**: linear -> encoded
//!
//! # Usage
//!
//! ```rust
//! use repaint_transfer::{gamma_to_linear, linear_to_gamma};
//!
//! let linear = gamma_to_linear(0.5);
//! let encoded = linear_to_gamma(linear);
//! assert!((encoded - 0.5).abs() < 1e-4);
//! ```
//!
//! # Used By
//!
//! - `repaint-aci` - ACI green channel recoloring

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod srgb;

pub use srgb::{eotf as srgb_eotf, oetf as srgb_oetf};

/// Decodes a gamma-encoded value to linear light.
///
/// Input is clamped to [0, 1] first, so out-of-range or NaN samples never
/// reach the power curve. The result is in [0, 1] with
/// `gamma_to_linear(0) == 0` and `gamma_to_linear(1) == 1`.
#[inline]
pub fn gamma_to_linear(v: f32) -> f32 {
    srgb::eotf(clamp_unit(v))
}

/// Encodes a linear value to gamma space.
///
/// Both the input and the result are clamped to [0, 1].
#[inline]
pub fn linear_to_gamma(l: f32) -> f32 {
    clamp_unit(srgb::oetf(clamp_unit(l)))
}

/// Clamps to [0, 1], mapping NaN to 0.
#[inline]
fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}
