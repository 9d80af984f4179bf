//! Raw sRGB curves.
//!
//! Texture maps are authored in sRGB, so decoding a channel means undoing
//! the sRGB encoding: a short straight segment at the dark end, a 2.4
//! exponent above it. The two pieces meet at 0.04045 encoded / 0.0031308
//! linear.
//!
//! These functions do no clamping; callers pass values in [0, 1].
//! [`crate::gamma_to_linear`] and [`crate::linear_to_gamma`] are the clamped
//! entry points used by recoloring.

const ENCODED_KNEE: f32 = 0.04045;
const LINEAR_KNEE: f32 = 0.0031308;
const SLOPE: f32 = 12.92;
const OFFSET: f32 = 0.055;
const EXPONENT: f32 = 2.4;

/// Encoded channel value to linear light.
///
/// ```rust
/// use repaint_transfer::srgb::eotf;
///
/// // mid-grey in a texture is about a fifth of full intensity
/// assert!((eotf(0.5) - 0.2140).abs() < 1e-3);
/// ```
#[inline]
pub fn eotf(v: f32) -> f32 {
    if v <= ENCODED_KNEE {
        v / SLOPE
    } else {
        ((v + OFFSET) / (1.0 + OFFSET)).powf(EXPONENT)
    }
}

/// Linear light to encoded channel value. Inverse of [`eotf`].
#[inline]
pub fn oetf(l: f32) -> f32 {
    if l <= LINEAR_KNEE {
        l * SLOPE
    } else {
        (1.0 + OFFSET) * l.powf(1.0 / EXPONENT) - OFFSET
    }
}
