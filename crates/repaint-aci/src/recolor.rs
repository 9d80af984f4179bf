//! The ACI recolor transform.
//!
//! A pure per-pixel map: output sample `i` depends only on `aci[i]` and
//! `xys[i]`. No neighbor access, no state, no allocation beyond the output.
//!
//! # Algorithm
//!
//! ```text
//! a_lin = to_linear(aci.g)
//! x_lin = to_linear(xys.b)
//!
//! invert:      g = to_gamma(1 - a_lin * x_lin)
//! not invert:  g = to_gamma(1 - x_lin)
//!
//! out = (aci.r, g, aci.b, aci.a)
//! ```
//!
//! XYS red and green are never read. In colorize mode the ACI green is not
//! read either; the result is a brightness map derived from XYS alone.

use rayon::prelude::*;
use repaint_core::{PixelBuffer, Rgba, Texture};
use repaint_transfer::{gamma_to_linear, linear_to_gamma};
use tracing::trace;

use crate::{AciError, AciResult};

/// Recolors a single sample.
///
/// # Example
///
/// ```rust
/// use repaint_aci::recolor_pixel;
/// use repaint_core::Rgba;
///
/// let out = recolor_pixel(Rgba::opaque(1.0, 1.0, 1.0), Rgba::opaque(0.0, 0.0, 1.0), true);
/// assert!(out.g.abs() < 1e-6);
/// ```
#[inline]
pub fn recolor_pixel(aci: Rgba, xys: Rgba, invert: bool) -> Rgba {
    let x_lin = gamma_to_linear(xys.b);

    let green = if invert {
        let a_lin = gamma_to_linear(aci.g);
        linear_to_gamma(1.0 - a_lin * x_lin)
    } else {
        linear_to_gamma(1.0 - x_lin)
    };

    aci.with_green(green)
}

/// Recolors an ACI buffer using its XYS companion.
///
/// Returns a new buffer of the same length; inputs are left untouched.
/// Empty inputs produce an empty output.
///
/// # Errors
///
/// Returns [`AciError::LengthMismatch`] if the buffers differ in length.
pub fn recolor(aci: &[Rgba], xys: &[Rgba], invert: bool) -> AciResult<PixelBuffer> {
    if aci.len() != xys.len() {
        return Err(AciError::LengthMismatch {
            aci: aci.len(),
            xys: xys.len(),
        });
    }

    trace!(samples = aci.len(), invert, "recolor");

    Ok(aci
        .par_iter()
        .zip(xys.par_iter())
        .map(|(&a, &x)| recolor_pixel(a, x, invert))
        .collect())
}

/// Recolors a texture pair, keeping the ACI texture's dimensions.
///
/// # Errors
///
/// Returns [`AciError::Core`] wrapping a dimension mismatch if the two
/// textures differ in size.
pub fn recolor_texture(aci: &Texture, xys: &Texture, invert: bool) -> AciResult<Texture> {
    aci.ensure_same_size(xys)?;
    let pixels = recolor(aci.pixels(), xys.pixels(), invert)?;
    Ok(Texture::from_pixels(aci.width(), aci.height(), pixels)?)
}
