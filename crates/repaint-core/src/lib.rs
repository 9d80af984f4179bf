//! # repaint-core
//!
//! Core types shared by every repaint crate.
//!
//! - [`Rgba`] - Normalized floating point RGBA sample
//! - [`Rgba8`] - Packed 8-bit RGBA color (per-building tint)
//! - [`PixelBuffer`] - Flat, row-major sequence of [`Rgba`] samples
//! - [`Texture`] - A [`PixelBuffer`] with known dimensions
//! - [`CoreError`] - Errors raised while building these types
//!
//! ## Crate Structure
//!
//! ```text
//! repaint-core (this crate)
//!    ^
//!    |
//!    +-- repaint-transfer (gamma curves)
//!    +-- repaint-aci (ACI recoloring)
//!    +-- repaint-data (config, savegame, overrides)
//!    +-- repaint-io (PNG textures)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod pixel;
pub mod texture;

pub use error::{CoreError, CoreResult};
pub use pixel::{Rgba, Rgba8};
pub use texture::{PixelBuffer, Texture};

/// Identifier of a placed building instance.
pub type BuildingId = u16;
