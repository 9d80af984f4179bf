//! # repaint-aci
//!
//! Recoloring of building ACI (ambient color intensity) maps.
//!
//! Given an ACI texture and its companion XYS texture, [`recolor`] produces a
//! new ACI buffer whose green channel is rebuilt from the XYS blue channel
//! ("S") in linear light. Red, blue and alpha pass through untouched.
//!
//! | Mode | New green |
//! |------|-----------|
//! | colorize (`invert = false`) | `to_gamma(1 - lin(xys.b))` |
//! | invert (`invert = true`) | `to_gamma(1 - lin(aci.g) * lin(xys.b))` |
//!
//! Colorize mode ignores the incoming ACI green entirely.
//!
//! On top of the per-buffer transform, [`building`] walks a building's mesh
//! slots (main, LOD, sub-meshes, sub-buildings) through a [`TextureSource`],
//! isolating failures so one unreadable texture never stops its siblings.
//!
//! # Example
//!
//! ```rust
//! use repaint_aci::recolor;
//! use repaint_core::Rgba;
//!
//! let aci = vec![Rgba::new(0.2, 0.5, 0.8, 1.0)];
//! let xys = vec![Rgba::new(0.0, 0.0, 0.0, 1.0)];
//! let out = recolor(&aci, &xys, false).unwrap();
//! assert!((out[0].g - 1.0).abs() < 1e-6);
//! assert_eq!(out[0].r, 0.2);
//! ```
//!
//! # Dependencies
//!
//! - `repaint-core` - pixel and texture types
//! - `repaint-transfer` - gamma curves
//! - `rayon` - data-parallel pixel and building iteration

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod building;
mod error;
pub mod mode;
pub mod recolor;

pub use building::{
    Building, ColorizeReport, Material, MeshKind, MeshSlot, SlotFailure, TextureSource,
    colorize_building, colorize_buildings, colorize_material,
};
pub use error::{AciError, AciResult, ColorizeError, MapKind};
pub use mode::ColorizeMode;
pub use recolor::{recolor, recolor_pixel, recolor_texture};
