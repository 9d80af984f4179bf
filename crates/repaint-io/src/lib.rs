//! # repaint-io
//!
//! Texture files for repaint.
//!
//! - [`png`] - read/write PNG textures as normalized RGBA [`Texture`]s
//! - [`source`] - [`FileTextureSource`], a [`TextureSource`] over PNG files,
//!   and [`discover_building`], which maps a directory of texture files to a
//!   [`Building`]
//!
//! # Building directory layout
//!
//! ```text
//! H1 2x2 Detached01/
//!   main_aci.png   main_xys.png
//!   lod_aci.png    lod_xys.png
//!   sub0_aci.png   sub0_xys.png
//!   sub0_lod_aci.png  sub0_lod_xys.png
//!   Garage/                 <- sub-building
//!     main_aci.png main_xys.png
//! ```
//!
//! [`Texture`]: repaint_core::Texture
//! [`TextureSource`]: repaint_aci::TextureSource
//! [`Building`]: repaint_aci::Building

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod png;
pub mod source;

pub use error::{IoError, IoResult};
pub use source::{FileTextureSource, discover_building, parse_slot};
