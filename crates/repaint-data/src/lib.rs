//! # repaint-data
//!
//! Persistent state around building recoloring.
//!
//! - [`colorizer`] - which prefabs are colorized or inverted, stored as XML
//! - [`savegame`] - per-building tint colors, stored as a binary payload
//!   inside the savegame
//! - [`service`] - [`RepaintService`], the single owner of the tint table
//!   and the colorizer configuration
//!
//! # Example
//!
//! ```rust
//! use repaint_data::RepaintService;
//! use repaint_core::Rgba8;
//!
//! let mut service = RepaintService::new();
//! service.set(42, Rgba8::opaque(200, 40, 40));
//!
//! let blob = service.save_data().unwrap();
//! let mut restored = RepaintService::new();
//! restored.load_data(Some(blob.as_slice())).unwrap();
//! assert_eq!(restored.get(42), Some(Rgba8::opaque(200, 40, 40)));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod colorizer;
mod error;
pub mod savegame;
pub mod service;

pub use colorizer::ColorizerConfig;
pub use error::{DataError, DataResult};
pub use service::RepaintService;
