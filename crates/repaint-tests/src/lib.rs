//! Integration tests for repaint crates.
//!
//! End-to-end checks across texture files, the colorizer configuration,
//! the building batch driver and the savegame color payload.
