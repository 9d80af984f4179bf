//! CLI command implementations

pub mod building;
pub mod colors;
pub mod config;
pub mod recolor;

use anyhow::{Context, Result};
use repaint_core::Texture;
use repaint_data::ColorizerConfig;
use std::path::{Path, PathBuf};

/// Load texture from path
pub fn load_texture(path: &Path) -> Result<Texture> {
    repaint_io::png::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save texture to path
pub fn save_texture(path: &Path, texture: &Texture) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create: {}", parent.display()))?;
    }
    repaint_io::png::write(path, texture)
        .with_context(|| format!("Failed to save: {}", path.display()))
}

/// Explicit config path, or the per-user default.
pub fn config_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    explicit
        .or_else(ColorizerConfig::default_path)
        .context("No local data directory; pass --config")
}
