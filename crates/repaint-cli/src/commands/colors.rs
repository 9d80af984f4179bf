//! Savegame color payload commands

use crate::ColorsCommand;
use anyhow::{Context, Result};
use repaint_data::RepaintService;
use std::path::Path;
use tracing::info;

pub fn run(cmd: ColorsCommand) -> Result<()> {
    match cmd {
        ColorsCommand::Show { blob } => {
            let service = load(&blob, false)?;
            if service.is_empty() {
                println!("No building colors");
            }
            for (id, color) in service.iter() {
                println!("{:>5}  {}", id, color);
            }
            Ok(())
        }
        ColorsCommand::Set { blob, id, color } => {
            let mut service = load(&blob, true)?;
            service.set(id, color);
            save(&blob, &service)?;
            info!(building = id, %color, "building color set");
            Ok(())
        }
        ColorsCommand::Clear { blob, id } => {
            let mut service = load(&blob, false)?;
            if service.clear(id).is_none() {
                println!("Building {} has no color", id);
                return Ok(());
            }
            save(&blob, &service)?;
            info!(building = id, "building color cleared");
            Ok(())
        }
    }
}

fn load(path: &Path, allow_missing: bool) -> Result<RepaintService> {
    let mut service = RepaintService::new();
    let data = match std::fs::read(path) {
        Ok(data) => Some(data),
        Err(e) if allow_missing && e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read: {}", path.display()));
        }
    };
    service
        .load_data(data.as_deref())
        .with_context(|| format!("Invalid color payload: {}", path.display()))?;
    Ok(service)
}

fn save(path: &Path, service: &RepaintService) -> Result<()> {
    let data = service.save_data()?;
    std::fs::write(path, data).with_context(|| format!("Failed to write: {}", path.display()))
}
