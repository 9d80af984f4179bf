//! Colorizer configuration commands

use crate::ConfigCommand;
use anyhow::{Context, Result};
use repaint_aci::ColorizeMode;
use repaint_data::ColorizerConfig;
use tracing::info;

pub fn run(cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { config } => {
            let path = super::config_path(config)?;
            let config = ColorizerConfig::try_load(&path).or_else(|e| match e {
                repaint_data::DataError::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
                    Ok(ColorizerConfig::new())
                }
                e => Err(e),
            });
            let config = config.with_context(|| format!("Failed to read: {}", path.display()))?;

            println!("{}", path.display());
            if config.is_empty() {
                println!("  (no prefabs configured)");
            }
            for mode in [ColorizeMode::Colorized, ColorizeMode::Inverted] {
                for prefab in config.prefabs(mode) {
                    println!("  {:<10} {}", mode, prefab);
                }
            }
            Ok(())
        }
        ConfigCommand::Set { prefab, mode, config } => {
            let path = super::config_path(config)?;
            let mut config = ColorizerConfig::load(&path);
            let previous = config.set_mode(prefab.as_str(), mode);
            config
                .save(&path)
                .with_context(|| format!("Failed to save: {}", path.display()))?;

            info!(prefab = %prefab, %previous, %mode, "colorize mode changed");
            println!("{}: {} -> {}", prefab, previous, mode);
            Ok(())
        }
    }
}
