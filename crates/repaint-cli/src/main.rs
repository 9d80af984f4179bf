//! repaint - ACI texture recoloring and building color data
//!
//! Front end for the repaint libraries: recolor texture pairs, colorize
//! whole building directories, and edit the colorizer configuration and
//! savegame color payloads.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use repaint_aci::ColorizeMode;
use repaint_core::{BuildingId, Rgba8};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "repaint")]
#[command(author, version, about = "ACI texture recoloring for building tints")]
#[command(long_about = "
Recolors ACI maps so buildings pick up a tint from the game's color
system, and manages the colorizer configuration and savegame colors.

Examples:
  repaint recolor main_aci.png main_xys.png -o out_aci.png
  repaint recolor main_aci.png main_xys.png -o out_aci.png --invert
  repaint building assets/* -o colorized/
  repaint config set \"H1 2x2 Detached01\" colorized
  repaint config show
  repaint colors set save.bin 1024 ff8000
  repaint colors show save.bin
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Recolor a single ACI/XYS texture pair
    #[command(visible_alias = "r")]
    Recolor(RecolorArgs),

    /// Colorize building directories using the colorizer configuration
    #[command(visible_alias = "b")]
    Building(BuildingArgs),

    /// Show or edit the colorizer configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Show or edit a savegame color payload
    #[command(subcommand)]
    Colors(ColorsCommand),
}

#[derive(Args)]
struct RecolorArgs {
    /// ACI map
    aci: PathBuf,

    /// XYS map
    xys: PathBuf,

    /// Output file
    #[arg(short, long)]
    output: PathBuf,

    /// Use the inverted blend
    #[arg(long)]
    invert: bool,
}

#[derive(Args)]
struct BuildingArgs {
    /// Building directories (glob patterns allowed)
    #[arg(required = true)]
    input: Vec<String>,

    /// Output directory
    #[arg(short, long)]
    output_dir: PathBuf,

    /// Colorizer configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Apply this mode to every building instead of the configured one
    #[arg(short, long)]
    mode: Option<ColorizeMode>,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// List configured prefabs
    Show {
        /// Colorizer configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Set a prefab's mode (none, colorized, inverted)
    Set {
        /// Prefab name
        prefab: String,

        /// New mode
        mode: ColorizeMode,

        /// Colorizer configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ColorsCommand {
    /// List building colors stored in a payload
    Show {
        /// Payload file
        blob: PathBuf,
    },

    /// Set a building color (RRGGBB or RRGGBBAA)
    Set {
        /// Payload file, created if missing
        blob: PathBuf,

        /// Building id
        id: BuildingId,

        /// Color
        color: Rgba8,
    },

    /// Remove a building color
    Clear {
        /// Payload file
        blob: PathBuf,

        /// Building id
        id: BuildingId,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Recolor(args) => commands::recolor::run(args, cli.verbose),
        Commands::Building(args) => commands::building::run(args, cli.verbose),
        Commands::Config(cmd) => commands::config::run(cmd),
        Commands::Colors(cmd) => commands::colors::run(cmd),
    }
}
