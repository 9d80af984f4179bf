//! Building directory colorizing

use crate::BuildingArgs;
use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use repaint_aci::colorize_buildings;
use repaint_data::ColorizerConfig;
use repaint_io::{FileTextureSource, discover_building};
use std::path::PathBuf;
use tracing::{debug, info, trace};

pub fn run(args: BuildingArgs, verbose: bool) -> Result<()> {
    trace!(inputs = args.input.len(), mode = ?args.mode, "building::run");

    let dirs = expand_inputs(&args.input)?;
    if dirs.is_empty() {
        bail!("No building directories match: {}", args.input.join(" "));
    }

    let config = match args.mode {
        Some(_) => ColorizerConfig::new(),
        None => {
            let path = super::config_path(args.config)?;
            ColorizerConfig::load(&path)
        }
    };
    debug!(prefabs = config.len(), "colorizer config ready");

    let buildings = dirs
        .par_iter()
        .map(|dir| {
            discover_building(dir)
                .with_context(|| format!("Failed to scan: {}", dir.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    if verbose {
        println!("Found {} buildings", buildings.len());
        for b in &buildings {
            let mode = args.mode.unwrap_or_else(|| config.mode(&b.name));
            println!("  {} ({} slots, {})", b.name, b.slot_count(), mode);
        }
    }

    // Fails before anything is written if two inputs share a directory name
    let source = dirs
        .iter()
        .try_fold(FileTextureSource::new(&args.output_dir), |s, dir| s.with_root(dir))
        .context("Output directories would collide")?;

    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("Failed to create: {}", args.output_dir.display()))?;

    let report = colorize_buildings(&source, &buildings, |name| {
        args.mode.unwrap_or_else(|| config.mode(name))
    });

    for failure in &report.failures {
        eprintln!("Error: {} [{}]: {}", failure.building, failure.slot, failure.error);
    }

    info!(
        buildings = report.buildings,
        processed = report.processed,
        failed = report.failed(),
        "Building processing complete"
    );
    println!(
        "Processed: {} slots in {} buildings, {} failed",
        report.processed,
        report.buildings,
        report.failed()
    );

    if !report.is_clean() {
        bail!("{} slots failed", report.failed());
    }
    Ok(())
}

/// Expands glob patterns; plain paths pass through. Only directories are kept.
fn expand_inputs(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for input in inputs {
        let matches: Vec<PathBuf> = glob::glob(input)
            .with_context(|| format!("Invalid pattern: {}", input))?
            .filter_map(|r| r.ok())
            .collect();

        if matches.is_empty() {
            dirs.push(PathBuf::from(input));
        } else {
            dirs.extend(matches);
        }
    }
    dirs.retain(|p| p.is_dir());
    dirs.sort();
    dirs.dedup();
    Ok(dirs)
}
