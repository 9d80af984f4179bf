//! Single texture pair recolor

use crate::RecolorArgs;
use anyhow::Result;
use tracing::{info, trace};

pub fn run(args: RecolorArgs, verbose: bool) -> Result<()> {
    trace!(aci = %args.aci.display(), xys = %args.xys.display(), invert = args.invert, "recolor::run");

    let aci = super::load_texture(&args.aci)?;
    let xys = super::load_texture(&args.xys)?;

    if verbose {
        let (w, h) = aci.dimensions();
        println!("Recoloring {} ({}x{})", args.aci.display(), w, h);
    }

    let result = repaint_aci::recolor_texture(&aci, &xys, args.invert)?;
    super::save_texture(&args.output, &result)?;

    info!(output = %args.output.display(), invert = args.invert, "recolor complete");
    if verbose {
        println!("Wrote {}", args.output.display());
    }
    Ok(())
}
