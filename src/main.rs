use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use strokepad::config::Config;
use strokepad::host::ImageHost;
use strokepad::pad::StrokePad;
use strokepad::replay;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("STROKEPAD_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "strokepad")]
#[command(version = VERSION, about = "Freehand drawing pad replay driver")]
struct Cli {
    /// Event trace to replay (down/move/up/key/resize, one step per line)
    #[arg(long, short = 't', value_name = "FILE")]
    trace: Option<PathBuf>,

    /// Write the resulting surface as a PNG
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Container content width in pixels
    #[arg(long, short = 'w', default_value_t = 640.0, value_name = "PX")]
    width: f64,

    /// Alternate config file (default: ~/.config/strokepad/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let Some(trace_path) = &cli.trace else {
        // No trace: show usage
        println!("strokepad: freehand drawing pad replay driver");
        println!();
        println!("Usage:");
        println!("  strokepad --trace gesture.txt --output out.png");
        println!("  strokepad --trace gesture.txt --width 480");
        println!();
        println!("Trace commands (one per line, '#' starts a comment):");
        println!("  down X Y     press the pointer at host coordinates");
        println!("  move X Y     drag the pointer (draws while pressed)");
        println!("  up           release the pointer");
        println!("  key K        press a key (the clear key wipes the surface)");
        println!("  resize W     resize the container and rebuild the surface");
        return Ok(());
    };

    let trace_str = fs::read_to_string(trace_path)
        .with_context(|| format!("Failed to read trace from {}", trace_path.display()))?;
    let steps = replay::parse_trace(&trace_str)?;
    log::info!(
        "Replaying {} steps into '{}' ({}px wide)",
        steps.len(),
        config.surface.container_id,
        cli.width
    );

    let host = ImageHost::new(config.surface.container_id.clone(), cli.width);
    let mut pad = StrokePad::attach(host, config.pad_options());
    replay::run(&mut pad, &steps);

    if let Some(output) = &cli.output {
        let mut file = fs::File::create(output)
            .with_context(|| format!("Failed to create {}", output.display()))?;
        pad.host_mut()
            .write_png(&mut file)
            .context("Failed to encode surface as PNG")?;
        log::info!("Wrote {}", output.display());
    }

    Ok(())
}
