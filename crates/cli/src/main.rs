use anyhow::{bail, Context, Result};
use clap::Parser;
use retouch_core::{init, Config, Editor, ImageLoader, RawSelection, Retouch};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Image file to edit
    image: PathBuf,

    /// Override the mosaic block size defined in .env
    #[arg(short, long)]
    block_size: Option<u32>,

    /// Output path for headless edits (defaults to the configured export name)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pixelate a region without opening a window: two corner points as X1,Y1,X2,Y2
    #[arg(long, value_name = "X1,Y1,X2,Y2")]
    mosaic: Option<String>,

    /// Crop to a region without opening a window: two corner points as X1,Y1,X2,Y2
    #[arg(long, value_name = "X1,Y1,X2,Y2")]
    crop: Option<String>,
}

fn main() -> Result<()> {
    // Setup
    let _ = dotenvy::dotenv();
    init();
    let args = Args::parse();

    // Load config and override block size if specified via CLI
    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(bs) = args.block_size {
        if bs == 0 {
            bail!("--block-size must be at least 1");
        }
        config.block_size = bs;
    }

    // Headless mode: apply the requested edits and save
    if args.mosaic.is_some() || args.crop.is_some() {
        return run_headless(&args, &config);
    }

    // Interactive mode
    let app = Retouch::with_config(config);
    let outcome = app
        .run_interactive(&args.image)
        .with_context(|| format!("Failed to open {}", args.image.display()))?;

    match outcome.saved_to {
        Some(path) => println!(
            "{} edit(s) applied, saved to {}",
            outcome.edits_applied,
            path.display()
        ),
        None => println!("Closed without saving"),
    }
    Ok(())
}

/// Applies `--mosaic` and/or `--crop` straight through the engine, no
/// window. Mosaic runs first when both are given, matching the order a
/// user would apply them interactively (pixelate, then trim around it).
fn run_headless(args: &Args, config: &Config) -> Result<()> {
    let buffer = ImageLoader::open(&args.image)
        .with_context(|| format!("Failed to open {}", args.image.display()))?;

    let mut editor = Editor::new();
    editor.load(buffer);

    if let Some(spec) = &args.mosaic {
        let selection = parse_selection(spec).context("Invalid --mosaic region")?;
        editor
            .set_selection(selection)
            .context("Failed to set selection")?;
        editor
            .apply_mosaic(config.block_size)
            .context("Mosaic declined")?;
    }

    if let Some(spec) = &args.crop {
        let selection = parse_selection(spec).context("Invalid --crop region")?;
        editor
            .set_selection(selection)
            .context("Failed to set selection")?;
        editor.apply_crop().context("Crop declined")?;
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.export_name));
    let current = editor
        .current()
        .context("No image loaded after editing")?;
    ImageLoader::save(&output, current)
        .with_context(|| format!("Failed to save {}", output.display()))?;

    let (w, h) = current.dimensions();
    println!("Saved {}x{} image to {}", w, h, output.display());
    Ok(())
}

/// Parses `X1,Y1,X2,Y2` into a raw selection. The points may be in any
/// order and out of bounds; the engine normalizes them against the buffer.
fn parse_selection(spec: &str) -> Result<RawSelection> {
    let parts: Vec<&str> = spec.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        bail!("expected four comma-separated values, got {}", parts.len());
    }
    let mut values = [0.0f32; 4];
    for (slot, part) in values.iter_mut().zip(&parts) {
        *slot = part
            .parse::<f32>()
            .with_context(|| format!("'{}' is not a number", part))?;
    }
    Ok(RawSelection::new(
        (values[0], values[1]),
        (values[2], values[3]),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_corner_points_in_any_order() {
        let sel = parse_selection("90, 10, 20.5, 60").unwrap();
        assert_eq!(sel.start, (90.0, 10.0));
        assert_eq!(sel.end, (20.5, 60.0));
    }

    #[test]
    fn rejects_wrong_arity_and_garbage() {
        assert!(parse_selection("1,2,3").is_err());
        assert!(parse_selection("1,2,3,4,5").is_err());
        assert!(parse_selection("a,2,3,4").is_err());
    }
}
