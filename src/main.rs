use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use log::info;

use slicer::cli::{CliArgs, CompressionLevel};
use slicer::config::LoadedConfig;
use slicer::output::DEFAULT_OUTPUT_DIR;
use slicer::sheet::DEFAULT_TILE_EDGE;
use slicer::slicer::SpriteSlicer;

#[allow(clippy::print_stderr, clippy::print_stdout)]
fn main() {
    let cli = CliArgs::parse();

    let Some(input) = cli.input.clone() else {
        println!("specify input image");
        println!("{}", CliArgs::command().render_usage());
        std::process::exit(1);
    };

    if let Err(e) = run(&cli, input) {
        // Use eprintln instead of error! because logger may not be initialized
        // (e.g., config loading fails before logger init)
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &CliArgs, input: PathBuf) -> Result<()> {
    let merged = merge_config_with_args(cli, input)?;

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(if merged.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    info!("Sprite slicer v{}", env!("CARGO_PKG_VERSION"));

    let report = SpriteSlicer::new(merged.tile_width, merged.tile_height)
        .compress(merged.compress)
        .slice_sheet(&merged.input, &merged.output)?;

    info!(
        "Wrote {} {}x{} tiles to {}",
        report.tile_count(),
        report.tile_size.width,
        report.tile_size.height,
        merged.output.display()
    );
    info!("Done!");

    Ok(())
}

/// Merged configuration from CLI args and optional config file.
struct MergedConfig {
    input: PathBuf,
    output: PathBuf,
    tile_width: u32,
    tile_height: u32,
    compress: Option<CompressionLevel>,
    verbose: bool,
}

/// Merge config file values with CLI arguments.
/// CLI arguments always take precedence over config values.
fn merge_config_with_args(args: &CliArgs, input: PathBuf) -> Result<MergedConfig> {
    let loaded_config = if let Some(config_path) = &args.config {
        Some(
            LoadedConfig::load(config_path)
                .with_context(|| format!("failed to load config: {}", config_path.display()))?,
        )
    } else {
        None
    };

    // Output directory: CLI > config > default
    let output = args.output.clone().unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.resolve_output_dir())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    });

    let tile_width = args.tile_width.unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.tile_width)
            .unwrap_or(DEFAULT_TILE_EDGE)
    });

    let tile_height = args.tile_height.unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.tile_height)
            .unwrap_or(DEFAULT_TILE_EDGE)
    });

    let compress = if args.compress.is_some() {
        args.compress
    } else if let Some(ref lc) = loaded_config {
        lc.compression()?
    } else {
        None
    };

    Ok(MergedConfig {
        input,
        output,
        tile_width,
        tile_height,
        compress,
        verbose: args.verbose,
    })
}
