//! Palettesmith - perceptual paint-swatch palette generator
//!
//! Builds harmonious multi-brand paint palettes from a swatch catalog,
//! and offers lighter/darker nudges and cross-brand swaps for single swatches.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use palettesmith::cli::{ConfigArgs, GenerateArgs, InspectArgs, NudgeArgs, SwapArgs};

/// Palettesmith - perceptual paint-swatch palette generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a harmonious palette from a catalog
    Generate(GenerateArgs),
    /// Find the nearest lighter or darker swatch of similar hue
    Nudge(NudgeArgs),
    /// Find the closest swatch from a different brand
    Swap(SwapArgs),
    /// Show color-space conversions for a hex color
    Inspect(InspectArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output on stdout stays clean
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match &cli.command {
        Commands::Generate(args) => args.execute(),
        Commands::Nudge(args) => args.execute(),
        Commands::Swap(args) => args.execute(),
        Commands::Inspect(args) => args.execute(),
        Commands::Config(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code.code());
    }
}
