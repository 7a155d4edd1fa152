//! Vista Gallery CLI
//!
//! Plan the example screens across device presets.
//!
//! Usage:
//!   vista-gallery list                               # List screens and presets
//!   vista-gallery run                                # Plan every screen at every preset
//!   vista-gallery run --filter tablet --json         # Dump matching plans as JSON
//!   vista-gallery plan settings --width 800 --height 1280

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vista_core::ResponsiveConfig;
use vista_gallery::{all_screens, find_screen, preset, GalleryRunner, PRESETS};

#[derive(Parser)]
#[command(name = "vista-gallery")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Plan Vista's example screens across device sizes", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Breakpoint configuration file (defaults to ./vista.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List screens and device presets
    List,

    /// Plan every screen at every device preset and check the results
    Run {
        /// Only run screens or presets whose name contains this pattern
        #[arg(short, long)]
        filter: Option<String>,

        /// Print the plans as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Plan one screen at one size
    Plan {
        /// Screen name (see `list`)
        screen: String,

        /// Device preset name
        #[arg(short, long, conflicts_with_all = ["width", "height"])]
        device: Option<String>,

        /// Viewport width in logical pixels
        #[arg(long, requires = "height")]
        width: Option<f32>,

        /// Viewport height in logical pixels
        #[arg(long, requires = "width")]
        height: Option<f32>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::List => {
            println!("Screens:");
            for screen in all_screens() {
                println!("  {:<12} {}", screen.name(), screen.description());
            }
            println!("\nDevice presets:");
            for device in PRESETS {
                let category = match config.classify(device.width) {
                    Ok(category) => category.to_string(),
                    Err(e) => format!("invalid ({})", e),
                };
                println!(
                    "  {:<18} {:>6} x {:<6} {}",
                    device.name, device.width, device.height, category
                );
            }
            Ok(())
        }
        Commands::Run { filter, json } => {
            let mut runner = GalleryRunner::new(config);
            if let Some(ref pattern) = filter {
                info!("Running plans matching: {}", pattern);
                runner.filter(pattern);
            }

            let result = runner.run();
            if json {
                println!("{}", result.plans_json().context("Failed to serialize plans")?);
            } else {
                result.print_summary();
            }

            if result.all_passed() {
                Ok(())
            } else {
                std::process::exit(1);
            }
        }
        Commands::Plan {
            screen,
            device,
            width,
            height,
        } => {
            let screen = find_screen(&screen).with_context(|| {
                format!("Unknown screen '{}'. Run `vista-gallery list`.", screen)
            })?;

            let viewport = match (device, width, height) {
                (Some(name), _, _) => preset(&name)
                    .with_context(|| format!("Unknown device preset '{}'", name))?
                    .viewport(&config)?,
                (None, Some(width), Some(height)) => config.viewport(width, height)?,
                _ => anyhow::bail!("Pass either --device or both --width and --height"),
            };

            let plan = screen.plan(&viewport, &config)?;
            if let Err(violation) = plan.validate(&config) {
                tracing::warn!("Plan violates layout invariants: {}", violation);
            }
            println!("{}", plan.to_json().context("Failed to serialize plan")?);
            Ok(())
        }
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<ResponsiveConfig> {
    let config = match path {
        Some(path) => ResponsiveConfig::load_from_path(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            ResponsiveConfig::load_from_dir(&cwd)?
        }
    };
    info!(
        "Breakpoints: tablet >= {}, desktop >= {} ({:?} invalid input)",
        config.breakpoints.tablet(),
        config.breakpoints.desktop(),
        config.invalid_input
    );
    Ok(config)
}
