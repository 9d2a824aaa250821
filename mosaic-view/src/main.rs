//! Application entry point for the polygon mosaic viewer.
//!
//! This binary parses the command line, sets up logging and eframe/egui,
//! and delegates all interactive logic and rendering to [`Viewer`] from the
//! `viewer` module.

mod viewer;

use clap::{Parser, ValueEnum};
use mosaic_core::{animation::AnimationMode, config::Config};
use rand::{SeedableRng, rngs::StdRng};
use std::path::PathBuf;
use viewer::{Viewer, ViewerOptions};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    ExpandReturn,
    ForceField,
}

impl From<ModeArg> for AnimationMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::ExpandReturn => AnimationMode::ExpandReturn,
            ModeArg::ForceField => AnimationMode::ForceField,
        }
    }
}

/// Fragments a convex polygon into a random mosaic and animates it.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// YAML file overriding the default tuning constants.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the random source; omit for a different mosaic every run.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Animation strategy.
    #[arg(short, long, value_enum, default_value_t = ModeArg::ExpandReturn)]
    mode: ModeArg,

    /// Side length of the seed square, in world units.
    #[arg(long, default_value_t = 500.0)]
    size: f32,
}

/// Starts the native eframe application.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
///
/// An unreadable or invalid config file, or a non-positive `--size`, is
/// logged and exits with status 2 before any window is opened.
fn main() -> eframe::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let cfg = match args.config.as_deref().map(Config::load).transpose() {
        Ok(cfg) => cfg.unwrap_or_default(),
        Err(err) => {
            log::error!("{err}");
            std::process::exit(2);
        }
    };

    if !(args.size.is_finite() && args.size > 0.0) {
        log::error!("--size must be a positive number, got {}", args.size);
        std::process::exit(2);
    }

    let rng = match args.seed {
        Some(seed) => {
            log::info!("using fixed seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let options = ViewerOptions {
        cfg,
        mode: args.mode.into(),
        seed_size: args.size,
        rng,
    };

    eframe::run_native(
        "Polygon Mosaic",
        eframe::NativeOptions::default(),
        Box::new(|_cc| Ok(Box::new(Viewer::new(options)))),
    )
}
