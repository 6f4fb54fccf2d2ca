//! Orrery - interactive solar system viewer

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use orrery::{App, OrreryConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file to read instead of ./orrery.ron
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for asteroid, Kuiper belt and comet placement
    #[arg(long)]
    seed: Option<u64>,

    /// Simulation speed at startup
    #[arg(long)]
    time_scale: Option<f32>,

    /// Hide the FPS / time overlay
    #[arg(long)]
    no_hud: bool,

    /// Print the effective configuration as RON and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = OrreryConfig::load_from(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        config.scene.seed = seed;
    }
    if let Some(scale) = args.time_scale {
        config.time.initial_scale = scale;
    }
    if args.no_hud {
        config.ui.show_hud = false;
    }

    if args.print_config {
        let pretty = ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::default())
            .context("Failed to serialize configuration")?;
        println!("{pretty}");
        return Ok(());
    }

    log::info!("Starting Orrery");

    pollster::block_on(run(config))
}

async fn run(config: OrreryConfig) -> anyhow::Result<()> {
    let (app, event_loop) = App::new(config).await?;
    App::run(event_loop, app)
}
