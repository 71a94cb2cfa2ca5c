//! Volo flight demo window.
//!
//! ```text
//! volo [--options <preset.toml>] [--scene <layout.toml>]
//! ```

use std::path::PathBuf;

use clap::Parser;
use volo::{scene::Scene, Options, Viewer, VoloError};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "volo", version, about = "Volo flight demo", long_about = None)]
struct Args {
    /// Options preset (TOML)
    #[arg(long)]
    options: Option<PathBuf>,

    /// Scene layout (TOML); defaults to the demo airfield
    #[arg(long)]
    scene: Option<PathBuf>,
}

fn run() -> Result<(), VoloError> {
    let args = Args::parse();

    let options = match &args.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    let scene = match &args.scene {
        Some(path) => Scene::load(path)?,
        None => Scene::demo(),
    };

    Viewer::builder()
        .with_options(options)
        .with_scene(scene)
        .build()
        .run()
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
