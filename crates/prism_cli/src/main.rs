use anyhow::{Context, Result};
use clap::Parser;
use prism_core::{load_scene, validate, SceneDescription};
use prism_renderer::Scene;

mod cli;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    log::info!("Starting Prism");

    let desc = match &args.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => {
            log::info!("No scene given, using the demo scene");
            SceneDescription::demo()
        }
    };
    let desc = args.apply(desc);
    validate(&desc).context("Invalid render settings")?;

    let scene = Scene::from_description(&desc);
    let buffer = scene.draw_frame().context("Render failed")?;

    buffer
        .to_image()
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    log::info!("Saved to {}", args.output.display());

    Ok(())
}
