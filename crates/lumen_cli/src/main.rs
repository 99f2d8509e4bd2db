//! Renders the built-in scene to `output.tga`.

use anyhow::{Context, Result};
use lumen_tracer::{render, save_tga, RenderConfig, Scene};

const OUTPUT_PATH: &str = "output.tga";

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Starting Lumen");

    let scene = Scene::default_scene();
    let config = RenderConfig::default();
    log::info!(
        "Scene: {} spheres, {} lights",
        scene.sphere_count(),
        scene.light_count()
    );

    let image = render(&scene, &config).context("Failed to render scene")?;

    save_tga(OUTPUT_PATH, &image).with_context(|| format!("Failed to write {OUTPUT_PATH}"))?;
    log::info!("Saved to {}", OUTPUT_PATH);

    Ok(())
}
