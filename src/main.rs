mod cli;
mod logger;
mod scenes;

use crate::cli::Args;
use anyhow::{bail, Result};
use clap::Parser;
use log::info;
use mirrorbox::config::RenderConfig;
use mirrorbox::render::render;
use mirrorbox::scene_file::load_scene;
use std::time::Instant;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let args = Args::parse();
    logger::init_logger(args.log_level.clone().into());
    let mut config = match args.config {
        Some(ref path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };
    args.apply(&mut config);
    if config.width == 0 || config.height == 0 {
        bail!("image size must be positive, got {}x{}", config.width, config.height);
    }
    info!(
        "output: {}, size: {}x{}, threads: {}, max depth: {}",
        config.output.display(),
        config.width,
        config.height,
        config.threads,
        config.trace.max_depth
    );
    let scene = match config.scene_file {
        Some(ref path) => {
            let aspect = config.width as f64 / config.height as f64;
            load_scene(path, aspect, &config.trace)?
        }
        None => scenes::get(args.scene, config.width, config.height, &config.trace),
    };
    info!(
        "scene constructed ({:.3} secs elapsed)",
        start_time.elapsed().as_secs_f64()
    );
    let (film, _) = render(
        &scene,
        &config.trace,
        config.width,
        config.height,
        config.threads,
    )?;
    let mut image = film.to_rgb8();
    if config.overlay {
        for label in &scene.labels {
            label.draw(&mut image);
        }
    }
    image.save(&config.output)?;
    info!(
        "completed ({:.3} secs elapsed)",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}
