mod marbles;
mod mirror_box;

use clap::ValueEnum;
use mirrorbox::config::TraceSettings;
use mirrorbox::scene::Scene;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ScenesType {
    MirrorBox,
    Marbles,
}

pub fn get(scene_type: ScenesType, nx: u32, ny: u32, settings: &TraceSettings) -> Scene {
    match scene_type {
        ScenesType::MirrorBox => self::mirror_box::scene(nx, ny, settings),
        ScenesType::Marbles => self::marbles::scene(nx, ny, settings),
    }
}
