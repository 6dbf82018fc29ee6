use crate::scenes::ScenesType;
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use mirrorbox::config::RenderConfig;
use std::path::PathBuf;

#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "mirrorbox")]
#[command(about = "Renders a scene of spheres, planes and mirrors with Blinn-Phong shading")]
pub struct Args {
    /// TOML render configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// TOML scene description; overrides --scene
    #[arg(long)]
    pub scene_file: Option<PathBuf>,

    /// Built-in scene used when no scene file is given
    #[arg(long, value_enum, default_value = "mirror-box")]
    pub scene: ScenesType,

    /// Output image; the extension selects the format (.ppm, .png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long)]
    pub width: Option<u32>,

    #[arg(long)]
    pub height: Option<u32>,

    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Maximum number of mirror bounces
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Do not draw scene labels on the image
    #[arg(long)]
    pub no_overlay: bool,

    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Command line values take precedence over the configuration file.
    pub fn apply(&self, config: &mut RenderConfig) {
        if let Some(ref path) = self.scene_file {
            config.scene_file = Some(path.clone());
        }
        if let Some(ref output) = self.output {
            config.output = output.clone();
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(threads) = self.threads {
            config.threads = threads;
        }
        if let Some(max_depth) = self.max_depth {
            config.trace.max_depth = max_depth;
        }
        if self.no_overlay {
            config.overlay = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let args = Args::parse_from([
            "mirrorbox",
            "--width",
            "100",
            "--max-depth",
            "2",
            "--no-overlay",
            "-o",
            "out.png",
        ]);
        let mut config = RenderConfig::default();
        args.apply(&mut config);
        assert_eq!(config.width, 100);
        assert_eq!(config.height, RenderConfig::default().height);
        assert_eq!(config.trace.max_depth, 2);
        assert!(!config.overlay);
        assert_eq!(config.output, PathBuf::from("out.png"));
    }

    #[test]
    fn defaults_leave_config_alone() {
        let args = Args::parse_from(["mirrorbox"]);
        let mut config = RenderConfig::default();
        args.apply(&mut config);
        assert_eq!(config, RenderConfig::default());
        assert!(matches!(args.scene, ScenesType::MirrorBox));
    }
}
