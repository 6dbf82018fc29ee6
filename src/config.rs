use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Tolerances and limits of the ray tracing core.
#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TraceSettings {
    /// Reflection rays are traced while the depth is below this.
    pub max_depth: u32,
    /// Lower bound of t for camera and reflection rays.
    pub min_t: f64,
    /// Lower bound of t for shadow rays.
    pub shadow_epsilon: f64,
    /// Offset of reflection ray origins along the surface normal.
    pub reflection_bias: f64,
    /// Plane intersections with |direction . normal| below this are dropped.
    pub parallel_epsilon: f64,
}

impl Default for TraceSettings {
    fn default() -> Self {
        TraceSettings {
            max_depth: 5,
            min_t: 1e-6,
            shadow_epsilon: 1e-6,
            reflection_bias: 1e-6,
            parallel_epsilon: 1e-9,
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub threads: usize,
    pub output: PathBuf,
    /// Built-in scene when None.
    pub scene_file: Option<PathBuf>,
    pub overlay: bool,
    pub trace: TraceSettings,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 640,
            height: 360,
            threads: 4,
            output: PathBuf::from("piece.ppm"),
            scene_file: None,
            overlay: true,
            trace: TraceSettings::default(),
        }
    }
}

impl RenderConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid render config")
    }
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }
}
