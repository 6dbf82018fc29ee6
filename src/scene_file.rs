//! TOML scene descriptions.
//!
//! ```toml
//! [camera]
//! eye = [0, 4, 14]
//! target = [0, 2, 0]
//!
//! [materials.floor]
//! kd = [0.5, 0.5, 0.5]
//! checkerboard = true
//!
//! [[objects]]
//! type = "plane"
//! point = [0, -1, 0]
//! normal = [0, 1, 0]
//! material = "floor"
//!
//! [[lights]]
//! type = "point"
//! position = [0, 6, 10]
//! intensity = [1.5, 1.5, 1.5]
//! ```

use crate::aliases::{Color, Vec3};
use crate::camera::Camera;
use crate::config::TraceSettings;
use crate::hitable::plane::Plane;
use crate::hitable::sphere::Sphere;
use crate::hitable::Primitive;
use crate::light::Light;
use crate::material::Material;
use crate::overlay::Label;
use crate::scene::Scene;
use anyhow::{anyhow, Context, Result};
use log::debug;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SceneDesc {
    camera: CameraDesc,
    #[serde(default)]
    background: [f64; 3],
    #[serde(default)]
    materials: BTreeMap<String, MaterialDesc>,
    #[serde(default)]
    objects: Vec<ObjectDesc>,
    #[serde(default)]
    lights: Vec<LightDesc>,
    #[serde(default)]
    labels: Vec<Label>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CameraDesc {
    eye: [f64; 3],
    target: [f64; 3],
    #[serde(default = "CameraDesc::default_up")]
    up: [f64; 3],
    #[serde(default = "CameraDesc::default_focal_length")]
    focal_length: f64,
    /// The width follows from the aspect ratio of the image.
    #[serde(default = "CameraDesc::default_image_plane_height")]
    image_plane_height: f64,
}

impl CameraDesc {
    fn default_up() -> [f64; 3] {
        [0.0, 1.0, 0.0]
    }
    fn default_focal_length() -> f64 {
        1.0
    }
    fn default_image_plane_height() -> f64 {
        1.0
    }
}

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct MaterialDesc {
    ka: [f64; 3],
    kd: [f64; 3],
    ks: [f64; 3],
    km: [f64; 3],
    phong_exponent: f64,
    checkerboard: bool,
    marble: bool,
}

impl Default for MaterialDesc {
    fn default() -> Self {
        let m = Material::default();
        MaterialDesc {
            ka: m.ka.into(),
            kd: m.kd.into(),
            ks: m.ks.into(),
            km: m.km.into(),
            phong_exponent: m.phong_exponent,
            checkerboard: m.checkerboard,
            marble: m.marble,
        }
    }
}

impl From<MaterialDesc> for Material {
    fn from(d: MaterialDesc) -> Self {
        Material {
            ka: d.ka.into(),
            kd: d.kd.into(),
            ks: d.ks.into(),
            km: d.km.into(),
            phong_exponent: d.phong_exponent,
            checkerboard: d.checkerboard,
            marble: d.marble,
        }
    }
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ObjectDesc {
    Sphere {
        center: [f64; 3],
        radius: f64,
        material: String,
    },
    Plane {
        point: [f64; 3],
        normal: [f64; 3],
        material: String,
    },
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum LightDesc {
    Point {
        position: [f64; 3],
        intensity: [f64; 3],
    },
    Directional {
        direction: [f64; 3],
        intensity: [f64; 3],
    },
}

fn lookup(materials: &BTreeMap<String, Arc<Material>>, name: &str) -> Result<Arc<Material>> {
    materials
        .get(name)
        .cloned()
        .ok_or_else(|| anyhow!("unknown material {:?}", name))
}

/// Builds a scene from TOML text for an image of the given aspect ratio (width / height).
pub fn parse_scene(text: &str, aspect_ratio: f64, settings: &TraceSettings) -> Result<Scene> {
    let desc: SceneDesc = toml::from_str(text).context("invalid scene description")?;
    let materials: BTreeMap<String, Arc<Material>> = desc
        .materials
        .into_iter()
        .map(|(name, m)| (name, Arc::new(Material::from(m))))
        .collect();
    let mut primitives = Vec::<Primitive>::with_capacity(desc.objects.len());
    for (i, obj) in desc.objects.into_iter().enumerate() {
        let prim: Primitive = match obj {
            ObjectDesc::Sphere {
                center,
                radius,
                material,
            } => {
                let material = lookup(&materials, &material)
                    .with_context(|| format!("in object #{}", i))?;
                Sphere::new(&Vec3::from(center), radius, material).into()
            }
            ObjectDesc::Plane {
                point,
                normal,
                material,
            } => {
                let material = lookup(&materials, &material)
                    .with_context(|| format!("in object #{}", i))?;
                Plane::new(&Vec3::from(point), &Vec3::from(normal), material)
                    .with_parallel_epsilon(settings.parallel_epsilon)
                    .into()
            }
        };
        primitives.push(prim);
    }
    let lights = desc
        .lights
        .into_iter()
        .map(|l| match l {
            LightDesc::Point {
                position,
                intensity,
            } => Light::point(&Vec3::from(position), &Color::from(intensity)),
            LightDesc::Directional {
                direction,
                intensity,
            } => Light::directional(&Vec3::from(direction), &Color::from(intensity)),
        })
        .collect::<Vec<_>>();
    let cam = desc.camera;
    let camera = Camera::look_at(
        &Vec3::from(cam.eye),
        &Vec3::from(cam.target),
        &Vec3::from(cam.up),
        cam.focal_length,
        aspect_ratio * cam.image_plane_height,
        cam.image_plane_height,
    );
    debug!(
        "parsed scene: {} materials, {} primitives, {} lights",
        materials.len(),
        primitives.len(),
        lights.len()
    );
    let mut scene = Scene::new(primitives, lights, camera);
    scene.background = Color::from(desc.background);
    scene.labels = desc.labels;
    Ok(scene)
}

pub fn load_scene(path: &Path, aspect_ratio: f64, settings: &TraceSettings) -> Result<Scene> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read scene {}", path.display()))?;
    parse_scene(&text, aspect_ratio, settings).with_context(|| format!("in {}", path.display()))
}
