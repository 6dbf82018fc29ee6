pub mod aliases;
pub mod camera;
pub mod config;
pub mod film;
pub mod hit_record;
pub mod hitable;
pub mod light;
pub mod material;
pub mod overlay;
pub mod ray;
pub mod ray_stats;
pub mod render;
pub mod scene;
pub mod scene_file;
pub mod shading;
pub mod texture;

use crate::aliases::Color;
use crate::config::TraceSettings;
use crate::hitable::hitable_list::first_hit;
use crate::ray::{reflect, Ray};
use crate::ray_stats::RayStats;
use crate::scene::Scene;
use crate::shading::blinn_phong_shading;

/// Color seen along `ray`: the local Blinn-Phong color plus, on mirroring
/// materials, `km` times the color seen along the reflected ray.
/// Reflections stop once `depth` reaches `settings.max_depth`.
pub fn calc_color(ray: &Ray, scene: &Scene, settings: &TraceSettings, depth: u32) -> Color {
    let mut stats = RayStats::default();
    calc_color_with_stats(ray, scene, settings, depth, &mut stats)
}

/// Same as `calc_color`, also counting the rays traced into `stats`.
pub fn calc_color_with_stats(
    ray: &Ray,
    scene: &Scene,
    settings: &TraceSettings,
    depth: u32,
    stats: &mut RayStats,
) -> Color {
    if depth == 0 {
        stats.primary += 1;
    } else {
        stats.reflection += 1;
    }
    let rec = match first_hit(ray, settings.min_t, &scene.primitives) {
        Some(rec) => rec,
        None => return scene.background,
    };
    let mut light_out = blinn_phong_shading(
        ray,
        &rec,
        &scene.primitives,
        &scene.lights,
        settings,
        stats,
    );
    let material = scene.primitives[rec.index].material();
    if material.is_reflective() && depth < settings.max_depth {
        let point = ray.evaluate(rec.t);
        let out_ray = Ray::new(
            &(point + settings.reflection_bias * rec.normal),
            &reflect(&ray.direction.normalize(), &rec.normal),
        );
        let in_light = calc_color_with_stats(&out_ray, scene, settings, depth + 1, stats);
        light_out += material.km.component_mul(&in_light);
    }
    light_out
}
