use crate::aliases::{Color, Vec3};
use crate::config::TraceSettings;
use crate::hit_record::HitRecord;
use crate::hitable::hitable_list::any_hit;
use crate::hitable::Primitive;
use crate::light::Light;
use crate::ray::Ray;
use crate::ray_stats::RayStats;
use crate::texture::diffuse_at;

/// Blinn-Phong color at `rec` summed over every light that is not shadowed.
///
/// rgb = sum over lights of kd * I * max(0, n.l) + ks * I * max(0, n.h)^p
///
/// No ambient term is added and the result is not clamped.
pub fn blinn_phong_shading(
    ray: &Ray,
    rec: &HitRecord,
    primitives: &[Primitive],
    lights: &[Light],
    settings: &TraceSettings,
    stats: &mut RayStats,
) -> Color {
    let material = primitives[rec.index].material();
    let point = ray.evaluate(rec.t);
    let kd = diffuse_at(material, &point);
    let ks = material.ks;
    let n = rec.normal;
    let view = (-ray.direction).normalize();
    let mut rgb = Color::zeros();
    for light in lights {
        let (l, max_t) = light.direction(&point);
        stats.shadow += 1;
        let shadow_ray = Ray::new(&point, &l);
        if any_hit(&shadow_ray, settings.shadow_epsilon, max_t, primitives) {
            continue;
        }
        let intensity = light.intensity();
        let h: Vec3 = (view + l).normalize();
        // f64::max drops the NaN of a degenerate half vector
        let diffuse = n.dot(&l).max(0.0);
        let specular = n.dot(&h).max(0.0).powf(material.phong_exponent);
        rgb += kd.component_mul(intensity) * diffuse + ks.component_mul(intensity) * specular;
    }
    rgb
}
