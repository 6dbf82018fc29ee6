use crate::aliases::Vec3;
use crate::hit_record::Intersection;
use crate::hitable::Hitable;
use crate::material::Material;
use crate::ray::Ray;
use log::warn;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct Sphere {
    center: Vec3,
    radius: f64,
    material: Arc<Material>,
}

impl Sphere {
    /// A non-positive `radius` is accepted as is.
    pub fn new(center: &Vec3, radius: f64, material: Arc<Material>) -> Self {
        if !(radius > 0.0) {
            warn!("sphere at {:?} has non-positive radius {}", center, radius);
        }
        Sphere {
            center: *center,
            radius,
            material,
        }
    }
    pub fn material(&self) -> &Material {
        self.material.as_ref()
    }
    /// Calculates the parameter t of the ray at which it hits this Sphere.
    /// The nearer root is preferred; the farther one is used when the ray starts inside.
    pub fn hit_core(center: &Vec3, radius: f64, ray: &Ray, t_min: f64, t_max: f64) -> Option<f64> {
        let oc = ray.origin - center;
        let a = ray.direction.dot(&ray.direction);
        let b = oc.dot(&ray.direction);
        let c = oc.dot(&oc) - radius * radius;
        let disc = b * b - a * c;
        if disc < 0.0 {
            return None;
        }
        let disc_rt = disc.sqrt();
        let t = (-b - disc_rt) / a;
        if t_min <= t && t < t_max {
            return Some(t);
        }
        let t = (-b + disc_rt) / a;
        if t_min <= t && t < t_max {
            return Some(t);
        }
        None
    }
}

impl Hitable for Sphere {
    fn hit(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<Intersection> {
        Sphere::hit_core(&self.center, self.radius, ray, t_min, t_max).map(|t| Intersection {
            t,
            normal: (ray.evaluate(t) - self.center).normalize(),
        })
    }
}
