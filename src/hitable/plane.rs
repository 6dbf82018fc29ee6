use crate::aliases::Vec3;
use crate::hit_record::Intersection;
use crate::hitable::Hitable;
use crate::material::Material;
use crate::ray::Ray;
use log::warn;
use std::sync::Arc;

/// An infinite plane. Its normal defines the front side but is never
/// flipped toward the incoming ray.
#[derive(Clone, Debug)]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
    material: Arc<Material>,
    // |direction . normal| below this counts as parallel
    parallel_epsilon: f64,
}

impl Plane {
    pub const DEFAULT_PARALLEL_EPSILON: f64 = 1e-9;

    /// `normal` is stored as given; a non-unit normal is not corrected.
    pub fn new(point: &Vec3, normal: &Vec3, material: Arc<Material>) -> Self {
        if (normal.norm() - 1.0).abs() > 1e-6 {
            warn!("plane through {:?} has non-unit normal {:?}", point, normal);
        }
        Plane {
            point: *point,
            normal: *normal,
            material,
            parallel_epsilon: Self::DEFAULT_PARALLEL_EPSILON,
        }
    }
    pub fn with_parallel_epsilon(mut self, parallel_epsilon: f64) -> Self {
        self.parallel_epsilon = parallel_epsilon;
        self
    }
    pub fn material(&self) -> &Material {
        self.material.as_ref()
    }
}

impl Hitable for Plane {
    fn hit(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<Intersection> {
        let denom = ray.direction.dot(&self.normal);
        if denom.abs() < self.parallel_epsilon {
            return None;
        }
        let t = (self.point - ray.origin).dot(&self.normal) / denom;
        if t < t_min || t_max <= t {
            return None;
        }
        Some(Intersection {
            t,
            normal: self.normal,
        })
    }
}
