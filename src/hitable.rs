pub mod hitable_list;
pub mod plane;
pub mod sphere;

use crate::hit_record::Intersection;
use crate::material::Material;
use crate::ray::Ray;
use self::plane::Plane;
use self::sphere::Sphere;

pub trait Hitable: Send + Sync {
    /// Calculates the nearest intersection with `t_min <= t < t_max`.
    fn hit(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<Intersection>;
    /// Tells whether there is any intersection with `t_min <= t < t_max`.
    fn is_hit(&self, ray: &Ray, t_min: f64, t_max: f64) -> bool {
        self.hit(ray, t_min, t_max).is_some()
    }
}

/// Every kind of surface a scene can hold.
#[derive(Clone, Debug)]
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
}

impl Primitive {
    pub fn material(&self) -> &Material {
        match self {
            Primitive::Sphere(s) => s.material(),
            Primitive::Plane(p) => p.material(),
        }
    }
}

impl Hitable for Primitive {
    fn hit(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<Intersection> {
        match self {
            Primitive::Sphere(s) => s.hit(ray, t_min, t_max),
            Primitive::Plane(p) => p.hit(ray, t_min, t_max),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Plane> for Primitive {
    fn from(plane: Plane) -> Self {
        Primitive::Plane(plane)
    }
}
