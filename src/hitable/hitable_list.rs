use crate::hit_record::HitRecord;
use crate::hitable::{Hitable, Primitive};
use crate::ray::Ray;

/// Finds the nearest primitive hit with `t >= t_min` by a linear scan.
/// On equal parameters the primitive listed first wins.
pub fn first_hit(ray: &Ray, t_min: f64, primitives: &[Primitive]) -> Option<HitRecord> {
    let mut res: Option<HitRecord> = None;
    let mut closest_so_far = f64::INFINITY;
    for (index, obj) in primitives.iter().enumerate() {
        // t_max is exclusive, so a later primitive at the same t is skipped.
        if let Some(ref hit) = obj.hit(ray, t_min, closest_so_far) {
            closest_so_far = hit.t;
            res = Some(HitRecord::new(index, hit));
        }
    }
    res
}

/// Tells whether any primitive is hit with `t_min <= t < t_max`.
pub fn any_hit(ray: &Ray, t_min: f64, t_max: f64, primitives: &[Primitive]) -> bool {
    primitives.iter().any(|obj| obj.is_hit(ray, t_min, t_max))
}
