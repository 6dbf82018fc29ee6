use crate::aliases::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3, // need not be normalized
}

impl Ray {
    pub fn new(origin: &Vec3, direction: &Vec3) -> Self {
        Ray {
            origin: *origin,
            direction: *direction,
        }
    }
    pub fn evaluate(&self, t: f64) -> Vec3 {
        self.origin + t * self.direction
    }
}

/// Mirrors `v` about `n`.
/// * `n` - should be normalized; other lengths are not corrected
pub fn reflect(v: &Vec3, n: &Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}
