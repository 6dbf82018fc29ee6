use crate::aliases::Vec3;

/// Result of intersecting a ray with a single primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub t: f64,
    pub normal: Vec3,
}

/// Nearest intersection found in a scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitRecord {
    pub t: f64,
    pub index: usize, // position of the struck primitive in the scene
    pub normal: Vec3,
}

impl HitRecord {
    pub fn new(index: usize, hit: &Intersection) -> Self {
        HitRecord {
            t: hit.t,
            index,
            normal: hit.normal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_carries_intersection() {
        let hit = Intersection {
            t: 2.5,
            normal: Vec3::new(0.0, 0.0, 1.0),
        };
        let rec = HitRecord::new(3, &hit);
        assert_eq!(rec.t, 2.5);
        assert_eq!(rec.index, 3);
        assert_eq!(rec.normal, hit.normal);
    }
}
