use crate::aliases::{Color, Vec3};

#[derive(Clone, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub intensity: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DirectionalLight {
    direction: Vec3, // normalized, the way the light travels
    pub intensity: Color,
}

impl DirectionalLight {
    pub fn new(direction: &Vec3, intensity: &Color) -> Self {
        Self {
            direction: direction.normalize(),
            intensity: *intensity,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Light {
    Point(PointLight),
    Directional(DirectionalLight),
}

impl Light {
    pub fn point(position: &Vec3, intensity: &Color) -> Self {
        Light::Point(PointLight {
            position: *position,
            intensity: *intensity,
        })
    }
    pub fn directional(direction: &Vec3, intensity: &Color) -> Self {
        Light::Directional(DirectionalLight::new(direction, intensity))
    }
    pub fn intensity(&self) -> &Color {
        match self {
            Light::Point(l) => &l.intensity,
            Light::Directional(l) => &l.intensity,
        }
    }
    /// Unit direction from `q` toward this light and the parameter along it
    /// beyond which an occluder no longer shadows `q`.
    pub fn direction(&self, q: &Vec3) -> (Vec3, f64) {
        match self {
            Light::Point(l) => {
                let to_light = l.position - q;
                let dist = to_light.norm();
                (to_light / dist, dist)
            }
            Light::Directional(l) => (-l.direction, f64::INFINITY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_light_direction_and_distance() {
        let light = Light::point(&Vec3::new(0.0, 4.0, 3.0), &Color::new(1.0, 1.0, 1.0));
        let (dir, max_t) = light.direction(&Vec3::zeros());
        assert_eq!(max_t, 5.0);
        assert!((dir - Vec3::new(0.0, 0.8, 0.6)).norm() < 1e-12);
    }

    #[test]
    fn directional_light_points_against_travel() {
        let light = Light::directional(&Vec3::new(0.0, -2.0, 0.0), &Color::new(1.0, 1.0, 1.0));
        let (dir, max_t) = light.direction(&Vec3::new(3.0, 1.0, -7.0));
        assert_eq!(dir, Vec3::new(0.0, 1.0, 0.0));
        assert!(max_t.is_infinite());
    }
}
