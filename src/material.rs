use crate::aliases::Color;

/// Blinn-Phong surface description shared by any number of primitives.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub ka: Color, // ambient, carried for scene descriptions; the shader adds no ambient term
    pub kd: Color,
    pub ks: Color,
    pub km: Color, // mirror reflectance
    pub phong_exponent: f64,
    pub checkerboard: bool,
    pub marble: bool,
}

impl Default for Material {
    fn default() -> Self {
        Material {
            ka: Color::zeros(),
            kd: Color::new(0.5, 0.5, 0.5),
            ks: Color::zeros(),
            km: Color::zeros(),
            phong_exponent: 1.0,
            checkerboard: false,
            marble: false,
        }
    }
}

impl Material {
    pub fn new(ka: &Color, kd: &Color, ks: &Color, km: &Color, phong_exponent: f64) -> Self {
        Material {
            ka: *ka,
            kd: *kd,
            ks: *ks,
            km: *km,
            phong_exponent,
            checkerboard: false,
            marble: false,
        }
    }
    pub fn with_checkerboard(mut self) -> Self {
        self.checkerboard = true;
        self
    }
    pub fn with_marble(mut self) -> Self {
        self.marble = true;
        self
    }
    pub fn is_reflective(&self) -> bool {
        self.km != Color::zeros()
    }
}
