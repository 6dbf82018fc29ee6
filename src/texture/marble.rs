use crate::aliases::{Color, Vec3};
use crate::texture::Texture;

/// Sinusoidal turbulence blending the diffuse color toward white.
pub struct MarbleTexture {
    scale: f64,
    warp: f64,
}

impl Default for MarbleTexture {
    fn default() -> Self {
        MarbleTexture::new(5.0, 5.0)
    }
}

impl MarbleTexture {
    pub fn new(scale: f64, warp: f64) -> Self {
        MarbleTexture { scale, warp }
    }
    /// returns values in [0,1]
    pub fn weight(&self, p: &Vec3) -> f64 {
        let s = self.scale;
        0.5 * (1.0 + f64::sin(s * p[0] + self.warp * f64::sin(s * p[1] + s * p[2])))
    }
}

impl Texture for MarbleTexture {
    fn value(&self, kd: &Color, p: &Vec3) -> Color {
        let w = self.weight(p);
        kd * w + Color::new(1.0, 1.0, 1.0) * (1.0 - w)
    }
}
