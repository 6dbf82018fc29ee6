pub mod checker;
pub mod marble;

use crate::aliases::{Color, Vec3};
use crate::material::Material;
use self::checker::CheckerTexture;
use self::marble::MarbleTexture;

pub trait Texture {
    /// Diffuse reflectance at `p` given the material's stored one.
    fn value(&self, kd: &Color, p: &Vec3) -> Color;
}

/// Diffuse reflectance of `material` at `p` after its procedural textures.
/// The checkerboard replaces the stored value; marble then blends toward white.
pub fn diffuse_at(material: &Material, p: &Vec3) -> Color {
    let mut kd = material.kd;
    if material.checkerboard {
        kd = CheckerTexture::default().value(&kd, p);
    }
    if material.marble {
        kd = MarbleTexture::default().value(&kd, p);
    }
    kd
}
