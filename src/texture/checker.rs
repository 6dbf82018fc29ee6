use crate::aliases::{Color, Vec3};
use crate::texture::Texture;

/// Alternating tiles over the x-z plane, independent of the stored diffuse color.
pub struct CheckerTexture {
    scale: f64, // cells per unit length
    even: Color,
    odd: Color,
}

impl Default for CheckerTexture {
    fn default() -> Self {
        CheckerTexture::new(2.0, &Color::new(0.9, 0.9, 0.9), &Color::new(0.1, 0.1, 0.1))
    }
}

impl CheckerTexture {
    pub fn new(scale: f64, even: &Color, odd: &Color) -> Self {
        CheckerTexture {
            scale,
            even: *even,
            odd: *odd,
        }
    }
    pub fn cell(&self, p: &Vec3) -> (i64, i64) {
        (
            (p[0] * self.scale).floor() as i64,
            (p[2] * self.scale).floor() as i64,
        )
    }
}

impl Texture for CheckerTexture {
    fn value(&self, _kd: &Color, p: &Vec3) -> Color {
        let (cx, cz) = self.cell(p);
        if cx.wrapping_add(cz).rem_euclid(2) == 1 {
            self.odd
        } else {
            self.even
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternates_every_cell_along_both_axes() {
        let tex = CheckerTexture::default();
        let kd = Color::new(0.5, 0.5, 0.5);
        let light = Color::new(0.9, 0.9, 0.9);
        let dark = Color::new(0.1, 0.1, 0.1);
        // sample the centers of the cells, half a unit apart
        for i in -6..6 {
            for k in -6..6 {
                let p = Vec3::new((i as f64 + 0.5) * 0.5, 3.0, (k as f64 + 0.5) * 0.5);
                let expected = if (i + k) % 2 == 0 { light } else { dark };
                assert_eq!(tex.value(&kd, &p), expected, "cell ({}, {})", i, k);
            }
        }
    }

    #[test]
    fn far_away_points_still_get_a_tile() {
        let tex = CheckerTexture::default();
        let kd = Color::zeros();
        let light = Color::new(0.9, 0.9, 0.9);
        let dark = Color::new(0.1, 0.1, 0.1);
        for p in [
            Vec3::new(1e19, 0.0, 1e19),
            Vec3::new(-1e300, 0.0, 1e300),
            Vec3::new(f64::INFINITY, 0.0, f64::NEG_INFINITY),
        ] {
            let c = tex.value(&kd, &p);
            assert!(c == light || c == dark, "{:?} at {:?}", c, p);
        }
    }

    #[test]
    fn ignores_height() {
        let tex = CheckerTexture::default();
        let kd = Color::zeros();
        let a = tex.value(&kd, &Vec3::new(0.3, -10.0, 0.7));
        let b = tex.value(&kd, &Vec3::new(0.3, 42.0, 0.7));
        assert_eq!(a, b);
    }

    #[test]
    fn unit_spaced_samples_alternate_with_unit_cells() {
        let tex = CheckerTexture::new(1.0, &Color::new(1.0, 1.0, 1.0), &Color::zeros());
        let kd = Color::zeros();
        let mut prev = tex.value(&kd, &Vec3::new(0.5, 0.0, 0.5));
        for i in 1..8 {
            let cur = tex.value(&kd, &Vec3::new(0.5 + i as f64, 0.0, 0.5));
            assert_ne!(cur, prev);
            prev = cur;
        }
    }
}
