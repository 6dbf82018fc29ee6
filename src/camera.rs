use crate::aliases::Vec3;
use crate::ray::Ray;

/// Pinhole camera with an orthonormal basis (u right, v up, w backward).
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    eye: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    focal_length: f64, // distance from eye to image plane
    width: f64,        // physical size of the image plane
    height: f64,
}

impl Camera {
    pub fn look_at(
        eye: &Vec3,
        target: &Vec3,
        view_up: &Vec3,
        focal_length: f64,
        width: f64,
        height: f64,
    ) -> Self {
        let w = (eye - target).normalize();
        let u = view_up.cross(&w).normalize();
        let v = w.cross(&u);
        Camera {
            eye: *eye,
            u,
            v,
            w,
            focal_length,
            width,
            height,
        }
    }
    /// Ray through the center of pixel (`row`, `col`); row 0 is the top.
    pub fn viewing_ray(&self, row: u32, col: u32, nx: u32, ny: u32) -> Ray {
        let s = -0.5 * self.width + self.width * (col as f64 + 0.5) / nx as f64;
        let t = 0.5 * self.height - self.height * (row as f64 + 0.5) / ny as f64;
        Ray::new(
            &self.eye,
            &(-self.focal_length * self.w + s * self.u + t * self.v),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::look_at(
            &Vec3::new(0.0, 0.0, 5.0),
            &Vec3::zeros(),
            &Vec3::new(0.0, 1.0, 0.0),
            1.0,
            2.0,
            2.0,
        )
    }

    #[test]
    fn basis_is_orthonormal() {
        let c = camera();
        assert_eq!(c.w, Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(c.u, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(c.v, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn center_pixel_looks_at_target() {
        let ray = camera().viewing_ray(1, 1, 3, 3);
        assert_eq!(ray.origin, Vec3::new(0.0, 0.0, 5.0));
        assert!((ray.direction - Vec3::new(0.0, 0.0, -1.0)).norm() < 1e-12);
    }

    #[test]
    fn top_left_pixel_points_up_left() {
        let ray = camera().viewing_ray(0, 0, 4, 4);
        assert!(ray.direction[0] < 0.0);
        assert!(ray.direction[1] > 0.0);
        assert!((ray.direction[0] - -0.75).abs() < 1e-12);
        assert!((ray.direction[1] - 0.75).abs() < 1e-12);
    }
}
