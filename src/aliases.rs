use nalgebra as na;

pub type Vec3 = na::Vector3<f64>;
pub type Color = na::Vector3<f64>;
