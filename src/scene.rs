use crate::aliases::Color;
use crate::camera::Camera;
use crate::hitable::Primitive;
use crate::light::Light;
use crate::overlay::Label;

/// Everything a render reads. Nothing in it changes while rendering.
pub struct Scene {
    pub primitives: Vec<Primitive>,
    pub lights: Vec<Light>,
    pub camera: Camera,
    pub background: Color,
    pub labels: Vec<Label>,
}

impl Scene {
    pub fn new(primitives: Vec<Primitive>, lights: Vec<Light>, camera: Camera) -> Self {
        Scene {
            primitives,
            lights,
            camera,
            background: Color::zeros(),
            labels: Vec::new(),
        }
    }
}
