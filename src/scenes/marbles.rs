use mirrorbox::aliases::{Color, Vec3};
use mirrorbox::camera::Camera;
use mirrorbox::config::TraceSettings;
use mirrorbox::hitable::plane::Plane;
use mirrorbox::hitable::sphere::Sphere;
use mirrorbox::hitable::Primitive;
use mirrorbox::light::Light;
use mirrorbox::material::Material;
use mirrorbox::overlay::Label;
use mirrorbox::scene::Scene;
use std::sync::Arc;

/// A row of marble spheres of increasing shininess under sun and lamp light.
pub fn scene(nx: u32, ny: u32, settings: &TraceSettings) -> Scene {
    let floor = Arc::new(Material {
        km: Color::new(0.1, 0.1, 0.1),
        ..Material::default().with_checkerboard()
    });
    let mut objs: Vec<Primitive> = vec![Plane::new(
        &Vec3::new(0.0, -1.0, 0.0),
        &Vec3::new(0.0, 1.0, 0.0),
        floor,
    )
    .with_parallel_epsilon(settings.parallel_epsilon)
    .into()];
    for i in 0..5 {
        let shine = i as f64 / 4.0;
        let material = Material::new(
            &Color::zeros(),
            &Color::new(0.2, 0.4, 0.8),
            &(Color::new(0.5, 0.5, 0.5) * shine),
            &(Color::new(0.6, 0.6, 0.6) * shine),
            10.0 + 90.0 * shine,
        )
        .with_marble();
        let center = Vec3::new(-4.0 + 2.0 * i as f64, 0.0, 0.0);
        objs.push(Sphere::new(&center, 0.9, Arc::new(material)).into());
    }
    let lights = vec![
        Light::directional(&Vec3::new(-1.0, -2.0, -1.0), &Color::new(0.8, 0.8, 0.7)),
        Light::point(&Vec3::new(3.0, 5.0, 6.0), &Color::new(0.5, 0.5, 0.6)),
    ];
    let camera = Camera::look_at(
        &Vec3::new(0.0, 2.0, 9.0),
        &Vec3::zeros(),
        &Vec3::new(0.0, 1.0, 0.0),
        1.0,
        nx as f64 / ny as f64,
        1.0,
    );
    let mut scene = Scene::new(objs, lights, camera);
    scene.labels = vec![Label::new("Marbles", 10, 10, [255, 255, 255], 2)];
    scene
}
