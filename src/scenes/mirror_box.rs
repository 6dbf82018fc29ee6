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
use std::f64::consts::PI;
use std::sync::Arc;

fn rgb(r: f64, g: f64, b: f64) -> Color {
    Color::new(r, g, b)
}

/// A stack of three spheres on a checkerboard inside a box of mirrors,
/// surrounded by rings of metallic and matte spheres.
pub fn scene(nx: u32, ny: u32, settings: &TraceSettings) -> Scene {
    let mut objs = Vec::<Primitive>::new();
    let plane = |point: Vec3, normal: Vec3, material: &Arc<Material>| -> Primitive {
        Plane::new(&point, &normal, material.clone())
            .with_parallel_epsilon(settings.parallel_epsilon)
            .into()
    };

    let floor = Arc::new(
        Material::new(
            &rgb(0.1, 0.1, 0.1),
            &rgb(0.5, 0.5, 0.5), // replaced by the checkerboard
            &rgb(0.1, 0.1, 0.1),
            &rgb(0.2, 0.2, 0.2),
            10.0,
        )
        .with_checkerboard(),
    );
    objs.push(plane(Vec3::new(0.0, -1.0, 0.0), Vec3::new(0.0, 1.0, 0.0), &floor));

    let mirror = Arc::new(Material::new(
        &rgb(0.0, 0.0, 0.0),
        &rgb(0.1, 0.1, 0.1),
        &rgb(0.8, 0.8, 0.8),
        &rgb(0.9, 0.9, 0.9),
        1000.0,
    ));
    objs.push(plane(Vec3::new(0.0, 0.0, -12.0), Vec3::new(0.0, 0.0, 1.0), &mirror)); // back
    objs.push(plane(Vec3::new(0.0, 0.0, 16.0), Vec3::new(0.0, 0.0, -1.0), &mirror)); // front
    objs.push(plane(Vec3::new(-8.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), &mirror)); // left
    objs.push(plane(Vec3::new(8.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0), &mirror)); // right
    objs.push(plane(Vec3::new(0.0, 10.0, 0.0), Vec3::new(0.0, -1.0, 0.0), &mirror)); // ceiling

    // the stack: marble base, gold middle, mirror top
    let marble = Material::new(
        &rgb(0.1, 0.0, 0.1),
        &rgb(0.8, 0.2, 0.8),
        &rgb(0.2, 0.2, 0.2),
        &rgb(0.1, 0.1, 0.1),
        50.0,
    )
    .with_marble();
    objs.push(Sphere::new(&Vec3::new(0.0, 0.5, 0.0), 1.5, Arc::new(marble)).into());
    let gold = Material::new(
        &rgb(0.1, 0.1, 0.0),
        &rgb(0.2, 0.2, 0.0),
        &rgb(0.8, 0.7, 0.2),
        &rgb(0.1, 0.1, 0.1),
        200.0,
    );
    objs.push(Sphere::new(&Vec3::new(0.0, 2.9, 0.0), 0.9, Arc::new(gold)).into());
    objs.push(Sphere::new(&Vec3::new(0.0, 4.4, 0.0), 0.6, mirror.clone()).into());

    // red metallic ring resting on the floor
    let red = Arc::new(Material::new(
        &rgb(0.1, 0.0, 0.0),
        &rgb(0.2, 0.0, 0.0),
        &rgb(0.9, 0.9, 0.9),
        &rgb(0.8, 0.5, 0.5),
        200.0,
    ));
    for i in 0..8 {
        let angle = 2.0 * PI * i as f64 / 8.0;
        let center = Vec3::new(4.5 * angle.cos(), -0.2, 4.5 * angle.sin());
        objs.push(Sphere::new(&center, 0.8, red.clone()).into());
    }

    let silver = Arc::new(Material::new(
        &rgb(0.1, 0.1, 0.1),
        &rgb(0.7, 0.7, 0.7),
        &rgb(0.9, 0.9, 0.9),
        &rgb(0.5, 0.5, 0.5),
        100.0,
    ));
    for center in &[
        Vec3::new(-3.5, -0.8, 2.0),
        Vec3::new(3.5, -0.8, -1.0),
        Vec3::new(-1.0, -0.8, 4.0),
        Vec3::new(2.5, -0.8, 3.0),
    ] {
        objs.push(Sphere::new(center, 0.2, silver.clone()).into());
    } // pebbles

    // matte blue inner ring
    let blue = Arc::new(Material::new(
        &rgb(0.0, 0.0, 0.1),
        &rgb(0.1, 0.1, 0.9),
        &rgb(0.5, 0.5, 0.5),
        &rgb(0.0, 0.0, 0.0),
        50.0,
    ));
    for i in 0..12 {
        let angle = 2.0 * PI * i as f64 / 12.0;
        let center = Vec3::new(3.0 * angle.cos(), -0.4, 3.0 * angle.sin());
        objs.push(Sphere::new(&center, 0.6, blue.clone()).into());
    }

    let lights = vec![Light::point(&Vec3::new(0.0, 6.0, 10.0), &rgb(1.5, 1.5, 1.5))];
    let aspect = nx as f64 / ny as f64;
    let camera = Camera::look_at(
        &Vec3::new(0.0, 4.0, 14.0),
        &Vec3::new(0.0, 2.0, 0.0),
        &Vec3::new(0.0, 1.0, 0.0),
        1.5,
        aspect,
        1.0,
    );
    let mut scene = Scene::new(objs, lights, camera);
    scene.labels = vec![
        Label::new("Mirror Box - Closer Sides", 10, 10, [255, 255, 255], 2),
        Label::new("Infinite Reflections", 10, 30, [255, 255, 0], 1),
        Label::new(
            &format!("{}x{} - max depth {}", nx, ny, settings.max_depth),
            10,
            ny as i32 - 20,
            [255, 255, 255],
            1,
        ),
    ];
    scene
}
