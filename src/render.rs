use crate::aliases::Color;
use crate::calc_color_with_stats;
use crate::config::TraceSettings;
use crate::film::Film;
use crate::ray_stats::RayStats;
use crate::scene::Scene;
use anyhow::{anyhow, Result};
use itertools::iproduct;
use log::{debug, info};
use std::ops::Range;
use std::sync::mpsc::{channel, Sender};
use std::time::Instant;

/// A finished band of rows sent back by a worker.
struct Band {
    first_row: u32,
    colors: Vec<Color>,
    stats: RayStats,
}

/// Traces one ray per pixel of `rows`, left to right, top to bottom.
pub fn trace_rows(
    scene: &Scene,
    settings: &TraceSettings,
    rows: Range<u32>,
    nx: u32,
    ny: u32,
) -> (Vec<Color>, RayStats) {
    let mut stats = RayStats::default();
    let colors = iproduct!(rows, 0..nx)
        .map(|(row, col)| {
            let ray = scene.camera.viewing_ray(row, col, nx, ny);
            calc_color_with_stats(&ray, scene, settings, 0, &mut stats)
        })
        .collect();
    (colors, stats)
}

fn trace_band(
    scene: &Scene,
    settings: &TraceSettings,
    rows: Range<u32>,
    nx: u32,
    ny: u32,
    tx: Sender<Band>,
) {
    let first_row = rows.start;
    let (colors, stats) = trace_rows(scene, settings, rows, nx, ny);
    // the receiver outlives every worker
    let _ = tx.send(Band {
        first_row,
        colors,
        stats,
    });
}

/// Renders the whole image, splitting the rows into one band per thread.
pub fn render(
    scene: &Scene,
    settings: &TraceSettings,
    nx: u32,
    ny: u32,
    threads: usize,
) -> Result<(Film, RayStats)> {
    let start_time = Instant::now();
    // at most one band per row
    let threads = threads.clamp(1, ny.max(1) as usize) as u32;
    let band_height = ny.div_ceil(threads).max(1);
    info!(
        "rendering {}x{} with {} primitives, {} lights, {} threads",
        nx,
        ny,
        scene.primitives.len(),
        scene.lights.len(),
        threads
    );
    let mut film = Film::zero(nx, ny);
    let mut stats = RayStats::default();
    let (tx, rx) = channel::<Band>();
    crossbeam::scope(|scope| {
        for first_row in (0..ny).step_by(band_height as usize) {
            let rows = first_row..(first_row + band_height).min(ny);
            let tx = tx.clone();
            scope.spawn(move |_| trace_band(scene, settings, rows, nx, ny, tx));
        }
    })
    .map_err(|_| anyhow!("a render worker panicked"))?;
    drop(tx); // otherwise the loop below waits for it forever
    for band in rx {
        debug!("band from row {} done", band.first_row);
        film.put_rows(band.first_row, &band.colors);
        stats += band.stats;
    }
    let elapsed = start_time.elapsed();
    info!(
        "rendered in {:.3} secs: {} rays ({} primary, {} reflection, {} shadow)",
        elapsed.as_secs_f64(),
        stats.total(),
        stats.primary,
        stats.reflection,
        stats.shadow
    );
    Ok((film, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aliases::Vec3;
    use crate::camera::Camera;
    use crate::hitable::plane::Plane;
    use crate::hitable::sphere::Sphere;
    use crate::light::Light;
    use crate::material::Material;
    use std::sync::Arc;

    fn scene() -> Scene {
        let shiny = Arc::new(Material {
            km: Color::new(0.5, 0.5, 0.5),
            ks: Color::new(0.5, 0.5, 0.5),
            phong_exponent: 20.0,
            ..Material::default()
        });
        let floor = Arc::new(Material::default().with_checkerboard());
        Scene::new(
            vec![
                Sphere::new(&Vec3::zeros(), 1.0, shiny).into(),
                Plane::new(&Vec3::new(0.0, -1.0, 0.0), &Vec3::new(0.0, 1.0, 0.0), floor).into(),
            ],
            vec![Light::point(&Vec3::new(2.0, 5.0, 5.0), &Color::new(1.0, 1.0, 1.0))],
            Camera::look_at(
                &Vec3::new(0.0, 1.0, 6.0),
                &Vec3::zeros(),
                &Vec3::new(0.0, 1.0, 0.0),
                1.0,
                1.6,
                1.2,
            ),
        )
    }

    #[test]
    fn threads_do_not_change_the_image() {
        let scene = scene();
        let settings = TraceSettings::default();
        let (one, one_stats) = render(&scene, &settings, 16, 12, 1).unwrap();
        let (many, many_stats) = render(&scene, &settings, 16, 12, 5).unwrap();
        assert_eq!(one.pixels, many.pixels);
        assert_eq!(one_stats, many_stats);
        assert_eq!(one_stats.primary, 16 * 12);
    }

    #[test]
    fn more_threads_than_rows() {
        let scene = scene();
        let (film, stats) = render(&scene, &TraceSettings::default(), 3, 2, 8).unwrap();
        assert_eq!(film.pixels.len(), 6);
        assert_eq!(stats.primary, 6);
    }

    #[test]
    fn absurd_thread_counts_fall_back_to_one_band_per_row() {
        let scene = scene();
        let settings = TraceSettings::default();
        let (expected, _) = render(&scene, &settings, 4, 4, 1).unwrap();
        for threads in [u32::MAX as usize, usize::MAX] {
            let (film, stats) = render(&scene, &settings, 4, 4, threads).unwrap();
            assert_eq!(film.pixels, expected.pixels);
            assert_eq!(stats.primary, 16);
        }
    }

    #[test]
    fn zero_threads_render_on_one() {
        let scene = scene();
        let (film, stats) = render(&scene, &TraceSettings::default(), 5, 3, 0).unwrap();
        assert_eq!(film.pixels.len(), 15);
        assert_eq!(stats.primary, 15);
    }

    #[test]
    fn film_matches_direct_tracing() {
        let scene = scene();
        let settings = TraceSettings::default();
        let (film, _) = render(&scene, &settings, 8, 6, 3).unwrap();
        let (colors, _) = trace_rows(&scene, &settings, 0..6, 8, 6);
        assert_eq!(film.pixels, colors);
        let center = film.pixels[film.index(3, 4)];
        assert!(center.norm() > 0.0);
    }
}
