use crate::aliases::Color;
use anyhow::{Context, Result};
use log::info;
use std::path::Path;

/// Linear colors of a rendered image, row by row from the top.
pub struct Film {
    nx: u32,
    ny: u32,
    pub pixels: Vec<Color>,
}

impl Film {
    pub fn zero(nx: u32, ny: u32) -> Self {
        Film {
            nx,
            ny,
            pixels: vec![Color::zeros(); (nx as usize) * (ny as usize)],
        }
    }
    pub fn index(&self, row: u32, col: u32) -> usize {
        col as usize + row as usize * self.nx as usize
    }
    /// Copies `rows` (consecutive full rows) in starting at `first_row`.
    pub fn put_rows(&mut self, first_row: u32, rows: &[Color]) {
        let start = self.index(first_row, 0);
        self.pixels[start..start + rows.len()].copy_from_slice(rows);
    }
    /// Clamps every channel to [0,1] and quantizes it to 8 bits.
    pub fn to_rgb8(&self) -> RgbBuffer {
        let mut data = Vec::with_capacity(self.pixels.len() * 3);
        for col in &self.pixels {
            for c in 0..3 {
                data.push(quantize(col[c]));
            }
        }
        RgbBuffer {
            width: self.nx,
            height: self.ny,
            data,
        }
    }
}

/// NaN maps to 0.
pub fn quantize(s: f64) -> u8 {
    let clamped = if s.is_nan() { 0.0 } else { s.min(1.0).max(0.0) };
    (255.0 * clamped) as u8
}

/// Interleaved 8-bit RGB image.
pub struct RgbBuffer {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl RgbBuffer {
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let i = 3 * (x as usize + self.width as usize * y as usize);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }
    pub fn set_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let i = 3 * (x as usize + self.width as usize * y as usize);
        self.data[i..i + 3].copy_from_slice(&rgb);
    }
    /// The format follows the extension of `path` (.png, .ppm, ...).
    pub fn save(&self, path: &Path) -> Result<()> {
        image::save_buffer(
            path,
            self.data.as_slice(),
            self.width,
            self.height,
            image::ColorType::Rgb8,
        )
        .with_context(|| format!("failed to write image {}", path.display()))?;
        info!("wrote {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}
