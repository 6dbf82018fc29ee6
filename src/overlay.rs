use crate::film::RgbBuffer;
use log::warn;
use serde::Deserialize;

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;
const ADVANCE: u32 = GLYPH_WIDTH + 1;

/// A line of text drawn on top of the rendered image.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub x: i32, // top-left corner in pixels
    pub y: i32,
    #[serde(default = "Label::default_color")]
    pub color: [u8; 3],
    #[serde(default = "Label::default_scale")]
    pub scale: u32,
}

impl Label {
    pub fn new(text: &str, x: i32, y: i32, color: [u8; 3], scale: u32) -> Self {
        Label {
            text: text.to_string(),
            x,
            y,
            color,
            scale,
        }
    }
    fn default_color() -> [u8; 3] {
        [255, 255, 255]
    }
    fn default_scale() -> u32 {
        1
    }
    pub fn draw(&self, image: &mut RgbBuffer) {
        let right = self.x as i64 + text_width(&self.text, self.scale) as i64;
        if self.x < 0 || self.y < 0 || right > image.width as i64 {
            warn!("label {:?} does not fit in the image and is clipped", self.text);
        }
        draw_text(image, &self.text, self.x, self.y, self.color, self.scale);
    }
}

/// Rows of a 5x7 glyph, bit 4 being the leftmost column.
/// Letters are case-insensitive; unknown characters are blank.
fn glyph(c: char) -> [u8; 7] {
    match c.to_ascii_uppercase() {
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '+' => [0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00],
        '=' => [0x00, 0x00, 0x1F, 0x00, 0x1F, 0x00, 0x00],
        '_' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        ',' => [0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08],
        ':' => [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        '!' => [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04],
        '?' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04],
        '\'' => [0x04, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00],
        '(' => [0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02],
        ')' => [0x08, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08],
        '/' => [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x00],
        _ => [0x00; 7],
    }
}

/// Draws `text` with its top-left corner at (`x`, `y`), each font pixel
/// becoming a `scale` x `scale` block. Pixels outside the image are skipped.
pub fn draw_text(image: &mut RgbBuffer, text: &str, x: i32, y: i32, color: [u8; 3], scale: u32) {
    let scale = scale.max(1) as i64;
    for (i, c) in text.chars().enumerate() {
        let rows = glyph(c);
        let left = x as i64 + i as i64 * ADVANCE as i64 * scale;
        for (gy, bits) in rows.iter().enumerate() {
            for gx in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - gx)) == 0 {
                    continue;
                }
                let px = left + gx as i64 * scale;
                let py = y as i64 + gy as i64 * scale;
                fill_block(image, px, py, scale, color);
            }
        }
    }
}

fn fill_block(image: &mut RgbBuffer, x: i64, y: i64, size: i64, color: [u8; 3]) {
    for yy in y.max(0)..(y + size).min(image.height as i64) {
        for xx in x.max(0)..(x + size).min(image.width as i64) {
            image.set_pixel(xx as u32, yy as u32, color);
        }
    }
}

/// Width in pixels of `text` drawn at `scale`.
pub fn text_width(text: &str, scale: u32) -> u32 {
    let n = text.chars().count() as u32;
    if n == 0 {
        0
    } else {
        (n * ADVANCE - 1) * scale.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::film::Film;

    fn lit_pixels(image: &RgbBuffer) -> usize {
        image.data.chunks(3).filter(|p| p.iter().any(|&c| c > 0)).count()
    }

    #[test]
    fn glyph_rows_fit_five_columns() {
        for c in (b' '..=b'~').map(|b| b as char) {
            assert!(glyph(c).iter().all(|row| *row < 0x20), "{:?}", c);
        }
    }

    #[test]
    fn lowercase_matches_uppercase() {
        assert_eq!(glyph('m'), glyph('M'));
        assert_eq!(glyph('~'), [0; 7]);
    }

    #[test]
    fn draws_minus_sign_at_position() {
        let mut image = Film::zero(20, 10).to_rgb8();
        draw_text(&mut image, "-", 2, 1, [255, 255, 0], 1);
        for x in 0..20 {
            let expected = if (2..7).contains(&x) { [255, 255, 0] } else { [0, 0, 0] };
            assert_eq!(image.pixel(x, 4), expected);
        }
        assert_eq!(lit_pixels(&image), 5);
    }

    #[test]
    fn scale_multiplies_area() {
        let mut small = Film::zero(40, 40).to_rgb8();
        draw_text(&mut small, "H", 0, 0, [255, 255, 255], 1);
        let mut big = Film::zero(40, 40).to_rgb8();
        draw_text(&mut big, "H", 0, 0, [255, 255, 255], 3);
        assert_eq!(lit_pixels(&big), 9 * lit_pixels(&small));
    }

    #[test]
    fn clips_at_image_bounds() {
        let mut image = Film::zero(8, 8).to_rgb8();
        draw_text(&mut image, "MIRROR BOX", -3, 5, [255, 255, 255], 2);
        draw_text(&mut image, "X", 100, 100, [255, 255, 255], 1);
        assert!(lit_pixels(&image) > 0);
    }

    #[test]
    fn width_of_text() {
        assert_eq!(text_width("", 2), 0);
        assert_eq!(text_width("AB", 1), 11);
        assert_eq!(text_width("AB", 2), 22);
    }
}
