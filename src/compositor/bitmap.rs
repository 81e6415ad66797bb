//! Built-in bitmap-font label drawing, for runs without ImageMagick on hand.
//!
//! Glyphs are a 5x7 bitmap font upscaled to approximate the requested point
//! size. Rotation is honored by rotating every glyph pixel offset around the
//! command position, so a rotated label stays a rigid block.

use anyhow::{Context, Result};
use image::{Rgb, RgbImage};
use nalgebra::{Rotation2, Vector2};
use std::path::Path;

use super::{DrawCommand, LabelCompositor};
use crate::canvas::save_png;

const GLYPH_COLUMNS: u32 = 5;
const GLYPH_ROWS: u32 = 7;

/// 5x7 glyph bitmaps: one byte per scanline, low five bits used, MSB-left.
/// Lowercase input is folded to uppercase before lookup.
const GLYPHS: &[(char, [u8; 7])] = &[
    (' ', [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000]),
    ('\'', [0b00100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000]),
    ('-', [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000]),
    ('.', [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100]),
    ('0', [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110]),
    ('1', [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
    ('2', [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111]),
    ('3', [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110]),
    ('4', [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010]),
    ('5', [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110]),
    ('6', [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110]),
    ('7', [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000]),
    ('8', [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110]),
    ('9', [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100]),
    ('A', [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
    ('B', [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110]),
    ('C', [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110]),
    ('D', [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110]),
    ('E', [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111]),
    ('F', [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000]),
    ('G', [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110]),
    ('H', [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
    ('I', [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
    ('J', [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100]),
    ('K', [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001]),
    ('L', [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111]),
    ('M', [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001]),
    ('N', [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001]),
    ('O', [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
    ('P', [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000]),
    ('Q', [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101]),
    ('R', [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001]),
    ('S', [0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110]),
    ('T', [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100]),
    ('U', [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
    ('V', [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100]),
    ('W', [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001]),
    ('X', [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001]),
    ('Y', [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100]),
    ('Z', [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111]),
];

fn glyph(c: char) -> Option<&'static [u8; 7]> {
    let folded = c.to_ascii_uppercase();
    GLYPHS
        .iter()
        .find(|(glyph_char, _)| *glyph_char == folded)
        .map(|(_, pattern)| pattern)
}

/// Draws labels with the built-in font.
pub struct BitmapCompositor {
    point_size: u32,
    color: Rgb<u8>,
}

impl BitmapCompositor {
    pub fn new(point_size: u32) -> Self {
        BitmapCompositor {
            point_size,
            color: Rgb([255, 0, 0]),
        }
    }

    /// Integer upscale factor approximating the point size; a 5x7 glyph at
    /// scale 2 stands in for 20pt type well enough for map labels.
    fn scale(&self) -> u32 {
        (self.point_size / 10).max(1)
    }

    /// Draw one command. The position is the text baseline origin (as with
    /// `text 0,0` in a draw string), so glyphs extend upward from it.
    fn draw_command(&self, image: &mut RgbImage, command: &DrawCommand) {
        let scale = self.scale();
        let rotation = Rotation2::new(command.rotation.to_radians());
        let advance = (GLYPH_COLUMNS + 1) * scale;
        let glyph_height = (GLYPH_ROWS * scale) as f64;

        let mut pen_x = 0u32;
        for c in command.text.chars() {
            if let Some(pattern) = glyph(c) {
                for (row, bits) in pattern.iter().enumerate() {
                    for col in 0..GLYPH_COLUMNS {
                        if bits & (1 << (GLYPH_COLUMNS - 1 - col)) == 0 {
                            continue;
                        }
                        for dy in 0..scale {
                            for dx in 0..scale {
                                let local = Vector2::new(
                                    (pen_x + col * scale + dx) as f64,
                                    (row as u32 * scale + dy) as f64 - glyph_height,
                                );
                                let rotated = rotation * local;
                                let px = (command.x + rotated.x).round();
                                let py = (command.y + rotated.y).round();
                                if px >= 0.0
                                    && py >= 0.0
                                    && (px as u32) < image.width()
                                    && (py as u32) < image.height()
                                {
                                    image.put_pixel(px as u32, py as u32, self.color);
                                }
                            }
                        }
                    }
                }
            }
            // Unknown glyphs still advance the pen so spacing survives.
            pen_x += advance;
        }
    }
}

impl LabelCompositor for BitmapCompositor {
    fn composite(&self, input: &Path, output: &Path, commands: &[DrawCommand]) -> Result<()> {
        let mut image = image::open(input)
            .with_context(|| format!("Failed to open rendered map: {}", input.display()))?
            .to_rgb8();
        for command in commands {
            self.draw_command(&mut image, command);
        }
        save_png(&image, output)
    }
}
