//! The map canvas: a fixed-size RGB buffer with star-block painting and
//! PNG output.

use anyhow::{Context, Result};
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::grid::{canvas_height, canvas_width};

/// Fill for plotted star blocks.
pub const STAR_COLOR: Rgb<u8> = Rgb([140, 140, 140]);
/// Edge length of the block painted per star, independent of pixel scale.
pub const STAR_BLOCK_SIZE: i64 = 2;

pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Black canvas covering the whole sector grid at the given pixel scale.
    pub fn new(pixel_scale: u32) -> Self {
        Canvas {
            image: RgbImage::new(canvas_width(pixel_scale), canvas_height(pixel_scale)),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Paint one star block with its top-left pixel at (x, y). Returns false
    /// without painting when any part of the block falls outside the canvas;
    /// sectors near the grid edge produce such positions and the caller
    /// decides how to report them.
    pub fn plot_star(&mut self, x: i64, y: i64) -> bool {
        if x < 0
            || y < 0
            || x + STAR_BLOCK_SIZE > self.width() as i64
            || y + STAR_BLOCK_SIZE > self.height() as i64
        {
            return false;
        }
        for dy in 0..STAR_BLOCK_SIZE {
            for dx in 0..STAR_BLOCK_SIZE {
                self.image.put_pixel((x + dx) as u32, (y + dy) as u32, STAR_COLOR);
            }
        }
        true
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        *self.image.get_pixel(x, y)
    }

    pub fn image_mut(&mut self) -> &mut RgbImage {
        &mut self.image
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        save_png(&self.image, path)
    }
}

/// Write an RGB image as PNG with best compression.
pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let writer = BufWriter::new(file);

    let encoder = PngEncoder::new_with_quality(writer, CompressionType::Best, FilterType::Adaptive);
    encoder
        .write_image(image, image.width(), image.height(), ExtendedColorType::Rgb8)
        .with_context(|| format!("Failed to write PNG image to {}", path.display()))
}
