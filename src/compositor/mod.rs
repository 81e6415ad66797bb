//! Narrow interface to the label-drawing stage.
//!
//! Label layout produces plain draw commands; a compositor turns them plus the
//! rendered map into the final labeled image.

pub mod bitmap;
pub mod magick;

pub use bitmap::BitmapCompositor;
pub use magick::MagickCompositor;

use anyhow::Result;
use std::path::Path;

/// One label line to burn into the map.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub text: String,
    /// Canvas position of the text baseline origin.
    pub x: f64,
    pub y: f64,
    /// Rotation in degrees around the position.
    pub rotation: f64,
}

/// Burns label draw commands into a rendered map image.
pub trait LabelCompositor {
    /// Read the raster at `input`, draw every command in order, and write the
    /// labeled result to `output`.
    fn composite(&self, input: &Path, output: &Path, commands: &[DrawCommand]) -> Result<()>;
}
