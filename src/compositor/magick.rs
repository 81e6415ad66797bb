//! ImageMagick-backed label drawing.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

use super::{DrawCommand, LabelCompositor};

/// Drives one blocking `convert` invocation per render: transparent
/// background, fixed point size and fill, one -draw operation per label line.
pub struct MagickCompositor {
    point_size: u32,
    fill: String,
}

impl MagickCompositor {
    pub fn new(point_size: u32) -> Self {
        MagickCompositor {
            point_size,
            fill: "red".to_string(),
        }
    }
}

/// ImageMagick draw strings delimit text with single quotes, so embedded
/// quotes must be escaped.
fn escape_single_quotes(text: &str) -> String {
    text.replace('\'', "\\'")
}

fn draw_operation(command: &DrawCommand) -> String {
    format!(
        "translate {},{} rotate {} text 0,0 '{}'",
        command.x,
        command.y,
        command.rotation,
        escape_single_quotes(&command.text)
    )
}

impl LabelCompositor for MagickCompositor {
    fn composite(&self, input: &Path, output: &Path, commands: &[DrawCommand]) -> Result<()> {
        let mut convert = Command::new("convert");
        convert
            .arg("-background")
            .arg("none")
            .arg("-pointsize")
            .arg(self.point_size.to_string())
            .arg("-fill")
            .arg(&self.fill);
        for command in commands {
            convert.arg("-draw").arg(draw_operation(command));
        }
        convert.arg(input).arg(output);

        let status = convert
            .status()
            .context("Failed to run ImageMagick convert")?;
        if !status.success() {
            anyhow::bail!("ImageMagick convert exited with {}", status);
        }
        Ok(())
    }
}
