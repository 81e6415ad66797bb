use anyhow::Result;
use std::path::Path;

use crate::canvas::Canvas;
use crate::compositor::{BitmapCompositor, LabelCompositor, MagickCompositor};
use crate::grid::{sector_offset, star_origin};
use crate::gridlines::draw_grid;
use crate::labels::{layout_labels, LABEL_POINT_SIZE, TILTED_LABEL_ROTATION};
use crate::sector::{load_sector_configs, SectorConfig, SectorLabel};
use crate::stars::{collect_sector_stars, StarFileFormat};

/// Which map to produce: the quick abbreviated chart, or the one gated on
/// survey completeness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Plain,
    Surveyed,
}

impl std::str::FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(RenderMode::Plain),
            "surveyed" => Ok(RenderMode::Surveyed),
            _ => Err(format!("Unknown render mode: {}. Use 'plain' or 'surveyed'", s)),
        }
    }
}

impl RenderMode {
    fn star_format(&self) -> StarFileFormat {
        match self {
            RenderMode::Plain => StarFileFormat::Text,
            RenderMode::Surveyed => StarFileFormat::Json,
        }
    }

    fn rotation_degrees(&self) -> f64 {
        match self {
            RenderMode::Plain => TILTED_LABEL_ROTATION,
            RenderMode::Surveyed => 0.0,
        }
    }

    /// File name of the final labeled image, resolved next to the
    /// intermediate raster.
    fn labeled_file_name(&self) -> &'static str {
        match self {
            RenderMode::Plain => "labels.png",
            RenderMode::Surveyed => "uncharted-space.png",
        }
    }

    /// Label text for one sector. The abbreviated map falls back to the full
    /// name when a definition carries no abbreviation.
    fn label_text<'a>(&self, config: &'a SectorConfig) -> &'a str {
        match self {
            RenderMode::Plain => config.abbreviation.as_deref().unwrap_or(&config.name),
            RenderMode::Surveyed => &config.name,
        }
    }
}

/// Render the full cluster map: stars, grid, then labels.
pub fn render_map(
    sector_definitions: &str,
    star_data_root: &str,
    mode: &str,
    pixel_scale: u32,
    output: &str,
    text_renderer: &str,
) -> Result<()> {
    let mode: RenderMode = mode.parse().map_err(anyhow::Error::msg)?;
    let compositor: Box<dyn LabelCompositor> = match text_renderer.to_lowercase().as_str() {
        "imagemagick" => Box::new(MagickCompositor::new(LABEL_POINT_SIZE)),
        "builtin" => Box::new(BitmapCompositor::new(LABEL_POINT_SIZE)),
        _ => anyhow::bail!(
            "Unknown text renderer: {}. Use 'imagemagick' or 'builtin'",
            text_renderer
        ),
    };

    render_map_with(
        Path::new(sector_definitions),
        Path::new(star_data_root),
        mode,
        pixel_scale,
        Path::new(output),
        compositor.as_ref(),
    )
}

/// The pipeline proper, with the compositor injected so layout and plotting
/// are exercisable without any external tool.
pub fn render_map_with(
    sector_definitions: &Path,
    star_data_root: &Path,
    mode: RenderMode,
    pixel_scale: u32,
    output: &Path,
    compositor: &dyn LabelCompositor,
) -> Result<()> {
    let configs = load_sector_configs(sector_definitions)?;

    let mut canvas = Canvas::new(pixel_scale);
    let labels = plot_sectors(&mut canvas, &configs, star_data_root, mode, pixel_scale)?;

    draw_grid(&mut canvas, pixel_scale);
    canvas.save_png(output)?;

    let commands = layout_labels(&labels, pixel_scale, mode.rotation_degrees());
    let labeled_output = output.with_file_name(mode.labeled_file_name());
    compositor.composite(output, &labeled_output, &commands)?;

    println!("Image saved to {}", labeled_output.display());
    Ok(())
}

/// Plot every sector's stars and collect its label; labels come back in
/// enumeration order for the compositing stage.
fn plot_sectors(
    canvas: &mut Canvas,
    configs: &[SectorConfig],
    star_data_root: &Path,
    mode: RenderMode,
    pixel_scale: u32,
) -> Result<Vec<SectorLabel>> {
    let mut labels = Vec::with_capacity(configs.len());
    for config in configs {
        println!("x {} y {} {}", config.x, config.y, config.name);
        labels.push(SectorLabel {
            grid_x: config.x,
            grid_y: config.y,
            text: mode.label_text(config).to_string(),
        });

        let sector_dir = star_data_root.join(&config.name);
        if !sector_dir.is_dir() {
            tracing::warn!(
                "No star data for sector {}: {}",
                config.name,
                sector_dir.display()
            );
            continue;
        }

        let offset = sector_offset(config.x, config.y, pixel_scale);
        for local in collect_sector_stars(&sector_dir, mode.star_format())? {
            let (x, y) = star_origin(offset, local, pixel_scale);
            if !canvas.plot_star(x, y) {
                tracing::warn!(
                    "Star {:02}{:02} in sector {} falls outside the canvas",
                    local.x(),
                    local.y(),
                    config.name
                );
            }
        }
    }
    Ok(labels)
}
