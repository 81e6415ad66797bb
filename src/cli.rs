use clap::{Parser, Subcommand};

use crate::grid::DEFAULT_PIXEL_SCALE;

#[derive(Parser)]
#[command(name = "sectormap")]
#[command(about = "Renders a star-cluster map from sector definitions and star survey data", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the full cluster map (stars, grid, labels)
    Render {
        /// Directory containing one .yaml definition file per sector
        sector_definitions: String,

        /// Root directory containing one star-data subdirectory per sector
        star_data_root: String,

        /// Render mode: plain (txt star files, abbreviated tilted labels) or
        /// surveyed (json star files gated on surveyIndex, full-name labels)
        #[arg(short, long, default_value = "plain")]
        mode: String,

        /// Canvas pixels per subsector cell
        #[arg(long, default_value_t = DEFAULT_PIXEL_SCALE)]
        pixel_scale: u32,

        /// Path for the intermediate raster (grid and stars, no labels)
        #[arg(short, long, default_value = "sectors.png")]
        output: String,

        /// Text renderer for labels (imagemagick, builtin)
        #[arg(long, default_value = "imagemagick")]
        text_renderer: String,
    },

    /// List parsed sector definitions
    ListSectors {
        /// Directory containing one .yaml definition file per sector
        sector_definitions: String,

        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}
