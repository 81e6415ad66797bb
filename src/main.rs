use clap::Parser;

use sectormap::cli::{Cli, Commands};
use sectormap::commands::{list_sectors, render_map};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            sector_definitions,
            star_data_root,
            mode,
            pixel_scale,
            output,
            text_renderer,
        } => {
            render_map(
                &sector_definitions,
                &star_data_root,
                &mode,
                pixel_scale,
                &output,
                &text_renderer,
            )?;
        }
        Commands::ListSectors {
            sector_definitions,
            format,
        } => {
            list_sectors(&sector_definitions, &format)?;
        }
    }

    Ok(())
}
