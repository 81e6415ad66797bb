use anyhow::Result;
use std::path::Path;

use crate::sector::load_sector_configs;

/// Print every parsed sector definition, as a table or as JSON.
pub fn list_sectors(sector_definitions: &str, format: &str) -> Result<()> {
    let configs = load_sector_configs(Path::new(sector_definitions))?;

    match format {
        "json" => {
            let rows: Vec<serde_json::Value> = configs
                .iter()
                .map(|config| {
                    serde_json::json!({
                        "name": config.name,
                        "x": config.x,
                        "y": config.y,
                        "abbreviation": config.abbreviation,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        _ => {
            println!("{:<30} {:>6} {:>6} {:<10}", "Name", "X", "Y", "Abbrev");
            println!("{:-<56}", "");
            for config in &configs {
                println!(
                    "{:<30} {:>6} {:>6} {:<10}",
                    config.name,
                    config.x,
                    config.y,
                    config.abbreviation.as_deref().unwrap_or("")
                );
            }
            println!("\nTotal: {} sectors", configs.len());
        }
    }

    Ok(())
}
