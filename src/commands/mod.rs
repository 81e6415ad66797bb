pub mod list_sectors;
pub mod render_map;

pub use list_sectors::list_sectors;
pub use render_map::{render_map, render_map_with, RenderMode};
