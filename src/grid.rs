//! Cluster-grid geometry and the sector-to-canvas coordinate transform.
//!
//! The map covers a fixed 17x14 grid of sectors, each 32x40 subsector cells.
//! Canvas dimensions derive from these constants alone and do not depend on
//! which sector definitions are actually present.

/// Sector columns on the full map.
pub const SECTORS_ACROSS: u32 = 17;
/// Sector rows on the full map.
pub const SECTORS_VERTICAL: u32 = 14;
/// Subsector cells per sector, horizontally.
pub const SECTOR_COLUMNS: u32 = 32;
/// Subsector cells per sector, vertically.
pub const SECTOR_ROWS: u32 = 40;
/// Sector columns between the left canvas edge and grid X = 0.
pub const GRID_ORIGIN_COLUMN: i64 = 26;
/// Canvas pixels per subsector cell unless overridden.
pub const DEFAULT_PIXEL_SCALE: u32 = 4;

pub fn canvas_width(pixel_scale: u32) -> u32 {
    SECTORS_ACROSS * SECTOR_COLUMNS * pixel_scale
}

pub fn canvas_height(pixel_scale: u32) -> u32 {
    SECTORS_VERTICAL * SECTOR_ROWS * pixel_scale
}

/// Canvas position of a sector's top-left corner, in pixels. May be negative
/// or past the canvas edge for sectors outside the rendered grid window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectorOffset {
    pub x: i64,
    pub y: i64,
}

/// Offset of a sector given its grid position. Grid Y increases upward while
/// canvas rows increase downward, hence the sign flip and the -1 term.
pub fn sector_offset(grid_x: i32, grid_y: i32, pixel_scale: u32) -> SectorOffset {
    let scale = pixel_scale as i64;
    SectorOffset {
        x: (GRID_ORIGIN_COLUMN + grid_x as i64) * scale * SECTOR_COLUMNS as i64,
        y: (-1 - grid_y as i64) * scale * SECTOR_ROWS as i64,
    }
}

/// In-sector position, validated to [1,32]x[1,40] on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalCoord {
    x: u32,
    y: u32,
}

impl LocalCoord {
    pub fn new(x: u32, y: u32) -> Option<Self> {
        if (1..=SECTOR_COLUMNS).contains(&x) && (1..=SECTOR_ROWS).contains(&y) {
            Some(LocalCoord { x, y })
        } else {
            None
        }
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }
}

/// Top-left canvas pixel of the star block for a local coordinate within the
/// sector at `offset`. Cell (1,1) lands exactly on the sector corner.
pub fn star_origin(offset: SectorOffset, local: LocalCoord, pixel_scale: u32) -> (i64, i64) {
    let scale = pixel_scale as i64;
    (
        offset.x + (local.x as i64 - 1) * scale,
        offset.y + (local.y as i64 - 1) * scale,
    )
}
