//! Sector and subsector grid overlay.

use image::Rgb;
use imageproc::drawing::draw_line_segment_mut;

use crate::canvas::Canvas;
use crate::grid::{SECTOR_COLUMNS, SECTOR_ROWS};

/// Line tone on sector boundaries.
pub const SECTOR_LINE_COLOR: Rgb<u8> = Rgb([172, 172, 172]);
/// Line tone on subsector boundaries.
pub const SUBSECTOR_LINE_COLOR: Rgb<u8> = Rgb([40, 40, 40]);
/// Subsector width in cells.
pub const SUBSECTOR_COLUMNS: u32 = 8;
/// Subsector height in cells.
pub const SUBSECTOR_ROWS: u32 = 10;

/// Overlay the grid on the whole canvas. A pure function of canvas size and
/// pixel scale; sector definitions play no part. At pixel scales of 2 and
/// below the subsector pitch collapses to whole sectors. Lines on the canvas
/// edge itself (x = 0, y = 0) are skipped.
pub fn draw_grid(canvas: &mut Canvas, pixel_scale: u32) {
    let width = canvas.width();
    let height = canvas.height();
    let x_step = if pixel_scale > 2 {
        SUBSECTOR_COLUMNS * pixel_scale
    } else {
        SECTOR_COLUMNS * pixel_scale
    };
    let y_step = if pixel_scale > 2 {
        SUBSECTOR_ROWS * pixel_scale
    } else {
        SECTOR_ROWS * pixel_scale
    };

    let image = canvas.image_mut();
    for x in (0..width).step_by(x_step as usize) {
        if x == 0 {
            continue;
        }
        let color = if x % (SECTOR_COLUMNS * pixel_scale) == 0 {
            SECTOR_LINE_COLOR
        } else {
            SUBSECTOR_LINE_COLOR
        };
        draw_line_segment_mut(
            image,
            (x as f32, 0.0),
            (x as f32, (height - 1) as f32),
            color,
        );
    }

    for y in (0..height).step_by(y_step as usize) {
        if y == 0 {
            continue;
        }
        let color = if y % (SECTOR_ROWS * pixel_scale) == 0 {
            SECTOR_LINE_COLOR
        } else {
            SUBSECTOR_LINE_COLOR
        };
        draw_line_segment_mut(
            image,
            (0.0, y as f32),
            ((width - 1) as f32, y as f32),
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn sector_boundaries_get_the_bright_tone() {
        let mut canvas = Canvas::new(4);
        draw_grid(&mut canvas, 4);

        // 32 cells * scale 4 = 128 px sector pitch.
        assert_eq!(canvas.pixel(128, 5), SECTOR_LINE_COLOR);
        assert_eq!(canvas.pixel(256, 5), SECTOR_LINE_COLOR);
        // 40 cells * scale 4 = 160 px sector pitch.
        assert_eq!(canvas.pixel(5, 160), SECTOR_LINE_COLOR);
    }

    #[test]
    fn subsector_boundaries_get_the_dim_tone() {
        let mut canvas = Canvas::new(4);
        draw_grid(&mut canvas, 4);

        // 8 cells * scale 4 = 32 px subsector pitch.
        assert_eq!(canvas.pixel(32, 5), SUBSECTOR_LINE_COLOR);
        assert_eq!(canvas.pixel(96, 5), SUBSECTOR_LINE_COLOR);
        // 10 cells * scale 4 = 40 px subsector pitch.
        assert_eq!(canvas.pixel(5, 40), SUBSECTOR_LINE_COLOR);
        assert_eq!(canvas.pixel(5, 120), SUBSECTOR_LINE_COLOR);
    }

    #[test]
    fn no_line_on_the_canvas_edge() {
        let mut canvas = Canvas::new(4);
        draw_grid(&mut canvas, 4);

        assert_eq!(canvas.pixel(0, 5), Rgb([0, 0, 0]));
        assert_eq!(canvas.pixel(5, 0), Rgb([0, 0, 0]));
        // Off-pitch positions stay background too.
        assert_eq!(canvas.pixel(33, 5), Rgb([0, 0, 0]));
        assert_eq!(canvas.pixel(5, 41), Rgb([0, 0, 0]));
    }

    #[test]
    fn small_scales_collapse_to_sector_pitch() {
        let mut canvas = Canvas::new(1);
        draw_grid(&mut canvas, 1);

        // Every drawn line sits on a sector boundary.
        assert_eq!(canvas.pixel(32, 5), SECTOR_LINE_COLOR);
        assert_eq!(canvas.pixel(5, 40), SECTOR_LINE_COLOR);
        // The scale-4 subsector pitch has no line here.
        assert_eq!(canvas.pixel(8, 5), Rgb([0, 0, 0]));
        assert_eq!(canvas.pixel(5, 10), Rgb([0, 0, 0]));
    }
}
