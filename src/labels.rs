//! Label layout: approximate text metrics, word stacking, and rigid block
//! rotation around the sector anchor.

use nalgebra::{Rotation2, Vector2};

use crate::compositor::DrawCommand;
use crate::grid::{sector_offset, SECTOR_COLUMNS, SECTOR_ROWS};
use crate::sector::SectorLabel;

/// Point size every label is set at.
pub const LABEL_POINT_SIZE: u32 = 20;
/// Approximate glyph width as a fraction of the point size. An empirical
/// stand-in for real text measurement; close enough to center map labels.
pub const GLYPH_WIDTH_FACTOR: f64 = 0.6;
/// Block rotation used on the tilted map.
pub const TILTED_LABEL_ROTATION: f64 = -45.0;

/// Approximate width of one line of text at the label point size.
pub fn approximate_text_width(text: &str) -> f64 {
    text.chars().count() as f64 * LABEL_POINT_SIZE as f64 * GLYPH_WIDTH_FACTOR
}

/// Distance between the anchor and the top of the word stack, by word count.
/// Tuned by eye per count; counts past four continue the same half-line
/// progression.
fn initial_stack_offset(word_count: usize) -> f64 {
    let line_height = LABEL_POINT_SIZE as f64;
    match word_count {
        0 | 1 => 0.5 * line_height,
        2 => 1.0 * line_height,
        3 => 1.5 * line_height,
        4 => 2.0 * line_height,
        n => n as f64 * 0.5 * line_height,
    }
}

/// Lay out every label as one draw command per word. Each word is centered on
/// its own approximate width and placed one line height below the previous,
/// starting `initial_stack_offset` above the anchor; the whole block is then
/// rotated rigidly around the anchor. The anchor sits half a sector in from
/// the sector's corner.
pub fn layout_labels(
    labels: &[SectorLabel],
    pixel_scale: u32,
    rotation_degrees: f64,
) -> Vec<DrawCommand> {
    let rotation = Rotation2::new(rotation_degrees.to_radians());
    let line_height = LABEL_POINT_SIZE as f64;

    let mut commands = Vec::new();
    for label in labels {
        let offset = sector_offset(label.grid_x, label.grid_y, pixel_scale);
        let anchor_x = (offset.x + (SECTOR_COLUMNS / 2 * pixel_scale) as i64) as f64;
        let anchor_y = (offset.y + (SECTOR_ROWS / 2 * pixel_scale) as i64) as f64;

        let words: Vec<&str> = label.text.split_whitespace().collect();
        let start = initial_stack_offset(words.len());
        for (line, word) in words.iter().enumerate() {
            let local = Vector2::new(
                -approximate_text_width(word) / 2.0,
                (line as f64 + 1.0) * line_height - start,
            );
            let rotated = rotation * local;
            commands.push(DrawCommand {
                text: (*word).to_string(),
                x: anchor_x + rotated.x,
                y: anchor_y + rotated.y,
                rotation: rotation_degrees,
            });
        }
    }
    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(text: &str) -> SectorLabel {
        SectorLabel {
            grid_x: -20,
            grid_y: -5,
            text: text.to_string(),
        }
    }

    // Sector (-20,-5) at scale 4: offset (768, 640), anchor (832, 720).

    #[test]
    fn initial_offset_grows_with_word_count() {
        assert_eq!(initial_stack_offset(1), 10.0);
        assert_eq!(initial_stack_offset(2), 20.0);
        assert_eq!(initial_stack_offset(3), 30.0);
        assert_eq!(initial_stack_offset(4), 40.0);
        assert!(initial_stack_offset(4) > initial_stack_offset(1));
        assert!(initial_stack_offset(6) > initial_stack_offset(4));
    }

    #[test]
    fn single_word_centers_on_the_anchor() {
        let commands = layout_labels(&[label("SPIN")], 4, 0.0);
        assert_eq!(commands.len(), 1);
        // 4 chars * 20pt * 0.6 = 48 wide, centered; baseline half a line
        // below the anchor.
        assert_eq!(commands[0].x, 832.0 - 24.0);
        assert_eq!(commands[0].y, 720.0 + 10.0);
        assert_eq!(commands[0].rotation, 0.0);
    }

    #[test]
    fn words_stack_one_line_apart_and_center_independently() {
        let commands = layout_labels(&[label("Far Reaches")], 4, 0.0);
        assert_eq!(commands.len(), 2);

        // "Far": 3 chars -> 36 wide; "Reaches": 7 chars -> 84 wide.
        assert_eq!(commands[0].text, "Far");
        assert_eq!(commands[0].x, 832.0 - 18.0);
        assert_eq!(commands[1].text, "Reaches");
        assert_eq!(commands[1].x, 832.0 - 42.0);

        assert_eq!(commands[1].y - commands[0].y, 20.0);
        // A two-word stack puts the first baseline on the anchor itself.
        assert_eq!(commands[0].y, 720.0);
    }

    #[test]
    fn four_word_stack_starts_higher_than_one_word() {
        let tall = layout_labels(&[label("a b c d")], 4, 0.0);
        let short = layout_labels(&[label("a")], 4, 0.0);
        assert!(tall[0].y < short[0].y);
    }

    #[test]
    fn rotation_spins_offsets_around_the_anchor() {
        let flat = layout_labels(&[label("SPIN")], 4, 0.0);
        let tilted = layout_labels(&[label("SPIN")], 4, TILTED_LABEL_ROTATION);

        let (ox, oy) = (flat[0].x - 832.0, flat[0].y - 720.0);
        let rad = TILTED_LABEL_ROTATION.to_radians();
        let expected_x = 832.0 + ox * rad.cos() - oy * rad.sin();
        let expected_y = 720.0 + ox * rad.sin() + oy * rad.cos();

        assert!((tilted[0].x - expected_x).abs() < 1e-9);
        assert!((tilted[0].y - expected_y).abs() < 1e-9);
        assert_eq!(tilted[0].rotation, TILTED_LABEL_ROTATION);
    }

    #[test]
    fn blank_labels_produce_no_commands() {
        assert!(layout_labels(&[label("   ")], 4, 0.0).is_empty());
    }
}
