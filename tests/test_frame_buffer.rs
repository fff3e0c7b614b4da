use grid_shooter::entities::{Position, Sprite};
use grid_shooter::frame_buffer::FrameBuffer;

fn blank_row(width: usize) -> String {
    " ".repeat(width)
}

// ── clear / render ────────────────────────────────────────────────────────────

#[test]
fn new_buffer_renders_spaces() {
    let fb = FrameBuffer::new(3, 4);
    assert_eq!(fb.render(), "    \n    \n    \n");
}

#[test]
fn render_size_matches_dimensions() {
    let fb = FrameBuffer::new(40, 80);
    let text = fb.render();
    assert_eq!(text.lines().count(), 40);
    assert!(text.lines().all(|l| l.chars().count() == 80));
    assert!(text.ends_with('\n'));
}

#[test]
fn zero_width_still_renders_every_row() {
    assert_eq!(FrameBuffer::new(3, 0).render(), "\n\n\n");
    assert_eq!(FrameBuffer::new(0, 5).render(), "");
}

#[test]
fn clear_wipes_previous_sprites() {
    let mut fb = FrameBuffer::new(3, 5);
    fb.composite(Position::new(1, 1), &Sprite::from_lines(&["abc"]));
    fb.clear();
    assert_eq!(fb.row_text(1), blank_row(5));
}

// ── composite ─────────────────────────────────────────────────────────────────

#[test]
fn composite_places_sprite_at_offsets() {
    let mut fb = FrameBuffer::new(5, 8);
    fb.composite(Position::new(1, 2), &Sprite::from_lines(&["ab", "cd"]));

    assert_eq!(fb.get(1, 2), Some('a'));
    assert_eq!(fb.get(1, 3), Some('b'));
    assert_eq!(fb.get(2, 2), Some('c'));
    assert_eq!(fb.get(2, 3), Some('d'));
    assert_eq!(fb.row_text(0), blank_row(8));
    assert_eq!(fb.row_text(1), "  ab    ");
    assert_eq!(fb.row_text(3), blank_row(8));
}

#[test]
fn composite_clips_negative_origin() {
    let mut fb = FrameBuffer::new(3, 4);
    fb.composite(Position::new(-1, -1), &Sprite::from_lines(&["xyz", "123"]));

    // Only the bottom-right part of the sprite is inside.
    assert_eq!(fb.row_text(0), "23  ");
    assert_eq!(fb.row_text(1), blank_row(4));
}

#[test]
fn composite_clips_past_far_edges() {
    let mut fb = FrameBuffer::new(2, 4);
    fb.composite(Position::new(1, 2), &Sprite::from_lines(&["abcd", "efgh"]));

    assert_eq!(fb.row_text(0), blank_row(4));
    assert_eq!(fb.row_text(1), "  ab");
}

#[test]
fn composite_fully_outside_is_a_no_op() {
    let mut fb = FrameBuffer::new(2, 2);
    fb.composite(Position::new(10, 10), &Sprite::from_lines(&["#"]));
    fb.composite(Position::new(-5, 0), &Sprite::from_lines(&["#"]));
    assert_eq!(fb.render(), "  \n  \n");
}

#[test]
fn short_rows_leave_trailing_cells_untouched() {
    let mut fb = FrameBuffer::new(2, 4);
    fb.composite(Position::new(0, 0), &Sprite::from_lines(&["....", "...."]));
    fb.composite(Position::new(0, 0), &Sprite::from_lines(&["abc", "d"]));

    assert_eq!(fb.row_text(0), "abc.");
    assert_eq!(fb.row_text(1), "d...");
}

#[test]
fn later_composites_occlude_earlier_ones() {
    let mut fb = FrameBuffer::new(1, 3);
    fb.composite(Position::new(0, 0), &Sprite::from_lines(&["aaa"]));
    fb.composite(Position::new(0, 1), &Sprite::from_lines(&["b"]));
    assert_eq!(fb.row_text(0), "aba");
}

#[test]
fn get_outside_returns_none() {
    let fb = FrameBuffer::new(2, 2);
    assert_eq!(fb.get(-1, 0), None);
    assert_eq!(fb.get(0, 2), None);
    assert_eq!(fb.get(2, 0), None);
    assert_eq!(fb.get(1, 1), Some(' '));
}
