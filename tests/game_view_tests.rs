//! Compositor tests: game state to framebuffer glyph positions.

use term_tetris::core::Game;
use term_tetris::term::{FrameBuffer, GameView};
use term_tetris::types::{PieceKind, FIELD_HEIGHT, FIELD_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH};

fn rendered(game: &Game) -> FrameBuffer {
    let view = GameView::new();
    let mut fb = FrameBuffer::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    view.render(game, &mut fb);
    fb
}

fn chars_at(fb: &FrameBuffer, x: u16, y: u16, len: u16) -> String {
    (x..x + len)
        .map(|cx| fb.get(cx, y).map(|g| g.ch).unwrap_or('?'))
        .collect()
}

#[test]
fn test_walls_render_as_hash_glyphs() {
    let fb = rendered(&Game::with_first_piece(1, PieceKind::T));

    // Field cell (x, y) lands at column (x + 2) * 2, row y + 2.
    // Left wall column of the top row:
    assert_eq!(chars_at(&fb, 4, 2, 2), " #");
    // Right wall column:
    let right = (FIELD_WIDTH as u16 - 1 + 2) * 2;
    assert_eq!(chars_at(&fb, right, 2, 2), " #");
    // Bottom wall row:
    let bottom = FIELD_HEIGHT as u16 - 1 + 2;
    assert_eq!(chars_at(&fb, 4 + 2, bottom, 2), " #");
}

#[test]
fn test_active_piece_renders_as_brackets() {
    // O at spawn (10, 0) occupies field cells (11..=12, 1..=2).
    let fb = rendered(&Game::with_first_piece(1, PieceKind::O));

    let col = (11 + 2) * 2;
    assert_eq!(chars_at(&fb, col, 3, 4), "[][]");
    assert_eq!(chars_at(&fb, col, 4, 4), "[][]");
    // The row above the block is empty interior.
    assert_eq!(chars_at(&fb, col, 2, 4), "    ");
}

#[test]
fn test_hud_text_blocks_at_fixed_offsets() {
    let fb = rendered(&Game::with_first_piece(1, PieceKind::T));
    let hud = (FIELD_WIDTH as u16) * 2 + 10;

    assert_eq!(chars_at(&fb, hud, 3, 8), "Score: 0");
    assert_eq!(chars_at(&fb, hud, 5, 8), "Lines: 0");
    assert_eq!(chars_at(&fb, hud, 7, 8), "Level: 1");
    assert_eq!(chars_at(&fb, hud, 10, 9), "Controls:");
    assert_eq!(chars_at(&fb, hud, 14, 10), "Z - Rotate");
}

#[test]
fn test_render_is_stateless_per_frame() {
    let game = Game::with_first_piece(1, PieceKind::O);
    let view = GameView::new();
    let mut fb = FrameBuffer::new(SCREEN_WIDTH, SCREEN_HEIGHT);

    view.render(&game, &mut fb);
    let first = fb.clone();

    // Dirty the buffer; a second render fully rebuilds it.
    for y in 0..SCREEN_HEIGHT {
        for x in 0..SCREEN_WIDTH {
            fb.put_char(x, y, '@', Default::default());
        }
    }
    view.render(&game, &mut fb);
    assert_eq!(fb, first);
}
