//! GameView: composes `core::Game` into a framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested. The buffer is fully cleared and
//! redrawn every call in a fixed order: field, active piece, score block,
//! controls legend. Later writes simply overwrite earlier ones.

use crate::core::{shape_of, Game};
use crate::term::fb::{FrameBuffer, GlyphStyle, Rgb};
use crate::types::{Cell, PieceKind, FIELD_HEIGHT, FIELD_WIDTH};

/// Terminal columns per field cell (compensates glyph aspect ratio).
const CELL_W: u16 = 2;
/// Field offset inside the screen buffer, in field cells.
const FIELD_LEFT: u16 = 2;
const FIELD_TOP: u16 = 2;
/// Gap between the field's right edge and the HUD column.
const HUD_GAP: u16 = 10;

const SCORE_ROW: u16 = 3;
const LINES_ROW: u16 = 5;
const LEVEL_ROW: u16 = 7;
const CONTROLS_ROW: u16 = 10;

const CONTROLS: [&str; 5] = [
    "Controls:",
    "Left Arrow - Move Left",
    "Right Arrow - Move Right",
    "Down Arrow - Move Down",
    "Z - Rotate",
];

/// The frame compositor.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// HUD column, derived from the field width so resizing the field
    /// constants moves the HUD along with it.
    fn hud_x(&self) -> u16 {
        (FIELD_WIDTH as u16) * CELL_W + HUD_GAP
    }

    /// Screen position of the left column of a field cell.
    fn cell_pos(&self, x: i8, y: i8) -> (u16, u16) {
        (
            (FIELD_LEFT + x as u16) * CELL_W,
            FIELD_TOP + y as u16,
        )
    }

    /// Render the full frame into `fb`.
    pub fn render(&self, game: &Game, fb: &mut FrameBuffer) {
        fb.clear();
        self.draw_field(game, fb);
        self.draw_active_piece(game, fb);
        self.draw_score(game, fb);
        self.draw_controls(fb);
    }

    fn draw_field(&self, game: &Game, fb: &mut FrameBuffer) {
        for y in 0..FIELD_HEIGHT {
            for x in 0..FIELD_WIDTH {
                let cell = game.field().get(x, y).unwrap_or(Cell::Empty);
                let (gx, gy) = self.cell_pos(x, y);
                match cell {
                    Cell::Empty => fb.put_str(gx, gy, "  ", GlyphStyle::default()),
                    Cell::Wall => fb.put_str(gx, gy, " #", wall_style()),
                    Cell::Block(kind) => fb.put_str(gx, gy, "[]", piece_style(kind)),
                }
            }
        }
    }

    fn draw_active_piece(&self, game: &Game, fb: &mut FrameBuffer) {
        let p = game.active();
        let shape = shape_of(p.kind);
        let style = piece_style(p.kind);
        for py in 0..4 {
            for px in 0..4 {
                if !shape.cell(px, py, p.rotation) {
                    continue;
                }
                // Cells overhanging the field top would land above the
                // buffer origin; skip them.
                if p.y + py < 0 || p.x + px < 0 {
                    continue;
                }
                let (gx, gy) = self.cell_pos(p.x + px, p.y + py);
                fb.put_str(gx, gy, "[]", style);
            }
        }
    }

    fn draw_score(&self, game: &Game, fb: &mut FrameBuffer) {
        let x = self.hud_x();
        let progress = game.progress();
        let style = GlyphStyle {
            bold: true,
            ..GlyphStyle::default()
        };
        fb.put_str(x, SCORE_ROW, &format!("Score: {}", progress.score()), style);
        fb.put_str(x, LINES_ROW, &format!("Lines: {}", progress.lines()), style);
        fb.put_str(x, LEVEL_ROW, &format!("Level: {}", progress.level()), style);
    }

    fn draw_controls(&self, fb: &mut FrameBuffer) {
        let x = self.hud_x();
        let style = GlyphStyle {
            dim: true,
            ..GlyphStyle::default()
        };
        for (i, line) in CONTROLS.iter().enumerate() {
            fb.put_str(x, CONTROLS_ROW + i as u16, line, style);
        }
    }
}

fn wall_style() -> GlyphStyle {
    GlyphStyle {
        fg: Rgb::new(140, 140, 150),
        dim: true,
        ..GlyphStyle::default()
    }
}

fn piece_style(kind: PieceKind) -> GlyphStyle {
    let fg = match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    };
    GlyphStyle {
        fg,
        ..GlyphStyle::default()
    }
}
