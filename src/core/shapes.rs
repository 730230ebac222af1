//! Shape table and the rotation index transform.
//!
//! Each piece is a single flattened 4x4 boolean grid. Rotation is not stored
//! as four separate grids; instead `rotated_index` remaps (px, py) into the
//! flat grid with one closed-form expression per rotation state. Each mapping
//! is a bijection on {0..15}, so the four read orders are 90-degree turns of
//! the same silhouette.

use crate::types::PieceKind;

/// A piece silhouette: 16 cells, row-major, fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    cells: [bool; 16],
}

impl Shape {
    const fn parse(rows: [&[u8; 4]; 4]) -> Self {
        let mut cells = [false; 16];
        let mut y = 0;
        while y < 4 {
            let mut x = 0;
            while x < 4 {
                cells[y * 4 + x] = rows[y][x] == b'X';
                x += 1;
            }
            y += 1;
        }
        Self { cells }
    }

    /// Whether local cell (px, py) is occupied in the given rotation state.
    pub fn cell(&self, px: i8, py: i8, rotation: u32) -> bool {
        self.cells[rotated_index(px, py, rotation)]
    }
}

/// The seven piece silhouettes, indexed by `PieceKind::index`.
pub const SHAPES: [Shape; 7] = [
    // I
    Shape::parse([b"..X.", b"..X.", b"..X.", b"..X."]),
    // S
    Shape::parse([b"..X.", b".XX.", b".X..", b"...."]),
    // Z
    Shape::parse([b".X..", b".XX.", b"..X.", b"...."]),
    // O
    Shape::parse([b"....", b".XX.", b".XX.", b"...."]),
    // T
    Shape::parse([b"..X.", b".XX.", b"..X.", b"...."]),
    // J
    Shape::parse([b"....", b".XX.", b"..X.", b"..X."]),
    // L
    Shape::parse([b"....", b".XX.", b".X..", b".X.."]),
];

/// Look up the shape for a piece kind.
pub fn shape_of(kind: PieceKind) -> &'static Shape {
    &SHAPES[kind.index()]
}

/// Map local cell (px, py) to a flat shape index for a rotation state.
///
/// `rotation` may be any value; the effective state is `rotation mod 4`
/// (0, 90, 180, 270 degrees). Total function: no failure mode for
/// px, py in [0, 4).
pub fn rotated_index(px: i8, py: i8, rotation: u32) -> usize {
    debug_assert!((0..4).contains(&px) && (0..4).contains(&py));
    let (px, py) = (px as usize, py as usize);
    match rotation % 4 {
        0 => py * 4 + px,
        1 => 12 + py - px * 4,
        2 => 15 - py * 4 - px,
        _ => 3 - py + px * 4,
    }
}
