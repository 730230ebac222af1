//! Core types shared across the application.
//!
//! Pure data: constants, the piece/cell enums, and the per-tick key set.

use arrayvec::ArrayVec;

/// Field dimensions, including the permanent wall border
/// (columns 0 and `FIELD_WIDTH - 1`, row `FIELD_HEIGHT - 1`).
pub const FIELD_WIDTH: i8 = 20;
pub const FIELD_HEIGHT: i8 = 25;

/// Screen buffer dimensions in terminal cells.
pub const SCREEN_WIDTH: u16 = 80;
pub const SCREEN_HEIGHT: u16 = 30;

/// Fixed frame cadence (sleep-per-tick, in milliseconds).
pub const TICK_MS: u64 = 50;

/// Points awarded per cleared line, multiplied by the current level.
pub const LINE_SCORE: u32 = 100;
/// Points awarded for each accepted soft drop.
pub const SOFT_DROP_SCORE: u32 = 1;
/// Lines needed per level-up.
pub const LINES_PER_LEVEL: u32 = 10;
/// Level at the start of a game.
pub const START_LEVEL: u32 = 1;

/// Tetromino piece kinds, in shape-table order (indices 0..6).
///
/// The ordering is load-bearing: `O` sits at index 3 and locked cells
/// carry the kind, so the index doubles as the piece identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    S,
    Z,
    O,
    T,
    J,
    L,
}

impl PieceKind {
    /// All kinds in shape-table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::O,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Index into the shape table.
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::S => 1,
            PieceKind::Z => 2,
            PieceKind::O => 3,
            PieceKind::T => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }
}

/// One cell of the playing field.
///
/// Walls are set once at construction and never cleared; interior cells are
/// only written by piece locks and line-clear compaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Wall,
    Block(PieceKind),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Player actions the simulation understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
}

/// Edge-triggered set of keys pressed within one tick.
///
/// Rebuilt from scratch on every poll; holding a key down does not keep the
/// flag set across ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeySet {
    left: bool,
    right: bool,
    soft_drop: bool,
    rotate: bool,
}

impl KeySet {
    pub fn insert(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => self.left = true,
            GameAction::MoveRight => self.right = true,
            GameAction::SoftDrop => self.soft_drop = true,
            GameAction::Rotate => self.rotate = true,
        }
    }

    pub fn contains(&self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.left,
            GameAction::MoveRight => self.right,
            GameAction::SoftDrop => self.soft_drop,
            GameAction::Rotate => self.rotate,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.left || self.right || self.soft_drop || self.rotate)
    }

    /// Actions in the fixed application order: left, right, soft drop, rotate.
    pub fn actions(&self) -> ArrayVec<GameAction, 4> {
        let mut out = ArrayVec::new();
        if self.left {
            out.push(GameAction::MoveLeft);
        }
        if self.right {
            out.push(GameAction::MoveRight);
        }
        if self.soft_drop {
            out.push(GameAction::SoftDrop);
        }
        if self.rotate {
            out.push(GameAction::Rotate);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_set_starts_empty() {
        let keys = KeySet::default();
        assert!(keys.is_empty());
        assert!(keys.actions().is_empty());
    }

    #[test]
    fn test_key_set_preserves_application_order() {
        let mut keys = KeySet::default();
        keys.insert(GameAction::Rotate);
        keys.insert(GameAction::MoveLeft);
        keys.insert(GameAction::SoftDrop);

        // Order is fixed regardless of insertion order.
        assert_eq!(
            keys.actions().as_slice(),
            &[
                GameAction::MoveLeft,
                GameAction::SoftDrop,
                GameAction::Rotate
            ]
        );
    }

    #[test]
    fn test_key_set_insert_is_idempotent() {
        let mut keys = KeySet::default();
        keys.insert(GameAction::MoveRight);
        keys.insert(GameAction::MoveRight);
        assert_eq!(keys.actions().as_slice(), &[GameAction::MoveRight]);
    }

    #[test]
    fn test_piece_kind_indices_match_table_order() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
        // The 2x2 block sits at index 3.
        assert_eq!(PieceKind::O.index(), 3);
    }
}
