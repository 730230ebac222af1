//! Game state machine: ties field, shapes, collision, RNG and progress
//! together and advances them one tick at a time.
//!
//! All rejected moves are silent no-ops that preserve the previous valid
//! state. Game over is the only terminal condition; once set, `tick` stops
//! mutating anything.

use crate::core::collision::fits;
use crate::core::field::Field;
use crate::core::progress::Progress;
use crate::core::rng::PieceRng;
use crate::core::shapes;
use crate::types::{Cell, GameAction, KeySet, PieceKind, FIELD_WIDTH};

/// The currently falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Rotation state; only its value mod 4 matters and it grows without
    /// bound as the player rotates.
    pub rotation: u32,
    /// Bounding-box origin.
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// A piece at the spawn position.
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            x: FIELD_WIDTH / 2,
            y: 0,
        }
    }
}

/// Complete game state.
#[derive(Debug, Clone)]
pub struct Game {
    field: Field,
    active: ActivePiece,
    progress: Progress,
    gravity_counter: u32,
    game_over: bool,
    rng: PieceRng,
}

impl Game {
    /// Create a game; the first piece is drawn from the seeded RNG.
    pub fn new(seed: u32) -> Self {
        let mut rng = PieceRng::new(seed);
        let active = ActivePiece::spawn(rng.draw());
        Self {
            field: Field::new(),
            active,
            progress: Progress::new(),
            gravity_counter: 0,
            game_over: false,
            rng,
        }
    }

    /// Create a game with a chosen first piece (deterministic starts;
    /// later pieces still come from the seeded RNG).
    pub fn with_first_piece(seed: u32, kind: PieceKind) -> Self {
        let mut game = Self::new(seed);
        game.active = ActivePiece::spawn(kind);
        game
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn active(&self) -> ActivePiece {
        self.active
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Advance one frame: apply input, then gravity. A no-op after game over.
    pub fn tick(&mut self, keys: KeySet) {
        if self.game_over {
            return;
        }
        self.apply_input(keys);
        self.step_gravity();
    }

    /// Apply the tick's keys in fixed order: left, right, soft drop, rotate.
    /// Each move is gated independently against the candidate position.
    fn apply_input(&mut self, keys: KeySet) {
        for action in keys.actions() {
            match action {
                GameAction::MoveLeft => {
                    self.try_shift(-1);
                }
                GameAction::MoveRight => {
                    self.try_shift(1);
                }
                GameAction::SoftDrop => {
                    if self.try_descend() {
                        self.progress.credit_soft_drop();
                    }
                }
                GameAction::Rotate => {
                    self.try_rotate();
                }
            }
        }
    }

    fn try_shift(&mut self, dx: i8) -> bool {
        let p = self.active;
        if fits(p.kind, p.rotation, p.x + dx, p.y, &self.field) {
            self.active.x += dx;
            return true;
        }
        false
    }

    fn try_descend(&mut self) -> bool {
        let p = self.active;
        if fits(p.kind, p.rotation, p.x, p.y + 1, &self.field) {
            self.active.y += 1;
            return true;
        }
        false
    }

    /// Rotate by one state if the next state fits in place. No wall kicks;
    /// a blocked rotation is dropped.
    fn try_rotate(&mut self) -> bool {
        let p = self.active;
        if fits(p.kind, p.rotation + 1, p.x, p.y, &self.field) {
            self.active.rotation += 1;
            return true;
        }
        false
    }

    /// Count a gravity tick; at the speed threshold, descend or lock.
    fn step_gravity(&mut self) {
        self.gravity_counter += 1;
        if self.gravity_counter < self.progress.speed() {
            return;
        }
        self.gravity_counter = 0;

        if !self.try_descend() {
            self.lock_active();
        }
    }

    /// Write the active piece into the field, clear lines, and spawn the
    /// next piece. Sets game over when the fresh piece does not fit.
    fn lock_active(&mut self) {
        let p = self.active;
        let shape = shapes::shape_of(p.kind);
        for py in 0..4 {
            for px in 0..4 {
                if shape.cell(px, py, p.rotation) {
                    self.field.set(p.x + px, p.y + py, Cell::Block(p.kind));
                }
            }
        }

        let cleared = self.field.clear_lines();
        self.progress.credit_lines(cleared);

        self.active = ActivePiece::spawn(self.rng.draw());
        if !fits(
            self.active.kind,
            self.active.rotation,
            self.active.x,
            self.active.y,
            &self.field,
        ) {
            self.game_over = true;
        }
    }
}
