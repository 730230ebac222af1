//! Core module: the pure game simulation.
//!
//! No UI or I/O dependencies; everything in here is deterministic under a
//! fixed seed and unit-testable.

pub mod collision;
pub mod field;
pub mod game;
pub mod progress;
pub mod rng;
pub mod shapes;

pub use collision::fits;
pub use field::Field;
pub use game::{ActivePiece, Game};
pub use progress::{gravity_ticks, Progress};
pub use rng::PieceRng;
pub use shapes::{rotated_index, shape_of, Shape};
