//! Terminal rendering module.
//!
//! A small game-oriented pipeline: [`GameView`] composes the game state into
//! a [`FrameBuffer`] of styled character cells, and [`TerminalRenderer`]
//! flushes that buffer to the terminal through crossterm. The compositor is
//! pure; all I/O lives in the renderer.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
pub use game_view::GameView;
pub use renderer::TerminalRenderer;
