//! Terminal falling-block puzzle game.
//!
//! Module layout:
//! - [`core`]: pure simulation (field, shapes, collision, scoring, RNG)
//! - [`term`]: framebuffer compositor and crossterm-backed renderer
//! - [`input`]: non-blocking keyboard polling and key decoding
//! - [`types`]: shared constants and plain data types

pub mod core;
pub mod input;
pub mod term;
pub mod types;
