//! Non-blocking keyboard polling.
//!
//! Each poll drains every pending terminal event and folds the recognized
//! keys into an edge-triggered [`KeySet`] for the current tick. A tick with
//! no input returns immediately; unrecognized or partial events are silently
//! discarded.

pub mod map;

pub use map::{decode_key, is_quit};

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::types::KeySet;

/// Result of draining one tick's worth of input.
#[derive(Debug, Clone, Copy, Default)]
pub struct Polled {
    pub keys: KeySet,
    pub quit: bool,
}

/// Drain all pending key events without blocking.
pub fn poll_keys() -> Result<Polled> {
    let mut polled = Polled::default();
    while event::poll(Duration::ZERO)? {
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if map::is_quit(key) {
                    polled.quit = true;
                }
                if let Some(action) = map::decode_key(key.code) {
                    polled.keys.insert(action);
                }
            }
            _ => {}
        }
    }
    Ok(polled)
}
