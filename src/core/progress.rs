//! Score, line and level accounting.
//!
//! Everything here is monotone: score and lines only grow, level only rises,
//! and gravity speed (ticks per one-row drop) only shrinks.

use crate::types::{LINES_PER_LEVEL, LINE_SCORE, SOFT_DROP_SCORE, START_LEVEL};

/// Gravity speed for a level: ticks between automatic drops, floored at 1.
pub fn gravity_ticks(level: u32) -> u32 {
    20u32.saturating_sub(level).max(1)
}

/// Accumulated game progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    score: u32,
    lines: u32,
    level: u32,
    speed: u32,
}

impl Progress {
    pub fn new() -> Self {
        Self {
            score: 0,
            lines: 0,
            level: START_LEVEL,
            speed: gravity_ticks(START_LEVEL),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Gravity speed in ticks per one-row drop.
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Credit one pass worth of cleared lines, one line at a time.
    ///
    /// Each line scores `100 x level` at the level current when that line is
    /// credited, and every 10th cumulative line raises the level and rederives
    /// the speed. A pass that crosses a level boundary therefore scores its
    /// later lines at the higher level.
    pub fn credit_lines(&mut self, cleared: u32) {
        for _ in 0..cleared {
            self.score += LINE_SCORE * self.level;
            self.lines += 1;
            if self.lines % LINES_PER_LEVEL == 0 {
                self.level += 1;
                self.speed = gravity_ticks(self.level);
            }
        }
    }

    /// Credit one accepted soft drop.
    pub fn credit_soft_drop(&mut self) {
        self.score += SOFT_DROP_SCORE;
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}
