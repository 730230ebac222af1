//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The compositor redraws its buffer from scratch every frame; this layer
//! keeps the previous frame and only repaints rows that changed, which keeps
//! the per-tick write volume small on a mostly static screen.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::term::fb::{FrameBuffer, GlyphStyle, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    /// Enter raw mode on the alternate screen with the cursor hidden.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Restore the terminal. Safe to call even if `enter` failed midway.
    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next present to repaint everything.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Write a frame to the terminal, cursor-homed, repainting only rows that
    /// differ from the previously presented frame.
    pub fn present(&mut self, frame: &FrameBuffer) -> Result<()> {
        let prev = self.last.take();
        let can_diff = prev
            .as_ref()
            .map_or(false, |p| p.width() == frame.width() && p.height() == frame.height());

        if !can_diff {
            self.stdout.queue(terminal::Clear(terminal::ClearType::All))?;
        }
        self.stdout.queue(cursor::MoveTo(0, 0))?;

        let mut current_style: Option<GlyphStyle> = None;
        for y in 0..frame.height() {
            if can_diff {
                // prev is Some here by construction.
                if let Some(p) = &prev {
                    if p.row(y) == frame.row(y) {
                        continue;
                    }
                }
            }
            self.stdout.queue(cursor::MoveTo(0, y))?;
            for glyph in frame.row(y) {
                if current_style != Some(glyph.style) {
                    self.apply_style(glyph.style)?;
                    current_style = Some(glyph.style);
                }
                self.stdout.queue(Print(glyph.ch))?;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;

        // Keep the frame for next time, reusing the old allocation.
        let mut kept = prev.unwrap_or_else(|| FrameBuffer::new(frame.width(), frame.height()));
        kept.clone_from(frame);
        self.last = Some(kept);
        Ok(())
    }

    fn apply_style(&mut self, style: GlyphStyle) -> Result<()> {
        self.stdout.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        self.stdout.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        if style.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            self.stdout.queue(SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
