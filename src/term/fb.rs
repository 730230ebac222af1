//! Framebuffer and style types for terminal rendering.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Default for GlyphStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }
}

/// A single styled character cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: GlyphStyle,
}

impl Default for Glyph {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: GlyphStyle::default(),
        }
    }
}

/// 2D buffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            glyphs: vec![Glyph::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.idx(x, y).map(|i| self.glyphs[i])
    }

    /// One full row of glyphs.
    ///
    /// Panics if `y` is out of range; callers iterate `0..height()`.
    pub fn row(&self, y: u16) -> &[Glyph] {
        let start = (y as usize) * (self.width as usize);
        &self.glyphs[start..start + self.width as usize]
    }

    /// Reset every cell to a blank default glyph.
    pub fn clear(&mut self) {
        self.glyphs.fill(Glyph::default());
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: GlyphStyle) {
        if let Some(i) = self.idx(x, y) {
            self.glyphs[i] = Glyph { ch, style };
        }
    }

    /// Write a string left to right, clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: GlyphStyle) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_blank() {
        let fb = FrameBuffer::new(4, 3);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(fb.get(x, y), Some(Glyph::default()));
            }
        }
        assert_eq!(fb.get(4, 0), None);
        assert_eq!(fb.get(0, 3), None);
    }

    #[test]
    fn test_put_str_clips_at_right_edge() {
        let mut fb = FrameBuffer::new(5, 1);
        fb.put_str(3, 0, "abc", GlyphStyle::default());
        assert_eq!(fb.get(3, 0).map(|g| g.ch), Some('a'));
        assert_eq!(fb.get(4, 0).map(|g| g.ch), Some('b'));
        // 'c' fell off the edge; nothing panicked.
    }

    #[test]
    fn test_clear_resets_all_cells() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put_char(1, 1, '#', GlyphStyle::default());
        fb.clear();
        assert_eq!(fb.get(1, 1), Some(Glyph::default()));
    }

    #[test]
    fn test_row_matches_get() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put_char(2, 1, 'x', GlyphStyle::default());
        let row = fb.row(1);
        assert_eq!(row.len(), 3);
        assert_eq!(row[2].ch, 'x');
    }
}
