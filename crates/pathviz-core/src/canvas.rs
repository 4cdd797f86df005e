//! The [`Canvas`] screen buffer and the [`Frame`] diff handed to drivers.

use crate::geom::Point;
use crate::style::Glyph;

/// An owned 2D buffer of [`Glyph`]s in screen coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    glyphs: Vec<Glyph>,
    width: i32,
    height: i32,
}

impl Canvas {
    /// Create a canvas of the given size filled with blank glyphs.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            glyphs: vec![Glyph::default(); w as usize * h as usize],
            width: w,
            height: h,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height {
            Some(p.y as usize * self.width as usize + p.x as usize)
        } else {
            None
        }
    }

    /// Read the glyph at `p`. Returns a blank glyph outside the canvas.
    pub fn at(&self, p: Point) -> Glyph {
        self.index(p).map(|i| self.glyphs[i]).unwrap_or_default()
    }

    /// Set the glyph at `p`. No-op outside the canvas.
    pub fn set(&mut self, p: Point, glyph: Glyph) {
        if let Some(i) = self.index(p) {
            self.glyphs[i] = glyph;
        }
    }

    /// Fill the whole canvas with `glyph`.
    pub fn fill(&mut self, glyph: Glyph) {
        self.glyphs.fill(glyph);
    }

    /// Write `text` starting at `p` using `style` for every character.
    /// Characters past the right edge are dropped. Returns the number of
    /// columns written.
    pub fn text(&mut self, p: Point, text: &str, style: Glyph) -> i32 {
        let mut x = p.x;
        for ch in text.chars() {
            if x >= self.width {
                break;
            }
            self.set(Point::new(x, p.y), style.with_char(ch));
            x += 1;
        }
        x - p.x
    }
}

// ---------------------------------------------------------------------------
// Frame / FrameCell / compute_frame
// ---------------------------------------------------------------------------

/// A single glyph that changed between frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameCell {
    pub glyph: Glyph,
    pub pos: Point,
}

/// A set of glyph changes (a diff frame).
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub cells: Vec<FrameCell>,
    pub width: i32,
    pub height: i32,
}

/// Compute the difference between two canvases.
///
/// Returns a [`Frame`] with every glyph of `curr` that differs from `prev`.
/// If the sizes differ, every glyph of `curr` is included.
pub fn compute_frame(prev: &Canvas, curr: &Canvas) -> Frame {
    let resized = prev.width != curr.width || prev.height != curr.height;
    let mut cells = Vec::new();
    for y in 0..curr.height {
        for x in 0..curr.width {
            let p = Point::new(x, y);
            let cc = curr.at(p);
            if resized || prev.at(p) != cc {
                cells.push(FrameCell { glyph: cc, pos: p });
            }
        }
    }
    Frame {
        cells,
        width: curr.width,
        height: curr.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn set_and_at() {
        let mut c = Canvas::new(4, 3);
        let g = Glyph::default().with_char('X');
        c.set(Point::new(2, 1), g);
        assert_eq!(c.at(Point::new(2, 1)).ch, 'X');
        // out of bounds returns default
        c.set(Point::new(10, 10), g);
        assert_eq!(c.at(Point::new(10, 10)), Glyph::default());
    }

    #[test]
    fn text_clips_at_edge() {
        let mut c = Canvas::new(5, 1);
        let n = c.text(Point::new(2, 0), "hello", Glyph::default());
        assert_eq!(n, 3);
        assert_eq!(c.at(Point::new(4, 0)).ch, 'l');
    }

    #[test]
    fn compute_frame_diff() {
        let a = Canvas::new(3, 2);
        let mut b = Canvas::new(3, 2);
        b.set(Point::new(1, 0), Glyph::default().with_bg(Color::WHITE));
        let frame = compute_frame(&a, &b);
        assert_eq!(frame.cells.len(), 1);
        assert_eq!(frame.cells[0].pos, Point::new(1, 0));
        assert_eq!(frame.cells[0].glyph.bg, Color::WHITE);
    }

    #[test]
    fn compute_frame_resized_is_full() {
        let a = Canvas::new(2, 2);
        let b = Canvas::new(3, 2);
        assert_eq!(compute_frame(&a, &b).cells.len(), 6);
    }

    #[test]
    fn wide_and_degenerate_sizes() {
        let mut c = Canvas::new(70_000, 2);
        let p = Point::new(69_999, 1);
        c.set(p, Glyph::default().with_char('x'));
        assert_eq!(c.at(p).ch, 'x');
        assert_eq!(c.at(Point::new(69_999, 0)).ch, ' ');
        let empty = Canvas::new(-3, 5);
        assert_eq!(empty.width(), 0);
        assert_eq!(empty.at(Point::new(0, 0)), Glyph::default());
    }
}
