//! A [`Surface`] backed by terminal cells.
//!
//! Each cell is treated as 8x16 canvas pixels and split into two square
//! dots rendered with the upper half block `▀`: the foreground colour is
//! the top dot, the background colour the bottom one.

use crate::engine::{Bitmap, Rgb, Surface};
use ratatui::style::Color;

/// Canvas pixels per terminal column.
pub const CELL_WIDTH_PX: f64 = 8.0;
/// Canvas pixels per terminal row.
pub const CELL_HEIGHT_PX: f64 = 16.0;
/// Canvas pixels per dot edge (two dots per row).
const DOT_PX: f64 = 8.0;

const UPPER_HALF: char = '\u{2580}';
const LOWER_HALF: char = '\u{2584}';

/// Cell in the render buffer with foreground and background colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TerminalSurface {
    cols: u16,
    rows: u16,
    /// Row-major, `cols` wide and `rows * 2` tall.
    dots: Vec<Option<Rgb>>,
}

impl TerminalSurface {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            dots: vec![None; cols as usize * rows as usize * 2],
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Resize to a new cell grid, clearing it if the size changed.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        if cols != self.cols || rows != self.rows {
            *self = Self::new(cols, rows);
        }
    }

    fn dot_rows(&self) -> usize {
        self.rows as usize * 2
    }

    /// Colour of the dot at `(x, y)` in dot coordinates.
    pub fn dot(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.cols as usize || y >= self.dot_rows() {
            return None;
        }
        self.dots[y * self.cols as usize + x]
    }

    fn set_dot(&mut self, x: usize, y: usize, color: Rgb) {
        let idx = y * self.cols as usize + x;
        self.dots[idx] = Some(color);
    }

    /// Dot index range covering the pixel span `[start, end)`, clipped to
    /// `[0, limit)`.
    fn span(start: f64, end: f64, limit: usize) -> std::ops::Range<usize> {
        let lo = (start / DOT_PX).floor().max(0.0);
        let hi = (end / DOT_PX).ceil().max(0.0);
        let lo = (lo as usize).min(limit);
        let hi = (hi as usize).min(limit);
        lo..hi
    }

    /// One row of cells per terminal row.
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        (0..self.rows as usize)
            .map(|row| {
                (0..self.cols as usize)
                    .map(|col| {
                        let top = self.dot(col, row * 2);
                        let bottom = self.dot(col, row * 2 + 1);
                        match (top, bottom) {
                            (None, None) => Cell::default(),
                            (Some(t), None) => Cell {
                                ch: UPPER_HALF,
                                fg: to_color(t),
                                bg: Color::Reset,
                            },
                            (None, Some(b)) => Cell {
                                ch: LOWER_HALF,
                                fg: to_color(b),
                                bg: Color::Reset,
                            },
                            (Some(t), Some(b)) => Cell {
                                ch: UPPER_HALF,
                                fg: to_color(t),
                                bg: to_color(b),
                            },
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

pub fn to_color(c: Rgb) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

impl Surface for TerminalSurface {
    fn width(&self) -> f64 {
        self.cols as f64 * CELL_WIDTH_PX
    }

    fn height(&self) -> f64 {
        self.rows as f64 * CELL_HEIGHT_PX
    }

    fn clear(&mut self) {
        self.dots.fill(None);
    }

    /// Fills every dot the rectangle overlaps.
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let xs = Self::span(x, x + w, self.cols as usize);
        let ys = Self::span(y, y + h, self.dot_rows());
        for dy in ys {
            for dx in xs.clone() {
                self.set_dot(dx, dy, color);
            }
        }
    }

    /// Samples the bitmap at each dot centre inside the destination
    /// rectangle. Pixels below half alpha are skipped.
    fn draw_bitmap(&mut self, bitmap: &Bitmap, x: f64, y: f64, w: f64, h: f64) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let xs = Self::span(x, x + w, self.cols as usize);
        let ys = Self::span(y, y + h, self.dot_rows());
        for dy in ys {
            let cy = (dy as f64 + 0.5) * DOT_PX;
            let v = (cy - y) / h;
            if !(0.0..1.0).contains(&v) {
                continue;
            }
            let py = (v * bitmap.height() as f64) as u32;
            for dx in xs.clone() {
                let cx = (dx as f64 + 0.5) * DOT_PX;
                let u = (cx - x) / w;
                if !(0.0..1.0).contains(&u) {
                    continue;
                }
                let px = (u * bitmap.width() as f64) as u32;
                if let Some([r, g, b, a]) = bitmap.pixel(px, py) {
                    if a >= 128 {
                        self.set_dot(dx, dy, Rgb::new(r, g, b));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    #[test]
    fn test_dimensions_in_pixels() {
        let s = TerminalSurface::new(80, 20);
        assert!((s.width() - 640.0).abs() < f64::EPSILON);
        assert!((s.height() - 320.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fill_rect_covers_overlapped_dots() {
        let mut s = TerminalSurface::new(4, 2);
        // 5px tall strip starting mid-dot touches one dot row
        s.fill_rect(0.0, 17.0, 16.0, 5.0, RED);
        assert_eq!(s.dot(0, 2), Some(RED));
        assert_eq!(s.dot(1, 2), Some(RED));
        assert_eq!(s.dot(2, 2), None);
        assert_eq!(s.dot(0, 1), None);
        assert_eq!(s.dot(0, 3), None);
    }

    #[test]
    fn test_fill_rect_clips_offscreen() {
        let mut s = TerminalSurface::new(2, 1);
        s.fill_rect(-100.0, -100.0, 1000.0, 1000.0, RED);
        assert!((0..2).all(|x| (0..2).all(|y| s.dot(x, y) == Some(RED))));
        s.clear();
        s.fill_rect(500.0, 0.0, 10.0, 10.0, RED);
        assert!((0..2).all(|x| (0..2).all(|y| s.dot(x, y).is_none())));
    }

    #[test]
    fn test_draw_bitmap_samples_alpha() {
        let mut s = TerminalSurface::new(2, 1);
        // Left half opaque blue, right half transparent
        let raw = [0, 0, 255, 255, 0, 0, 0, 0];
        let bitmap = Bitmap::from_rgba(2, 1, &raw).unwrap();
        s.draw_bitmap(&bitmap, 0.0, 0.0, 16.0, 16.0);
        assert_eq!(s.dot(0, 0), Some(BLUE));
        assert_eq!(s.dot(0, 1), Some(BLUE));
        assert_eq!(s.dot(1, 0), None);
    }

    #[test]
    fn test_cells_use_half_blocks() {
        let mut s = TerminalSurface::new(3, 1);
        s.fill_rect(0.0, 0.0, 8.0, 8.0, RED);
        s.fill_rect(8.0, 8.0, 8.0, 8.0, BLUE);
        s.fill_rect(16.0, 0.0, 8.0, 16.0, RED);
        s.fill_rect(16.0, 8.0, 8.0, 8.0, BLUE);

        let cells = s.to_cells();
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0][0], Cell { ch: UPPER_HALF, fg: to_color(RED), bg: Color::Reset });
        assert_eq!(cells[0][1], Cell { ch: LOWER_HALF, fg: to_color(BLUE), bg: Color::Reset });
        assert_eq!(cells[0][2], Cell { ch: UPPER_HALF, fg: to_color(RED), bg: to_color(BLUE) });
    }

    #[test]
    fn test_resize_clears_only_on_change() {
        let mut s = TerminalSurface::new(2, 1);
        s.fill_rect(0.0, 0.0, 8.0, 8.0, RED);
        s.resize(2, 1);
        assert_eq!(s.dot(0, 0), Some(RED));
        s.resize(3, 2);
        assert_eq!((s.cols(), s.rows()), (3, 2));
        assert_eq!(s.dot(0, 0), None);
    }
}
