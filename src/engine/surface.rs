//! Drawing surface contract and the bitmap/colour types drawn onto it.
//!
//! All coordinates handed to a [`Surface`] are in surface pixels with the
//! origin at the top-left corner, the way a 2D canvas addresses them.

use crate::error::AssetError;
use std::str::FromStr;

/// An opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
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

impl FromStr for Rgb {
    type Err = AssetError;

    /// Parse `#rrggbb` (the leading `#` is optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(AssetError::InvalidColor(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| AssetError::InvalidColor(s.to_string()))
        };
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }
}

/// An RGBA image, row-major, one `[r, g, b, a]` entry per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl Bitmap {
    /// Build a bitmap from raw RGBA bytes. Returns `None` if the buffer
    /// length does not match the dimensions or either dimension is zero.
    pub fn from_rgba(width: u32, height: u32, raw: &[u8]) -> Option<Self> {
        if width == 0 || height == 0 || raw.len() != width as usize * height as usize * 4 {
            return None;
        }
        let pixels = raw
            .chunks_exact(4)
            .map(|p| [p[0], p[1], p[2], p[3]])
            .collect();
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a white-on-transparent bitmap from rows of text where any
    /// character other than `.` or a space is an opaque pixel.
    pub fn from_mask(rows: &[&str]) -> Option<Self> {
        let height = rows.len() as u32;
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as u32;
        if width == 0 || height == 0 {
            return None;
        }
        let mut pixels = vec![[0, 0, 0, 0]; (width * height) as usize];
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch != '.' && ch != ' ' {
                    pixels[y * width as usize + x] = [255, 255, 255, 255];
                }
            }
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at `(x, y)`, or `None` outside the bitmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }

    /// A same-size copy where every pixel with nonzero alpha takes `color`.
    /// Alpha is preserved; fully transparent pixels are left untouched.
    pub fn recolored(&self, color: Rgb) -> Self {
        let pixels = self
            .pixels
            .iter()
            .map(|&[r, g, b, a]| {
                if a > 0 {
                    [color.r, color.g, color.b, a]
                } else {
                    [r, g, b, a]
                }
            })
            .collect();
        Self {
            width: self.width,
            height: self.height,
            pixels,
        }
    }
}

/// A 2D drawing target supplied by the host each frame.
pub trait Surface {
    /// Width in pixels.
    fn width(&self) -> f64;
    /// Height in pixels.
    fn height(&self) -> f64;
    fn clear(&mut self);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb);
    /// Blit `bitmap` stretched to the `w`x`h` rectangle at `(x, y)`.
    fn draw_bitmap(&mut self, bitmap: &Bitmap, x: f64, y: f64, w: f64, h: f64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        let c: Rgb = "#fef08a".parse().unwrap();
        assert_eq!(c, Rgb::new(0xfe, 0xf0, 0x8a));

        let c: Rgb = "a5f3fc".parse().unwrap();
        assert_eq!(c, Rgb::new(0xa5, 0xf3, 0xfc));
    }

    #[test]
    fn test_parse_hex_color_rejects_garbage() {
        assert!("#fff".parse::<Rgb>().is_err());
        assert!("#gg0000".parse::<Rgb>().is_err());
        assert!("".parse::<Rgb>().is_err());
        assert!("#ff00ff00".parse::<Rgb>().is_err());
        assert!("#+1+2+3".parse::<Rgb>().is_err());
        assert!("# 1 2 3".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_from_rgba_checks_length() {
        assert!(Bitmap::from_rgba(2, 2, &[0; 16]).is_some());
        assert!(Bitmap::from_rgba(2, 2, &[0; 15]).is_none());
        assert!(Bitmap::from_rgba(0, 2, &[]).is_none());
    }

    #[test]
    fn test_from_mask() {
        let bmp = Bitmap::from_mask(&["#.", ".#", "##"]).unwrap();
        assert_eq!(bmp.width(), 2);
        assert_eq!(bmp.height(), 3);
        assert_eq!(bmp.pixel(0, 0).unwrap()[3], 255);
        assert_eq!(bmp.pixel(1, 0).unwrap()[3], 0);
        assert_eq!(bmp.pixel(1, 2).unwrap()[3], 255);
        assert!(bmp.pixel(2, 0).is_none());
    }

    #[test]
    fn test_recolor_preserves_alpha_and_transparency() {
        let raw = [
            10, 20, 30, 0, // transparent
            10, 20, 30, 128, // half alpha
            255, 255, 255, 255, // opaque
            1, 2, 3, 1, // barely visible
        ];
        let bmp = Bitmap::from_rgba(2, 2, &raw).unwrap();
        let out = bmp.recolored(Rgb::new(9, 8, 7));

        assert_eq!(out.width(), 2);
        assert_eq!(out.height(), 2);
        assert_eq!(out.pixel(0, 0), Some([10, 20, 30, 0]));
        assert_eq!(out.pixel(1, 0), Some([9, 8, 7, 128]));
        assert_eq!(out.pixel(0, 1), Some([9, 8, 7, 255]));
        assert_eq!(out.pixel(1, 1), Some([9, 8, 7, 1]));
    }
}
