//! Shared entity base: a positioned, scaled bitmap with an axis-aligned hitbox.

use super::surface::{Bitmap, Surface};
use super::types::Position;
use crate::constants::PIXELS_PER_UNIT;
use std::sync::Arc;

/// Position, scale and bitmap shared by every drawn entity.
///
/// The hitbox is anchored at `position` and extends up and to the right,
/// matching the bottom-left anchoring used when drawing.
#[derive(Debug, Clone)]
pub struct Sprite {
    pub position: Position,
    scale: f64,
    bitmap: Arc<Bitmap>,
    /// Hitbox size in game units (`x` = width, `y` = height).
    hitbox: Position,
}

impl Sprite {
    pub fn new(bitmap: Arc<Bitmap>, position: Position, scale: f64) -> Self {
        let hitbox = Position::new(
            bitmap.width() as f64 * scale / PIXELS_PER_UNIT,
            bitmap.height() as f64 * scale / PIXELS_PER_UNIT,
        );
        Self {
            position,
            scale,
            bitmap,
            hitbox,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn hitbox(&self) -> Position {
        self.hitbox
    }

    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    /// Strict AABB overlap on both axes; touching edges do not collide.
    pub fn collides_with(&self, other: &Sprite) -> bool {
        let (x1, y1) = (self.position.x, self.position.y);
        let (x2, y2) = (other.position.x, other.position.y);
        let (w1, h1) = (self.hitbox.x, self.hitbox.y);
        let (w2, h2) = (other.hitbox.x, other.hitbox.y);
        x1 < x2 + w2 && x1 + w1 > x2 && y1 < y2 + h2 && y1 + h1 > y2
    }

    /// True once the sprite's right edge has drifted past the left edge.
    pub fn is_off_left(&self) -> bool {
        self.position.x < -self.hitbox.x
    }

    /// Blit anchored at the visual bottom-left corner.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let (cx, cy) = self.position.to_canvas(surface.height());
        let w = self.bitmap.width() as f64 * self.scale;
        let h = self.bitmap.height() as f64 * self.scale;
        surface.draw_bitmap(&self.bitmap, cx, cy - h, w, h);
    }
}
