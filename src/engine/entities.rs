//! Entity variants: the player, obstacles, platforms and coins.

use super::sprite::Sprite;
use super::surface::{Bitmap, Rgb, Surface};
use super::types::Position;
use crate::constants::*;
use std::sync::Arc;

/// Horizontal distance a drifting entity covers in `dt` seconds once the
/// session has run for `elapsed_time` seconds.
pub fn drift_distance(dt: f64, elapsed_time: f64) -> f64 {
    DRIFT_SPEED * dt * (1.0 + elapsed_time / RAMP_SECONDS)
}

/// The player.
#[derive(Debug, Clone)]
pub struct Dino {
    pub sprite: Sprite,
    pub ground_y: f64,
    /// Vertical velocity in units/second (positive = upward).
    pub vy: f64,
}

impl Dino {
    pub fn new(bitmap: Arc<Bitmap>, ground_y: f64) -> Self {
        Self {
            sprite: Sprite::new(bitmap, Position::new(DINO_START_X, ground_y), DINO_SCALE),
            ground_y,
            vy: 0.0,
        }
    }

    pub fn position(&self) -> Position {
        self.sprite.position
    }

    /// Standing on the ground or on the given platform height.
    pub fn is_grounded(&self, platform_y: Option<f64>) -> bool {
        let y = self.sprite.position.y;
        y == self.ground_y || platform_y == Some(y)
    }

    /// Advance one tick: impulse, gravity, integrate, then resolve landing.
    /// A supplied platform height takes precedence over the ground.
    pub fn update(&mut self, dt: f64, jump_held: bool, platform_y: Option<f64>) {
        if jump_held && self.is_grounded(platform_y) {
            self.vy = JUMP_IMPULSE;
        }

        // Holding jump falls slower, giving variable jump height.
        let gravity = if jump_held {
            GRAVITY_HELD
        } else {
            GRAVITY_RELEASED
        };
        self.vy -= gravity * dt;

        let previous_y = self.sprite.position.y;
        self.sprite.position.y += self.vy * dt;

        let y = self.sprite.position.y;
        match platform_y {
            Some(top) if previous_y >= top && y < top => {
                self.sprite.position.y = top;
                self.vy = 0.0;
            }
            _ if y < self.ground_y => {
                self.sprite.position.y = self.ground_y;
                self.vy = 0.0;
            }
            _ => {}
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.sprite.draw(surface);
    }
}

/// How an obstacle moves besides drifting left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleBehavior {
    Static,
    /// Bobs vertically as a function of its x position.
    Wiggle,
}

/// A cactus or pterodactyl. Touching one ends the game.
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub sprite: Sprite,
    pub behavior: ObstacleBehavior,
}

impl Obstacle {
    pub fn new(
        bitmap: Arc<Bitmap>,
        position: Position,
        scale: f64,
        behavior: ObstacleBehavior,
    ) -> Self {
        Self {
            sprite: Sprite::new(bitmap, position, scale),
            behavior,
        }
    }

    pub fn position(&self) -> Position {
        self.sprite.position
    }

    pub fn update(&mut self, dt: f64, elapsed_time: f64) {
        let pos = &mut self.sprite.position;
        pos.x -= drift_distance(dt, elapsed_time);
        if self.behavior == ObstacleBehavior::Wiggle {
            pos.y += (pos.x * WIGGLE_FREQUENCY).sin() * WIGGLE_AMPLITUDE;
        }
    }

    pub fn is_out(&self) -> bool {
        self.sprite.is_off_left()
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.sprite.draw(surface);
    }
}

/// A collectible worth bonus score.
#[derive(Debug, Clone)]
pub struct Coin {
    pub sprite: Sprite,
}

impl Coin {
    pub fn new(bitmap: Arc<Bitmap>, position: Position) -> Self {
        Self {
            sprite: Sprite::new(bitmap, position, 1.0),
        }
    }

    pub fn position(&self) -> Position {
        self.sprite.position
    }

    pub fn update(&mut self, dt: f64, elapsed_time: f64) {
        self.sprite.position.x -= drift_distance(dt, elapsed_time);
    }

    pub fn is_out(&self) -> bool {
        self.sprite.is_off_left()
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.sprite.draw(surface);
    }
}

/// A flat ledge the player can land on. Has no bitmap; drawn as a thin bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    pub position: Position,
    /// Width in game units.
    pub width: f64,
    pub color: Rgb,
    pub frozen: bool,
}

impl Platform {
    pub fn new(position: Position, width: f64, color: Rgb) -> Self {
        Self {
            position,
            width,
            color,
            frozen: false,
        }
    }

    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn unfreeze(&mut self) {
        self.frozen = false;
    }

    /// x coordinate of the right edge.
    pub fn right(&self) -> f64 {
        self.position.x + self.width
    }

    pub fn update(&mut self, dt: f64, elapsed_time: f64) {
        if self.frozen {
            return;
        }
        self.position.x -= drift_distance(dt, elapsed_time);
    }

    pub fn is_out(&self) -> bool {
        self.right() < 0.0
    }

    /// Horizontal overlap with the player's hitbox, ignoring height.
    pub fn is_collidable(&self, dino: &Dino) -> bool {
        let dx = dino.sprite.position.x;
        self.position.x < dx + dino.sprite.hitbox().x && self.right() > dx
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let (cx, cy) = self.position.to_canvas(surface.height());
        surface.fill_rect(
            cx,
            cy,
            self.width * PIXELS_PER_UNIT,
            PLATFORM_THICKNESS_PX,
            self.color,
        );
    }
}
