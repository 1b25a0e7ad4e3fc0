//! The spawn-relevant slice of a game handed to terrain generators.

use super::entities::{Coin, Obstacle, ObstacleBehavior, Platform};
use super::types::{GameTextures, Position, TerrainColors};
use crate::constants::PIXELS_PER_UNIT;

/// Entity lists plus everything needed to place new entities.
///
/// Every spawn helper places the entity just past the right edge of the
/// visible area (`visible_width() + x_offset`) and `y_offset` units above
/// the ground.
#[derive(Debug, Clone)]
pub struct World {
    /// Width of the drawing surface in pixels, refreshed every tick.
    pub canvas_width: f64,
    pub ground_y: f64,
    pub textures: GameTextures,
    pub colors: TerrainColors,
    pub obstacles: Vec<Obstacle>,
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
}

impl World {
    pub fn new(textures: GameTextures, colors: TerrainColors, ground_y: f64) -> Self {
        Self {
            canvas_width: 0.0,
            ground_y,
            textures,
            colors,
            obstacles: Vec::new(),
            platforms: Vec::new(),
            coins: Vec::new(),
        }
    }

    /// Visible width in game units.
    pub fn visible_width(&self) -> f64 {
        self.canvas_width / PIXELS_PER_UNIT
    }

    fn spawn_point(&self, x_offset: f64, y_offset: f64) -> Position {
        Position::new(self.visible_width() + x_offset, self.ground_y + y_offset)
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
        self.platforms.clear();
        self.coins.clear();
    }

    pub fn spawn_cactus(&mut self, x_offset: f64, y_offset: f64, scale: f64) {
        let at = self.spawn_point(x_offset, y_offset);
        self.obstacles.push(Obstacle::new(
            self.textures.cactus.clone(),
            at,
            scale,
            ObstacleBehavior::Static,
        ));
    }

    pub fn spawn_pterodactyl(&mut self, x_offset: f64, y_offset: f64, scale: f64) {
        let at = self.spawn_point(x_offset, y_offset);
        self.obstacles.push(Obstacle::new(
            self.textures.pterodactyl.clone(),
            at,
            scale,
            ObstacleBehavior::Wiggle,
        ));
    }

    pub fn spawn_platform(&mut self, width: f64, x_offset: f64, y_offset: f64) {
        let at = self.spawn_point(x_offset, y_offset);
        self.platforms
            .push(Platform::new(at, width, self.colors.platform));
    }

    pub fn spawn_coin(&mut self, x_offset: f64, y_offset: f64) {
        let at = self.spawn_point(x_offset, y_offset);
        self.coins.push(Coin::new(self.textures.coin.clone(), at));
    }
}
