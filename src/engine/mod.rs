//! Endless-runner engine.
//!
//! A real-time simulation of a dino running over procedurally generated
//! terrain: the host calls [`Game::update`] then [`Game::draw`] once per
//! frame with the elapsed time and whether the jump key is held.

pub mod entities;
pub mod game;
pub mod sprite;
pub mod surface;
pub mod terrain;
pub mod types;
pub mod world;

pub use entities::{drift_distance, Coin, Dino, Obstacle, ObstacleBehavior, Platform};
pub use game::Game;
pub use sprite::Sprite;
pub use surface::{Bitmap, Rgb, Surface};
pub use terrain::{pick_weighted, TerrainEvent, TerrainGenerator};
pub use types::{GameStatus, GameTextures, Position, TerrainColors, TerrainType, Transition};
pub use world::World;
