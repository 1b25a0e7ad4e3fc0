//! The game controller: state machine, per-tick orchestration and drawing.

use super::entities::Dino;
use super::surface::Surface;
use super::terrain::TerrainGenerator;
use super::types::{GameStatus, GameTextures, TerrainColors, TerrainType, Transition};
use super::world::World;
use crate::constants::*;
use crate::error::GameError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

/// Aggregate root owning every entity of one session.
#[derive(Debug, Clone)]
pub struct Game<R: Rng = StdRng> {
    status: GameStatus,
    elapsed_time: f64,
    collected_coins: u64,
    /// Seconds until the terrain strategy turns over.
    terrain_timer: f64,
    terrain_type: TerrainType,
    terrain: Option<TerrainGenerator>,
    dino: Dino,
    world: World,
    rng: R,
}

impl Game<StdRng> {
    /// A game seeded from system entropy.
    pub fn new(textures: GameTextures, colors: TerrainColors) -> Self {
        Self::with_rng(textures, colors, StdRng::from_entropy())
    }

    pub fn with_seed(textures: GameTextures, colors: TerrainColors, seed: u64) -> Self {
        Self::with_rng(textures, colors, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(textures: GameTextures, colors: TerrainColors, rng: R) -> Self {
        let dino = Dino::new(textures.dino.clone(), GROUND_Y);
        Self {
            status: GameStatus::Title,
            elapsed_time: 0.0,
            collected_coins: 0,
            terrain_timer: 0.0,
            terrain_type: TerrainType::Classic,
            terrain: None,
            dino,
            world: World::new(textures, colors, GROUND_Y),
            rng,
        }
    }

    // ── Accessors ──

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    pub fn collected_coins(&self) -> u64 {
        self.collected_coins
    }

    /// `floor(elapsed * 10) + coins * 50`.
    pub fn score(&self) -> u64 {
        (self.elapsed_time * SCORE_PER_SECOND).floor() as u64
            + self.collected_coins * SCORE_PER_COIN
    }

    pub fn terrain_type(&self) -> TerrainType {
        self.terrain_type
    }

    /// The active terrain generator, `None` until the first running tick.
    pub fn terrain(&self) -> Option<&TerrainGenerator> {
        self.terrain.as_ref()
    }

    pub fn terrain_timer(&self) -> f64 {
        self.terrain_timer
    }

    /// Current drift-speed multiplier `1 + elapsed/60`.
    pub fn ramp_factor(&self) -> f64 {
        1.0 + self.elapsed_time / RAMP_SECONDS
    }

    pub fn dino(&self) -> &Dino {
        &self.dino
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access to the entity lists, for hosts and tests that seed a
    /// scenario.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    // ── State machine ──

    fn transition(&mut self, transition: Transition) -> Result<(), GameError> {
        let next = self
            .status
            .after(transition)
            .ok_or(GameError::InvalidTransition {
                transition,
                status: self.status,
            })?;
        info!(from = %self.status, to = %next, %transition, "game state changed");
        self.status = next;
        Ok(())
    }

    /// `title | over -> running`.
    pub fn start(&mut self) -> Result<(), GameError> {
        self.transition(Transition::Start)
    }

    /// `running -> paused`.
    pub fn pause(&mut self) -> Result<(), GameError> {
        self.transition(Transition::Pause)
    }

    /// `paused -> running`.
    pub fn resume(&mut self) -> Result<(), GameError> {
        self.transition(Transition::Resume)
    }

    /// `running -> over`. Called internally on a fatal collision.
    pub fn stop(&mut self) -> Result<(), GameError> {
        self.transition(Transition::Stop)
    }

    /// `over -> running`, resetting the session first.
    pub fn restart(&mut self) -> Result<(), GameError> {
        if self.status.after(Transition::Restart).is_none() {
            return Err(GameError::InvalidTransition {
                transition: Transition::Restart,
                status: self.status,
            });
        }
        self.reset();
        self.transition(Transition::Restart)
    }

    /// Drop every entity and zero timers, score and elapsed time. The status
    /// is left untouched.
    pub fn reset(&mut self) {
        self.terrain_timer = 0.0;
        self.terrain = None;
        self.elapsed_time = 0.0;
        self.collected_coins = 0;
        self.world.clear();
        self.dino = Dino::new(self.world.textures.dino.clone(), self.world.ground_y);
    }

    // ── Simulation ──

    /// Advance the simulation by `dt` seconds. Does nothing unless running.
    ///
    /// Negative or non-finite `dt` is ignored; large values are applied
    /// as-is, so hosts should clamp after long stalls.
    pub fn update<S: Surface + ?Sized>(&mut self, dt: f64, jump_held: bool, surface: &S) {
        if self.status != GameStatus::Running {
            return;
        }
        if !dt.is_finite() || dt < 0.0 {
            warn!(dt, "ignoring tick with invalid dt");
            return;
        }

        self.elapsed_time += dt;
        self.terrain_timer -= dt;
        self.world.canvas_width = surface.width();

        if self.terrain.is_none() || self.terrain_timer <= 0.0 {
            self.switch_terrain();
        }

        if let Some(terrain) = self.terrain.as_mut() {
            if let Some(event) = terrain.generate(dt, &mut self.world, &mut self.rng) {
                debug!(?event, "terrain event");
            }
        }

        let elapsed = self.elapsed_time;
        let world = &mut self.world;

        world.obstacles.iter_mut().for_each(|o| o.update(dt, elapsed));
        world.obstacles.retain(|o| !o.is_out());

        world.platforms.iter_mut().for_each(|p| p.update(dt, elapsed));
        world.platforms.retain(|p| !p.is_out());

        world.coins.iter_mut().for_each(|c| c.update(dt, elapsed));
        world.coins.retain(|c| !c.is_out());

        // Only the oldest platform can carry the player.
        let platform_y = world
            .platforms
            .first()
            .filter(|p| p.is_collidable(&self.dino))
            .map(|p| p.position.y);
        self.dino.update(dt, jump_held, platform_y);

        let hit = world
            .obstacles
            .iter()
            .any(|o| self.dino.sprite.collides_with(&o.sprite));
        if hit && self.stop().is_ok() {
            info!(score = self.score(), "dino hit an obstacle");
        }

        let before = self.world.coins.len();
        let dino = &self.dino;
        self.world
            .coins
            .retain(|c| !dino.sprite.collides_with(&c.sprite));
        self.collected_coins += (before - self.world.coins.len()) as u64;
    }

    /// Pick the next terrain strategy and smooth over the handover: every
    /// platform is released and resized to end at the right edge.
    fn switch_terrain(&mut self) {
        self.terrain_timer = TERRAIN_SWITCH_MIN + self.rng.gen::<f64>() * TERRAIN_SWITCH_SPREAD;

        // Everything ends at the right edge; a long floor that has not
        // scrolled into view yet is dropped.
        let visible = self.world.visible_width();
        self.world.platforms.retain_mut(|platform| {
            platform.unfreeze();
            if platform.position.x < visible {
                platform.width = visible - platform.position.x;
                true
            } else {
                platform.width < visible
            }
        });

        let next = match self.terrain {
            None => TerrainType::Classic,
            Some(_) => self.terrain_type.other(),
        };
        debug!(terrain = next.name(), next_switch = self.terrain_timer, "terrain switch");
        self.terrain_type = next;
        self.terrain = Some(TerrainGenerator::new(next));
    }

    /// Render back to front: ground, platforms, coins, player, obstacles.
    /// Never mutates game state.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear();

        let band = self.world.ground_y * PIXELS_PER_UNIT;
        let (width, height) = (surface.width(), surface.height());
        surface.fill_rect(0.0, height - band, width, band, self.world.colors.ground);

        for platform in &self.world.platforms {
            platform.draw(surface);
        }
        for coin in &self.world.coins {
            coin.draw(surface);
        }
        self.dino.draw(surface);
        for obstacle in &self.world.obstacles {
            obstacle.draw(surface);
        }
    }
}
