//! Canyon terrain: a long raised floor over a bed of cacti, broken by gaps.
//!
//! The trailing platform acts as the floor. Once its leading edge reaches
//! the left boundary it is frozen there and resized to span the visible
//! width, so the floor never scrolls away entirely. Gap events release it
//! and start a fresh floor a few units further right.

use super::{pick_weighted, tick_event_timer};
use crate::constants::{
    CANYON_FLOOR_WIDTH, CANYON_MIN_SEGMENT, EVENT_TIMER_INITIAL, PLATFORM_HEIGHT,
};
use crate::engine::world::World;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanyonEvent {
    FloatingCoin,
    PlatformGap,
    Pterodactyl,
}

pub const CANYON_EVENTS: [(CanyonEvent, f64); 3] = [
    (CanyonEvent::FloatingCoin, 2.0),
    (CanyonEvent::PlatformGap, 3.0),
    (CanyonEvent::Pterodactyl, 2.0),
];

/// Distance from the right edge the newest obstacle must clear before
/// another floor cactus is spawned.
const CACTUS_SPACING: f64 = 4.0;

/// Horizontal gap opened in front of a new floor segment.
const GAP_WIDTH: f64 = 7.0;

#[derive(Debug, Clone)]
pub struct CanyonTerrain {
    event_timer: f64,
    started: bool,
}

impl Default for CanyonTerrain {
    fn default() -> Self {
        Self::new()
    }
}

impl CanyonTerrain {
    pub fn new() -> Self {
        Self {
            event_timer: EVENT_TIMER_INITIAL,
            started: false,
        }
    }

    pub fn event_timer(&self) -> f64 {
        self.event_timer
    }

    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        dt: f64,
        world: &mut World,
        rng: &mut R,
    ) -> Option<CanyonEvent> {
        let fire = tick_event_timer(&mut self.event_timer, dt, rng);

        if !self.started {
            world.spawn_platform(CANYON_FLOOR_WIDTH, 0.0, PLATFORM_HEIGHT);
            self.started = true;
        }

        let visible = world.visible_width();
        if let Some(floor) = world.platforms.last_mut() {
            if floor.position.x < 0.0 {
                floor.freeze();
                floor.position.x = 0.0;
                floor.width = visible;
            }
        }

        let needs_cactus = world
            .obstacles
            .last()
            .map_or(true, |o| o.position().x < visible - CACTUS_SPACING);
        if needs_cactus {
            let x_offset = rng.gen::<f64>() * 3.0;
            let scale = 1.5 + rng.gen::<f64>() * 0.5;
            world.spawn_cactus(x_offset, 0.0, scale);
        }

        if !fire {
            return None;
        }
        let event = pick_weighted(&CANYON_EVENTS, rng)?;
        apply(event, world);
        Some(event)
    }
}

/// Spawn the entities for `event`. A gap is skipped when the floor segment
/// left behind would be narrower than `CANYON_MIN_SEGMENT`.
pub fn apply(event: CanyonEvent, world: &mut World) {
    match event {
        CanyonEvent::FloatingCoin => world.spawn_coin(0.0, 7.0),
        CanyonEvent::PlatformGap => {
            let visible = world.visible_width();
            let Some(floor) = world.platforms.last_mut() else {
                return;
            };
            let segment = visible - floor.position.x;
            if segment < CANYON_MIN_SEGMENT {
                return;
            }
            floor.width = segment;
            floor.unfreeze();
            world.spawn_platform(CANYON_FLOOR_WIDTH, GAP_WIDTH, PLATFORM_HEIGHT);
        }
        CanyonEvent::Pterodactyl => world.spawn_pterodactyl(0.0, 4.5, 2.0),
    }
}
