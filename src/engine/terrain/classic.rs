//! Classic terrain: cacti on open ground, coins and short platforms.

use super::{pick_weighted, tick_event_timer};
use crate::constants::{EVENT_TIMER_INITIAL, PLATFORM_HEIGHT};
use crate::engine::world::World;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassicEvent {
    Cactus,
    CactusPair,
    CactusWithCoin,
    FloorCoinBunch,
    FloatingCoin,
    PlatformOverCacti,
}

pub const CLASSIC_EVENTS: [(ClassicEvent, f64); 6] = [
    (ClassicEvent::Cactus, 5.0),
    (ClassicEvent::CactusPair, 3.0),
    (ClassicEvent::CactusWithCoin, 2.0),
    (ClassicEvent::FloorCoinBunch, 1.0),
    (ClassicEvent::FloatingCoin, 2.0),
    (ClassicEvent::PlatformOverCacti, 2.0),
];

#[derive(Debug, Clone)]
pub struct ClassicTerrain {
    event_timer: f64,
}

impl Default for ClassicTerrain {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassicTerrain {
    pub fn new() -> Self {
        Self {
            event_timer: EVENT_TIMER_INITIAL,
        }
    }

    /// Seconds until the next event.
    pub fn event_timer(&self) -> f64 {
        self.event_timer
    }

    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        dt: f64,
        world: &mut World,
        rng: &mut R,
    ) -> Option<ClassicEvent> {
        if !tick_event_timer(&mut self.event_timer, dt, rng) {
            return None;
        }
        let event = pick_weighted(&CLASSIC_EVENTS, rng)?;
        apply(event, world, rng);
        Some(event)
    }
}

/// Spawn the entities for `event`.
pub fn apply<R: Rng + ?Sized>(event: ClassicEvent, world: &mut World, rng: &mut R) {
    match event {
        ClassicEvent::Cactus => {
            world.spawn_cactus(0.0, 0.0, 1.5 + rng.gen::<f64>() * 0.5);
        }
        ClassicEvent::CactusPair => {
            if rng.gen::<f64>() < 0.5 {
                world.spawn_cactus(0.0, 0.0, 2.0);
                world.spawn_cactus(2.0, 0.0, 1.5);
            } else {
                world.spawn_cactus(0.0, 0.0, 1.5);
                world.spawn_cactus(1.5, 0.0, 2.0);
            }
        }
        ClassicEvent::CactusWithCoin => {
            world.spawn_cactus(0.0, 0.0, 2.0);
            world.spawn_coin(0.5, 5.0);
        }
        ClassicEvent::FloorCoinBunch => {
            for x in [0.0, 2.0, 4.0] {
                world.spawn_coin(x, 0.5);
            }
        }
        ClassicEvent::FloatingCoin => {
            world.spawn_coin(0.0, 5.0);
        }
        ClassicEvent::PlatformOverCacti => {
            let width = 5.0 + rng.gen::<f64>() * 5.0;
            world.spawn_platform(width, 0.0, PLATFORM_HEIGHT);
            let mut i = 0.0;
            while i < width - 1.0 {
                if rng.gen::<f64>() < 0.5 {
                    world.spawn_cactus(i, 0.0, 1.5 + rng.gen::<f64>() * 0.5);
                }
                i += 2.0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::world::test_support::world;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_no_event_before_timer_lapses() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut w = world();
        let mut t = ClassicTerrain::new();
        for _ in 0..19 {
            assert_eq!(t.generate(0.1, &mut w, &mut rng), None);
        }
        assert!(w.obstacles.is_empty() && w.coins.is_empty() && w.platforms.is_empty());
        assert!(t.generate(0.2, &mut w, &mut rng).is_some());
        assert!((0.5..2.5).contains(&t.event_timer()));
    }

    #[test]
    fn test_classic_never_keeps_a_floor_platform() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut w = world();
        let mut t = ClassicTerrain::new();
        for _ in 0..2000 {
            t.generate(0.1, &mut w, &mut rng);
        }
        // Only platform-over-cacti events create platforms, all narrow
        assert!(w.platforms.iter().all(|p| p.width >= 5.0 && p.width < 10.0));
    }

    #[test]
    fn test_cactus_scale_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut w = world();
        for _ in 0..200 {
            apply(ClassicEvent::Cactus, &mut w, &mut rng);
        }
        assert_eq!(w.obstacles.len(), 200);
        for o in &w.obstacles {
            let s = o.sprite.scale();
            assert!((1.5..2.0).contains(&s), "scale {s}");
            assert!((o.position().y - w.ground_y).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_cactus_pair_spawns_two() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut w = world();
        apply(ClassicEvent::CactusPair, &mut w, &mut rng);
        assert_eq!(w.obstacles.len(), 2);
        let gap = w.obstacles[1].position().x - w.obstacles[0].position().x;
        assert!((gap - 2.0).abs() < 1e-9 || (gap - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_cactus_with_coin_places_coin_above() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut w = world();
        apply(ClassicEvent::CactusWithCoin, &mut w, &mut rng);
        assert_eq!(w.obstacles.len(), 1);
        assert_eq!(w.coins.len(), 1);
        assert!((w.coins[0].position().y - (w.ground_y + 5.0)).abs() < 1e-9);
    }

    #[test]
    fn test_floor_coin_bunch() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let mut w = world();
        apply(ClassicEvent::FloorCoinBunch, &mut w, &mut rng);
        let xs: Vec<f64> = w.coins.iter().map(|c| c.position().x).collect();
        assert_eq!(xs, vec![40.0, 42.0, 44.0]);
        assert!(w.coins.iter().all(|c| (c.position().y - 1.5).abs() < 1e-9));
    }

    #[test]
    fn test_platform_over_cacti_stays_under_platform() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let mut w = world();
            apply(ClassicEvent::PlatformOverCacti, &mut w, &mut rng);
            assert_eq!(w.platforms.len(), 1);
            let p = &w.platforms[0];
            assert!((p.position.y - (w.ground_y + PLATFORM_HEIGHT)).abs() < 1e-9);
            assert!(w.obstacles.len() <= 5);
            for o in &w.obstacles {
                assert!(o.position().x >= p.position.x);
                assert!(o.position().x < p.right() - 1.0);
            }
        }
    }
}
