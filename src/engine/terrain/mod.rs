//! Procedural terrain: two interchangeable strategies that spawn entities
//! into the [`World`] on a randomised event clock.

pub mod canyon;
pub mod classic;

pub use canyon::{CanyonEvent, CanyonTerrain, CANYON_EVENTS};
pub use classic::{ClassicEvent, ClassicTerrain, CLASSIC_EVENTS};

use super::types::TerrainType;
use super::world::World;
use crate::constants::{EVENT_TIMER_MIN, EVENT_TIMER_SPREAD};
use rand::Rng;

/// The active terrain strategy.
#[derive(Debug, Clone)]
pub enum TerrainGenerator {
    Classic(ClassicTerrain),
    Canyon(CanyonTerrain),
}

/// An event fired by a generator during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerrainEvent {
    Classic(ClassicEvent),
    Canyon(CanyonEvent),
}

impl TerrainGenerator {
    pub fn new(kind: TerrainType) -> Self {
        match kind {
            TerrainType::Classic => Self::Classic(ClassicTerrain::new()),
            TerrainType::Canyon => Self::Canyon(CanyonTerrain::new()),
        }
    }

    pub fn kind(&self) -> TerrainType {
        match self {
            Self::Classic(_) => TerrainType::Classic,
            Self::Canyon(_) => TerrainType::Canyon,
        }
    }

    /// Advance the generator by `dt` seconds, spawning into `world`.
    /// Returns the weighted event fired this tick, if any.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        dt: f64,
        world: &mut World,
        rng: &mut R,
    ) -> Option<TerrainEvent> {
        match self {
            Self::Classic(t) => t.generate(dt, world, rng).map(TerrainEvent::Classic),
            Self::Canyon(t) => t.generate(dt, world, rng).map(TerrainEvent::Canyon),
        }
    }
}

/// Pick an entry from a weighted table with a single uniform draw over the
/// total weight. Entries are scanned in order and the first one that brings
/// the remaining draw to zero or below wins. Returns `None` for an empty
/// table.
pub fn pick_weighted<E: Copy, R: Rng + ?Sized>(table: &[(E, f64)], rng: &mut R) -> Option<E> {
    let total: f64 = table.iter().map(|&(_, w)| w).sum();
    let mut draw = rng.gen::<f64>() * total;
    for &(entry, weight) in table {
        draw -= weight;
        if draw <= 0.0 {
            return Some(entry);
        }
    }
    // Rounding can leave a sliver above zero after the last entry.
    table.last().map(|&(entry, _)| entry)
}

/// Count down an event timer. When it lapses, redraw it into
/// `[EVENT_TIMER_MIN, EVENT_TIMER_MIN + EVENT_TIMER_SPREAD)` and return true.
pub(crate) fn tick_event_timer<R: Rng + ?Sized>(timer: &mut f64, dt: f64, rng: &mut R) -> bool {
    *timer -= dt;
    if *timer > 0.0 {
        return false;
    }
    *timer = EVENT_TIMER_MIN + rng.gen::<f64>() * EVENT_TIMER_SPREAD;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::world::test_support::world;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_pick_weighted_empty_table() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let table: [(u8, f64); 0] = [];
        assert_eq!(pick_weighted(&table, &mut rng), None);
    }

    #[test]
    fn test_pick_weighted_single_entry() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(pick_weighted(&[('a', 3.0)], &mut rng), Some('a'));
        }
    }

    #[test]
    fn test_pick_weighted_skips_zero_weight() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let table = [('a', 1.0), ('b', 0.0), ('c', 1.0)];
        for _ in 0..1000 {
            assert_ne!(pick_weighted(&table, &mut rng), Some('b'));
        }
    }

    #[test]
    fn test_pick_weighted_deterministic_for_seed() {
        let draw = || {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            (0..50)
                .map(|_| pick_weighted(&CLASSIC_EVENTS, &mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(draw(), draw());
    }

    #[test]
    fn test_pick_weighted_converges_to_weights() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let n = 60_000;
        let mut counts = [0usize; 6];
        for _ in 0..n {
            let event = pick_weighted(&CLASSIC_EVENTS, &mut rng).unwrap();
            let idx = CLASSIC_EVENTS.iter().position(|&(e, _)| e == event).unwrap();
            counts[idx] += 1;
        }
        let total: f64 = CLASSIC_EVENTS.iter().map(|&(_, w)| w).sum();
        for (i, &(event, weight)) in CLASSIC_EVENTS.iter().enumerate() {
            let expected = weight / total;
            let observed = counts[i] as f64 / n as f64;
            assert!(
                (observed - expected).abs() < 0.01,
                "{event:?}: observed {observed:.4}, expected {expected:.4}"
            );
        }
    }

    #[test]
    fn test_event_timer_redraw_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..500 {
            let mut timer = 0.05;
            assert!(tick_event_timer(&mut timer, 0.1, &mut rng));
            assert!((0.5..2.5).contains(&timer));
        }
        let mut timer = 1.0;
        assert!(!tick_event_timer(&mut timer, 0.1, &mut rng));
        assert!((timer - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_generator_kind_matches_variant() {
        assert_eq!(
            TerrainGenerator::new(TerrainType::Classic).kind(),
            TerrainType::Classic
        );
        assert_eq!(
            TerrainGenerator::new(TerrainType::Canyon).kind(),
            TerrainType::Canyon
        );
    }

    #[test]
    fn test_generator_dispatch_tags_events() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut w = world();
        let mut gen = TerrainGenerator::new(TerrainType::Canyon);
        let mut fired = Vec::new();
        for _ in 0..100 {
            if let Some(e) = gen.generate(0.1, &mut w, &mut rng) {
                fired.push(e);
            }
        }
        assert!(!fired.is_empty());
        assert!(fired.iter().all(|e| matches!(e, TerrainEvent::Canyon(_))));
    }
}
