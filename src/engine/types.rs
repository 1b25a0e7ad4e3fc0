//! Dino runner data structures shared across the engine.

use super::surface::{Bitmap, Rgb};
use crate::constants::PIXELS_PER_UNIT;
use std::fmt;
use std::sync::Arc;

/// A point in game units. 1 unit = 16 surface pixels, y grows upward from
/// the bottom of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert to surface pixels for a surface `surface_height` pixels tall.
    pub fn to_canvas(self, surface_height: f64) -> (f64, f64) {
        (
            self.x * PIXELS_PER_UNIT,
            surface_height - self.y * PIXELS_PER_UNIT,
        )
    }
}

/// Lifecycle state of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Title,
    Running,
    Paused,
    Over,
}

impl GameStatus {
    pub const ALL: [GameStatus; 4] = [
        GameStatus::Title,
        GameStatus::Running,
        GameStatus::Paused,
        GameStatus::Over,
    ];

    /// The state reached by applying `transition`, or `None` if the
    /// transition is not allowed from this state.
    pub fn after(self, transition: Transition) -> Option<GameStatus> {
        match (self, transition) {
            (Self::Title | Self::Over, Transition::Start) => Some(Self::Running),
            (Self::Running, Transition::Pause) => Some(Self::Paused),
            (Self::Paused, Transition::Resume) => Some(Self::Running),
            (Self::Running, Transition::Stop) => Some(Self::Over),
            (Self::Over, Transition::Restart) => Some(Self::Running),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Over => "over",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// State machine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    Start,
    Pause,
    Resume,
    Stop,
    Restart,
}

impl Transition {
    pub const ALL: [Transition; 5] = [
        Transition::Start,
        Transition::Pause,
        Transition::Resume,
        Transition::Stop,
        Transition::Restart,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::Stop => "stop",
            Self::Restart => "restart",
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which terrain strategy is generating the course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerrainType {
    Classic,
    Canyon,
}

impl TerrainType {
    /// The strategy that follows this one when the terrain timer lapses.
    pub fn other(self) -> Self {
        match self {
            Self::Classic => Self::Canyon,
            Self::Canyon => Self::Classic,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Canyon => "Canyon",
        }
    }
}

/// Fill colours for the ground band and platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerrainColors {
    pub ground: Rgb,
    pub platform: Rgb,
}

/// The four recoloured bitmaps a game draws with. Entities hold clones of
/// these handles; the pixels themselves are never copied.
#[derive(Debug, Clone)]
pub struct GameTextures {
    pub dino: Arc<Bitmap>,
    pub cactus: Arc<Bitmap>,
    pub pterodactyl: Arc<Bitmap>,
    pub coin: Arc<Bitmap>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_canvas_flips_y() {
        let p = Position::new(2.0, 1.0);
        let (cx, cy) = p.to_canvas(160.0);
        assert!((cx - 32.0).abs() < f64::EPSILON);
        assert!((cy - 144.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_to_canvas_negative_sentinel() {
        let (cx, cy) = Position::new(-1.5, 0.0).to_canvas(100.0);
        assert!((cx + 24.0).abs() < f64::EPSILON);
        assert!((cy - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_transition_table_legal_moves() {
        use GameStatus::*;
        assert_eq!(Title.after(Transition::Start), Some(Running));
        assert_eq!(Over.after(Transition::Start), Some(Running));
        assert_eq!(Running.after(Transition::Pause), Some(Paused));
        assert_eq!(Paused.after(Transition::Resume), Some(Running));
        assert_eq!(Running.after(Transition::Stop), Some(Over));
        assert_eq!(Over.after(Transition::Restart), Some(Running));
    }

    #[test]
    fn test_transition_table_counts() {
        let legal = GameStatus::ALL
            .iter()
            .flat_map(|s| Transition::ALL.iter().map(move |t| s.after(*t)))
            .filter(Option::is_some)
            .count();
        assert_eq!(legal, 6);
    }

    #[test]
    fn test_terrain_alternates() {
        assert_eq!(TerrainType::Classic.other(), TerrainType::Canyon);
        assert_eq!(TerrainType::Canyon.other(), TerrainType::Classic);
    }
}
