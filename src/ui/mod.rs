//! Terminal rendering for the dino runner.

pub mod dino_scene;
mod game_common;
pub mod terminal_surface;

pub use dino_scene::{render_dino_scene, SceneInfo};
pub use terminal_surface::TerminalSurface;
