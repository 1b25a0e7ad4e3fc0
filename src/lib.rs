//! Dino Runner - endless-runner engine and terminal host support.
//!
//! This module exposes the engine, asset loading and persistence for the
//! `dino` binary and for tests.

pub mod build_info;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod high_score;
pub mod input;
pub mod logging;
pub mod texture;
pub mod ui;
pub mod utils;

pub use engine::{Game, GameStatus};
pub use error::{AssetError, GameError};
