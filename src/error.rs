//! Error types for the engine and its asset pipeline.

use crate::engine::types::{GameStatus, Transition};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the game state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("cannot {transition} a game that is {status}")]
    InvalidTransition {
        transition: Transition,
        status: GameStatus,
    },
}

/// Errors raised while loading configuration or textures.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("invalid colour {0:?}, expected #rrggbb")]
    InvalidColor(String),

    #[error("unknown built-in sprite {0:?}")]
    UnknownSprite(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
