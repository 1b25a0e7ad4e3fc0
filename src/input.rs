//! Keyboard handling for the terminal host.
//!
//! Keys map to a small set of host actions. The jump key is also tracked
//! as "held" so the engine can use the lighter gravity while it is down.
//! Terminals that report key releases clear the hold on release; the rest
//! fall back to a short hold window refreshed by auto-repeat.

use crate::engine::{Game, GameStatus};
use crate::error::GameError;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::Rng;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    /// Jump while running. Otherwise start, restart or resume.
    Jump,
    TogglePause,
    Quit,
    Ignore,
}

pub fn is_jump_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char(' ') | KeyCode::Up)
}

/// Map a key press to a host action. Repeats and releases never map to an
/// action.
pub fn map_key(key: &KeyEvent) -> HostAction {
    if key.kind != KeyEventKind::Press {
        return HostAction::Ignore;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return HostAction::Quit;
    }
    if is_jump_key(key) {
        return HostAction::Jump;
    }
    match key.code {
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Esc => HostAction::TogglePause,
        KeyCode::Char('q') | KeyCode::Char('Q') => HostAction::Quit,
        _ => HostAction::Ignore,
    }
}

/// Apply a host action to the game's state machine. Actions that make no
/// sense in the current state are ignored.
pub fn dispatch<R: Rng>(game: &mut Game<R>, action: HostAction) -> Result<(), GameError> {
    match (action, game.status()) {
        (HostAction::Jump, GameStatus::Title) => game.start(),
        (HostAction::Jump, GameStatus::Over) => game.restart(),
        (HostAction::Jump, GameStatus::Paused) => game.resume(),
        (HostAction::TogglePause, GameStatus::Running) => game.pause(),
        (HostAction::TogglePause, GameStatus::Paused) => game.resume(),
        _ => Ok(()),
    }
}

/// Apply one key event to the game and the jump tracker. A press that
/// starts, restarts or resumes the run changes the status and is not fed
/// to `jump`, so the first running tick does not jump.
pub fn apply_key<R: Rng>(
    game: &mut Game<R>,
    jump: &mut JumpKey,
    key: &KeyEvent,
    now: Instant,
) -> Result<HostAction, GameError> {
    let action = map_key(key);
    if action == HostAction::Quit {
        return Ok(action);
    }
    let before = game.status();
    dispatch(game, action)?;
    if game.status() == before {
        jump.handle(key, now);
    }
    Ok(action)
}

/// Held state of the jump key.
#[derive(Debug, Clone)]
pub struct JumpKey {
    pressed_at: Option<Instant>,
    /// `None` when the terminal reports releases: held until released.
    hold_window: Option<Duration>,
}

impl JumpKey {
    /// Tracker for terminals without release events.
    pub fn with_hold_window(hold_window: Duration) -> Self {
        Self {
            pressed_at: None,
            hold_window: Some(hold_window),
        }
    }

    /// Tracker for terminals that report key releases.
    pub fn until_release() -> Self {
        Self {
            pressed_at: None,
            hold_window: None,
        }
    }

    /// Feed a key event. Returns true if it was a jump key.
    pub fn handle(&mut self, key: &KeyEvent, now: Instant) -> bool {
        if !is_jump_key(key) {
            return false;
        }
        match key.kind {
            KeyEventKind::Release => self.release(),
            KeyEventKind::Press | KeyEventKind::Repeat => self.press(now),
        }
        true
    }

    pub fn press(&mut self, now: Instant) {
        self.pressed_at = Some(now);
    }

    pub fn release(&mut self) {
        self.pressed_at = None;
    }

    pub fn is_held(&self, now: Instant) -> bool {
        match (self.pressed_at, self.hold_window) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(at), Some(window)) => now.saturating_duration_since(at) < window,
        }
    }
}
