//! Every (status, transition) pair against the legal transition table.

use dino_runner::engine::{Bitmap, GameTextures, Rgb, TerrainColors, Transition};
use dino_runner::{Game, GameError, GameStatus};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;

fn game() -> Game<ChaCha8Rng> {
    let solid =
        |w: u32, h: u32| Arc::new(Bitmap::from_rgba(w, h, &vec![255; (w * h * 4) as usize]).unwrap());
    let textures = GameTextures {
        dino: solid(16, 16),
        cactus: solid(8, 16),
        pterodactyl: solid(16, 8),
        coin: solid(8, 8),
    };
    let colors = TerrainColors {
        ground: Rgb::new(0xfe, 0xf0, 0x8a),
        platform: Rgb::new(0xe9, 0xd5, 0xff),
    };
    Game::with_rng(textures, colors, ChaCha8Rng::seed_from_u64(99))
}

fn game_in(status: GameStatus) -> Game<ChaCha8Rng> {
    let mut g = game();
    match status {
        GameStatus::Title => {}
        GameStatus::Running => g.start().unwrap(),
        GameStatus::Paused => {
            g.start().unwrap();
            g.pause().unwrap();
        }
        GameStatus::Over => {
            g.start().unwrap();
            g.stop().unwrap();
        }
    }
    assert_eq!(g.status(), status);
    g
}

fn apply(g: &mut Game<ChaCha8Rng>, t: Transition) -> Result<(), GameError> {
    match t {
        Transition::Start => g.start(),
        Transition::Pause => g.pause(),
        Transition::Resume => g.resume(),
        Transition::Stop => g.stop(),
        Transition::Restart => g.restart(),
    }
}

fn legal(status: GameStatus, t: Transition) -> Option<GameStatus> {
    use GameStatus::*;
    use Transition::*;
    match (status, t) {
        (Title, Start) | (Over, Start) => Some(Running),
        (Running, Pause) => Some(Paused),
        (Paused, Resume) => Some(Running),
        (Running, Stop) => Some(Over),
        (Over, Restart) => Some(Running),
        _ => None,
    }
}

#[test]
fn test_all_twenty_transitions() {
    let mut legal_count = 0;
    for status in GameStatus::ALL {
        for t in Transition::ALL {
            let mut g = game_in(status);
            let result = apply(&mut g, t);
            match legal(status, t) {
                Some(next) => {
                    legal_count += 1;
                    assert_eq!(result, Ok(()), "{t} from {status}");
                    assert_eq!(g.status(), next, "{t} from {status}");
                }
                None => {
                    assert_eq!(
                        result,
                        Err(GameError::InvalidTransition { transition: t, status }),
                        "{t} from {status}"
                    );
                    assert_eq!(g.status(), status, "rejected {t} must not change state");
                }
            }
        }
    }
    assert_eq!(legal_count, 6);
}

#[test]
fn test_start_twice_fails() {
    let mut g = game();
    g.start().unwrap();
    let err = g.start().unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidTransition {
            transition: Transition::Start,
            status: GameStatus::Running,
        }
    );
    assert_eq!(err.to_string(), "cannot start a game that is running");
}

#[test]
fn test_rejected_restart_keeps_session() {
    let mut g = game();
    g.start().unwrap();
    g.world_mut().spawn_coin(0.0, 4.0);
    assert!(g.restart().is_err());
    assert_eq!(g.world().coins.len(), 1);
}
