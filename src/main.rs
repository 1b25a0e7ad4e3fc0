use chrono::Utc;
use crossterm::event::{
    self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use dino_runner::build_info;
use dino_runner::config::GameConfig;
use dino_runner::constants::{FRAME_INTERVAL_MS, JUMP_HOLD_MS, MAX_FRAME_DT};
use dino_runner::engine::{Game, GameStatus};
use dino_runner::error::AssetError;
use dino_runner::high_score::{ExpiringStore, HighScore, STORE_FILE};
use dino_runner::input::{apply_key, HostAction, JumpKey};
use dino_runner::logging;
use dino_runner::texture;
use dino_runner::ui::{render_dino_scene, SceneInfo, TerminalSurface};
use dino_runner::utils::persistence;
use rand::Rng;
use ratatui::backend::Backend;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

#[derive(Debug, Default)]
struct Args {
    seed: Option<u64>,
    config: Option<PathBuf>,
}

fn print_help() {
    println!("Dino - an endless runner for the terminal");
    println!();
    println!("Usage: dino [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --seed <N>       Seed the terrain generator for a repeatable run");
    println!("  --config <PATH>  Read textures and colours from PATH");
    println!("  --version        Show version information");
    println!("  --help           Show this help message");
    println!();
    println!("Keys: Space/Up jump or start, P/Esc pause, Q quit");
}

fn parse_args() -> Args {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_string());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--seed" => match iter.next().map(|s| s.parse::<u64>()) {
                Some(Ok(seed)) => args.seed = Some(seed),
                _ => {
                    eprintln!("--seed expects a non-negative integer");
                    std::process::exit(1);
                }
            },
            "--config" => match iter.next() {
                Some(path) => args.config = Some(PathBuf::from(path)),
                None => {
                    eprintln!("--config expects a path");
                    std::process::exit(1);
                }
            },
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'dino --help' for usage.");
                std::process::exit(1);
            }
        }
    }
    args
}

/// Load the config and the directory its relative texture paths resolve
/// against.
fn load_config(path: Option<&Path>) -> Result<(GameConfig, PathBuf), AssetError> {
    match path {
        Some(path) => {
            let base = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."));
            Ok((GameConfig::load(path)?, base))
        }
        None => GameConfig::load_or_default(),
    }
}

fn build_game(args: &Args) -> Result<Game, AssetError> {
    let (config, base_dir) = load_config(args.config.as_deref())?;
    let colors = config.terrain_colors()?;
    // The game is only constructed once every texture has loaded
    let textures = texture::load_textures(&config.textures, &base_dir)?;
    info!(base_dir = %base_dir.display(), "Textures loaded");

    Ok(match args.seed {
        Some(seed) => Game::with_seed(textures, colors, seed),
        None => Game::new(textures, colors),
    })
}

fn open_high_score() -> HighScore {
    match persistence::data_dir() {
        Ok(dir) => HighScore::open(&dir.join(STORE_FILE)),
        Err(e) => {
            warn!(error = %e, "No data directory, high score will not be saved");
            HighScore::new(ExpiringStore::in_memory())
        }
    }
}

fn main() -> io::Result<()> {
    let args = parse_args();
    let _log_guard = logging::init_logging();
    info!(
        version = build_info::VERSION,
        commit = build_info::BUILD_COMMIT,
        seed = ?args.seed,
        "Starting dino"
    );

    let mut game = match build_game(&args) {
        Ok(game) => game,
        Err(e) => {
            error!(error = %e, "Failed to load assets");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let mut high_score = open_high_score();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let release_events = supports_keyboard_enhancement().unwrap_or(false);
    if release_events {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    }
    debug!(release_events, "Terminal ready");

    let mut jump = if release_events {
        JumpKey::until_release()
    } else {
        JumpKey::with_hold_window(Duration::from_millis(JUMP_HOLD_MS))
    };

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let result = run(&mut terminal, &mut game, &mut high_score, &mut jump);

    // Restore terminal
    if release_events {
        terminal.backend_mut().execute(PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!(error = %e, "Game loop failed");
    }
    info!(score = game.score(), "Exiting");
    result
}

fn run<B: Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    game: &mut Game<R>,
    high_score: &mut HighScore,
    jump: &mut JumpKey,
) -> io::Result<()> {
    let mut surface = TerminalSurface::new(80, 20);
    let mut scene = SceneInfo {
        best: high_score.best(Utc::now()),
        new_best: false,
    };
    let mut last_frame = Instant::now();

    loop {
        let now = Instant::now();
        // Long stalls (suspend, window drag) must not teleport entities
        let dt = now.duration_since(last_frame).as_secs_f64().min(MAX_FRAME_DT);
        last_frame = now;

        let was_running = game.status() == GameStatus::Running;
        game.update(dt, jump.is_held(now), &surface);
        if was_running && game.status() == GameStatus::Over {
            let score = game.score();
            scene.new_best = high_score.record(score, Utc::now()).unwrap_or_else(|e| {
                warn!(error = %e, "Failed to save high score");
                score > scene.best
            });
            scene.best = scene.best.max(score);
        }

        terminal.draw(|frame| {
            let area = frame.size();
            render_dino_scene(frame, area, game, &mut surface, scene);
        })?;

        let mut timeout = Duration::from_millis(FRAME_INTERVAL_MS);
        while event::poll(timeout)? {
            timeout = Duration::ZERO;
            let Event::Key(key) = event::read()? else {
                continue;
            };
            let before = game.status();
            match apply_key(game, jump, &key, Instant::now()) {
                Ok(HostAction::Quit) => return Ok(()),
                Ok(_) => {}
                Err(e) => warn!(error = %e, "Ignored key"),
            }
            if before == GameStatus::Over && game.status() == GameStatus::Running {
                scene.new_best = false;
            }
        }
    }
}
