// Units
pub const PIXELS_PER_UNIT: f64 = 16.0;
pub const GROUND_Y: f64 = 1.0;

// Player physics
pub const DINO_START_X: f64 = 1.0;
pub const DINO_SCALE: f64 = 2.0;
pub const JUMP_IMPULSE: f64 = 40.0;
pub const GRAVITY_HELD: f64 = 150.0;
pub const GRAVITY_RELEASED: f64 = 200.0;

// Drift and difficulty ramp
pub const DRIFT_SPEED: f64 = 15.0;
pub const RAMP_SECONDS: f64 = 60.0;
pub const WIGGLE_FREQUENCY: f64 = 0.3;
pub const WIGGLE_AMPLITUDE: f64 = 0.05;

// Scoring
pub const SCORE_PER_SECOND: f64 = 10.0;
pub const SCORE_PER_COIN: u64 = 50;

// Terrain switching (seconds)
pub const TERRAIN_SWITCH_MIN: f64 = 10.0;
pub const TERRAIN_SWITCH_SPREAD: f64 = 20.0;

// Terrain event timers (seconds)
pub const EVENT_TIMER_INITIAL: f64 = 2.0;
pub const EVENT_TIMER_MIN: f64 = 0.5;
pub const EVENT_TIMER_SPREAD: f64 = 2.0;

// Platforms
pub const PLATFORM_THICKNESS_PX: f64 = 5.0;
pub const PLATFORM_HEIGHT: f64 = 3.0;
pub const CANYON_FLOOR_WIDTH: f64 = 1000.0;
pub const CANYON_MIN_SEGMENT: f64 = 4.0;

// Host loop
pub const MAX_FRAME_DT: f64 = 0.1;
pub const FRAME_INTERVAL_MS: u64 = 16;
/// How long a key press counts as a held jump when the terminal does not
/// report key releases.
pub const JUMP_HOLD_MS: u64 = 250;

// High score persistence
pub const HIGH_SCORE_KEY: &str = "dino-high-score";
pub const HIGH_SCORE_TTL_DAYS: i64 = 1000;
