// Board (logical pixels)
pub const BOARD_WIDTH: f64 = 360.0;
pub const BOARD_HEIGHT: f64 = 640.0;

// Bird
pub const BIRD_WIDTH: f64 = 34.0;
pub const BIRD_HEIGHT: f64 = 24.0;

// Pipes
pub const PIPE_WIDTH: f64 = 64.0;
pub const PIPE_HEIGHT: f64 = 512.0;
pub const PIPE_ORIGIN_Y: f64 = 0.0;

// Physics, in pixels per second (squared for gravity)
pub const GRAVITY: f64 = 630.0;
pub const PIPE_SPEED: f64 = 240.0; // 4 px/frame at 60 fps
pub const JUMP_VELOCITY: f64 = -170.0;

// Timing
pub const FRAME_MS: u64 = 16; // ~60 FPS tick driver
pub const SPAWN_INTERVAL_MS: u64 = 1200;
pub const MAX_DELTA_SECONDS: f64 = 0.1;

// Scoring: two pipes per gap
pub const SCORE_PER_PIPE: f64 = 0.5;

// Config file name inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "config.json";
