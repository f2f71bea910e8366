// Timing
pub const REALTIME_FRAME_MS: u64 = 16; // ~60 FPS physics step for continuous games
pub const MAX_FRAME_DT_MS: u64 = 100; // clamp on measured frame deltas after a stall
pub const INPUT_POLL_MS: u64 = 8;
pub const IDLE_POLL_MS: u64 = 100; // event poll timeout when nothing is scheduled

// Storage
pub const ARCADE_DIR: &str = ".arcade";
pub const CONFIG_FILE: &str = "config.json";
pub const LOG_FILE: &str = "arcade.log";
pub const SCORE_FILE_EXT: &str = "score";
