//! Grid Snake - a fixed-tick snake game on a cell grid
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, food, score)
//! - `session`: Game lifecycle controller (reset, tick, final score)
//! - `render`: Canvas 2D drawing of the board state
//! - `highscores`: Local top-10 leaderboard
//! - `audio`: Procedural sound effects

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod config;
pub mod highscores;
#[cfg(target_arch = "wasm32")]
pub mod render;
pub mod session;
pub mod sim;

pub use config::GameConfig;
pub use highscores::HighScores;
pub use session::GameSession;

/// Game configuration constants
pub mod consts {
    /// Default grid width in cells
    pub const GRID_WIDTH: i32 = 20;
    /// Default grid height in cells
    pub const GRID_HEIGHT: i32 = 15;

    /// Fixed tick interval driving the game loop (milliseconds)
    pub const TICK_INTERVAL_MS: u32 = 100;

    /// Side length of one grid cell on the canvas, in pixels
    pub const CELL_PX: f64 = 20.0;

    /// Swipe gestures shorter than this (pixels) are ignored
    pub const SWIPE_THRESHOLD_PX: f64 = 30.0;
}
