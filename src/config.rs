//! Game configuration
//!
//! Grid dimensions and the tick interval. The defaults reproduce a
//! 400x300 canvas at 20px cells, updated ten times per second.

use serde::{Deserialize, Serialize};

use crate::consts;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the playing field in cells
    pub grid_width: i32,
    /// Height of the playing field in cells
    pub grid_height: i32,
    /// Fixed delay between ticks, in milliseconds
    pub tick_interval_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: consts::GRID_WIDTH,
            grid_height: consts::GRID_HEIGHT,
            tick_interval_ms: consts::TICK_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    /// Configuration with a custom grid size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Small grid for tests
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Total number of grid cells
    pub fn grid_area(&self) -> usize {
        (self.grid_width as usize) * (self.grid_height as usize)
    }
}
