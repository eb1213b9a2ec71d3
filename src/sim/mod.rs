//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick interval only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod food;
pub mod grid;
pub mod queue;
pub mod state;
pub mod tick;

pub use food::place_food;
pub use grid::{Direction, in_bounds};
pub use queue::DirectionQueue;
pub use state::{GameState, GameStatus, Snake};
pub use tick::{GameOverCause, TickEvent, tick};
