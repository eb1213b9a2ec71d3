//! Board state and core simulation types
//!
//! Everything a single run mutates lives here and is rebuilt as one unit
//! by `GameState::new` (the reset operation).

use std::collections::VecDeque;

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::food::place_food;
use super::grid::{self, Direction};
use super::queue::DirectionQueue;

/// Lifecycle phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Board exists but no run has been started yet
    NotStarted,
    /// Ticks advance the snake
    Running,
    /// Terminal; ticks are suppressed until the next reset
    Over,
}

/// The snake body, head first. Never empty.
#[derive(Debug, Clone)]
pub struct Snake {
    segments: VecDeque<IVec2>,
}

impl Snake {
    /// Single-segment snake at `head`
    pub fn new(head: IVec2) -> Self {
        let mut segments = VecDeque::new();
        segments.push_front(head);
        Self { segments }
    }

    pub fn head(&self) -> IVec2 {
        *self.segments.front().expect("snake is never empty")
    }

    /// True if any segment occupies `cell`
    pub fn contains(&self, cell: IVec2) -> bool {
        self.segments.contains(&cell)
    }

    /// Prepend a new head. The caller decides whether the tail goes too.
    pub fn advance_to(&mut self, head: IVec2) {
        self.segments.push_front(head);
    }

    /// Remove the tail segment, keeping net length unchanged for a
    /// non-growing tick
    pub fn drop_tail(&mut self) {
        self.segments.pop_back();
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments head-first, for rendering and collision scans
    pub fn cells(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.segments.iter().copied()
    }
}

/// Complete board state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Grid width in cells
    pub width: i32,
    /// Grid height in cells
    pub height: i32,
    pub snake: Snake,
    pub food: IVec2,
    pub score: u32,
    pub status: GameStatus,
    /// Applied/queued direction pair fed by the input adapters
    pub directions: DirectionQueue,
    /// Ticks elapsed since reset
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Fresh running state: one-segment snake centered on the grid
    /// (integer floor division), moving right, score zero, food placed
    /// off the snake.
    ///
    /// The grid must have at least two cells so the initial food has
    /// somewhere to go.
    pub fn new(width: i32, height: i32, seed: u64) -> Self {
        let snake = Snake::new(IVec2::new(width / 2, height / 2));
        let mut rng = Pcg32::seed_from_u64(seed);
        let food = place_food(&snake, width, height, &mut rng)
            .expect("grid must have at least two cells");

        Self {
            width,
            height,
            snake,
            food,
            score: 0,
            status: GameStatus::Running,
            directions: DirectionQueue::new(Direction::Right),
            time_ticks: 0,
            rng,
        }
    }

    /// Whether a cell lies on the board
    pub fn in_bounds(&self, cell: IVec2) -> bool {
        grid::in_bounds(cell, self.width, self.height)
    }

    /// Total number of grid cells
    pub fn grid_area(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}
