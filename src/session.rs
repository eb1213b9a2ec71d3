//! Game session controller
//!
//! Owns the configuration and the mutable board state for one player.
//! Everything the tick engine and the render adapter touch hangs off
//! this object; there is no ambient game state. The shell starts and
//! stops the tick timer around `reset` and the Over transition.

use crate::config::GameConfig;
use crate::sim::{self, Direction, GameState, GameStatus, TickEvent};

pub struct GameSession {
    config: GameConfig,
    state: GameState,
}

impl GameSession {
    /// Session with an initial, not-yet-running board (shown behind the
    /// start screen)
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut state = GameState::new(config.grid_width, config.grid_height, seed);
        state.status = GameStatus::NotStarted;
        Self { config, state }
    }

    /// Rebuild the board for a fresh run and transition to Running:
    /// one-segment snake at the grid center moving right, score zero,
    /// new food. The previous run's state is discarded wholesale.
    pub fn reset(&mut self, seed: u64) {
        self.state = GameState::new(self.config.grid_width, self.config.grid_height, seed);
        log::info!("run started (seed {seed})");
    }

    /// Route an input proposal to the direction queue. Ignored unless a
    /// run is in progress, so late key presses on the game-over screen
    /// cannot leak into the next run.
    pub fn propose_direction(&mut self, direction: Direction) {
        if self.state.status == GameStatus::Running {
            self.state.directions.propose(direction);
        }
    }

    /// Advance one tick
    pub fn tick(&mut self) -> TickEvent {
        sim::tick(&mut self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    /// Current score; after game over this is the final score handed to
    /// the leaderboard sink
    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameOverCause;
    use glam::IVec2;

    #[test]
    fn test_new_session_is_not_started() {
        let session = GameSession::new(GameConfig::small(), 1);
        assert_eq!(session.status(), GameStatus::NotStarted);
    }

    #[test]
    fn test_tick_is_suppressed_before_start() {
        let mut session = GameSession::new(GameConfig::small(), 1);
        assert_eq!(session.tick(), TickEvent::Idle);
        assert_eq!(session.state().snake.head(), IVec2::new(5, 5));
    }

    #[test]
    fn test_reset_starts_a_centered_run() {
        let mut session = GameSession::new(GameConfig::default(), 1);
        session.reset(2);

        assert_eq!(session.status(), GameStatus::Running);
        assert_eq!(session.score(), 0);
        assert_eq!(session.state().snake.head(), IVec2::new(10, 7));
        assert_eq!(session.state().directions.applied(), Direction::Right);
    }

    #[test]
    fn test_proposals_ignored_unless_running() {
        let mut session = GameSession::new(GameConfig::small(), 1);
        session.propose_direction(Direction::Down);
        assert_eq!(session.state().directions.queued(), Direction::Right);

        session.reset(2);
        session.propose_direction(Direction::Down);
        assert_eq!(session.state().directions.queued(), Direction::Down);
    }

    #[test]
    fn test_reset_after_game_over_starts_clean() {
        let mut session = GameSession::new(GameConfig::small(), 3);
        session.reset(3);

        // Run rightward into the wall
        let mut last = session.tick();
        while matches!(last, TickEvent::Advanced { .. }) {
            last = session.tick();
        }
        assert!(matches!(
            last,
            TickEvent::GameOver {
                cause: GameOverCause::Wall,
                ..
            }
        ));
        assert_eq!(session.status(), GameStatus::Over);

        session.reset(4);
        assert_eq!(session.status(), GameStatus::Running);
        assert_eq!(session.score(), 0);
        assert_eq!(session.state().snake.len(), 1);
    }
}
