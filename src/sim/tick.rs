//! Fixed-interval tick
//!
//! Advances the board by one cell, resolving collisions, food and
//! growth. A tick is a no-op unless the game is running, so a stray
//! timer firing after game over cannot disturb the final board.

use super::food::place_food;
use super::state::{GameState, GameStatus};

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverCause {
    /// Head left the grid
    Wall,
    /// Head ran into the body
    SelfHit,
    /// Snake filled every cell; nowhere left to place food. A win.
    GridFilled,
}

/// Outcome of a single tick, consumed by the shell for rendering,
/// audio and the leaderboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Tick was suppressed (game not running)
    Idle,
    /// Snake advanced one cell; `ate_food` marks a growth tick
    Advanced { ate_food: bool },
    /// Run ended on this tick
    GameOver { cause: GameOverCause, score: u32 },
}

/// Advance the game by one tick.
///
/// The queued direction is committed first, then the head moves exactly
/// one cell. The wall check runs before the self check; both end the
/// run the same way and differ only in the reported cause.
pub fn tick(state: &mut GameState) -> TickEvent {
    if state.status != GameStatus::Running {
        return TickEvent::Idle;
    }

    state.time_ticks += 1;

    let direction = state.directions.commit();
    let new_head = state.snake.head() + direction.delta();

    if !state.in_bounds(new_head) {
        state.status = GameStatus::Over;
        return TickEvent::GameOver {
            cause: GameOverCause::Wall,
            score: state.score,
        };
    }
    if state.snake.contains(new_head) {
        state.status = GameStatus::Over;
        return TickEvent::GameOver {
            cause: GameOverCause::SelfHit,
            score: state.score,
        };
    }

    state.snake.advance_to(new_head);

    if new_head == state.food {
        // Growth tick: the tail stays, the food moves
        state.score += 1;
        match place_food(&state.snake, state.width, state.height, &mut state.rng) {
            Some(food) => state.food = food,
            None => {
                state.status = GameStatus::Over;
                return TickEvent::GameOver {
                    cause: GameOverCause::GridFilled,
                    score: state.score,
                };
            }
        }
        TickEvent::Advanced { ate_food: true }
    } else {
        state.snake.drop_tail();
        TickEvent::Advanced { ate_food: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::Direction;
    use crate::sim::queue::DirectionQueue;
    use crate::sim::state::Snake;
    use glam::IVec2;

    /// 20x15 board, head at (10, 7) moving right, food parked out of the way
    fn running_state() -> GameState {
        let mut state = GameState::new(20, 15, 0xfeed);
        state.food = IVec2::new(0, 0);
        state
    }

    #[test]
    fn test_head_advances_without_input() {
        let mut state = running_state();

        let event = tick(&mut state);

        assert_eq!(event, TickEvent::Advanced { ate_food: false });
        assert_eq!(state.snake.head(), IVec2::new(11, 7));
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_eating_food_grows_and_scores() {
        let mut state = running_state();
        state.food = IVec2::new(11, 7);

        let event = tick(&mut state);

        assert_eq!(event, TickEvent::Advanced { ate_food: true });
        assert_eq!(state.score, 1);
        assert_eq!(state.snake.len(), 2);
        assert!(state.snake.contains(IVec2::new(11, 7)));
        assert!(state.snake.contains(IVec2::new(10, 7)));
        // Replacement food avoids the grown snake
        assert!(!state.snake.contains(state.food));
    }

    #[test]
    fn test_wall_collision_ends_run() {
        let mut state = running_state();
        state.snake = Snake::new(IVec2::new(0, 7));
        state.directions = DirectionQueue::new(Direction::Left);
        state.score = 3;

        let event = tick(&mut state);

        assert_eq!(
            event,
            TickEvent::GameOver {
                cause: GameOverCause::Wall,
                score: 3,
            }
        );
        assert_eq!(state.status, GameStatus::Over);
    }

    #[test]
    fn test_self_collision_ends_run() {
        let mut state = running_state();

        // Grow to length 4 by feeding the snake three times in a row
        for _ in 0..3 {
            state.food = state.snake.head() + Direction::Right.delta();
            assert_eq!(tick(&mut state), TickEvent::Advanced { ate_food: true });
        }
        state.food = IVec2::new(0, 0);

        // Loop back into the body: down, left, then up onto a segment
        state.directions.propose(Direction::Down);
        tick(&mut state);
        state.directions.propose(Direction::Left);
        tick(&mut state);
        state.directions.propose(Direction::Up);
        let event = tick(&mut state);

        assert_eq!(
            event,
            TickEvent::GameOver {
                cause: GameOverCause::SelfHit,
                score: 3,
            }
        );
        assert_eq!(state.status, GameStatus::Over);
    }

    #[test]
    fn test_reversal_proposal_is_ignored() {
        let mut state = running_state();
        state.directions.propose(Direction::Left);

        tick(&mut state);

        // Still moving right
        assert_eq!(state.snake.head(), IVec2::new(11, 7));
    }

    #[test]
    fn test_last_proposal_before_tick_wins() {
        let mut state = running_state();
        state.directions.propose(Direction::Up);
        state.directions.propose(Direction::Down);

        tick(&mut state);

        assert_eq!(state.snake.head(), IVec2::new(10, 8));
    }

    #[test]
    fn test_ticks_after_game_over_change_nothing() {
        let mut state = running_state();
        state.snake = Snake::new(IVec2::new(0, 7));
        state.directions = DirectionQueue::new(Direction::Left);
        tick(&mut state);
        assert_eq!(state.status, GameStatus::Over);

        let head = state.snake.head();
        let food = state.food;
        let score = state.score;
        let ticks = state.time_ticks;

        for _ in 0..5 {
            assert_eq!(tick(&mut state), TickEvent::Idle);
        }
        assert_eq!(state.snake.head(), head);
        assert_eq!(state.food, food);
        assert_eq!(state.score, score);
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn test_filling_the_grid_is_a_win() {
        // 1x2 grid: head at (0, 1), the only free cell holds the food
        let mut state = GameState::new(1, 2, 5);
        assert_eq!(state.snake.head(), IVec2::new(0, 1));
        assert_eq!(state.food, IVec2::new(0, 0));

        state.directions.propose(Direction::Up);
        let event = tick(&mut state);

        assert_eq!(
            event,
            TickEvent::GameOver {
                cause: GameOverCause::GridFilled,
                score: 1,
            }
        );
        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.status, GameStatus::Over);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn direction(index: u8) -> Direction {
            match index % 4 {
                0 => Direction::Up,
                1 => Direction::Down,
                2 => Direction::Left,
                _ => Direction::Right,
            }
        }

        proptest! {
            #[test]
            fn snake_never_overlaps_and_length_tracks_score(
                seed in any::<u64>(),
                moves in prop::collection::vec(0u8..4, 1..200),
            ) {
                let mut state = GameState::new(10, 10, seed);
                for m in moves {
                    state.directions.propose(direction(m));
                    tick(&mut state);
                    if state.status != GameStatus::Running {
                        break;
                    }

                    let mut cells: Vec<IVec2> = state.snake.cells().collect();
                    let total = cells.len();
                    cells.sort_by_key(|c| (c.x, c.y));
                    cells.dedup();
                    prop_assert_eq!(cells.len(), total);
                    prop_assert_eq!(total, 1 + state.score as usize);
                    prop_assert!(!state.snake.contains(state.food));
                    prop_assert!(state.in_bounds(state.food));
                }
            }
        }
    }
}
