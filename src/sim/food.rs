//! Food placement
//!
//! Uniform over unoccupied cells. Rejection sampling is cheap while the
//! snake is short; once it covers half the grid the free cells are
//! collected and sampled directly so placement stays bounded even on a
//! nearly full board.

use glam::IVec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::Snake;

/// Pick a food cell not occupied by the snake.
///
/// Returns `None` iff the snake covers the whole grid, which callers
/// treat as the filled-board terminal condition (max score is
/// `grid_area - 1`).
pub fn place_food(snake: &Snake, width: i32, height: i32, rng: &mut Pcg32) -> Option<IVec2> {
    let area = (width as usize) * (height as usize);
    if snake.len() >= area {
        return None;
    }

    if snake.len() * 2 < area {
        loop {
            let cell = IVec2::new(rng.random_range(0..width), rng.random_range(0..height));
            if !snake.contains(cell) {
                return Some(cell);
            }
        }
    }

    // High occupancy: sample the complement set directly
    let free: Vec<IVec2> = (0..height)
        .flat_map(|y| (0..width).map(move |x| IVec2::new(x, y)))
        .filter(|cell| !snake.contains(*cell))
        .collect();
    let index = rng.random_range(0..free.len());
    free.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_food_avoids_snake() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut snake = Snake::new(IVec2::new(2, 2));
        snake.advance_to(IVec2::new(3, 2));
        snake.advance_to(IVec2::new(4, 2));

        for _ in 0..100 {
            let food = place_food(&snake, 5, 5, &mut rng).expect("free cells exist");
            assert!(!snake.contains(food));
            assert!(food.x >= 0 && food.x < 5 && food.y >= 0 && food.y < 5);
        }
    }

    #[test]
    fn test_single_free_cell_is_found() {
        // Snake fills a 2x2 grid except (1, 1)
        let mut snake = Snake::new(IVec2::new(0, 0));
        snake.advance_to(IVec2::new(1, 0));
        snake.advance_to(IVec2::new(0, 1));

        let mut rng = Pcg32::seed_from_u64(11);
        assert_eq!(place_food(&snake, 2, 2, &mut rng), Some(IVec2::new(1, 1)));
    }

    #[test]
    fn test_full_grid_has_no_placement() {
        let mut snake = Snake::new(IVec2::new(0, 0));
        snake.advance_to(IVec2::new(1, 0));

        let mut rng = Pcg32::seed_from_u64(13);
        assert_eq!(place_food(&snake, 2, 1, &mut rng), None);
    }
}
