//! Canvas render adapter
//!
//! Stateless: draws whatever board state it is handed, once per tick
//! completion and once more on game over for the overlay.

use web_sys::CanvasRenderingContext2d;

use crate::sim::{GameState, GameStatus};

const BOARD_COLOR: &str = "#000";
const SNAKE_COLOR: &str = "#00ff00";
const FOOD_COLOR: &str = "#ff0000";
const OVERLAY_COLOR: &str = "rgba(0, 0, 0, 0.5)";
const TEXT_COLOR: &str = "#ffffff";

/// Draw the full board: background, snake, food, and the game-over
/// overlay when the run has ended
pub fn draw(ctx: &CanvasRenderingContext2d, state: &GameState, cell_px: f64) {
    let width = state.width as f64 * cell_px;
    let height = state.height as f64 * cell_px;

    ctx.set_fill_style_str(BOARD_COLOR);
    ctx.fill_rect(0.0, 0.0, width, height);

    ctx.set_fill_style_str(SNAKE_COLOR);
    for cell in state.snake.cells() {
        ctx.fill_rect(
            cell.x as f64 * cell_px,
            cell.y as f64 * cell_px,
            cell_px,
            cell_px,
        );
    }

    ctx.set_fill_style_str(FOOD_COLOR);
    ctx.fill_rect(
        state.food.x as f64 * cell_px,
        state.food.y as f64 * cell_px,
        cell_px,
        cell_px,
    );

    if state.status == GameStatus::Over {
        draw_game_over(ctx, width, height);
    }
}

fn draw_game_over(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style_str(OVERLAY_COLOR);
    ctx.fill_rect(0.0, 0.0, width, height);

    ctx.set_fill_style_str(TEXT_COLOR);
    ctx.set_text_align("center");
    ctx.set_font("28px Courier New");
    let _ = ctx.fill_text("Game Over!", width / 2.0, height / 2.0 - 10.0);
    ctx.set_font("16px Courier New");
    let _ = ctx.fill_text("Press Space or Play Again", width / 2.0, height / 2.0 + 20.0);
}
