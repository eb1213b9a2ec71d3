//! Grid Snake entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use grid_snake::audio::{AudioManager, SoundEffect};
    use grid_snake::consts::{CELL_PX, SWIPE_THRESHOLD_PX};
    use grid_snake::highscores::format_date;
    use grid_snake::render;
    use grid_snake::sim::{Direction, GameStatus, TickEvent};
    use grid_snake::{GameConfig, GameSession, HighScores};

    /// Cancellable periodic tick timer.
    ///
    /// Wraps a `setInterval` registration; `cancel` clears it and Drop
    /// clears it again (a no-op on an already-cleared handle), so at
    /// most one interval is ever live.
    struct TickTimer {
        handle: i32,
        _closure: Closure<dyn FnMut()>,
    }

    impl TickTimer {
        fn start(interval_ms: u32, closure: Closure<dyn FnMut()>) -> Option<TickTimer> {
            let window = web_sys::window()?;
            let handle = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    closure.as_ref().unchecked_ref(),
                    interval_ms as i32,
                )
                .ok()?;
            Some(TickTimer {
                handle,
                _closure: closure,
            })
        }

        fn cancel(&self) {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(self.handle);
            }
        }
    }

    impl Drop for TickTimer {
        fn drop(&mut self) {
            self.cancel();
        }
    }

    /// Game instance holding all state
    struct Game {
        session: GameSession,
        audio: AudioManager,
        highscores: HighScores,
        ctx: CanvasRenderingContext2d,
        timer: Option<TickTimer>,
        /// First-touch coordinates of an in-flight swipe
        touch_start: Option<(f64, f64)>,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Grid Snake starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game-canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let config = GameConfig::default();
        canvas.set_width((config.grid_width as f64 * CELL_PX) as u32);
        canvas.set_height((config.grid_height as f64 * CELL_PX) as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("2d context unavailable")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            session: GameSession::new(config, seed),
            audio: AudioManager::new(),
            highscores: HighScores::load(),
            ctx,
            timer: None,
            touch_start: None,
        }));

        setup_input_handlers(&canvas, game.clone());
        setup_dpad(&game);
        setup_restart_button(&game);

        {
            let g = game.borrow();
            render_highscores(&g.highscores);
            render::draw(&g.ctx, g.session.state(), CELL_PX);
        }

        // Start the first run as soon as the page is up
        restart(&game);

        log::info!("Grid Snake running!");
    }

    /// One firing of the interval timer
    fn on_tick(game: &Rc<RefCell<Game>>) {
        let mut g = game.borrow_mut();

        match g.session.tick() {
            TickEvent::Idle => {}
            TickEvent::Advanced { ate_food } => {
                if ate_food {
                    g.audio.play(SoundEffect::FoodEaten);
                    update_score_display(g.session.score());
                }
            }
            TickEvent::GameOver { cause, score } => {
                log::info!("game over ({cause:?}) with score {score}");

                // Stop the interval; the timer object itself is dropped
                // on the next restart, outside this callback.
                if let Some(timer) = g.timer.as_ref() {
                    timer.cancel();
                }

                let length = g.session.state().snake.len();
                let rank = g.highscores.add_score(score, length, js_sys::Date::now());
                if rank.is_some() {
                    g.highscores.save();
                    g.audio.play(SoundEffect::HighScore);
                } else {
                    g.audio.play(SoundEffect::GameOver);
                }
                update_score_display(score);
                render_highscores(&g.highscores);
            }
        }

        render::draw(&g.ctx, g.session.state(), CELL_PX);
    }

    /// Reset the session and restart the tick timer
    fn restart(game: &Rc<RefCell<Game>>) {
        let seed = js_sys::Date::now() as u64;
        {
            let mut g = game.borrow_mut();
            g.session.reset(seed);
            g.audio.resume();
            g.audio.play(SoundEffect::Started);
            update_score_display(0);
            render::draw(&g.ctx, g.session.state(), CELL_PX);
        }
        start_timer(game);
    }

    fn start_timer(game: &Rc<RefCell<Game>>) {
        let interval_ms = game.borrow().session.config().tick_interval_ms;
        let closure = {
            let game = game.clone();
            Closure::<dyn FnMut()>::new(move || on_tick(&game))
        };
        // Replacing the previous timer drops it and clears its interval
        game.borrow_mut().timer = TickTimer::start(interval_ms, closure);
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Keyboard: arrows/WASD steer, space restarts after game over
        {
            let game = game.clone();
            let window = web_sys::window().expect("no window");
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                // Keep arrows and space from scrolling the page
                if matches!(
                    key.as_str(),
                    "ArrowUp" | "ArrowDown" | "ArrowLeft" | "ArrowRight" | " "
                ) {
                    event.prevent_default();
                }

                if key == " " {
                    let status = game.borrow().session.status();
                    if status != GameStatus::Running {
                        restart(&game);
                    }
                    return;
                }

                let direction = match key.as_str() {
                    "ArrowUp" | "w" | "W" => Some(Direction::Up),
                    "ArrowDown" | "s" | "S" => Some(Direction::Down),
                    "ArrowLeft" | "a" | "A" => Some(Direction::Left),
                    "ArrowRight" | "d" | "D" => Some(Direction::Right),
                    _ => None,
                };
                if let Some(direction) = direction {
                    game.borrow_mut().session.propose_direction(direction);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start (record swipe origin)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    game.borrow_mut().touch_start =
                        Some((touch.client_x() as f64, touch.client_y() as f64));
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end (resolve swipe into a direction)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let Some(touch) = event.changed_touches().get(0) else {
                    return;
                };
                let mut g = game.borrow_mut();
                let Some((x0, y0)) = g.touch_start.take() else {
                    return;
                };

                let dx = touch.client_x() as f64 - x0;
                let dy = touch.client_y() as f64 - y0;
                if dx.abs().max(dy.abs()) < SWIPE_THRESHOLD_PX {
                    return;
                }

                let direction = if dx.abs() > dy.abs() {
                    if dx > 0.0 {
                        Direction::Right
                    } else {
                        Direction::Left
                    }
                } else if dy > 0.0 {
                    Direction::Down
                } else {
                    Direction::Up
                };
                g.session.propose_direction(direction);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// On-screen D-pad buttons, if the page provides them
    fn setup_dpad(game: &Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        for (id, direction) in [
            ("dpad-up", Direction::Up),
            ("dpad-down", Direction::Down),
            ("dpad-left", Direction::Left),
            ("dpad-right", Direction::Right),
        ] {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                    game.borrow_mut().session.propose_direction(direction);
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn setup_restart_button(game: &Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                restart(&game);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Update the score element in the page
    fn update_score_display(score: u32) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(el) = document.get_element_by_id("score") {
            el.set_text_content(Some(&format!("Score: {score}")));
        }
    }

    /// Rebuild the leaderboard list in the page
    fn render_highscores(scores: &HighScores) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(list) = document.get_element_by_id("highscore-list") else {
            return;
        };

        list.set_inner_html("");
        for entry in &scores.entries {
            if let Ok(item) = document.create_element("li") {
                item.set_text_content(Some(&format!(
                    "{} pts - {} cells - {}",
                    entry.score,
                    entry.length,
                    format_date(entry.timestamp)
                )));
                let _ = list.append_child(&item);
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Grid Snake (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    smoke_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive one deterministic run to completion without a browser
#[cfg(not(target_arch = "wasm32"))]
fn smoke_run() {
    use grid_snake::sim::TickEvent;
    use grid_snake::{GameConfig, GameSession};

    let mut session = GameSession::new(GameConfig::default(), 0x5eed);
    session.reset(0x5eed);

    let mut ticks = 0u64;
    loop {
        match session.tick() {
            TickEvent::GameOver { cause, score } => {
                println!("game over after {ticks} ticks ({cause:?}), score {score}");
                break;
            }
            _ => ticks += 1,
        }
    }
}
