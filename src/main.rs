//! Letter Chase entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use letter_chase::GameConfig;
    use letter_chase::platform::{InputQueue, TOUCH_ZONES, direction_for_key, dom};
    use letter_chase::presentation::EndScreen;
    use letter_chase::renderer::{CanvasSurface, draw_scene};
    use letter_chase::sim::{Direction, GameEvent, GameState, TerminalEvent, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        config: GameConfig,
        surface: CanvasSurface,
        input: InputQueue,
        document: Document,
        /// setInterval handle, cleared once the game ends
        interval: Option<i32>,
    }

    impl Game {
        /// Run one simulation tick and redraw
        fn step(&mut self) {
            let input = self.input.take();
            tick(&mut self.state, &self.config, &input);

            if let Err(e) = draw_scene(&mut self.surface, &self.state, &self.config) {
                log::warn!("Render error: {:?}", e);
            }

            for event in self.state.drain_events() {
                match event {
                    GameEvent::ScoreChanged { score } => dom::set_score(&self.document, score),
                    GameEvent::Ended(terminal) => self.end(terminal),
                    GameEvent::TargetSpawned { .. } | GameEvent::EnemiesSpawned { .. } => {}
                }
            }
        }

        fn end(&mut self, event: TerminalEvent) {
            self.input.close();

            if let Some(window) = web_sys::window() {
                if let Some(handle) = self.interval.take() {
                    window.clear_interval_with_handle(handle);
                }
                let viewport = (
                    window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
                    window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
                );
                let screen = EndScreen::build(
                    &event,
                    &self.config.end_screen,
                    viewport,
                    &mut self.state.rng,
                );
                if let Err(e) = dom::show_end_screen(&self.document, &screen) {
                    log::warn!("End screen error: {:?}", e);
                }
            }
        }

        fn steer(&mut self, direction: Direction) {
            self.input.push(direction);
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Letter Chase starting...");

        let document = dom::document()?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game-canvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        let config =
            GameConfig::load(&canvas).with_arena(canvas.width() as f32, canvas.height() as f32);
        if let Err(e) = config.validate() {
            return Err(JsValue::from_str(&e.to_string()));
        }

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(&config, seed),
            surface: CanvasSurface::new(&canvas)?,
            input: InputQueue::default(),
            document: document.clone(),
            interval: None,
            config,
        }));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&document, game.clone())?;
        start_timer(game)?;

        log::info!("Letter Chase running!");
        Ok(())
    }

    fn setup_input_handlers(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        // Arrow keys
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(direction) = direction_for_key(&event.key()) {
                    game.borrow_mut().steer(direction);
                }
            });
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch zones
        for (id, direction) in TOUCH_ZONES {
            let Some(zone) = document.get_element_by_id(id) else {
                continue;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                game.borrow_mut().steer(direction);
            });
            zone.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn start_timer(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let interval_ms = game.borrow().config.tick_interval_ms();

        let tick_game = game.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            tick_game.borrow_mut().step();
        });
        let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            interval_ms,
        )?;
        closure.forget();

        game.borrow_mut().interval = Some(handle);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use letter_chase::GameConfig;
    use letter_chase::presentation::score_label;
    use letter_chase::sim::{GameEvent, GameState, TickInput, autopilot, tick};

    env_logger::init();
    log::info!("Letter Chase (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - use `trunk serve` to play");

    let config = GameConfig::load();
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    let mut state = GameState::new(&config, seed);
    log::info!("Game initialized with seed: {}", seed);

    // Two minutes of game time
    let max_ticks = config.tick_rate as u64 * 120;
    while !state.phase.is_terminal() && state.time_ticks < max_ticks {
        let input = TickInput {
            direction: autopilot::steer(&state),
        };
        tick(&mut state, &config, &input);

        for event in state.drain_events() {
            match event {
                GameEvent::ScoreChanged { score } => log::info!("{}", score_label(score)),
                GameEvent::Ended(end) => {
                    println!("{:?} after {} ticks, score {}", end.outcome, state.time_ticks, end.score)
                }
                other => log::debug!("{:?}", other),
            }
        }
    }

    if !state.phase.is_terminal() {
        println!("Demo stopped after {} ticks, score {}", state.time_ticks, state.score);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
