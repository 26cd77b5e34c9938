//! Flappy Canvas entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use flappy_canvas::platform::{InputAction, TickClock, map_key};
    use flappy_canvas::{ConfigError, GameConfig, Session};

    /// Game instance holding all state
    struct Game {
        config: GameConfig,
        session: Session,
        clock: TickClock,
        context: CanvasRenderingContext2d,
        /// An animation frame is scheduled
        loop_active: bool,
    }

    impl Game {
        fn new(config: GameConfig, context: CanvasRenderingContext2d) -> Result<Self, ConfigError> {
            let clock = TickClock::new(config.tick_rate);
            Ok(Self {
                session: new_session(&config)?,
                config,
                clock,
                context,
                loop_active: false,
            })
        }

        /// Run the ticks owed for this frame; returns whether to keep looping
        fn update(&mut self, time: f64) -> bool {
            let ticks = self.clock.advance(time);
            for _ in 0..ticks {
                // Checked before every tick so nothing runs after a game over
                if !self.session.is_running() {
                    break;
                }
                self.session.tick(&mut self.context);
            }
            self.session.is_running()
        }

        /// Replace a finished session with a fresh one
        fn restart(&mut self) -> bool {
            if self.session.is_running() {
                return false;
            }
            let autopilot = self.session.autopilot();
            self.session = match new_session(&self.config) {
                Ok(session) => session,
                Err(e) => {
                    log::error!("Restart failed: {}", e);
                    return false;
                }
            };
            self.session.set_autopilot(autopilot);
            self.clock.reset();
            set_game_over_visible(false);
            true
        }
    }

    fn new_session(config: &GameConfig) -> Result<Session, ConfigError> {
        let seed = js_sys::Date::now() as u64;
        Ok(Session::start(config.clone(), seed)?.on_game_over(|| {
            log::info!("game over");
            set_game_over_visible(true);
        }))
    }

    /// Show or hide the game over message
    fn set_game_over_visible(visible: bool) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(el) = document.get_element_by_id("game-over") {
            let class = if visible { "" } else { "hidden" };
            let _ = el.set_attribute("class", class);
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Flappy Canvas starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let config = GameConfig::load();
        canvas.set_width(config.field_width as u32);
        canvas.set_height(config.field_height as u32);

        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let game = Game::new(config, context).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let game = Rc::new(RefCell::new(game));

        setup_input_handlers(&window, game.clone())?;

        start_loop(game);

        log::info!("Flappy Canvas running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let Some(action) = map_key(&event.key()) else {
                return;
            };
            event.prevent_default();

            let mut g = game.borrow_mut();
            match action {
                InputAction::Jump => g.session.jump(),
                InputAction::ToggleAutopilot => {
                    let enabled = !g.session.autopilot();
                    g.session.set_autopilot(enabled);
                }
                InputAction::Restart => {
                    if g.restart() {
                        drop(g);
                        start_loop(game.clone());
                    }
                }
            }
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn start_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if g.loop_active {
                return;
            }
            g.loop_active = true;
        }
        request_animation_frame(game);
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let keep_going = {
            let mut g = game.borrow_mut();
            let keep_going = g.update(time);
            if !keep_going {
                g.loop_active = false;
            }
            keep_going
        };

        if keep_going {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), flappy_canvas::ConfigError> {
    use flappy_canvas::renderer::RecordingSurface;
    use flappy_canvas::{GameConfig, Session};

    env_logger::init();
    log::info!("Flappy Canvas (native) starting...");
    log::info!("Native mode runs a headless autopilot session - run with `trunk serve` for the web version");

    let config = match std::env::var("FLAPPY_CONFIG") {
        Ok(path) => GameConfig::from_file(&path)?,
        Err(_) => GameConfig::load(),
    };
    let seed = std::env::var("FLAPPY_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(1);
    // One simulated minute
    let max_ticks = config.tick_rate as u64 * 60;

    let mut session = Session::start(config, seed)?;
    session.set_autopilot(true);
    let mut surface = RecordingSurface::default();

    while session.is_running() && session.state().time_ticks < max_ticks {
        session.tick(&mut surface);
    }
    session.stop();

    let state = session.state();
    if session.is_game_over() {
        log::warn!("Autopilot crashed at tick {}", state.time_ticks);
    } else {
        log::info!(
            "Autopilot survived {} ticks with {} pipes on screen",
            state.time_ticks,
            state.pipes.len()
        );
    }
    if let Ok(frame) = surface.to_json() {
        log::debug!("Last frame: {}", frame);
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
