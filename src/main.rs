//! Cat Thief entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use cat_thief::consts::*;
    use cat_thief::renderer::CanvasRenderer;
    use cat_thief::sim::{GamePhase, GameState, LossCause};
    use cat_thief::{FrameClock, InputTracker, LoopControl, Tuning};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: Option<CanvasRenderer>,
        clock: FrameClock,
        input: InputTracker,
        last_time: f64,
        last_phase: GamePhase,
        /// Suspended while the page is hidden
        control: LoopControl,
    }

    impl Game {
        fn new(tuning: Tuning) -> Self {
            Self {
                state: GameState::new(tuning),
                renderer: None,
                clock: FrameClock::new(),
                input: InputTracker::new(),
                last_time: 0.0,
                last_phase: GamePhase::Menu,
                control: LoopControl::new(),
            }
        }

        /// Run simulation ticks and countdown for this frame
        fn update(&mut self, dt: f32) {
            let input = self.input.tick_input();
            self.clock.advance(&mut self.state, &input, dt);

            let phase = self.state.phase;
            if phase != self.last_phase {
                match phase {
                    GamePhase::Won => log::info!("Victory! The cat got the fish"),
                    GamePhase::Lost => match self.state.loss_cause {
                        Some(LossCause::TimeUp) => log::info!("Time is up"),
                        _ => log::info!("Game over: out of lives"),
                    },
                    _ => {}
                }
                self.last_phase = phase;
            }
        }

        /// Render the current frame (only while a level is running)
        fn render(&self, time: f64) {
            if self.state.phase != GamePhase::Playing {
                return;
            }
            if let Some(ref renderer) = self.renderer {
                renderer.render(&self.state, time);
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let set_text = |id: &str, text: &str| {
                if let Some(el) = document.get_element_by_id(id) {
                    el.set_text_content(Some(text));
                }
            };

            let level = self.state.level();
            set_text("hud-score", &self.state.score.to_string());
            set_text("hud-lives", &self.state.lives.to_string());
            set_text("hud-time", &format!("{}s", self.state.time_left));
            set_text("hud-level", &format!("{} {}", level.emoji, level.name));

            let phase_text = match self.state.phase {
                GamePhase::Menu => format!(
                    "{} enemies, {} lives, {}s. Left/Right to choose, Enter to play",
                    level.enemies, level.lives, level.time_limit
                ),
                GamePhase::Playing => String::new(),
                GamePhase::Won if self.state.has_next_level() => {
                    "You won! Enter: next level, R: retry, Esc: menu".to_string()
                }
                GamePhase::Won => "You won every level! R: retry, Esc: menu".to_string(),
                GamePhase::Lost => "Game over. R: retry, Esc: menu".to_string(),
            };
            set_text("hud-phase", &phase_text);
        }

        /// Session keys (menu and result screens)
        fn handle_command(&mut self, key: &str) {
            match (self.state.phase, key) {
                (GamePhase::Menu, "arrowleft") => self.state.select_level(-1),
                (GamePhase::Menu, "arrowright") => self.state.select_level(1),
                (GamePhase::Menu, "enter" | " ") => {
                    self.start(self.state.level_index);
                }
                (GamePhase::Won, "enter" | " ") => {
                    if self.state.next_level() {
                        self.reset_frame();
                    }
                }
                (GamePhase::Won | GamePhase::Lost, "r") => {
                    if self.state.retry() {
                        self.reset_frame();
                    }
                }
                (GamePhase::Playing | GamePhase::Won | GamePhase::Lost, "escape") => {
                    self.state.return_to_menu();
                    self.reset_frame();
                }
                _ => {}
            }
        }

        fn start(&mut self, index: usize) {
            if self.state.start_level(index) {
                self.reset_frame();
            }
        }

        /// Fresh clock and input for a new level
        fn reset_frame(&mut self) {
            self.clock.reset();
            self.input.clear();
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Cat Thief starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document, nothing to run");
            return;
        };

        let canvas: Option<HtmlCanvasElement> = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into().ok());
        let Some(canvas) = canvas else {
            log::error!("No <canvas id=\"canvas\"> found");
            return;
        };
        canvas.set_width(CANVAS_WIDTH as u32);
        canvas.set_height(CANVAS_HEIGHT as u32);

        let game = Rc::new(RefCell::new(Game::new(Tuning::load())));
        game.borrow_mut().renderer = Some(CanvasRenderer::new(canvas));

        setup_input_handlers(game.clone());
        setup_teardown(game.clone());

        let generation = game.borrow().control.generation();
        request_animation_frame(game, generation);

        log::info!("Cat Thief running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Key down: track movement keys, then handle session commands
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key().to_lowercase();
                if key.starts_with("arrow") || key == " " {
                    event.prevent_default();
                }
                let mut g = game.borrow_mut();
                g.input.key_down(&key);
                g.handle_command(&key);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().input.key_up(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: key-up events are lost while unfocused
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().input.clear();
                log::debug!("Input cleared (window blur)");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_teardown(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Page hide: stop the loop (unload or back/forward cache)
        {
            let game = game.clone();
            let closure =
                Closure::<dyn FnMut(_)>::new(move |event: web_sys::PageTransitionEvent| {
                    game.borrow_mut().control.stop();
                    log::info!("Page hidden (persisted: {}), stopping game loop", event.persisted());
                });
            let _ = window
                .add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Page show from the back/forward cache: start a fresh loop
        {
            let closure =
                Closure::<dyn FnMut(_)>::new(move |event: web_sys::PageTransitionEvent| {
                    if !event.persisted() {
                        return;
                    }
                    let generation = {
                        let mut g = game.borrow_mut();
                        let Some(generation) = g.control.resume() else {
                            return;
                        };
                        g.last_time = 0.0;
                        g.clock.reset();
                        g.input.clear();
                        generation
                    };
                    log::info!("Page restored, resuming game loop");
                    request_animation_frame(game.clone(), generation);
                });
            let _ = window
                .add_event_listener_with_callback("pageshow", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>, generation: u32) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time, generation);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64, generation: u32) {
        {
            let mut g = game.borrow_mut();
            if !g.control.accepts(generation) {
                return;
            }

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render(time);
            g.update_hud();
        }

        request_animation_frame(game, generation);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Cat Thief (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the playable web version");

    let tuning_path = std::env::args().nth(1).map(std::path::PathBuf::from);
    let tuning = cat_thief::Tuning::load_from_path(tuning_path.as_deref());

    let state = headless::run_campaign(tuning);
    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not serialize final state: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted play-through used by the native binary
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use cat_thief::FrameClock;
    use cat_thief::consts::SIM_DT;
    use cat_thief::sim::{GamePhase, GameState, LEVELS, TickInput};
    use cat_thief::tuning::Tuning;

    /// Longest a level may run before the script gives up (seconds)
    const LEVEL_WALL_CLOCK: u32 = 120;

    /// Head straight for the goal, ignoring enemies
    fn beeline(state: &GameState) -> TickInput {
        let delta = state.goal - state.cat;
        let slack = state.tuning.cat_speed * 0.5;
        TickInput {
            up: delta.z > slack,
            down: delta.z < -slack,
            left: delta.x < -slack,
            right: delta.x > slack,
        }
    }

    /// Play levels in order until one is lost or the catalog is finished
    pub fn run_campaign(tuning: Tuning) -> GameState {
        let mut state = GameState::new(tuning);
        let mut clock = FrameClock::new();
        let mut total_score = 0;

        if !state.start_level(0) {
            return state;
        }

        loop {
            clock.reset();
            let frames = LEVEL_WALL_CLOCK as f32 / SIM_DT;
            let mut frame = 0.0;
            while state.phase == GamePhase::Playing && frame < frames {
                let input = beeline(&state);
                clock.advance(&mut state, &input, SIM_DT);
                frame += 1.0;
            }

            let level = state.level();
            match state.phase {
                GamePhase::Won => {
                    total_score += state.score;
                    log::info!(
                        "{}: won after {} ticks with {} lives left",
                        level.name,
                        state.time_ticks,
                        state.lives
                    );
                    if !state.next_level() {
                        log::info!("All {} levels cleared", LEVELS.len());
                        break;
                    }
                }
                phase => {
                    log::info!("{}: stopped in phase {:?}", level.name, phase);
                    break;
                }
            }
        }

        log::info!("Campaign score: {}", total_score);
        state
    }
}
