//! Turtle Hop entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlInputElement, KeyboardEvent, MouseEvent, TouchEvent};

    use turtle_hop::consts::FRAME_UNIT;
    use turtle_hop::renderer::{self, DomRenderer};
    use turtle_hop::sim::{GamePhase, GameState, TickInput, generate_level, tick};
    use turtle_hop::{Difficulty, HighScores, Settings};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: TickInput,
        renderer: DomRenderer,
        settings: Settings,
        highscores: HighScores,
        last_time: f64,
        /// Pending animation-frame request, if the loop is running
        raf_handle: Option<i32>,
        /// Previous phase, for transition side effects
        last_phase: GamePhase,
    }

    impl Game {
        /// Begin a fresh run with the current settings
        fn start(&mut self) {
            self.state = GameState::new(self.settings.difficulty);
            generate_level(&mut self.state);
            self.state.phase = GamePhase::Playing;
            self.input = TickInput::default();
            self.last_time = 0.0;
            self.last_phase = GamePhase::Playing;
            self.renderer.show_screen(GamePhase::Playing);
            log::info!(
                "Session started ({}, player '{}')",
                self.settings.difficulty.as_str(),
                self.settings.player_name
            );
        }

        /// Record the finished run and show the game-over screen
        fn on_game_over(&mut self) {
            let rank = self
                .highscores
                .add_score(&self.settings.player_name, self.state.score);
            self.highscores.save();
            if let Some(rank) = rank {
                log::info!("Run placed at rank {rank}");
            }

            self.renderer
                .render_game_over(self.state.score, &self.highscores);
            self.renderer.show_screen(GamePhase::GameOver);
        }
    }

    /// Cancel the pending frame request, if any
    fn cancel_frame(game: &mut Game) {
        if let Some(handle) = game.raf_handle.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(handle);
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Turtle Hop starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let settings = Settings::load();
        let highscores = HighScores::load();
        let renderer = DomRenderer::new(document.clone());

        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(settings.difficulty),
            input: TickInput::default(),
            renderer,
            settings,
            highscores,
            last_time: 0.0,
            raf_handle: None,
            last_phase: GamePhase::Menu,
        }));

        // Pre-fill the menu from persisted preferences
        {
            let g = game.borrow();
            if let Some(input) = document
                .get_element_by_id("player-name")
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            {
                input.set_value(&g.settings.player_name);
            }
            update_difficulty_buttons(&document, g.settings.difficulty);
            g.renderer.show_screen(GamePhase::Menu);
        }

        setup_keyboard(game.clone());
        setup_hold_buttons(game.clone());
        setup_menu(game.clone());
        setup_game_over(game.clone());

        log::info!("Turtle Hop running!");
    }

    fn request_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let game_for_cb = game.clone();
        let closure = Closure::once(move |time: f64| {
            game_loop(game_for_cb, time);
        });
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(handle) => game.borrow_mut().raf_handle = Some(handle),
            Err(_) => log::warn!("Failed to schedule animation frame"),
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let keep_running = {
            let mut g = game.borrow_mut();
            g.raf_handle = None;

            // Delta since the previous frame, clamped against tab-switch spikes
            let dt = if g.last_time > 0.0 {
                (((time - g.last_time) / 1000.0) as f32).min(0.1)
            } else {
                FRAME_UNIT
            };
            g.last_time = time;

            let input = g.input;
            tick(&mut g.state, &input, dt);

            let frame = renderer::project(&g.state);
            g.renderer.render(&frame);

            if g.state.phase == GamePhase::GameOver && g.last_phase == GamePhase::Playing {
                g.on_game_over();
            }
            g.last_phase = g.state.phase;

            // The loop only re-arms while playing; leaving the phase stops it
            g.state.phase == GamePhase::Playing
        };

        if keep_running {
            request_frame(game);
        }
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                if g.state.phase != GamePhase::Playing {
                    return;
                }
                match event.key().as_str() {
                    "ArrowLeft" => g.input.left = true,
                    "ArrowRight" => g.input.right = true,
                    "ArrowUp" => g.input.jump = true,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" => g.input.left = false,
                    "ArrowRight" => g.input.right = false,
                    "ArrowUp" => g.input.jump = false,
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Wire the three on-screen press-and-hold buttons
    fn setup_hold_buttons(game: Rc<RefCell<Game>>) {
        bind_hold_button(&game, "btn-left", |input, held| input.left = held);
        bind_hold_button(&game, "btn-jump", |input, held| input.jump = held);
        bind_hold_button(&game, "btn-right", |input, held| input.right = held);
    }

    fn bind_hold_button(game: &Rc<RefCell<Game>>, id: &str, set: fn(&mut TickInput, bool)) {
        let document = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document");
        let Some(btn) = document.get_element_by_id(id) else {
            return;
        };

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                set(&mut game.borrow_mut().input, true);
            });
            let _ =
                btn.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Releasing anywhere (or dragging off the button) stops the action
        for event_name in ["mouseup", "mouseleave"] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                set(&mut game.borrow_mut().input, false);
            });
            let _ =
                btn.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                set(&mut game.borrow_mut().input, true);
            });
            let _ = btn
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        for event_name in ["touchend", "touchcancel"] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                set(&mut game.borrow_mut().input, false);
            });
            let _ =
                btn.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_menu(game: Rc<RefCell<Game>>) {
        let document = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document");

        let presets = [
            ("btn-easy", Difficulty::Easy),
            ("btn-normal", Difficulty::Normal),
            ("btn-hard", Difficulty::Hard),
        ];
        for (id, difficulty) in presets {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    let mut g = game.borrow_mut();
                    g.settings.difficulty = difficulty;
                    g.settings.save();
                    drop(g);

                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        update_difficulty_buttons(&document, difficulty);
                    }
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }

        if let Some(btn) = document.get_element_by_id("start-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let name = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.get_element_by_id("player-name"))
                    .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
                    .map(|input| input.value())
                    .unwrap_or_default();

                {
                    let mut g = game.borrow_mut();
                    cancel_frame(&mut g);
                    g.settings.player_name = name;
                    g.settings.save();
                    g.start();
                }
                request_frame(game.clone());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_game_over(game: Rc<RefCell<Game>>) {
        let document = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document");

        if let Some(btn) = document.get_element_by_id("menu-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                g.state.phase = GamePhase::Menu;
                g.last_phase = GamePhase::Menu;
                g.renderer.show_screen(GamePhase::Menu);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Highlight the selected difficulty button
    fn update_difficulty_buttons(document: &Document, difficulty: Difficulty) {
        let presets = [
            ("btn-easy", Difficulty::Easy),
            ("btn-normal", Difficulty::Normal),
            ("btn-hard", Difficulty::Hard),
        ];
        for (id, preset) in presets {
            if let Some(btn) = document.get_element_by_id(id) {
                let class = if preset == difficulty {
                    "difficulty selected"
                } else {
                    "difficulty"
                };
                let _ = btn.set_attribute("class", class);
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
    log::info!("Turtle Hop (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    println!("\nRunning simulation smoke check...");
    smoke_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_run() {
    use turtle_hop::Difficulty;
    use turtle_hop::consts::{FRAME_UNIT, GAME_WIDTH, HITBOX_SIZE};
    use turtle_hop::sim::{GamePhase, GameState, TickInput, generate_level, tick};

    let mut state = GameState::new(Difficulty::Normal);
    generate_level(&mut state);
    state.phase = GamePhase::Playing;

    let input = TickInput {
        right: true,
        ..Default::default()
    };
    for _ in 0..600 {
        tick(&mut state, &input, FRAME_UNIT);
    }

    assert!(
        state.player.pos.x <= GAME_WIDTH - HITBOX_SIZE,
        "player escaped the playfield"
    );
    println!("✓ Simulation smoke check passed (score {})", state.score);
}
