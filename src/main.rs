//! Brick Breaker entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use brick_breaker::platform::input::to_playfield_x;
    use brick_breaker::platform::{Direction, FrameClock, InputSource, InputState};
    use brick_breaker::renderer::{RenderState, build_scene};
    use brick_breaker::sim::{GameEvent, GameState, tick};
    use brick_breaker::{InitError, Settings, Tuning};

    const CANVAS_ID: &str = "gameCanvas";
    const START_BUTTON_ID: &str = "startButton";
    const LEFT_BUTTON_ID: &str = "leftBtn";
    const RIGHT_BUTTON_ID: &str = "rightBtn";
    const SCORE_ID: &str = "score";
    const LIVES_ID: &str = "lives";
    const FPS_ID: &str = "fps";
    const FPS_BOX_ID: &str = "fpsBox";

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        input: InputState,
        clock: FrameClock,
        settings: Settings,
        document: Document,
        /// A requestAnimationFrame callback is queued
        frame_pending: bool,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(settings: Settings, document: Document) -> Self {
            Self {
                state: GameState::new(Tuning::default()),
                render_state: None,
                input: InputState::new(settings.pointer_control),
                clock: FrameClock::new(settings.fixed_timestep),
                settings,
                document,
                frame_pending: false,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Start button: begin from Idle/Stopped, restart while running
        fn press_start(&mut self) {
            if self.state.is_running() {
                self.state.restart();
            } else {
                self.state.start();
                self.clock.reset();
            }
            self.input.clear_pointer();
        }

        /// Run however many simulation steps this frame is worth
        fn update(&mut self, time: f64) {
            let steps = self.clock.advance(time);
            for _ in 0..steps {
                let input = self.input.take_tick_input(&self.state);
                tick(&mut self.state, &input);
            }

            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (59_000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                let vertices = build_scene(&self.state);
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        fn set_text(&self, id: &str, text: &str) {
            if let Some(el) = self.document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        }

        /// Push simulation notifications to the page
        fn flush_events(&mut self) {
            for event in self.state.drain_events() {
                match event {
                    GameEvent::ScoreChanged(score) => self.set_text(SCORE_ID, &score.to_string()),
                    GameEvent::LivesChanged(lives) => self.set_text(LIVES_ID, &lives.to_string()),
                    GameEvent::Won => {
                        log::info!("Player won");
                        alert("Congratulations! You cleared every brick!");
                    }
                    GameEvent::GameOver => {
                        log::info!("Player lost");
                        alert("Game over! Try again.");
                    }
                    GameEvent::BrickBroken { column, row } => {
                        log::debug!("Brick ({}, {}) broken", column, row);
                    }
                    GameEvent::PaddleHit | GameEvent::BallLost => {
                        log::debug!("{:?}", event);
                    }
                }
            }

            let label = if self.state.is_running() { "Restart" } else { "Start" };
            self.set_text(START_BUTTON_ID, label);
            if self.settings.show_fps {
                self.set_text(FPS_ID, &self.fps.to_string());
            }
        }
    }

    fn alert(message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    pub async fn run() -> Result<(), InitError> {
        log::info!("Brick Breaker starting...");

        let window = web_sys::window().ok_or(InitError::NoWindow)?;
        let document = window.document().ok_or(InitError::NoDocument)?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or(InitError::MissingElement(CANVAS_ID))?
            .dyn_into()
            .map_err(|_| InitError::NotACanvas(CANVAS_ID))?;

        let settings = Settings::load();
        // Write back so fields added since the last visit show up in storage
        settings.save();
        log::info!("Settings: {:?}", settings);
        if settings.show_fps {
            if let Some(el) = document.get_element_by_id(FPS_BOX_ID) {
                let _ = el.remove_attribute("hidden");
            }
        }
        let game = Rc::new(RefCell::new(Game::new(settings, document.clone())));

        // Backing store matches the playfield aspect at device resolution
        let (playfield_w, playfield_h) = {
            let g = game.borrow();
            (g.state.tuning.playfield_width, g.state.tuning.playfield_height)
        };
        let dpr = window.device_pixel_ratio();
        let width = (playfield_w as f64 * dpr) as u32;
        let height = (playfield_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Initialize WebGPU (WebGL fallback)
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(
            surface,
            &adapter,
            width,
            height,
            glam::Vec2::new(playfield_w, playfield_h),
        )
        .await?;

        {
            let mut g = game.borrow_mut();
            g.render_state = Some(render_state);
            // Show the board and counters before the first start
            g.state.reset();
            g.flush_events();
            g.render();
        }

        setup_keyboard(&document, game.clone());
        setup_pointer(&document, &canvas, game.clone());
        setup_hold_button(&document, LEFT_BUTTON_ID, Direction::Left, game.clone());
        setup_hold_button(&document, RIGHT_BUTTON_ID, Direction::Right, game.clone());
        setup_start_button(&document, game);

        log::info!("Brick Breaker ready");
        Ok(())
    }

    fn setup_keyboard(document: &Document, game: Rc<RefCell<Game>>) {
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let key = event.key();
                if g.input.key_down(&key) {
                    event.prevent_default();
                } else if key == "i" || key == "I" {
                    let on = g.input.toggle_demo();
                    log::info!("Demo mode: {}", on);
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().input.key_up(&event.key()) {
                    event.prevent_default();
                }
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Pointer x relative to the canvas, in playfield units
    fn canvas_x(canvas: &HtmlCanvasElement, client_x: i32, playfield_w: f32) -> f32 {
        let rect = canvas.get_bounding_client_rect();
        to_playfield_x(
            client_x as f32 - rect.left() as f32,
            rect.width() as f32,
            playfield_w,
        )
    }

    fn setup_pointer(document: &Document, canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move anywhere on the page, like the keyboard
        {
            let game = game.clone();
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                let Game { state, input, .. } = &mut *g;
                let x = canvas_x(&canvas, event.client_x(), state.tuning.playfield_width);
                input.pointer_moved(x, state);
            });
            let _ = document
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch drag on the canvas
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    event.prevent_default();
                    let mut g = game.borrow_mut();
                    let Game { state, input, .. } = &mut *g;
                    let x = canvas_x(&canvas_clone, touch.client_x(), state.tuning.playfield_width);
                    input.pointer_moved(x, state);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// On-screen button that holds a direction while pressed
    fn setup_hold_button(
        document: &Document,
        id: &'static str,
        direction: Direction,
        game: Rc<RefCell<Game>>,
    ) {
        let Some(btn) = document.get_element_by_id(id) else {
            log::warn!("No #{} button, touch controls disabled", id);
            return;
        };

        let bindings: [(&str, InputSource, bool); 6] = [
            ("touchstart", InputSource::Touch, true),
            ("touchend", InputSource::Touch, false),
            ("touchcancel", InputSource::Touch, false),
            ("mousedown", InputSource::Mouse, true),
            ("mouseup", InputSource::Mouse, false),
            ("mouseleave", InputSource::Mouse, false),
        ];

        for (name, source, pressed) in bindings {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let mut g = game.borrow_mut();
                if pressed {
                    g.input.press(direction, source);
                } else {
                    g.input.release(direction, source);
                }
            });
            let _ = btn.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_start_button(document: &Document, game: Rc<RefCell<Game>>) {
        let Some(btn) = document.get_element_by_id(START_BUTTON_ID) else {
            log::warn!("No #{} button, game cannot be started", START_BUTTON_ID);
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let schedule = {
                let mut g = game.borrow_mut();
                g.press_start();
                g.flush_events();
                let schedule = !g.frame_pending;
                g.frame_pending = true;
                schedule
            };
            if schedule {
                request_animation_frame(game.clone());
            }
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let keep_running = {
            let mut g = game.borrow_mut();
            g.render();
            g.update(time);
            g.flush_events();

            if g.state.is_running() {
                true
            } else {
                // Show the reset board; no further frames until the next start
                g.render();
                g.frame_pending = false;
                false
            }
        };

        if keep_running {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    if let Err(e) = wasm_game::run().await {
        log::error!("Startup failed: {}", e);
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&format!("Brick Breaker cannot start: {}", e));
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Brick Breaker (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    run_headless_demo(20_000);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Let the autopilot play a game without a display and report the result
#[cfg(not(target_arch = "wasm32"))]
fn run_headless_demo(max_ticks: u32) {
    use brick_breaker::sim::{GameEvent, GameState, autopilot_input, tick};

    let mut state = GameState::default();
    state.start();
    state.drain_events();

    let mut best_score = 0;
    let mut outcome = "time limit reached";
    for _ in 0..max_ticks {
        let input = autopilot_input(&state);
        tick(&mut state, &input);
        for event in state.drain_events() {
            match event {
                GameEvent::ScoreChanged(score) => best_score = best_score.max(score),
                GameEvent::LivesChanged(lives) => log::info!("Lives: {}", lives),
                GameEvent::Won => outcome = "won",
                GameEvent::GameOver => outcome = "game over",
                _ => {}
            }
        }
        if !state.is_running() {
            break;
        }
    }

    println!(
        "Autopilot finished: {} (best score {}/{}, {} ticks)",
        outcome,
        best_score,
        state.tuning.total_bricks(),
        state.time_ticks
    );
}
