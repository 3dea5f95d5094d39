//! Apple Catch entry point
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

    use apple_catch::audio::AudioManager;
    use apple_catch::consts::SIM_DT;
    use apple_catch::platform::{DomPresenter, KeyState};
    use apple_catch::renderer::{RenderState, scene};
    use apple_catch::{App, Settings, StartupError};

    const CANVAS_ID: &str = "canvas";
    const START_BTN_ID: &str = "start-btn";
    const RESTART_BTN_ID: &str = "restart-btn";

    /// Browser shell around the app context
    struct Game {
        app: App,
        settings: Settings,
        canvas: HtmlCanvasElement,
        render_state: Option<RenderState>,
        keys: KeyState,
        last_time: f64,
        /// A requestAnimationFrame callback is pending
        loop_active: bool,
        /// A restart is waiting on renderer init
        restarting: bool,
    }

    impl Game {
        /// Render the current frame
        fn render(&mut self) {
            let vertices = match self.app.state() {
                Some(state) => scene::build(state),
                None => scene::background(),
            };
            if let Some(ref mut render_state) = self.render_state {
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

        /// Tear down GPU resources once the round is over
        fn release(&mut self) {
            if self.render_state.take().is_some() {
                log::info!("Renderer released");
            }
            self.loop_active = false;
        }
    }

    /// Size the canvas backing store to its CSS size
    fn canvas_pixel_size(window: &web_sys::Window, canvas: &HtmlCanvasElement) -> (u32, u32) {
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);
        (width, height)
    }

    async fn init_renderer(canvas: &HtmlCanvasElement) -> Result<RenderState, StartupError> {
        let window = web_sys::window().ok_or(StartupError::NoWindow)?;
        let (width, height) = canvas_pixel_size(&window, canvas);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| StartupError::Surface(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| StartupError::Adapter(e.to_string()))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        RenderState::new(surface, &adapter, width, height).await
    }

    pub async fn run() -> Result<(), StartupError> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).map_err(|_| StartupError::Logger)?;

        log::info!("Apple Catch starting...");

        let window = web_sys::window().ok_or(StartupError::NoWindow)?;
        let document = window.document().ok_or(StartupError::NoDocument)?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or(StartupError::MissingElement(CANVAS_ID))?
            .dyn_into()
            .map_err(|_| StartupError::NotACanvas(CANVAS_ID))?;

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let app = App::new(
            seed,
            &settings,
            Box::new(DomPresenter::new(&document)),
            Box::new(AudioManager::new(&settings)),
        );
        log::info!("Game initialized with seed: {}", seed);

        let render_state = init_renderer(&canvas).await?;

        let game = Rc::new(RefCell::new(Game {
            app,
            settings,
            canvas,
            render_state: Some(render_state),
            keys: KeyState::default(),
            last_time: 0.0,
            loop_active: false,
            restarting: false,
        }));

        // Backdrop behind the start overlay
        game.borrow_mut().render();

        setup_input_handlers(game.clone());
        setup_start_button(game.clone());
        setup_restart_button(game.clone());
        setup_auto_mute(game);

        log::info!("Apple Catch ready, waiting for start");
        Ok(())
    }

    /// Start a round and kick the frame loop
    fn begin_round(game: &Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if g.app.round().is_running() {
                return;
            }
            g.app.start();
            g.last_time = 0.0;
            if g.loop_active {
                return;
            }
            g.loop_active = true;
        }
        request_animation_frame(game.clone());
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let key = event.key();
                if g.keys.handle_key(&key, true) {
                    // Keep arrow keys from scrolling the page
                    event.prevent_default();
                } else if key == "i" || key == "I" {
                    g.app.autopilot = !g.app.autopilot;
                    log::info!("Idle mode: {}", g.app.autopilot);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().keys.handle_key(&event.key(), false);
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: keyup events will never arrive
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().keys.release_all();
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            let input = g.keys.snapshot();
            g.app.frame(input, dt);

            if g.app.is_released() {
                g.release();
                return;
            }
            g.render();
        }

        request_animation_frame(game);
    }

    fn setup_start_button(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id(START_BTN_ID) {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                begin_round(&game);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::warn!("#{} not found, the round cannot be started", START_BTN_ID);
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id(RESTART_BTN_ID) {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let game = game.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let canvas = {
                        let mut g = game.borrow_mut();
                        if g.restarting {
                            return;
                        }
                        if g.render_state.is_some() {
                            None
                        } else {
                            g.restarting = true;
                            Some(g.canvas.clone())
                        }
                    };
                    // The previous round released its renderer
                    if let Some(canvas) = canvas {
                        let result = init_renderer(&canvas).await;
                        let mut g = game.borrow_mut();
                        g.restarting = false;
                        match result {
                            Ok(render_state) => g.render_state = Some(render_state),
                            Err(e) => {
                                log::error!("Could not restart renderer: {}", e);
                                return;
                            }
                        }
                    }
                    begin_round(&game);
                    log::info!("Round restarted");
                });
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_auto_mute(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if !game.borrow().settings.mute_on_blur {
            return;
        }

        // Visibility change (tab switch, minimize)
        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let mut g = game.borrow_mut();
            let hidden = document_clone.visibility_state() == web_sys::VisibilityState::Hidden;
            let muted = hidden || g.settings.muted;
            g.app.set_muted(muted);
            log::info!("Audio muted: {} (tab hidden: {})", muted, hidden);
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().await.map_err(|e| {
        log::error!("Start-up failed: {}", e);
        JsValue::from_str(&e.to_string())
    })
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use apple_catch::app::Silence;
    use apple_catch::hud::Presenter;
    use apple_catch::sim::FrameInput;
    use apple_catch::{App, Settings};

    /// Presenter that logs the end overlay instead of drawing it
    struct LogPresenter;

    impl Presenter for LogPresenter {
        fn set_score_text(&mut self, _text: &str) {}
        fn set_time_text(&mut self, _text: &str) {}
        fn hide_start_overlay(&mut self) {}
        fn show_end_overlay(&mut self, outcome_label: &str, score_text: &str) {
            log::info!("{} Final score: {}", outcome_label, score_text);
        }
        fn hide_end_overlay(&mut self) {}
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Apple Catch (native) starting...");
    log::info!("Native mode runs a headless demo round - run with `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    let settings = Settings::load();
    let mut app = App::new(seed, &settings, Box::new(LogPresenter), Box::new(Silence));
    app.autopilot = true;
    app.start();

    // 60 fps of simulated wall clock
    let frame_dt = 1.0 / 60.0;
    while !app.is_released() {
        app.frame(FrameInput::default(), frame_dt);
    }

    if let Some(summary) = app.round().summary() {
        match serde_json::to_string(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => log::warn!("Could not encode summary: {}", e),
        }
    }
}
