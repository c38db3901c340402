//! Seek Canvas entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent};

    use seek_canvas::consts::*;
    use seek_canvas::platform::{
        FrameClock, MOUSE_EVENTS, SetupError, TOUCH_EVENTS, pointer_event, to_surface_coords,
        touch_offset,
    };
    use seek_canvas::renderer::{Canvas2d, Style};
    use seek_canvas::sim::{GameState, PointerEvent, TickInput};
    use seek_canvas::{Settings, run_frame};

    /// App instance holding all state
    struct App {
        state: GameState,
        surface: Canvas2d,
        style: Style,
        /// Pointer events since the last frame
        input: TickInput,
        clock: FrameClock,
        log_fps: bool,
    }

    impl App {
        fn new(settings: &Settings, ctx: CanvasRenderingContext2d) -> Self {
            Self {
                state: GameState::new(SURFACE_WIDTH, SURFACE_HEIGHT, settings),
                surface: Canvas2d::new(ctx),
                style: Style::from_settings(settings),
                input: TickInput::default(),
                clock: FrameClock::new(),
                log_fps: settings.log_fps,
            }
        }

        fn frame(&mut self, time: f64) {
            run_frame(&mut self.state, &self.input, &mut self.surface, &self.style);
            self.input.clear();

            let fps = self.clock.record(time);
            if self.log_fps && self.clock.should_report(self.state.frame_count) {
                if let Some(fps) = fps {
                    log::info!("{} fps (frame {})", fps, self.state.frame_count);
                }
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        // Settings pick the log level, so they load before the logger exists
        let settings = Settings::load();
        if let Err(e) = console_log::init_with_level(settings.log_level()) {
            web_sys::console::warn_1(&format!("logger init failed: {}", e).into());
        }

        log::info!("Seek Canvas starting...");
        log::info!("Settings: {:?}", settings);

        let (canvas, ctx) = match setup_canvas() {
            Ok(found) => found,
            Err(e) => {
                log::error!("Canvas setup failed: {}", e);
                return Err(e.into());
            }
        };

        // Write back so every field is present for hand editing
        settings.save();

        let app = Rc::new(RefCell::new(App::new(&settings, ctx)));
        setup_input_handlers(&canvas, app.clone());

        // Start frame loop
        request_animation_frame(app);

        log::info!("Seek Canvas running!");
        Ok(())
    }

    fn setup_canvas() -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), SetupError> {
        let window = web_sys::window().ok_or(SetupError::NoWindow)?;
        let document = window.document().ok_or(SetupError::NoDocument)?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| SetupError::CanvasNotFound(CANVAS_ID.to_string()))?
            .dyn_into()
            .map_err(|_| SetupError::NotACanvas(CANVAS_ID.to_string()))?;

        canvas.set_width(SURFACE_WIDTH);
        canvas.set_height(SURFACE_HEIGHT);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .ok_or(SetupError::ContextUnavailable)?
            .dyn_into()
            .map_err(|_| SetupError::ContextUnavailable)?;

        Ok((canvas, ctx))
    }

    fn mouse_pos(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Vec2 {
        let offset = Vec2::new(event.offset_x() as f32, event.offset_y() as f32);
        surface_pos(canvas, offset)
    }

    /// First changed touch, relative to the canvas padding edge
    fn touch_pos(canvas: &HtmlCanvasElement, event: &TouchEvent) -> Option<Vec2> {
        let touch = event.changed_touches().get(0)?;
        let rect = canvas.get_bounding_client_rect();
        let offset = touch_offset(
            Vec2::new(touch.client_x() as f32, touch.client_y() as f32),
            Vec2::new(rect.left() as f32, rect.top() as f32),
            Vec2::new(canvas.client_left() as f32, canvas.client_top() as f32),
        );
        Some(surface_pos(canvas, offset))
    }

    fn surface_pos(canvas: &HtmlCanvasElement, offset: Vec2) -> Vec2 {
        let client = Vec2::new(canvas.client_width() as f32, canvas.client_height() as f32);
        let surface = Vec2::new(canvas.width() as f32, canvas.height() as f32);
        to_surface_coords(offset, client, surface)
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        for name in MOUSE_EVENTS {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let Some(event) = pointer_event(name, mouse_pos(&canvas_clone, &event)) else {
                    return;
                };
                if !matches!(event, PointerEvent::Move(_)) {
                    log::debug!("{:?}", event);
                }
                app.borrow_mut().input.push(event);
            });
            let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        for name in TOUCH_EVENTS {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let event = touch_pos(&canvas_clone, &event).and_then(|pos| pointer_event(name, pos));
                if let Some(event) = event {
                    app.borrow_mut().input.push(event);
                }
            });
            let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window gone, frame loop stopped");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            frame_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>, time: f64) {
        app.borrow_mut().frame(time);
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_app::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;
    use seek_canvas::consts::*;
    use seek_canvas::renderer::{DisplayList, Style};
    use seek_canvas::sim::{GameState, PointerEvent, TickInput};
    use seek_canvas::{Settings, run_frame};

    env_logger::init();
    log::info!("Seek Canvas (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    let settings = Settings::load();
    let style = Style::from_settings(&settings);
    let mut state = GameState::new(SURFACE_WIDTH, SURFACE_HEIGHT, &settings);
    let mut list = DisplayList::new();

    // Drag the pointer to a corner and let the player chase it
    let target = Vec2::new(100.0, 100.0);
    let mut input = TickInput::default();
    input.push(PointerEvent::Down(target));
    input.push(PointerEvent::Up(target));

    let max_frames = 10_000;
    let mut draw_calls = 0;
    while state.frame_count < max_frames {
        // One frame's commands at a time
        list.reset();
        run_frame(&mut state, &input, &mut list, &style);
        draw_calls += list.len();
        input.clear();
        if state.player.is_resting() {
            break;
        }
        log::trace!("frame {}: {:?}", state.frame_count, state.player.pos);
    }

    log::info!(
        "Player at {:?} after {} frames ({} draw calls), {:.2}px from pointer",
        state.player.pos,
        state.frame_count,
        draw_calls,
        state.player.pos.distance(state.pointer.pos)
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
