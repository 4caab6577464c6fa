use crate::app::{
    settle, FrameClock, InputHandler, LauncherError, SessionEnd, SessionRecord, TickOutcome,
};
use crate::config::{TICKS_PER_SECOND, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use crate::context::LauncherContext;
use crate::dispatch::{Dispatcher, ProgramLauncher};
use crate::render::FrameRenderer;
use crate::ui::ScreenController;
use embedded_graphics::prelude::{Point, Size};
use pixels::{Pixels, SurfaceTexture};
use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

struct WindowApp<'a, L: ProgramLauncher> {
    context: LauncherContext,
    controller: ScreenController,
    dispatcher: Dispatcher<L>,
    input: InputHandler,
    clock: FrameClock,

    pixels: Option<Pixels<'a>>,
    window: Option<Arc<Window>>,

    record: SessionRecord,
}

impl<L: ProgramLauncher> WindowApp<'_, L> {
    fn new(context: LauncherContext, dispatcher: Dispatcher<L>) -> Self {
        let controller = ScreenController::new(context.palette.clone());
        Self {
            context,
            controller,
            dispatcher,
            input: InputHandler::new(),
            clock: FrameClock::new(TICKS_PER_SECOND, Instant::now()),
            pixels: None,
            window: None,
            record: SessionRecord::default(),
        }
    }

    fn open(&mut self, event_loop: &ActiveEventLoop) -> Result<(), LauncherError> {
        let window = Arc::new(
            event_loop.create_window(
                Window::default_attributes()
                    .with_title(WINDOW_TITLE)
                    .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
                    .with_resizable(false),
            )?,
        );

        let window_size = window.inner_size();
        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, window.clone());
        self.pixels = Some(Pixels::new(WINDOW_WIDTH, WINDOW_HEIGHT, surface_texture)?);
        self.window = Some(window);

        log::info!("window open ({WINDOW_WIDTH}x{WINDOW_HEIGHT}), {TICKS_PER_SECOND} Hz");
        self.clock = FrameClock::new(TICKS_PER_SECOND, Instant::now());
        Ok(())
    }

    /* window coordinates to frame buffer coordinates; positions off the frame stay off it */
    fn frame_position(&self, position: PhysicalPosition<f64>) -> Option<Point> {
        let pixels = self.pixels.as_ref()?;
        let (x, y) = match pixels.window_pos_to_pixel((position.x as f32, position.y as f32)) {
            Ok((x, y)) => (x as i32, y as i32),
            Err((x, y)) => (x as i32, y as i32),
        };
        Some(Point::new(x, y))
    }

    fn tick(&mut self, event_loop: &ActiveEventLoop) {
        let Some(pixels) = self.pixels.as_mut() else {
            return;
        };

        let events = self.input.drain();
        let pointer = self.input.pointer();
        let state = {
            let mut renderer = FrameRenderer::new(
                pixels.frame_mut(),
                Size::new(WINDOW_WIDTH, WINDOW_HEIGHT),
                &self.context.fonts,
            );
            self.controller.tick(events, pointer, &mut renderer)
        };

        match settle(state, &self.dispatcher) {
            TickOutcome::Present => {
                if let Err(error) = pixels.render() {
                    self.record.fail(error);
                    self.close(event_loop);
                }
            }
            TickOutcome::Hold => (),
            TickOutcome::Finish(end) => {
                self.record.finish(end);
                self.close(event_loop);
            }
        }
    }

    /* releases the surface and the window before the loop winds down */
    fn close(&mut self, event_loop: &ActiveEventLoop) {
        self.pixels = None;
        self.window = None;
        event_loop.exit();
    }
}

impl<L: ProgramLauncher> ApplicationHandler for WindowApp<'_, L> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || event_loop.exiting() {
            return;
        }
        if let Err(error) = self.open(event_loop) {
            self.record.fail(error);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.input.close_requested(),
            WindowEvent::CursorMoved { position, .. } => {
                if let Some(point) = self.frame_position(position) {
                    self.input.pointer_moved(point);
                }
            }
            WindowEvent::CursorLeft { .. } => self.input.pointer_left(),
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => self.input.pointer_pressed(),
            WindowEvent::Resized(size) => {
                if let Some(pixels) = self.pixels.as_mut() {
                    if let Err(error) = pixels.resize_surface(size.width, size.height) {
                        self.record.fail(error);
                        self.close(event_loop);
                    }
                }
            }
            /* the OS asked for a repaint between ticks: show the last frame again */
            WindowEvent::RedrawRequested => {
                if let Some(pixels) = self.pixels.as_ref() {
                    if let Err(error) = pixels.render() {
                        log::warn!("could not redraw frame: {error}");
                    }
                }
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if event_loop.exiting() || self.window.is_none() {
            return;
        }

        let now = Instant::now();
        if self.clock.is_due(now) {
            self.tick(event_loop);
            self.clock.advance(now);
        }

        if !event_loop.exiting() {
            event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.next_tick()));
        }
    }
}

/**
 * Opens the launcher window and runs the menu until the user closes it, picks exit, or a
 * simulator is started. The window is gone by the time this returns.
 */
pub fn run<L: ProgramLauncher>(
    context: LauncherContext,
    dispatcher: Dispatcher<L>,
) -> Result<SessionEnd, LauncherError> {
    let event_loop = EventLoop::new()?;
    let mut app = WindowApp::new(context, dispatcher);
    event_loop.run_app(&mut app)?;

    app.record.into_result()
}
