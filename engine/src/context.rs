use std::num::NonZeroU32;
use std::rc::Rc;
use std::time::Instant;

use softbuffer::Surface;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::{Canvas, EngineError, FrameClock, InputState};

/// What the event loop should do after a scene update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Something the engine drives once per paced frame.
pub trait Scene {
    fn update(&mut self, input: &InputState, delta_time: f32) -> anyhow::Result<Flow>;

    fn draw(&self, canvas: &mut Canvas);
}

#[derive(Debug, Clone)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
}

struct Graphics {
    window: Rc<Window>,
    surface: Surface<Rc<Window>, Rc<Window>>,
    size: PhysicalSize<u32>,
}

enum State {
    Init,
    Ready(Graphics),
}

struct App<S> {
    state: State,
    settings: WindowSettings,
    scene: S,
    canvas: Canvas,
    input: InputState,
    clock: FrameClock,
    pending_delta: Option<f32>,
    failure: Option<EngineError>,
}

impl<S: Scene> App<S> {
    fn new(settings: WindowSettings, scene: S) -> Self {
        Self {
            state: State::Init,
            canvas: Canvas::new(settings.width, settings.height),
            clock: FrameClock::new(settings.fps),
            input: InputState::new(),
            pending_delta: None,
            failure: None,
            settings,
            scene,
        }
    }

    fn create_graphics(&self, event_loop: &ActiveEventLoop) -> Result<Graphics, EngineError> {
        let size = PhysicalSize::new(self.settings.width, self.settings.height);
        let win_attr = Window::default_attributes()
            .with_title(self.settings.title.clone())
            .with_inner_size(size)
            .with_resizable(false);

        let window = Rc::new(event_loop.create_window(win_attr)?);
        let context = softbuffer::Context::new(window.clone())?;
        let surface = Surface::new(&context, window.clone())?;

        Ok(Graphics {
            window,
            surface,
            size: PhysicalSize::new(0, 0),
        })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: EngineError) {
        log::error!("{error}");
        self.failure = Some(error);
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(delta_time) = self.pending_delta.take() {
            match self.scene.update(&self.input, delta_time) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => {
                    event_loop.exit();
                    return;
                }
                Err(e) => {
                    self.fail(event_loop, EngineError::Scene(e));
                    return;
                }
            }
            self.input.end_frame();
        }

        self.scene.draw(&mut self.canvas);

        if let Err(e) = self.present() {
            self.fail(event_loop, e);
        }
    }

    fn present(&mut self) -> Result<(), EngineError> {
        let State::Ready(gfx) = &mut self.state else {
            return Ok(());
        };

        let size = gfx.window.inner_size();
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            // minimized
            return Ok(());
        };

        if size != gfx.size {
            gfx.surface.resize(width, height)?;
            gfx.size = size;
        }

        let mut buffer = gfx.surface.buffer_mut()?;
        self.canvas.blit_into(&mut buffer, size.width, size.height);
        gfx.window.pre_present_notify();
        buffer.present()?;
        Ok(())
    }
}

impl<S: Scene> ApplicationHandler for App<S> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let State::Init = self.state {
            match self.create_graphics(event_loop) {
                Ok(gfx) => {
                    self.clock = FrameClock::new(self.settings.fps);
                    log::info!(
                        "window ready ({}x{}, {:?} per frame)",
                        self.settings.width,
                        self.settings.height,
                        self.clock.interval()
                    );
                    gfx.window.request_redraw();
                    self.state = State::Ready(gfx);
                }
                Err(e) => self.fail(event_loop, e),
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                if code == KeyCode::Escape && event.state == ElementState::Pressed {
                    event_loop.exit();
                    return;
                }
                self.input.record(code, event.state, event.repeat);
            }
            WindowEvent::Focused(false) => self.input.release_all(),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let State::Ready(gfx) = &self.state else {
            return;
        };

        let now = Instant::now();
        if self.clock.is_due(now) {
            let delta_time = self.clock.tick(now);
            // a frame that never got drawn still counts towards game time
            *self.pending_delta.get_or_insert(0.0) += delta_time;
            gfx.window.request_redraw();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.deadline()));
    }
}

pub struct EngineContext {
    settings: WindowSettings,
    event_loop: EventLoop<()>,
}

impl EngineContext {
    pub fn new(settings: WindowSettings) -> Result<Self, EngineError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        Ok(Self {
            settings,
            event_loop,
        })
    }

    /// Runs `scene` on the current thread until the window is closed, Escape
    /// is pressed, the scene asks to exit, or something fails.
    pub fn run<S: Scene>(self, scene: S) -> Result<(), EngineError> {
        let mut app = App::new(self.settings, scene);
        self.event_loop.run_app(&mut app)?;

        match app.failure.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
