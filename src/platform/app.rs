//! Native window and frame loop
//!
//! One frame = collect input → tick → build geometry → render → present.
//! Startup failures (event loop, window, surface, adapter, device) are fatal and
//! reported back to `main` as errors.

use std::sync::Arc;

use anyhow::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Fullscreen, Window, WindowId};

use super::FrameClock;
use super::input::{Button, InputState};
use super::viewport::Viewport;
use crate::renderer::{RenderState, build_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickOutcome, tick};

const WINDOW_TITLE: &str = "Square Dash";
const WINDOWED_SIZE: LogicalSize<f64> = LogicalSize::new(1280.0, 720.0);

/// Window and GPU resources, created once the event loop is running
struct Graphics {
    window: Arc<Window>,
    render: RenderState,
}

/// Game instance holding all state
struct App {
    settings: Settings,
    state: GameState,
    input: InputState,
    viewport: Viewport,
    clock: FrameClock,
    graphics: Option<Graphics>,
    startup_error: Option<anyhow::Error>,
}

impl App {
    fn new(settings: Settings) -> Self {
        let seed = settings.resolve_seed();
        log::info!("Game initialized with seed: {}", seed);
        Self {
            settings,
            state: GameState::new(seed),
            input: InputState::new(),
            viewport: Viewport::default(),
            clock: FrameClock::new(),
            graphics: None,
            startup_error: None,
        }
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<Graphics> {
        let mut attributes = Window::default_attributes().with_title(WINDOW_TITLE);
        if self.settings.fullscreen {
            attributes =
                attributes.with_fullscreen(Some(Fullscreen::Borderless(event_loop.primary_monitor())));
        } else {
            attributes = attributes.with_inner_size(WINDOWED_SIZE);
        }

        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("failed to create window")?,
        );
        let size = window.inner_size();
        log::info!("Window created: {}x{}", size.width, size.height);

        self.viewport.resize(size.width, size.height);
        self.state.set_visible_width(self.viewport.visible_width);

        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window.clone())
            .context("failed to create rendering surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("no compatible graphics adapter")?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            size.width,
            size.height,
            self.settings.vsync,
            self.viewport.projection(),
        ))?;

        Ok(Graphics { window, render })
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.viewport.resize(width, height);
        self.state.set_visible_width(self.viewport.visible_width);
        if let Some(graphics) = self.graphics.as_mut() {
            graphics
                .render
                .resize(width, height, self.viewport.projection());
        }
        log::info!(
            "Resized to {}x{} (visible width {:.2})",
            width,
            height,
            self.viewport.visible_width
        );
    }

    /// Run one frame; returns false when the game asked to quit
    fn frame(&mut self) -> bool {
        let dt = self.clock.tick();
        let input = self.input.take_frame_input(&self.viewport);
        let phase = self.state.phase;
        let result = tick(&mut self.state, &input, dt);
        if self.state.phase != phase {
            log::info!("Phase: {} -> {}", phase.as_str(), self.state.phase.as_str());
        }

        for event in &result.events {
            self.log_event(event);
        }

        if result.outcome == TickOutcome::Quit {
            return false;
        }

        let Some(graphics) = self.graphics.as_mut() else {
            return true;
        };
        let frame = build_frame(
            &self.state,
            self.viewport.visible_width,
            self.settings.show_hud,
        );
        match graphics.render.render(&frame) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                graphics.render.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
        true
    }

    fn log_event(&self, event: &GameEvent) {
        match event {
            GameEvent::RunStarted => log::info!("Run started"),
            GameEvent::Jumped => log::trace!("Jump at x={:.2}", self.state.player.x()),
            GameEvent::ObstacleSpawned(kind) => log::debug!(
                "Spawned {} ({} live)",
                kind.as_str(),
                self.state.obstacles.len()
            ),
            GameEvent::LevelUp { level } => log::info!(
                "Level {} (speed {:.1})",
                level,
                self.state.player_speed
            ),
            GameEvent::GameOver(cause) => {
                log::info!(
                    "Game over at level {} after {:.1}s: {:?}",
                    self.state.level,
                    self.state.level_time,
                    cause
                );
                match serde_json::to_string(&self.state.summary(*cause)) {
                    Ok(json) => log::debug!("Run summary: {}", json),
                    Err(e) => log::warn!("Could not serialize run summary: {}", e),
                }
            }
            GameEvent::ReturnedToMenu => log::info!("Back to menu"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() {
            return;
        }
        match self.init_graphics(event_loop) {
            Ok(graphics) => {
                self.graphics = Some(graphics);
                self.clock = FrameClock::new();
            }
            Err(e) => {
                log::error!("Startup failed: {:#}", e);
                self.startup_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(graphics) = &self.graphics {
            graphics.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting.");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => self.resize(size.width, size.height),

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key
                    && let Some(button) = Button::from_key(code)
                {
                    self.input.button(button, event.state);
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(button) = Button::from_mouse(button) {
                    self.input.button(button, state);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.input.cursor_moved(position.x, position.y);
            }

            WindowEvent::RedrawRequested => {
                if !self.frame() {
                    log::info!("Quit requested, exiting.");
                    event_loop.exit();
                }
            }

            _ => {}
        }
    }
}

/// Open the window and run the frame loop until the player quits
pub fn run(settings: Settings) -> anyhow::Result<()> {
    let event_loop = EventLoop::new().context("failed to initialize windowing system")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(settings);
    event_loop.run_app(&mut app).context("event loop error")?;

    match app.startup_error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
