//! Standalone flight window backed by winit.
//!
//! The viewer translates window events into [`InputEvent`]s and key
//! presses, steps the [`FlightEngine`] once per redraw, and shows the
//! flight state in the window title. Drawing the scene is left to a host
//! renderer.
//!
//! ```no_run
//! # use volo::Viewer;
//! Viewer::builder()
//!     .with_title("Volo")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::{
    error::VoloError, options::Options, scene::Scene,
    util::frame_timing::FrameTiming, FlightEngine, FrameReport, InputEvent,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    scene: Option<Scene>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "Volo", demo scene,
    /// default options).
    fn new() -> Self {
        Self {
            options: None,
            scene: None,
            title: "Volo".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Override the demo scene.
    #[must_use]
    pub fn with_scene(mut self, scene: Scene) -> Self {
        self.scene = Some(scene);
        self
    }

    /// Set the window title prefix.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            scene: self.scene.unwrap_or_else(Scene::demo),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window driving the flight simulation.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    scene: Scene,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    pub fn run(self) -> Result<(), VoloError> {
        let event_loop =
            EventLoop::new().map_err(|e| VoloError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            timing: FrameTiming::new(self.options.flight.max_frame_dt),
            options: Some(self.options),
            scene: Some(self.scene),
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| VoloError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<FlightEngine>,
    timing: FrameTiming,
    options: Option<Options>,
    scene: Option<Scene>,
    title: String,
}

fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

fn hud_title(title: &str, report: &FrameReport, fps: f32) -> String {
    let s = &report.snapshot;
    format!(
        "{title} | {:?} | speed {:.2} | alt {:.1} | yaw {:.1} pitch {:.1} \
         roll {:.1} | {fps:.0} fps",
        s.state, s.speed, s.position.y, s.yaw, s.pitch, s.roll
    )
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let (vp_w, vp_h) = viewport_size(window.inner_size());
        let options = self.options.take().unwrap_or_default();
        let scene = self.scene.take().unwrap_or_else(Scene::demo);
        self.engine = Some(FlightEngine::new(options, scene, vp_w, vp_h));

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        let (Some(window), Some(engine)) = (&self.window, &mut self.engine)
        else {
            return;
        };

        match event {
            WindowEvent::Resized(event_size) => {
                let (width, height) = viewport_size(event_size);
                engine.handle_input(InputEvent::Resized { width, height });
            }

            WindowEvent::Focused(false) => {
                engine.handle_input(InputEvent::FocusLost);
            }

            WindowEvent::RedrawRequested => {
                let dt = self.timing.tick();
                let report = engine.step(dt);
                if report.collision.collided() {
                    log::info!("collision at frame {}", report.frame);
                }
                window.set_title(&hud_title(
                    &self.title,
                    &report,
                    self.timing.fps(),
                ));
                window.request_redraw();
            }

            WindowEvent::CursorMoved { position, .. } => {
                engine.handle_input(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let scroll_delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                engine.handle_input(InputEvent::Scroll {
                    delta: scroll_delta,
                });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let pressed = event.state == ElementState::Pressed;

                if code == KeyCode::Escape && pressed {
                    event_loop.exit();
                    return;
                }

                let key_str = format!("{code:?}");
                if !engine.handle_key(&key_str, pressed) {
                    log::trace!("unbound key {key_str}");
                }
            }

            _ => (),
        }
    }
}
