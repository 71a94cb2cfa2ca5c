//! Frame-stepped flight engine.
//!
//! [`FlightEngine`] owns the controller, the scene registry and the input
//! processor, and runs exactly one update pass per frame:
//!
//! input sampling → physics/orientation update → bounding-volume refresh →
//! collision test → (conditional) rollback.
//!
//! The renderer reads [`FlightEngine::snapshot`] or
//! [`FlightEngine::uniform`] after [`FlightEngine::step`] returns.

/// Flight command vocabulary.
pub mod command;

pub use command::FlightCommand;

use crate::camera::controller::{FlightController, FlightSnapshot};
use crate::camera::core::CameraUniform;
use crate::collision::{resolve_frame, CollisionOutcome};
use crate::input::{InputEvent, InputProcessor};
use crate::options::Options;
use crate::scene::{Scene, SceneRegistry};

/// Result of one frame's update pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Frame counter, starting at 1.
    pub frame: u64,
    /// Delta time actually simulated, in seconds.
    pub dt: f32,
    /// Collision outcome for the frame.
    pub collision: CollisionOutcome,
    /// Controller state after the pass.
    pub snapshot: FlightSnapshot,
}

/// Single-threaded owner of the flight simulation.
pub struct FlightEngine<S: SceneRegistry = Scene> {
    controller: FlightController,
    scene: S,
    input: InputProcessor,
    options: Options,
    frame: u64,
}

impl<S: SceneRegistry> FlightEngine<S> {
    /// Build an engine for a `width` x `height` viewport.
    #[must_use]
    pub fn new(options: Options, scene: S, width: u32, height: u32) -> Self {
        let controller = FlightController::new(&options, width, height);
        let input = InputProcessor::with_key_bindings(options.keybindings.clone());
        log::info!(
            "flight engine ready: {} scene objects, start {}",
            scene.objects().len(),
            controller.position()
        );
        Self {
            controller,
            scene,
            input,
            options,
            frame: 0,
        }
    }

    /// Options the engine was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The flight controller.
    #[must_use]
    pub fn controller(&self) -> &FlightController {
        &self.controller
    }

    /// Mutable access to the flight controller.
    pub fn controller_mut(&mut self) -> &mut FlightController {
        &mut self.controller
    }

    /// The scene registry.
    #[must_use]
    pub fn scene(&self) -> &S {
        &self.scene
    }

    /// The input processor.
    #[must_use]
    pub fn input(&self) -> &InputProcessor {
        &self.input
    }

    /// Mutable access to the input processor.
    pub fn input_mut(&mut self) -> &mut InputProcessor {
        &mut self.input
    }

    /// Record a key press or release. Returns whether the key is bound.
    pub fn handle_key(&mut self, key: &str, pressed: bool) -> bool {
        self.input.handle_key(key, pressed)
    }

    /// Queue a raw input event for the next frame.
    pub fn handle_input(&mut self, event: InputEvent) {
        self.input.handle_event(event);
    }

    /// Apply one command immediately. `dt` scales held movement.
    pub fn execute(&mut self, command: FlightCommand, dt: f32) {
        let c = &mut self.controller;
        match command {
            FlightCommand::Move(movement) => c.process_movement(movement, dt),
            FlightCommand::TakeOff => {
                let _ = c.take_off();
            }
            FlightCommand::Land => {
                let _ = c.land();
            }
            FlightCommand::Reset => c.reset(),
            FlightCommand::ToggleProjection => c.toggle_projection(),
            FlightCommand::Look { x, y } => c.look(x, y),
            FlightCommand::Zoom { delta } => c.zoom(delta),
            FlightCommand::Resize { width, height } => c.resize(width, height),
        }
    }

    /// Run one frame's update pass with `dt` seconds of elapsed time.
    ///
    /// `dt` is clamped to `[0, flight.max_frame_dt]`. If the proposed motion
    /// overlaps any scene object, the position from before this call is
    /// restored and speed drops to zero.
    pub fn step(&mut self, dt: f32) -> FrameReport {
        let dt = dt.max(0.0).min(self.controller.params().max_frame_dt);
        self.frame += 1;

        let pre_position = self.controller.position();
        for command in self.input.frame_commands() {
            self.execute(command, dt);
        }
        self.controller.update(dt);

        let collision =
            resolve_frame(&mut self.controller, pre_position, &self.scene);

        FrameReport {
            frame: self.frame,
            dt,
            collision,
            snapshot: self.controller.snapshot(),
        }
    }

    /// Read-only controller snapshot for the renderer.
    #[must_use]
    pub fn snapshot(&self) -> FlightSnapshot {
        self.controller.snapshot()
    }

    /// GPU camera uniform for the renderer.
    #[must_use]
    pub fn uniform(&self) -> CameraUniform {
        self.controller.uniform()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::controller::{FlightState, Movement};
    use crate::collision::BoundingSphere;
    use crate::scene::SceneObject;

    fn engine(scene: Scene) -> FlightEngine {
        let mut options = Options::default();
        options.flight.start_position = Vec3::ZERO;
        FlightEngine::new(options, scene, 1280, 720)
    }

    /// Hold W until take-off speed, then press Space.
    fn take_off(engine: &mut FlightEngine) {
        assert!(engine.handle_key("KeyW", true));
        while engine.controller().speed()
            < engine.controller().params().takeoff_speed
        {
            let _ = engine.step(0.1);
        }
        assert!(engine.handle_key("KeyW", false));
        assert!(engine.handle_key("Space", true));
        let report = engine.step(0.016);
        assert_eq!(report.snapshot.state, FlightState::Flying);
        assert!(engine.handle_key("Space", false));
    }

    #[test]
    fn taxi_then_take_off_and_climb() {
        let mut e = engine(Scene::default());
        take_off(&mut e);

        let before = e.snapshot();
        for _ in 0..30 {
            let _ = e.step(0.05);
        }
        let after = e.snapshot();
        assert!(after.position.y > before.position.y);
        assert!(after.pitch > before.pitch);
        assert!(after.speed >= before.speed);
    }

    #[test]
    fn early_take_off_is_rejected() {
        let mut e = engine(Scene::default());
        assert!(e.handle_key("Space", true));
        let report = e.step(0.016);
        assert_eq!(report.snapshot.state, FlightState::Grounded);
    }

    #[test]
    fn zero_dt_frame_changes_nothing() {
        let mut e = engine(Scene::default());
        take_off(&mut e);
        let before = e.snapshot();
        let report = e.step(0.0);
        assert_eq!(report.snapshot, before);
        assert_eq!(report.collision, CollisionOutcome::Clear);
    }

    #[test]
    fn negative_dt_is_clamped() {
        let mut e = engine(Scene::default());
        let report = e.step(-5.0);
        assert_eq!(report.dt, 0.0);
        let report = e.step(5.0);
        assert_eq!(report.dt, e.options().flight.max_frame_dt);
    }

    #[test]
    fn collision_rolls_back_whole_frame() {
        // Obstacle straddling the runway a few units ahead.
        let scene = Scene::from_objects(vec![SceneObject::new(
            "hangar",
            Vec3::new(0.0, 0.0, -8.0),
            Vec3::ONE,
            BoundingSphere::new(Vec3::ZERO, 4.0),
        )]);
        let mut e = engine(scene);
        assert!(e.handle_key("KeyW", true));

        let mut collided = None;
        for _ in 0..400 {
            let pre = e.snapshot().position;
            let report = e.step(0.1);
            if report.collision.collided() {
                collided = Some((pre, report));
                break;
            }
        }

        let (pre, report) = collided.unwrap();
        assert_eq!(report.collision, CollisionOutcome::Collided { index: 0 });
        assert_eq!(report.snapshot.position, pre);
        assert_eq!(report.snapshot.speed, 0.0);
    }

    /// Fly the aircraft to `altitude` straight above an obstacle sitting on
    /// the ground at the origin.
    fn hover_over_obstacle(altitude: f32) -> FlightEngine {
        let scene = Scene::from_objects(vec![SceneObject::new(
            "bunker",
            Vec3::ZERO,
            Vec3::ONE,
            BoundingSphere::new(Vec3::ZERO, 10.0),
        )]);
        let mut e = engine(scene);
        let c = e.controller_mut();
        c.accelerate(100.0);
        assert!(c.take_off());
        c.rollback(Vec3::new(0.0, altitude, 0.0));

        let report = e.step(0.0);
        assert_eq!(report.collision, CollisionOutcome::Clear);
        assert_eq!(report.snapshot.position.y, altitude);
        e
    }

    #[test]
    fn landing_onto_obstacle_stays_grounded() {
        let mut e = hover_over_obstacle(30.0);
        assert!(e.handle_key("KeyL", true));
        let report = e.step(0.0);

        assert_eq!(report.collision, CollisionOutcome::Collided { index: 0 });
        assert_eq!(report.snapshot.state, FlightState::Grounded);
        assert_eq!(report.snapshot.position.y, 0.0);
        assert_eq!(report.snapshot.speed, 0.0);
    }

    #[test]
    fn reset_onto_obstacle_stays_grounded() {
        let mut e = hover_over_obstacle(30.0);
        assert!(e.handle_key("KeyR", true));
        let report = e.step(0.0);

        assert_eq!(report.collision, CollisionOutcome::Collided { index: 0 });
        assert_eq!(report.snapshot.state, FlightState::Grounded);
        assert_eq!(report.snapshot.position.y, 0.0);

        // taxiing afterwards stays on the ground
        assert!(e.handle_key("KeyR", false));
        assert!(e.handle_key("KeyW", true));
        for _ in 0..5 {
            assert_eq!(e.step(0.1).snapshot.position.y, 0.0);
        }
    }

    #[test]
    fn pointer_and_zoom_flow_through_input() {
        let mut e = engine(Scene::default());
        take_off(&mut e);
        let yaw = e.snapshot().yaw;

        e.handle_input(InputEvent::CursorMoved { x: 100.0, y: 100.0 });
        e.handle_input(InputEvent::CursorMoved { x: 105.0, y: 100.0 });
        e.handle_input(InputEvent::Scroll { delta: 5.0 });
        let report = e.step(0.0);

        assert!((report.snapshot.yaw - (yaw + 0.5)).abs() < 1e-5);
        assert_eq!(report.snapshot.fovy, 40.0);
    }

    #[test]
    fn land_and_reset_commands() {
        let mut e = engine(Scene::default());
        take_off(&mut e);
        let _ = e.step(0.1);

        e.execute(FlightCommand::Land, 0.0);
        let snap = e.snapshot();
        assert_eq!(snap.state, FlightState::Grounded);
        assert_eq!((snap.pitch, snap.roll, snap.speed), (0.0, 0.0, 0.0));

        e.execute(FlightCommand::Move(Movement::Forward), 0.5);
        e.execute(FlightCommand::Reset, 0.0);
        assert_eq!(e.snapshot().position, Vec3::ZERO);
    }

    #[test]
    fn resize_and_projection_toggle() {
        let mut e = engine(Scene::default());
        let perspective = e.snapshot().projection;
        e.handle_input(InputEvent::Resized {
            width: 500,
            height: 500,
        });
        let report = e.step(0.0);
        assert_ne!(report.snapshot.projection, perspective);
        assert!((e.uniform().aspect - 1.0).abs() < 1e-6);

        assert!(e.handle_key("KeyP", true));
        let ortho = e.step(0.0).snapshot.projection;
        assert_ne!(ortho, report.snapshot.projection);
    }
}
