use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::camera::core::{Camera, CameraUniform};
use crate::camera::orientation::{self, Basis};
use crate::collision::BoundingSphere;
use crate::options::{FlightOptions, Options};

/// Pointer deltas at or below this magnitude are treated as noise.
const POINTER_NOISE_FLOOR: f32 = 1e-6;

/// Flight phase. Exactly one is active at a time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FlightState {
    /// Taxiing: only forward/backward input moves the aircraft.
    #[default]
    Grounded,
    /// Airborne: full rotation input, per-frame climb and thrust.
    Flying,
}

/// Discrete movement inputs, applied once per frame while held.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Movement {
    /// Accelerate along the heading.
    Forward,
    /// Decelerate, then move against the heading.
    Backward,
    /// Yaw left.
    Left,
    /// Yaw right.
    Right,
    /// Pitch the nose up.
    Up,
    /// Pitch the nose down.
    Down,
    /// Bank left.
    RollLeft,
    /// Bank right.
    RollRight,
}

/// Read-only view of the controller after a frame's update pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlightSnapshot {
    /// World-space position.
    pub position: Vec3,
    /// Unit heading.
    pub forward: Vec3,
    /// Unit up vector.
    pub up: Vec3,
    /// Heading angle in degrees.
    pub yaw: f32,
    /// Nose elevation in degrees.
    pub pitch: f32,
    /// Bank angle in degrees.
    pub roll: f32,
    /// Current scalar speed.
    pub speed: f32,
    /// Current flight phase.
    pub state: FlightState,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// View matrix.
    pub view: Mat4,
    /// Projection matrix.
    pub projection: Mat4,
}

/// Free-flying camera ("plane") with taxi/flight phases.
///
/// Angles are the source of truth; the basis vectors are recomputed from
/// them after every change.
pub struct FlightController {
    params: FlightOptions,
    mouse_sensitivity: f32,
    zoom_speed: f32,
    initial_fovy: f32,

    position: Vec3,
    yaw: f32,
    pitch: f32,
    roll: f32,
    speed: f32,
    state: FlightState,
    basis: Basis,

    /// Projection parameters.
    pub camera: Camera,
    bounds: BoundingSphere,
    last_pointer: Option<Vec2>,
}

impl FlightController {
    /// Create a grounded controller at `options.flight.start_position` for a
    /// `width` x `height` viewport.
    #[must_use]
    pub fn new(options: &Options, width: u32, height: u32) -> Self {
        let params = options.flight.clone().sanitized();
        let camera = Camera::new(&options.camera, width, height);
        let start = params.start_position;

        let mut controller = Self {
            mouse_sensitivity: options.camera.mouse_sensitivity,
            zoom_speed: options.camera.zoom_speed,
            initial_fovy: camera.fovy,
            position: start,
            yaw: params.initial_yaw,
            pitch: 0.0,
            roll: 0.0,
            speed: 0.0,
            state: FlightState::Grounded,
            basis: Basis::default(),
            camera,
            bounds: BoundingSphere::new(start, params.bounding_radius),
            last_pointer: None,
            params,
        };
        controller.enter_grounded();
        controller
    }

    /// Return to the start position and initial orientation, grounded.
    pub fn reset(&mut self) {
        self.position = self.params.start_position;
        self.yaw = self.params.initial_yaw;
        self.camera.fovy = self.initial_fovy;
        self.last_pointer = None;
        self.enter_grounded();
        log::info!("flight controller reset to {}", self.position);
    }

    /// Update the viewport dimensions. Zero sizes are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.camera.width = width;
            self.camera.height = height;
        }
    }

    // ── Speed ────────────────────────────────────────────────────────────

    /// Increase speed by `acceleration * dt`, capped at `max_speed`.
    pub fn accelerate(&mut self, dt: f32) {
        self.speed = (self.speed + self.params.acceleration * dt.max(0.0))
            .min(self.params.max_speed);
    }

    /// Decrease speed by a fixed step, floored at zero.
    ///
    /// Unlike [`accelerate`](Self::accelerate) the step does not scale with
    /// frame time.
    pub fn decelerate(&mut self) {
        self.speed = (self.speed - self.params.deceleration_step).max(0.0);
    }

    // ── Phase transitions ────────────────────────────────────────────────

    /// Leave the ground. Requires `Grounded` and at least takeoff speed;
    /// pitch, roll and speed carry over. Returns whether the transition
    /// happened.
    pub fn take_off(&mut self) -> bool {
        if self.state == FlightState::Flying {
            log::debug!("take-off ignored: already flying");
            return false;
        }
        if self.speed < self.params.takeoff_speed {
            log::debug!(
                "take-off ignored: speed {:.3} below threshold {:.3}",
                self.speed,
                self.params.takeoff_speed
            );
            return false;
        }
        self.state = FlightState::Flying;
        log::info!("took off at speed {:.3}", self.speed);
        true
    }

    /// Touch down. Requires `Flying`; zeroes pitch, roll and speed and pins
    /// the aircraft to ground level. Returns whether the transition happened.
    pub fn land(&mut self) -> bool {
        if self.state == FlightState::Grounded {
            log::debug!("landing ignored: already grounded");
            return false;
        }
        self.enter_grounded();
        log::info!("landed at {}", self.position);
        true
    }

    fn enter_grounded(&mut self) {
        self.state = FlightState::Grounded;
        self.pitch = 0.0;
        self.roll = 0.0;
        self.speed = 0.0;
        self.position.y = self.params.ground_level;
        self.update_vectors();
        self.refresh_bounds();
    }

    // ── Per-frame update ─────────────────────────────────────────────────

    /// Airborne per-frame step: thrust, automatic climb toward the climb
    /// ceiling, translation, and the floor guard. No-op while grounded.
    pub fn update(&mut self, dt: f32) {
        if self.state != FlightState::Flying {
            return;
        }
        let dt = dt.max(0.0);

        self.accelerate(dt);
        let ceiling = self.params.climb_ceiling;
        if self.pitch < ceiling {
            self.pitch = (self.pitch + self.params.climb_rate * dt).min(ceiling);
        }
        self.update_vectors();
        self.advance(dt);

        if self.position.y < self.params.floor_guard {
            log::warn!(
                "position y={:.2} fell below floor guard, resetting to ground",
                self.position.y
            );
            self.position.y = self.params.ground_level;
        }
    }

    /// Apply one movement input for a frame of length `dt`.
    pub fn process_movement(&mut self, movement: Movement, dt: f32) {
        let dt = dt.max(0.0);

        match movement {
            Movement::Forward => {
                self.accelerate(dt);
                self.advance(dt);
                if self.state == FlightState::Grounded {
                    return;
                }
            }
            Movement::Backward => {
                self.decelerate();
                self.advance(-dt);
                if self.state == FlightState::Grounded {
                    return;
                }
            }
            // Taxiing only follows the heading.
            _ if self.state == FlightState::Grounded => return,
            _ => {}
        }

        let rotation = self.params.rotation_speed * dt;
        match movement {
            Movement::Left => self.yaw -= rotation,
            Movement::Right => self.yaw += rotation,
            Movement::Up => self.pitch += rotation,
            Movement::Down => self.pitch -= rotation,
            Movement::RollLeft => self.roll += rotation,
            Movement::RollRight => self.roll -= rotation,
            Movement::Forward | Movement::Backward => {}
        }

        // Every airborne input also advances.
        self.clamp_angles();
        self.update_vectors();
        self.advance(dt);
    }

    /// Pointer sample at screen position (`x`, `y`). The first sample (after
    /// construction or [`reset`](Self::reset)) only sets the reference point.
    pub fn look(&mut self, x: f32, y: f32) {
        if !x.is_finite() || !y.is_finite() {
            log::debug!("ignoring non-finite pointer sample ({x}, {y})");
            return;
        }
        let current = Vec2::new(x, y);
        let last = self.last_pointer.replace(current).unwrap_or(current);

        // Screen y grows downward; moving the pointer up pitches up.
        let delta = Vec2::new(current.x - last.x, last.y - current.y);
        if delta.x.abs() <= POINTER_NOISE_FLOOR
            && delta.y.abs() <= POINTER_NOISE_FLOOR
        {
            return;
        }

        if self.state == FlightState::Flying {
            let delta = delta * self.mouse_sensitivity;
            self.yaw += delta.x;
            self.pitch += delta.y;
        }
        self.clamp_angles();
        self.update_vectors();
    }

    /// Scroll input: positive `delta` narrows the field of view. Non-finite
    /// deltas are ignored.
    pub fn zoom(&mut self, delta: f32) {
        let delta = delta * self.zoom_speed;
        if !delta.is_finite() {
            log::debug!("ignoring non-finite zoom delta {delta}");
            return;
        }
        self.camera.zoom(delta);
    }

    /// Swap between perspective and orthographic projection.
    pub fn toggle_projection(&mut self) {
        self.camera.toggle_projection();
        log::info!("projection set to {:?}", self.camera.projection);
    }

    /// Recenter the bounding sphere on the current position.
    pub fn refresh_bounds(&mut self) {
        self.bounds.center = self.position;
    }

    /// Undo this frame's motion: restore `position`, stop dead and recenter
    /// the bounding sphere. A grounded aircraft stays pinned to ground level,
    /// even when `position` was recorded in flight.
    pub fn rollback(&mut self, position: Vec3) {
        self.position = position;
        if self.state == FlightState::Grounded {
            self.position.y = self.params.ground_level;
        }
        self.speed = 0.0;
        self.refresh_bounds();
    }

    fn advance(&mut self, dt: f32) {
        self.position +=
            self.basis.forward * self.speed * dt * self.params.position_scale;
    }

    fn clamp_angles(&mut self) {
        let max_pitch = self.params.max_pitch;
        self.pitch = self.pitch.clamp(-max_pitch, max_pitch);
        self.yaw = self.yaw.clamp(self.params.min_yaw, self.params.max_yaw);
    }

    fn update_vectors(&mut self) {
        self.basis = orientation::basis_vectors(self.yaw, self.pitch, self.roll);
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// World-space position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Current basis vectors.
    #[must_use]
    pub fn basis(&self) -> &Basis {
        &self.basis
    }

    /// Unit heading.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.basis.forward
    }

    /// Unit up vector.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.basis.up
    }

    /// Heading angle in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Nose elevation in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Bank angle in degrees.
    #[must_use]
    pub fn roll(&self) -> f32 {
        self.roll
    }

    /// Current scalar speed.
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Current flight phase.
    #[must_use]
    pub fn state(&self) -> FlightState {
        self.state
    }

    /// Whether the aircraft is on the ground.
    #[must_use]
    pub fn is_grounded(&self) -> bool {
        self.state == FlightState::Grounded
    }

    /// Whether the aircraft is airborne.
    #[must_use]
    pub fn is_flying(&self) -> bool {
        self.state == FlightState::Flying
    }

    /// Flight parameters this controller was built with.
    #[must_use]
    pub fn params(&self) -> &FlightOptions {
        &self.params
    }

    /// The controller's own bounding sphere.
    #[must_use]
    pub fn bounds(&self) -> BoundingSphere {
        self.bounds
    }

    /// Look-at view matrix from the current position and basis.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        orientation::view_matrix(self.position, &self.basis)
    }

    /// Projection matrix for the active projection mode.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.camera.build_projection()
    }

    /// Snapshot of everything the renderer reads after the update pass.
    #[must_use]
    pub fn snapshot(&self) -> FlightSnapshot {
        FlightSnapshot {
            position: self.position,
            forward: self.basis.forward,
            up: self.basis.up,
            yaw: self.yaw,
            pitch: self.pitch,
            roll: self.roll,
            speed: self.speed,
            state: self.state,
            fovy: self.camera.fovy,
            view: self.view_matrix(),
            projection: self.projection_matrix(),
        }
    }

    /// GPU uniform block for the current frame.
    #[must_use]
    pub fn uniform(&self) -> CameraUniform {
        let mut uniform = CameraUniform::new();
        uniform.update(
            &self.camera,
            self.view_matrix(),
            self.position,
            self.basis.forward,
        );
        uniform
    }
}
