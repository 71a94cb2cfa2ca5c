use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Flight", inline)]
#[serde(default)]
/// Flight-model constants. Fixed once a controller is built.
pub struct FlightOptions {
    /// Spawn and reset position.
    #[schemars(skip)]
    pub start_position: Vec3,
    /// Spawn heading in degrees (-90 looks down -Z).
    #[schemars(skip)]
    pub initial_yaw: f32,
    /// Lower bound of the heading window in degrees.
    #[schemars(title = "Min Yaw", range(min = -180.0, max = 180.0), extend("step" = 1.0))]
    pub min_yaw: f32,
    /// Upper bound of the heading window in degrees.
    #[schemars(title = "Max Yaw", range(min = -180.0, max = 180.0), extend("step" = 1.0))]
    pub max_yaw: f32,
    /// Symmetric pitch limit in degrees.
    #[schemars(skip)]
    pub max_pitch: f32,
    /// Speed cap.
    #[schemars(title = "Max Speed", range(min = 0.5, max = 10.0), extend("step" = 0.1))]
    pub max_speed: f32,
    /// Speed gained per second of thrust.
    #[schemars(title = "Acceleration", range(min = 0.01, max = 2.0), extend("step" = 0.01))]
    pub acceleration: f32,
    /// Speed lost per brake input (not scaled by frame time).
    #[schemars(skip)]
    pub deceleration_step: f32,
    /// Minimum speed for take-off.
    #[schemars(title = "Takeoff Speed", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub takeoff_speed: f32,
    /// Automatic climb rate in degrees per second while flying.
    #[schemars(skip)]
    pub climb_rate: f32,
    /// Pitch the automatic climb stops at, in degrees.
    #[schemars(skip)]
    pub climb_ceiling: f32,
    /// Keyboard rotation rate in degrees per second.
    #[schemars(skip)]
    pub rotation_speed: f32,
    /// World units per second per unit of speed.
    #[schemars(skip)]
    pub position_scale: f32,
    /// Altitude below which the aircraft is returned to the ground.
    #[schemars(skip)]
    pub floor_guard: f32,
    /// Altitude of the runway.
    #[schemars(skip)]
    pub ground_level: f32,
    /// Radius of the aircraft's bounding sphere.
    #[schemars(skip)]
    pub bounding_radius: f32,
    /// Longest frame time fed into the simulation, in seconds.
    #[schemars(skip)]
    pub max_frame_dt: f32,
}

impl Default for FlightOptions {
    fn default() -> Self {
        Self {
            start_position: Vec3::new(0.0, 0.0, 10.0),
            initial_yaw: -90.0,
            min_yaw: -120.0,
            max_yaw: -60.0,
            max_pitch: 89.0,
            max_speed: 3.0,
            acceleration: 0.2,
            deceleration_step: 0.05,
            takeoff_speed: 1.0,
            climb_rate: 5.0,
            climb_ceiling: 20.0,
            rotation_speed: 45.0,
            position_scale: 10.0,
            floor_guard: -20.0,
            ground_level: 0.0,
            bounding_radius: 2.0,
            max_frame_dt: 0.1,
        }
    }
}

impl FlightOptions {
    /// Repair limits that would make clamping ill-defined: an inverted or
    /// non-finite yaw window, a negative or non-finite pitch limit, and a
    /// negative or non-finite frame-time clamp.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !self.min_yaw.is_finite() || !self.max_yaw.is_finite() {
            log::warn!("non-finite yaw window, using defaults");
            self.min_yaw = defaults.min_yaw;
            self.max_yaw = defaults.max_yaw;
        }
        if self.min_yaw > self.max_yaw {
            log::warn!(
                "inverted yaw window [{}, {}], swapping",
                self.min_yaw,
                self.max_yaw
            );
            std::mem::swap(&mut self.min_yaw, &mut self.max_yaw);
        }
        if self.max_pitch.is_finite() {
            self.max_pitch = self.max_pitch.abs();
        } else {
            self.max_pitch = defaults.max_pitch;
        }
        if !self.max_frame_dt.is_finite() || self.max_frame_dt < 0.0 {
            log::warn!(
                "invalid max_frame_dt {}, using {}",
                self.max_frame_dt,
                defaults.max_frame_dt
            );
            self.max_frame_dt = defaults.max_frame_dt;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_yaw_window_is_swapped() {
        let opts = FlightOptions {
            min_yaw: 0.0,
            max_yaw: -180.0,
            ..FlightOptions::default()
        }
        .sanitized();
        assert_eq!((opts.min_yaw, opts.max_yaw), (-180.0, 0.0));
    }

    #[test]
    fn bad_pitch_limit_is_repaired() {
        let negative = FlightOptions {
            max_pitch: -45.0,
            ..FlightOptions::default()
        }
        .sanitized();
        assert_eq!(negative.max_pitch, 45.0);

        let nan = FlightOptions {
            max_pitch: f32::NAN,
            ..FlightOptions::default()
        }
        .sanitized();
        assert_eq!(nan.max_pitch, 89.0);
    }

    #[test]
    fn bad_frame_clamp_falls_back_to_default() {
        for bad in [f32::NAN, f32::INFINITY, -1.0] {
            let opts = FlightOptions {
                max_frame_dt: bad,
                ..FlightOptions::default()
            }
            .sanitized();
            assert_eq!(opts.max_frame_dt, 0.1);
        }
    }
}
