//! Flight camera: orientation math, projection, and the flight controller
//! state machine.

/// Flight controller with grounded/flying phases.
pub mod controller;
/// Projection parameters and GPU uniform types.
pub mod core;
/// Yaw/pitch/roll to basis vectors and view matrix.
pub mod orientation;

pub use controller::{FlightController, FlightSnapshot, FlightState, Movement};
pub use self::core::{Camera, CameraUniform, Projection};
pub use orientation::Basis;
