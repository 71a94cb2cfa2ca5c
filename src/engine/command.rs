//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, pointer
//! motion, scroll wheel or programmatic call, is represented as a
//! `FlightCommand`. Consumers queue commands through the
//! [`InputProcessor`](crate::input::InputProcessor) or pass them directly to
//! [`FlightEngine::execute`](super::FlightEngine::execute).

use crate::camera::controller::Movement;

/// A single input for the flight controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightCommand {
    /// Held movement input, applied once per frame.
    Move(Movement),
    /// Leave the ground if fast enough.
    TakeOff,
    /// Touch down.
    Land,
    /// Return to the start position.
    Reset,
    /// Swap perspective/orthographic projection.
    ToggleProjection,
    /// Pointer sample in screen pixels.
    Look {
        /// Horizontal position.
        x: f32,
        /// Vertical position (grows downward).
        y: f32,
    },
    /// Scroll input (positive narrows the field of view).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },
    /// Viewport resized.
    Resize {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
}
