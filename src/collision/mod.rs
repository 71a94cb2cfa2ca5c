//! Bounding-sphere collision between the flight controller and the scene.
//!
//! Collision is a boolean overlap test; the only response is a full
//! positional rollback with the speed zeroed.

/// Frame-level collision test and rollback.
pub mod resolver;
/// Bounding spheres and world-space derivation.
pub mod sphere;

pub use resolver::{first_collision, resolve_frame, CollisionOutcome};
pub use sphere::BoundingSphere;
