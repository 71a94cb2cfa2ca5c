use glam::Vec3;

use super::sphere::BoundingSphere;
use crate::camera::controller::FlightController;
use crate::scene::SceneRegistry;

/// Result of a frame's collision pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// No overlap; the frame's motion was committed.
    Clear,
    /// Overlap with the scene object at `index` (registry order); the
    /// frame's motion was rolled back.
    Collided {
        /// Registry index of the first overlapping object.
        index: usize,
    },
}

impl CollisionOutcome {
    /// Whether the frame was rolled back.
    #[must_use]
    pub fn collided(self) -> bool {
        matches!(self, Self::Collided { .. })
    }
}

/// Index of the first scene object (in registry order) whose world sphere
/// overlaps `sphere`.
#[must_use]
pub fn first_collision<R: SceneRegistry + ?Sized>(
    sphere: &BoundingSphere,
    scene: &R,
) -> Option<usize> {
    scene
        .objects()
        .iter()
        .position(|object| sphere.intersects(&object.world_bounds()))
}

/// Recenter the controller's sphere, test it against `scene`, and on overlap
/// restore `pre_position` with zero speed.
pub fn resolve_frame<R: SceneRegistry + ?Sized>(
    controller: &mut FlightController,
    pre_position: Vec3,
    scene: &R,
) -> CollisionOutcome {
    controller.refresh_bounds();

    match first_collision(&controller.bounds(), scene) {
        Some(index) => {
            log::debug!(
                "collision with object {index} ({}) at {}, rolling back",
                scene.objects()[index].name,
                controller.position()
            );
            controller.rollback(pre_position);
            CollisionOutcome::Collided { index }
        }
        None => CollisionOutcome::Clear,
    }
}
