use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A (center, radius) approximation of an object's extent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundingSphere {
    /// Sphere center.
    pub center: Vec3,
    /// Sphere radius. Expected to be non-negative.
    pub radius: f32,
}

impl BoundingSphere {
    /// Create a sphere at `center` with `radius`.
    #[must_use]
    pub const fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Transform a local-space sphere by an object's position and
    /// (possibly non-uniform) scale.
    ///
    /// The center is scaled component-wise and offset by `position`; the
    /// radius grows by the largest scale axis so the result always encloses
    /// the scaled geometry.
    #[must_use]
    pub fn to_world(&self, position: Vec3, scale: Vec3) -> Self {
        Self {
            center: position + self.center * scale,
            radius: self.radius * scale.max_element(),
        }
    }

    /// Closed overlap test: spheres that just touch intersect.
    #[inline]
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.center.distance(other.center) <= self.radius + other.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_spheres_intersect() {
        let a = BoundingSphere::new(Vec3::ZERO, 1.0);
        let b = BoundingSphere::new(Vec3::new(1.5, 0.0, 0.0), 1.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn separated_spheres_do_not_intersect() {
        let a = BoundingSphere::new(Vec3::ZERO, 1.0);
        let b = BoundingSphere::new(Vec3::new(3.0, 0.0, 0.0), 1.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn touching_spheres_intersect() {
        let a = BoundingSphere::new(Vec3::ZERO, 1.0);
        let b = BoundingSphere::new(Vec3::new(0.0, 2.0, 0.0), 1.0);
        assert!(a.intersects(&b));
    }

    #[test]
    fn world_sphere_uses_largest_scale_axis() {
        let local = BoundingSphere::new(Vec3::new(1.0, 2.0, -1.0), 0.5);
        let world =
            local.to_world(Vec3::new(10.0, 0.0, 0.0), Vec3::new(2.0, 4.0, 3.0));
        assert_eq!(world.center, Vec3::new(12.0, 8.0, -3.0));
        assert_eq!(world.radius, 2.0);
    }

    #[test]
    fn unit_transform_is_identity() {
        let local = BoundingSphere::new(Vec3::new(1.0, 2.0, 3.0), 4.0);
        assert_eq!(local.to_world(Vec3::ZERO, Vec3::ONE), local);
    }

    #[test]
    fn zero_radius_does_not_panic() {
        let point = BoundingSphere::new(Vec3::ONE, 0.0);
        assert!(point.intersects(&point));
        assert!(!point.intersects(&BoundingSphere::new(Vec3::ZERO, 0.0)));
    }
}
