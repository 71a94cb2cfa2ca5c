//! Euler-angle orientation math.
//!
//! Yaw and pitch fix the heading (`forward`); roll only banks the wings by
//! rotating `right` about `forward`. `forward` never depends on roll.

use glam::{Mat4, Quat, Vec3};

/// Fixed world up axis.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Direction used when the heading computation degenerates.
pub const DEFAULT_FORWARD: Vec3 = Vec3::NEG_Z;

/// Orthonormal right-handed camera basis derived from yaw/pitch/roll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    /// Unit heading vector.
    pub forward: Vec3,
    /// Unit wing vector (banked by roll).
    pub right: Vec3,
    /// Unit up vector, `right × forward`.
    pub up: Vec3,
}

impl Default for Basis {
    fn default() -> Self {
        Self {
            forward: DEFAULT_FORWARD,
            right: Vec3::X,
            up: Vec3::Y,
        }
    }
}

/// Heading vector for the given yaw and pitch (degrees).
#[must_use]
pub fn forward_from(yaw: f32, pitch: f32) -> Vec3 {
    let (y, p) = (yaw.to_radians(), pitch.to_radians());
    let dir = Vec3::new(y.cos() * p.cos(), p.sin(), y.sin() * p.cos());
    dir.try_normalize().unwrap_or_else(|| {
        log::warn!("degenerate heading (yaw={yaw}, pitch={pitch})");
        DEFAULT_FORWARD
    })
}

/// Compute the full basis for yaw, pitch and roll (degrees) against
/// [`WORLD_UP`].
#[must_use]
pub fn basis_vectors(yaw: f32, pitch: f32, roll: f32) -> Basis {
    let forward = forward_from(yaw, pitch);

    // Looking straight up/down makes forward × up vanish; keep the wing level
    // with world X instead of producing NaN.
    let right = forward.cross(WORLD_UP).try_normalize().unwrap_or(Vec3::X);

    let banked = Quat::from_axis_angle(forward, roll.to_radians()) * right;
    let right = banked.try_normalize().unwrap_or(right);
    let up = right.cross(forward).try_normalize().unwrap_or(WORLD_UP);

    Basis { forward, right, up }
}

/// Right-handed look-at view matrix along `basis.forward`.
#[must_use]
pub fn view_matrix(position: Vec3, basis: &Basis) -> Mat4 {
    Mat4::look_at_rh(position, position + basis.forward, basis.up)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_orthonormal(b: &Basis) {
        assert!((b.forward.length() - 1.0).abs() < EPS);
        assert!((b.right.length() - 1.0).abs() < EPS);
        assert!((b.up.length() - 1.0).abs() < EPS);
        assert!(b.forward.dot(b.right).abs() < EPS);
        assert!(b.forward.dot(b.up).abs() < EPS);
        assert!(b.right.dot(b.up).abs() < EPS);
    }

    #[test]
    fn initial_heading_looks_down_negative_z() {
        let b = basis_vectors(-90.0, 0.0, 0.0);
        assert!((b.forward - Vec3::NEG_Z).length() < EPS);
        assert!((b.right - Vec3::X).length() < EPS);
        assert!((b.up - Vec3::Y).length() < EPS);
    }

    #[test]
    fn basis_is_orthonormal_across_legal_ranges() {
        let mut yaw = -180.0;
        while yaw <= 180.0 {
            let mut pitch = -89.0;
            while pitch <= 89.0 {
                let mut roll = -180.0;
                while roll <= 180.0 {
                    assert_orthonormal(&basis_vectors(yaw, pitch, roll));
                    roll += 30.0;
                }
                pitch += 17.8;
            }
            yaw += 15.0;
        }
    }

    #[test]
    fn basis_is_right_handed() {
        let b = basis_vectors(-75.0, 12.0, 33.0);
        // right × up points backwards (camera looks down -Z locally)
        assert!((b.right.cross(b.up) + b.forward).length() < EPS);
    }

    #[test]
    fn roll_does_not_change_heading() {
        let level = basis_vectors(-100.0, 15.0, 0.0);
        let banked = basis_vectors(-100.0, 15.0, 40.0);
        assert!((level.forward - banked.forward).length() < EPS);
        assert!((level.right - banked.right).length() > 0.1);
    }

    #[test]
    fn vertical_pitch_stays_finite() {
        let b = basis_vectors(-90.0, 90.0, 10.0);
        assert!(b.forward.is_finite());
        assert!(b.right.is_finite());
        assert!(b.up.is_finite());
    }

    #[test]
    fn view_matrix_moves_eye_to_origin() {
        let position = Vec3::new(3.0, 4.0, 5.0);
        let b = basis_vectors(-90.0, 0.0, 0.0);
        let view = view_matrix(position, &b);
        let eye = view.transform_point3(position);
        assert!(eye.length() < EPS);
        let ahead = view.transform_point3(position + b.forward);
        assert!((ahead - Vec3::NEG_Z).length() < EPS);
    }
}
