//! Transform component for spatial positioning.
//!
//! The simulation core has no renderer, so rotation is a single yaw angle
//! (facing on the ground plane) that the render layer can consume directly.

use glam::Vec3;

/// Position and facing of a simulated entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Facing angle around Y, radians. 0 = +Z.
    pub yaw: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
        }
    }
}

impl Transform {
    /// Create a new transform at the given position.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Translate the transform by a delta.
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Distance to another point.
    pub fn distance_to(&self, point: Vec3) -> f32 {
        self.position.distance(point)
    }

    /// Turn to face a direction on the XZ plane. No-op for near-zero input.
    pub fn face_toward(&mut self, direction: Vec3) {
        if direction.x * direction.x + direction.z * direction.z > 0.0001 {
            self.yaw = direction.x.atan2(direction.z);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_toward_ignores_zero_direction() {
        let mut t = Transform::from_position(Vec3::ZERO);
        t.yaw = 1.0;
        t.face_toward(Vec3::ZERO);
        assert_eq!(t.yaw, 1.0);
    }

    #[test]
    fn face_toward_positive_z_is_zero_yaw() {
        let mut t = Transform::default();
        t.face_toward(Vec3::Z);
        assert!(t.yaw.abs() < 1e-6);
    }

    #[test]
    fn distance_to_matches_glam() {
        let t = Transform::from_position(Vec3::new(3.0, 0.0, 4.0));
        assert!((t.distance_to(Vec3::ZERO) - 5.0).abs() < 1e-6);
    }
}
