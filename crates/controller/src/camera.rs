use glam::{Quat, Vec3};

/// Pose sink for the first-person camera: local offset from the actor's
/// feet plus a pitch-only rotation. Yaw lives on the body, not here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub local_position: Vec3,
    pub local_rotation: Quat,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            local_position: Vec3::ZERO,
            local_rotation: Quat::IDENTITY,
        }
    }
}

impl CameraRig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eye_height(&self) -> f32 {
        self.local_position.y
    }
}
