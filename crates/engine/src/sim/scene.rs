use glam::Vec3;

/// The simulation's only outward surface: an opaque scene-graph entity that
/// receives the player pose once per tick. A 3D backend points this at its
/// camera node; the built-in plan view reads a [`CameraPose`].
pub trait SceneNode {
    fn set_position(&mut self, position: Vec3);
    fn set_rotation(&mut self, yaw_degrees: f32, pitch_degrees: f32);
}

/// Plain pose record. Serves the plan renderer and doubles as a recording
/// target in tests.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl SceneNode for CameraPose {
    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn set_rotation(&mut self, yaw_degrees: f32, pitch_degrees: f32) {
        self.yaw = yaw_degrees;
        self.pitch = pitch_degrees;
    }
}
