use glam::Vec3;

use super::vertical::GroundState;

/// Mutable per-session player state. Owned by the simulation and written
/// only inside the tick sequence; no other component may touch position or
/// rotation outside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Smoothed view angles, degrees.
    pub yaw: f32,
    pub pitch: f32,
    /// Smoothing targets the pointer moves directly.
    pub target_yaw: f32,
    pub target_pitch: f32,
    pub ground: GroundState,
    /// Fallback applied when a resolved position turns out invalid, e.g.
    /// after a geometry misconfiguration puts the player inside an obstacle.
    pub last_valid_position: Vec3,
}

impl PlayerState {
    pub fn at_spawn(spawn: Vec3) -> Self {
        Self {
            position: spawn,
            velocity: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            target_yaw: 0.0,
            target_pitch: 0.0,
            ground: GroundState::Grounded,
            last_valid_position: spawn,
        }
    }

    pub fn is_grounded(&self) -> bool {
        self.ground == GroundState::Grounded
    }
}
