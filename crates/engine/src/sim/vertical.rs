//! Ground and vertical physics.
//!
//! A two-state machine layered on top of the horizontal resolver. While
//! grounded the camera eases onto the probed surface height; a jump or a
//! failed ground probe switches to airborne, where gravity integrates the
//! vertical velocity until the player comes back within snap distance of a
//! detected surface. A safety net catches anything that slips past the
//! probe and would otherwise fall forever.

use tracing::warn;

use super::config::SimConfig;
use super::player::PlayerState;

/// Seconds over which a grounded camera eases onto the exact surface
/// height, so landing reads as a settle rather than a teleport.
const GROUND_SNAP_SMOOTHING: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundState {
    Grounded,
    Airborne,
}

/// Downward geometric test for the walkable surface under a point.
///
/// `None` means the probe found no surface there, which sends a grounded
/// player airborne. The flat gallery floor always answers, making it the
/// fixed-constant fallback; a mesh-backed probe can replace it without
/// touching the state machine.
pub trait GroundProbe {
    fn ground_height(&self, x: f32, z: f32) -> Option<f32>;
}

#[derive(Debug, Clone, Copy)]
pub struct FlatFloor {
    pub height: f32,
}

impl GroundProbe for FlatFloor {
    fn ground_height(&self, _x: f32, _z: f32) -> Option<f32> {
        Some(self.height)
    }
}

/// Advances vertical state for one tick. `jump_pressed` is an edge flag and
/// is honored only while grounded; an airborne press is dropped, never
/// buffered.
pub fn step(
    player: &mut PlayerState,
    jump_pressed: bool,
    dt: f32,
    config: &SimConfig,
    probe: &dyn GroundProbe,
) {
    let (x, z) = (player.position.x, player.position.z);
    match player.ground {
        GroundState::Grounded => {
            if jump_pressed {
                player.velocity.y = config.jump_force;
                player.ground = GroundState::Airborne;
                return;
            }
            match probe.ground_height(x, z) {
                Some(height) => {
                    let eye = height + config.eye_height;
                    let t = (dt / GROUND_SNAP_SMOOTHING).min(1.0);
                    player.position.y += (eye - player.position.y) * t;
                }
                None => player.ground = GroundState::Airborne,
            }
        }
        GroundState::Airborne => {
            player.velocity.y -= config.gravity * dt;
            if player.velocity.y < -config.terminal_fall_speed {
                player.velocity.y = -config.terminal_fall_speed;
            }
            player.position.y += player.velocity.y * dt;

            if player.velocity.y <= 0.0 {
                if let Some(height) = probe.ground_height(x, z) {
                    let eye = height + config.eye_height;
                    if player.position.y <= eye + config.ground_snap_tolerance {
                        player.velocity.y = 0.0;
                        player.ground = GroundState::Grounded;
                        // Tunneling guard; the grounded branch eases onto the
                        // exact height from here.
                        if player.position.y < eye {
                            player.position.y = eye;
                        }
                    }
                }
            }

            let reference = probe.ground_height(x, z).unwrap_or(0.0);
            if player.position.y < reference + config.eye_height - config.fall_reset_depth {
                warn!(
                    y = player.position.y,
                    x, z, "fall_safety_reset"
                );
                player.position.y = reference + config.eye_height;
                player.velocity.y = 0.0;
                player.ground = GroundState::Grounded;
            }
        }
    }
}
