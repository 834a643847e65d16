use glam::Vec3;
use thiserror::Error;
use tracing::debug;

use super::collision;
use super::config::{ConfigError, SimConfig};
use super::input::InputSnapshot;
use super::layout::RoomGeometry;
use super::movement;
use super::orientation;
use super::player::PlayerState;
use super::scene::SceneNode;
use super::vertical::{self, FlatFloor, GroundProbe};

/// Where a fresh session starts: just inside the entrance, on the
/// centerline, facing down the corridor.
const SPAWN_X: f32 = 0.0;
const SPAWN_Z: f32 = 5.0;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("room bounds are degenerate; no walkable area to simulate")]
    DegenerateBounds,
    #[error("spawn position ({x:.1}, {z:.1}) is blocked by room geometry")]
    SpawnBlocked { x: f32, z: f32 },
}

/// The per-session movement and collision core.
///
/// Built once per scene with every dependency passed in: the static room
/// geometry, the tunables, and optionally a ground probe. Nothing is looked
/// up from a global registry or discovered from a live scene graph.
///
/// Each [`tick`](Self::tick) runs the fixed sequence: consume the pointer
/// delta into orientation, derive the desired displacement from the input
/// snapshot, advance vertical physics, resolve the displacement against the
/// static geometry, then write the final pose to the scene node. The
/// resolver runs last on purpose; re-ordering it ahead of the integrator
/// would let a stale displacement move the player inside an obstacle.
pub struct GallerySimulation {
    geometry: RoomGeometry,
    config: SimConfig,
    probe: Box<dyn GroundProbe>,
    player: PlayerState,
    rejected_ticks: u64,
}

impl GallerySimulation {
    /// Validates the configuration and geometry up front. A degenerate room
    /// or a blocked spawn is a construction error: the tick loop must not
    /// start against unusable geometry.
    pub fn new(geometry: RoomGeometry, config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        if geometry.bounds.is_degenerate() {
            return Err(SimError::DegenerateBounds);
        }
        if !collision::position_is_clear(&geometry, SPAWN_X, SPAWN_Z) {
            return Err(SimError::SpawnBlocked {
                x: SPAWN_X,
                z: SPAWN_Z,
            });
        }

        let spawn = Vec3::new(SPAWN_X, config.eye_height, SPAWN_Z);
        Ok(Self {
            geometry,
            config,
            probe: Box::new(FlatFloor { height: 0.0 }),
            player: PlayerState::at_spawn(spawn),
            rejected_ticks: 0,
        })
    }

    /// Swaps the flat-floor fallback for a caller-provided ground probe.
    pub fn with_ground_probe(mut self, probe: Box<dyn GroundProbe>) -> Self {
        self.probe = probe;
        self
    }

    /// One simulation step. `dt` is the fixed tick duration in seconds.
    pub fn tick(&mut self, dt: f32, input: &InputSnapshot, node: &mut dyn SceneNode) {
        orientation::apply_look(&mut self.player, input.pointer_delta, dt, &self.config);

        let displacement = movement::integrate(&mut self.player, input, dt, &self.config);

        vertical::step(
            &mut self.player,
            input.jump_pressed,
            dt,
            &self.config,
            self.probe.as_ref(),
        );

        let resolved = collision::resolve(&self.geometry, self.player.position, displacement);
        if collision::position_is_clear(&self.geometry, resolved.x, resolved.z) {
            self.player.position.x = resolved.x;
            self.player.position.z = resolved.z;
            self.player.last_valid_position = self.player.position;
        } else {
            // Start-inside-obstacle or a corner case where both single-axis
            // moves pass but their combination does not. Roll back instead
            // of hunting for an escape route.
            self.rejected_ticks = self.rejected_ticks.saturating_add(1);
            self.player.position.x = self.player.last_valid_position.x;
            self.player.position.z = self.player.last_valid_position.z;
            debug!(
                x = self.player.position.x,
                z = self.player.position.z,
                "position_rolled_back"
            );
        }

        node.set_position(self.player.position);
        node.set_rotation(self.player.yaw, self.player.pitch);
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn geometry(&self) -> &RoomGeometry {
        &self.geometry
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Ticks that ended in a rollback to the last valid position.
    pub fn rejected_ticks(&self) -> u64 {
        self.rejected_ticks
    }

    #[cfg(test)]
    pub(crate) fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }
}
