use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("simulation config field `{field}` is out of range")]
    OutOfRange { field: &'static str },
}

/// Tunables for the walkthrough simulation. All fields have sane defaults so
/// a config file only needs to name the values it overrides.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Walking speed in world units per second.
    pub movement_speed: f32,
    /// Speed factor applied to the target velocity while the run key is held.
    pub run_multiplier: f32,
    /// Degrees of rotation per pixel of pointer movement.
    pub mouse_sensitivity: f32,
    /// Pitch is clamped to +/- this many degrees.
    pub vertical_look_limit: f32,
    /// Time constant (seconds) for yaw/pitch smoothing toward their targets.
    pub look_smoothing: f32,
    /// Per-second rate at which velocity approaches the target velocity.
    pub acceleration: f32,
    /// Per-tick decay base applied to velocity with no input, frame-rate
    /// corrected as `friction.powf(dt * 60)`.
    pub friction: f32,
    /// Horizontal speeds below this are snapped to zero, bounding the
    /// friction decay window to a few ticks.
    pub stop_threshold: f32,
    /// Downward acceleration while airborne, world units per second squared.
    pub gravity: f32,
    /// Maximum fall speed.
    pub terminal_fall_speed: f32,
    /// Upward velocity applied by a jump.
    pub jump_force: f32,
    /// Camera height above the walkable surface.
    pub eye_height: f32,
    /// Collision radius of the player, used to inset the walkable bounds.
    pub player_radius: f32,
    /// While landing, vertical positions within this distance of the ground
    /// snap into the grounded state.
    pub ground_snap_tolerance: f32,
    /// Falling this far below the probed surface triggers the safety-net
    /// respawn instead of an endless fall.
    pub fall_reset_depth: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            movement_speed: 4.8,
            run_multiplier: 2.0,
            mouse_sensitivity: 0.2,
            vertical_look_limit: 85.0,
            look_smoothing: 0.08,
            acceleration: 10.0,
            friction: 0.6,
            stop_threshold: 0.05,
            gravity: 20.0,
            terminal_fall_speed: 50.0,
            jump_force: 8.0,
            eye_height: 1.6,
            player_radius: 0.5,
            ground_snap_tolerance: 0.25,
            fall_reset_depth: 25.0,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive: [(&'static str, f32); 8] = [
            ("movement_speed", self.movement_speed),
            ("look_smoothing", self.look_smoothing),
            ("acceleration", self.acceleration),
            ("eye_height", self.eye_height),
            ("stop_threshold", self.stop_threshold),
            ("terminal_fall_speed", self.terminal_fall_speed),
            ("ground_snap_tolerance", self.ground_snap_tolerance),
            ("fall_reset_depth", self.fall_reset_depth),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::OutOfRange { field });
            }
        }

        let non_negative: [(&'static str, f32); 4] = [
            ("mouse_sensitivity", self.mouse_sensitivity),
            ("gravity", self.gravity),
            ("jump_force", self.jump_force),
            ("player_radius", self.player_radius),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::OutOfRange { field });
            }
        }

        if !self.run_multiplier.is_finite() || self.run_multiplier < 1.0 {
            return Err(ConfigError::OutOfRange {
                field: "run_multiplier",
            });
        }
        if !self.friction.is_finite() || self.friction <= 0.0 || self.friction >= 1.0 {
            return Err(ConfigError::OutOfRange { field: "friction" });
        }
        if !self.vertical_look_limit.is_finite()
            || self.vertical_look_limit <= 0.0
            || self.vertical_look_limit >= 90.0
        {
            return Err(ConfigError::OutOfRange {
                field: "vertical_look_limit",
            });
        }
        Ok(())
    }
}
