//! Pointer-delta to view-angle conversion.
//!
//! Targets move directly with the pointer; the displayed yaw/pitch chase
//! them with an exponential smoothing whose factor is time-normalized, so
//! the feel does not depend on the frame rate. Purely continuous: capture
//! loss just means a zero delta, and the angles hold still.

use glam::Vec2;

use super::config::SimConfig;
use super::player::PlayerState;

/// Advances the view angles for one tick. Positive pointer X turns right
/// (yaw decreases), positive pointer Y looks down (pitch decreases), and
/// pitch is clamped to the configured vertical limit on both the target and
/// the smoothed value.
pub fn apply_look(player: &mut PlayerState, pointer_delta: Vec2, dt: f32, config: &SimConfig) {
    let limit = config.vertical_look_limit;
    player.target_yaw -= pointer_delta.x * config.mouse_sensitivity;
    player.target_pitch =
        (player.target_pitch - pointer_delta.y * config.mouse_sensitivity).clamp(-limit, limit);

    let t = (dt / config.look_smoothing).min(1.0);
    player.yaw += (player.target_yaw - player.yaw) * t;
    player.pitch = (player.pitch + (player.target_pitch - player.pitch) * t).clamp(-limit, limit);
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::Vec3;

    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn player() -> PlayerState {
        PlayerState::at_spawn(Vec3::new(0.0, 1.6, 5.0))
    }

    #[test]
    fn pointer_x_moves_yaw_target_by_sensitivity() {
        let mut player = player();
        let config = SimConfig::default();
        apply_look(&mut player, Vec2::new(10.0, 0.0), DT, &config);
        assert_relative_eq!(player.target_yaw, -10.0 * config.mouse_sensitivity);
    }

    #[test]
    fn pitch_stays_clamped_under_unbounded_input() {
        let mut player = player();
        let config = SimConfig::default();
        for _ in 0..1_000 {
            apply_look(&mut player, Vec2::new(0.0, -500.0), DT, &config);
        }
        assert!(player.target_pitch <= config.vertical_look_limit);
        assert!(player.pitch <= config.vertical_look_limit);

        for _ in 0..1_000 {
            apply_look(&mut player, Vec2::new(0.0, 500.0), DT, &config);
        }
        assert!(player.target_pitch >= -config.vertical_look_limit);
        assert!(player.pitch >= -config.vertical_look_limit);
    }

    #[test]
    fn smoothed_angle_converges_on_the_target() {
        let mut player = player();
        let config = SimConfig::default();
        apply_look(&mut player, Vec2::new(-50.0, 0.0), DT, &config);
        let target = player.target_yaw;
        assert!(player.yaw.abs() < target.abs());

        for _ in 0..200 {
            apply_look(&mut player, Vec2::ZERO, DT, &config);
        }
        assert_relative_eq!(player.yaw, target, epsilon = 1e-3);
    }

    #[test]
    fn large_dt_clamps_the_smoothing_factor_to_one() {
        let mut player = player();
        let config = SimConfig::default();
        apply_look(&mut player, Vec2::new(25.0, 0.0), 10.0, &config);
        assert_relative_eq!(player.yaw, player.target_yaw);
    }

    #[test]
    fn capture_loss_holds_the_targets_steady() {
        let mut player = player();
        let config = SimConfig::default();
        // Settle on a non-trivial orientation first.
        for _ in 0..200 {
            apply_look(&mut player, Vec2::new(1.0, -1.0), DT, &config);
        }
        let (target_yaw, target_pitch) = (player.target_yaw, player.target_pitch);

        // Capture loss: deltas stop arriving. The targets must not move and
        // the smoothed angles settle onto them instead of snapping anywhere.
        for _ in 0..120 {
            apply_look(&mut player, Vec2::ZERO, DT, &config);
        }
        assert_relative_eq!(player.target_yaw, target_yaw);
        assert_relative_eq!(player.target_pitch, target_pitch);
        assert_relative_eq!(player.yaw, target_yaw, epsilon = 1e-3);
        assert_relative_eq!(player.pitch, target_pitch, epsilon = 1e-3);
    }
}
