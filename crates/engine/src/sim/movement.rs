//! Horizontal movement integration.
//!
//! Accelerated model: velocity is interpolated toward a target derived from
//! the held movement keys and the current yaw, and decays by a frame-rate
//! corrected friction factor once the keys are released. Speeds below the
//! stop threshold snap to zero so the decay window is a handful of ticks,
//! not an asymptote.

use glam::{Vec2, Vec3};

use super::config::SimConfig;
use super::input::InputSnapshot;
use super::player::PlayerState;

/// Advances the horizontal velocity for one tick and returns the proposed
/// displacement. Vertical motion is not touched here; the ground physics
/// owns `velocity.y`.
pub fn integrate(
    player: &mut PlayerState,
    input: &InputSnapshot,
    dt: f32,
    config: &SimConfig,
) -> Vec3 {
    let wish = wish_direction(player.yaw, input);
    if wish != Vec2::ZERO {
        let speed = config.movement_speed
            * if input.run {
                config.run_multiplier
            } else {
                1.0
            };
        let target = wish * speed;
        let t = (config.acceleration * dt).min(1.0);
        player.velocity.x += (target.x - player.velocity.x) * t;
        player.velocity.z += (target.y - player.velocity.z) * t;
    } else {
        let decay = config.friction.powf(dt * 60.0);
        player.velocity.x *= decay;
        player.velocity.z *= decay;
        if horizontal_speed(player) < config.stop_threshold {
            player.velocity.x = 0.0;
            player.velocity.z = 0.0;
        }
    }

    Vec3::new(player.velocity.x * dt, 0.0, player.velocity.z * dt)
}

pub fn horizontal_speed(player: &PlayerState) -> f32 {
    Vec2::new(player.velocity.x, player.velocity.z).length()
}

/// Unit movement direction on the XZ plane for the held keys, relative to
/// the camera yaw. Yaw zero faces -Z; diagonals are normalized so they are
/// no faster than a single axis.
fn wish_direction(yaw_degrees: f32, input: &InputSnapshot) -> Vec2 {
    let rad = yaw_degrees.to_radians();
    let forward = Vec2::new(-rad.sin(), -rad.cos());
    let right = Vec2::new(rad.cos(), -rad.sin());

    let mut direction = Vec2::ZERO;
    if input.forward {
        direction += forward;
    }
    if input.backward {
        direction -= forward;
    }
    if input.right {
        direction += right;
    }
    if input.left {
        direction -= right;
    }
    direction.normalize_or_zero()
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

    fn forward_input() -> InputSnapshot {
        InputSnapshot {
            forward: true,
            ..InputSnapshot::empty()
        }
    }

    fn settle(player: &mut PlayerState, input: &InputSnapshot, config: &SimConfig, ticks: usize) {
        for _ in 0..ticks {
            integrate(player, input, DT, config);
        }
    }

    #[test]
    fn forward_at_yaw_zero_moves_toward_negative_z() {
        let mut player = player();
        let config = SimConfig::default();
        settle(&mut player, &forward_input(), &config, 120);

        assert_relative_eq!(player.velocity.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(player.velocity.z, -config.movement_speed, epsilon = 1e-3);
    }

    #[test]
    fn diagonal_speed_matches_single_axis_speed() {
        let mut player = player();
        let config = SimConfig::default();
        let diagonal = InputSnapshot {
            forward: true,
            right: true,
            ..InputSnapshot::empty()
        };
        settle(&mut player, &diagonal, &config, 120);
        assert_relative_eq!(
            horizontal_speed(&player),
            config.movement_speed,
            epsilon = 1e-3
        );
    }

    #[test]
    fn opposite_keys_cancel_to_zero_target() {
        let mut player = player();
        let config = SimConfig::default();
        let conflicted = InputSnapshot {
            forward: true,
            backward: true,
            ..InputSnapshot::empty()
        };
        settle(&mut player, &conflicted, &config, 60);
        assert_relative_eq!(horizontal_speed(&player), 0.0, epsilon = 1e-3);
    }

    #[test]
    fn run_key_scales_the_settled_speed() {
        let mut player = player();
        let config = SimConfig::default();
        let running = InputSnapshot {
            forward: true,
            run: true,
            ..InputSnapshot::empty()
        };
        settle(&mut player, &running, &config, 240);
        assert_relative_eq!(
            horizontal_speed(&player),
            config.movement_speed * config.run_multiplier,
            epsilon = 1e-2
        );
    }

    #[test]
    fn release_reaches_exact_zero_within_ten_ticks() {
        let mut player = player();
        let config = SimConfig::default();
        settle(&mut player, &forward_input(), &config, 120);
        assert!(horizontal_speed(&player) > 1.0);

        let mut ticks_to_stop = None;
        for tick in 1..=10 {
            integrate(&mut player, &InputSnapshot::empty(), DT, &config);
            if horizontal_speed(&player) == 0.0 {
                ticks_to_stop = Some(tick);
                break;
            }
        }
        assert!(
            ticks_to_stop.is_some(),
            "speed still {} after 10 ticks",
            horizontal_speed(&player)
        );
    }

    #[test]
    fn displacement_is_velocity_times_dt_with_no_vertical_component() {
        let mut player = player();
        let config = SimConfig::default();
        settle(&mut player, &forward_input(), &config, 120);

        let displacement = integrate(&mut player, &forward_input(), DT, &config);
        assert_relative_eq!(displacement.x, player.velocity.x * DT);
        assert_relative_eq!(displacement.z, player.velocity.z * DT);
        assert_eq!(displacement.y, 0.0);
    }

    #[test]
    fn yaw_rotates_the_movement_basis() {
        let mut player = player();
        player.yaw = -90.0;
        let config = SimConfig::default();
        settle(&mut player, &forward_input(), &config, 120);

        // Facing -90 degrees of yaw turns "forward" onto +X.
        assert_relative_eq!(player.velocity.x, config.movement_speed, epsilon = 1e-3);
        assert_relative_eq!(player.velocity.z, 0.0, epsilon = 1e-3);
    }
}
