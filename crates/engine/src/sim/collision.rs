//! Horizontal collision resolution with wall sliding.
//!
//! Each axis of a proposed displacement is tested on its own: motion along X
//! is accepted only if the X-only candidate stays inside the room bounds and
//! clear of every circular obstacle, and Z is judged the same way,
//! independently of the X decision. Blocking one axis therefore never stops
//! motion along the other, which is what lets a player slide along a wall
//! they are pushing into diagonally instead of sticking to it.
//!
//! Vertical position is not resolved here; the ground physics owns Y.

use glam::Vec3;

use super::layout::RoomGeometry;

/// True if the XZ point lies inside the walkable bounds and outside every
/// artwork barrier and bench exclusion zone.
pub fn position_is_clear(geometry: &RoomGeometry, x: f32, z: f32) -> bool {
    if !geometry.bounds.contains(x, z) {
        return false;
    }
    for barrier in &geometry.barriers {
        if within_radius(x, z, barrier.center_x, barrier.left_z, barrier.radius)
            || within_radius(x, z, barrier.center_x, barrier.right_z, barrier.radius)
        {
            return false;
        }
    }
    for bench in &geometry.benches {
        if within_radius(x, z, bench.x, bench.z, bench.radius) {
            return false;
        }
    }
    true
}

/// Applies as much of `displacement` to `current` as the geometry allows,
/// axis by axis. Never moves the player into an invalid position, and never
/// iterates: a start position that is already invalid simply yields no
/// motion, leaving recovery to the caller's last-valid fallback.
pub fn resolve(geometry: &RoomGeometry, current: Vec3, displacement: Vec3) -> Vec3 {
    let mut next = current;
    if displacement.x != 0.0 && position_is_clear(geometry, current.x + displacement.x, current.z) {
        next.x = current.x + displacement.x;
    }
    if displacement.z != 0.0 && position_is_clear(geometry, current.x, current.z + displacement.z) {
        next.z = current.z + displacement.z;
    }
    next
}

fn within_radius(x: f32, z: f32, center_x: f32, center_z: f32, radius: f32) -> bool {
    let dx = x - center_x;
    let dz = z - center_z;
    dx * dx + dz * dz < radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::layout::{self, BenchObstacle};

    fn geometry() -> RoomGeometry {
        layout::generate(4, 0.5)
    }

    #[test]
    fn open_floor_accepts_the_full_displacement() {
        let geometry = geometry();
        let current = Vec3::new(0.0, 1.6, 5.0);
        let resolved = resolve(&geometry, current, Vec3::new(0.1, 0.0, -0.1));
        assert_eq!(resolved, Vec3::new(0.1, 1.6, 4.9));
    }

    #[test]
    fn bounds_are_never_exceeded() {
        let geometry = geometry();
        let bounds = geometry.bounds;
        let mut position = Vec3::new(0.0, 1.6, 5.0);

        // March hard into every wall in turn; the resolved position must
        // stay inside the walkable rectangle the whole way.
        let pushes = [
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(-2.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::new(0.0, 0.0, -2.0),
        ];
        for push in pushes {
            for _ in 0..400 {
                position = resolve(&geometry, position, push);
                assert!(bounds.contains(position.x, position.z));
            }
        }
    }

    #[test]
    fn resolved_positions_respect_every_obstacle_radius() {
        let geometry = geometry();
        let mut position = Vec3::new(0.0, 1.6, 5.0);

        // A drunkard's walk of large steps all over the room.
        let steps = [
            Vec3::new(0.9, 0.0, 0.4),
            Vec3::new(0.7, 0.0, -0.8),
            Vec3::new(-0.3, 0.0, 0.9),
            Vec3::new(1.0, 0.0, 0.1),
            Vec3::new(-0.6, 0.0, -0.5),
        ];
        for round in 0..600 {
            position = resolve(&geometry, position, steps[round % steps.len()]);
            for barrier in &geometry.barriers {
                for center_z in [barrier.left_z, barrier.right_z] {
                    let dx = position.x - barrier.center_x;
                    let dz = position.z - center_z;
                    assert!((dx * dx + dz * dz).sqrt() >= barrier.radius);
                }
            }
            for bench in &geometry.benches {
                let dx = position.x - bench.x;
                let dz = position.z - bench.z;
                assert!((dx * dx + dz * dz).sqrt() >= bench.radius);
            }
        }
    }

    #[test]
    fn diagonal_push_into_a_wall_slides_along_it() {
        let geometry = geometry();
        // Stand against the near side wall, pushing 45 degrees into it.
        let current = Vec3::new(20.0, 1.6, geometry.bounds.max_z);
        let resolved = resolve(&geometry, current, Vec3::new(0.08, 0.0, 0.08));

        // Z is blocked by the wall, X keeps moving: true wall sliding, not
        // the block-all-axes behavior.
        assert!(resolved.x > current.x);
        assert_eq!(resolved.z, current.z);
    }

    #[test]
    fn sliding_preserves_the_parallel_component_around_a_bench() {
        let geometry = geometry();
        let bench = geometry.benches[0];
        // Approach from the -X side, just outside the radius, pushing
        // diagonally into the bench.
        let current = Vec3::new(bench.x - bench.radius - 0.01, 1.6, bench.z + 0.3);
        let resolved = resolve(&geometry, current, Vec3::new(0.05, 0.0, 0.05));

        assert_eq!(resolved.x, current.x);
        assert!(resolved.z > current.z);
    }

    #[test]
    fn invalid_start_produces_no_motion() {
        let geometry = geometry();
        let bench = geometry.benches[0];
        let inside = Vec3::new(bench.x, 1.6, bench.z);
        let resolved = resolve(&geometry, inside, Vec3::new(0.05, 0.0, 0.05));
        assert_eq!(resolved, inside);
    }

    #[test]
    fn zero_displacement_is_a_no_op() {
        let geometry = geometry();
        let current = Vec3::new(3.0, 1.6, 2.0);
        assert_eq!(resolve(&geometry, current, Vec3::ZERO), current);
    }

    #[test]
    fn barrier_blocks_both_wall_sides() {
        let geometry = geometry();
        let barrier = geometry.barriers[0];
        assert!(!position_is_clear(
            &geometry,
            barrier.center_x,
            barrier.left_z + barrier.radius * 0.5
        ));
        assert!(!position_is_clear(
            &geometry,
            barrier.center_x,
            barrier.right_z - barrier.radius * 0.5
        ));
    }

    #[test]
    fn exact_radius_distance_counts_as_clear() {
        let geometry = RoomGeometry {
            benches: vec![BenchObstacle {
                x: 0.0,
                z: 0.0,
                radius: 2.5,
            }],
            barriers: Vec::new(),
            artworks: Vec::new(),
            ..layout::generate(0, 0.5)
        };
        assert!(position_is_clear(&geometry, 2.5, 0.0));
        assert!(!position_is_clear(&geometry, 2.49, 0.0));
    }
}
