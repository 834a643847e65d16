//! Room layout generation.
//!
//! Maps an artwork count to a deterministic gallery: a long corridor whose
//! length grows with the collection, artworks alternating between the two
//! long walls, a rope barrier in front of each piece, and benches down the
//! center aisle. The output is the only collision geometry the simulation
//! ever consults; nothing is discovered from the scene at runtime.

/// Distance along the corridor between consecutive artwork slots.
pub const ARTWORK_SPACING: f32 = 10.0;
/// Rooms never shrink below this length, so small collections still get a
/// walkable gallery.
pub const MIN_ROOM_LENGTH: f32 = 120.0;
pub const ROOM_WIDTH: f32 = 40.0;
pub const WALL_HEIGHT: f32 = 25.0;
/// Artworks hang this far from the corridor centerline.
pub const ARTWORK_WALL_OFFSET: f32 = 15.0;
/// Radius of the exclusion zone around each hung piece. Large enough that a
/// player sphere cannot overlap the frame geometry.
pub const ARTWORK_BARRIER_RADIUS: f32 = 4.0;
/// One bench per this many units of corridor.
pub const BENCH_INTERVAL: f32 = 60.0;
pub const BENCH_STEP: f32 = 30.0;
pub const BENCH_X_OFFSET: f32 = 10.0;
pub const BENCH_RADIUS: f32 = 2.5;
/// Walkable overrun past the first and last artwork positions.
pub const ENTRY_MARGIN: f32 = 8.0;
/// Clearance kept between the walkable area and the long walls.
pub const SIDE_SETBACK: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSide {
    Left,
    Right,
}

/// Where an artwork hangs. Consumed by the plan renderer and by whatever 3D
/// backend places the frames; the simulation itself only reads the barriers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArtworkSlot {
    pub index: usize,
    pub x: f32,
    pub z: f32,
    pub side: WallSide,
}

/// Circular exclusion zones in front of an artwork pair position, one center
/// per long wall. Both sides are registered even though artworks alternate,
/// matching the hand-built galleries this layout was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArtworkBarrier {
    pub center_x: f32,
    pub left_z: f32,
    pub right_z: f32,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchObstacle {
    pub x: f32,
    pub z: f32,
    pub radius: f32,
}

/// Walkable rectangle on the XZ plane, already inset by the player radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl RoomBounds {
    pub fn contains(&self, x: f32, z: f32) -> bool {
        x >= self.min_x && x <= self.max_x && z >= self.min_z && z <= self.max_z
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.min_x < self.max_x && self.min_z < self.max_z)
            || !self.min_x.is_finite()
            || !self.max_x.is_finite()
            || !self.min_z.is_finite()
            || !self.max_z.is_finite()
    }
}

/// Static collision geometry for one gallery session. Write-once: built when
/// the artwork list becomes available, only read afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomGeometry {
    pub length: f32,
    pub width: f32,
    pub wall_height: f32,
    pub bounds: RoomBounds,
    pub artworks: Vec<ArtworkSlot>,
    pub barriers: Vec<ArtworkBarrier>,
    pub benches: Vec<BenchObstacle>,
}

/// Builds the gallery for `artwork_count` pieces. Deterministic and pure.
pub fn generate(artwork_count: usize, player_radius: f32) -> RoomGeometry {
    let length = (artwork_count as f32 * ARTWORK_SPACING).max(MIN_ROOM_LENGTH);
    let half_width = ROOM_WIDTH / 2.0;

    let mut artworks = Vec::with_capacity(artwork_count);
    let mut barriers = Vec::with_capacity(artwork_count);
    for index in 0..artwork_count {
        let x = index as f32 * ARTWORK_SPACING + ARTWORK_SPACING + 5.0;
        let side = if index % 2 == 0 {
            WallSide::Left
        } else {
            WallSide::Right
        };
        let z = match side {
            WallSide::Left => -ARTWORK_WALL_OFFSET,
            WallSide::Right => ARTWORK_WALL_OFFSET,
        };
        artworks.push(ArtworkSlot { index, x, z, side });
        barriers.push(ArtworkBarrier {
            center_x: x,
            left_z: -ARTWORK_WALL_OFFSET,
            right_z: ARTWORK_WALL_OFFSET,
            radius: ARTWORK_BARRIER_RADIUS,
        });
    }

    let bench_count = (length / BENCH_INTERVAL).floor() as usize;
    let benches = (0..bench_count)
        .map(|index| BenchObstacle {
            x: (index as f32 + 1.0) * BENCH_STEP + BENCH_X_OFFSET,
            z: 0.0,
            radius: BENCH_RADIUS,
        })
        .collect();

    let bounds = RoomBounds {
        min_x: -ENTRY_MARGIN + player_radius,
        max_x: length + ENTRY_MARGIN - player_radius,
        min_z: -(half_width - SIDE_SETBACK) + player_radius,
        max_z: (half_width - SIDE_SETBACK) - player_radius,
    };

    RoomGeometry {
        length,
        width: ROOM_WIDTH,
        wall_height: WALL_HEIGHT,
        bounds,
        artworks,
        barriers,
        benches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_gallery_gets_minimum_room_and_no_barriers() {
        let geometry = generate(0, 0.5);
        assert_eq!(geometry.length, MIN_ROOM_LENGTH);
        assert!(geometry.artworks.is_empty());
        assert!(geometry.barriers.is_empty());
        assert!(!geometry.bounds.is_degenerate());
    }

    #[test]
    fn twenty_artworks_at_spacing_ten_fill_two_hundred_units() {
        let geometry = generate(20, 0.5);
        assert_eq!(geometry.length, 200.0);
        assert_eq!(geometry.barriers.len(), 20);
    }

    #[test]
    fn room_length_grows_monotonically_with_collection_size() {
        let mut previous = 0.0;
        for count in 0..40 {
            let length = generate(count, 0.5).length;
            assert!(length >= previous);
            previous = length;
        }
    }

    #[test]
    fn artworks_alternate_walls_by_index_parity() {
        let geometry = generate(5, 0.5);
        for slot in &geometry.artworks {
            let expected = if slot.index % 2 == 0 {
                WallSide::Left
            } else {
                WallSide::Right
            };
            assert_eq!(slot.side, expected);
            let expected_z = match expected {
                WallSide::Left => -ARTWORK_WALL_OFFSET,
                WallSide::Right => ARTWORK_WALL_OFFSET,
            };
            assert_eq!(slot.z, expected_z);
        }
    }

    #[test]
    fn artwork_positions_follow_spacing_formula() {
        let geometry = generate(3, 0.5);
        let xs: Vec<f32> = geometry.artworks.iter().map(|slot| slot.x).collect();
        assert_eq!(xs, vec![15.0, 25.0, 35.0]);
    }

    #[test]
    fn barrier_radius_exceeds_player_radius() {
        let player_radius = 0.5;
        let geometry = generate(4, player_radius);
        for barrier in &geometry.barriers {
            assert!(barrier.radius > player_radius);
        }
    }

    #[test]
    fn minimum_room_seats_two_benches_on_the_centerline() {
        let geometry = generate(0, 0.5);
        assert_eq!(geometry.benches.len(), 2);
        assert_eq!(geometry.benches[0].x, 40.0);
        assert_eq!(geometry.benches[1].x, 70.0);
        for bench in &geometry.benches {
            assert_eq!(bench.z, 0.0);
            assert_eq!(bench.radius, BENCH_RADIUS);
        }
    }

    #[test]
    fn bounds_are_inset_by_player_radius() {
        let tight = generate(0, 2.0);
        let loose = generate(0, 0.0);
        assert!(tight.bounds.min_x > loose.bounds.min_x);
        assert!(tight.bounds.max_x < loose.bounds.max_x);
        assert!(tight.bounds.min_z > loose.bounds.min_z);
        assert!(tight.bounds.max_z < loose.bounds.max_z);
    }

    #[test]
    fn bounds_contains_is_inclusive_of_edges() {
        let bounds = RoomBounds {
            min_x: -1.0,
            max_x: 1.0,
            min_z: -2.0,
            max_z: 2.0,
        };
        assert!(bounds.contains(-1.0, 2.0));
        assert!(bounds.contains(0.0, 0.0));
        assert!(!bounds.contains(1.1, 0.0));
        assert!(!bounds.contains(0.0, -2.1));
    }
}
