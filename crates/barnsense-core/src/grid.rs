//! Zone generator — the fixed sampling grid inside a barn volume.
//!
//! The grid is 5 columns × 3 layers × 5 rows by default, centered on the
//! x/z plane and lifted off the floor on y. Generation is pure and
//! deterministic; there are no failure modes.

use serde::{Deserialize, Serialize};

/// Horizontal/vertical distance between neighboring zones, in meters.
pub const DEFAULT_SPACING: f32 = 2.0;

/// Height of the lowest zone layer above the floor, in meters.
pub const LAYER_BASE_HEIGHT: f32 = 1.0;

/// Grid extent per axis: `x` columns, `y` vertical layers, `z` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDims {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl Default for GridDims {
    fn default() -> Self {
        Self { x: 5, y: 3, z: 5 }
    }
}

impl GridDims {
    /// Total number of zones in the grid.
    pub fn count(self) -> usize {
        self.x * self.y * self.z
    }

    /// Whether an index triple falls inside the grid.
    pub fn contains(self, point: GridPoint) -> bool {
        point.x < self.x && point.y < self.y && point.z < self.z
    }

    /// Iterate every grid point: x outermost, then z, then y.
    pub fn points(self) -> impl Iterator<Item = GridPoint> {
        (0..self.x).flat_map(move |x| {
            (0..self.z).flat_map(move |z| (0..self.y).map(move |y| GridPoint { x, y, z }))
        })
    }
}

/// Integer index of one sample zone within the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

/// World-space position of a zone, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Map a grid point to its world-space position.
///
/// x and z are centered around the origin; y counts layers upward starting
/// at [`LAYER_BASE_HEIGHT`].
pub fn position_of(point: GridPoint, dims: GridDims, spacing: f32) -> Position {
    Position {
        x: point.x as f32 * spacing - (dims.x - 1) as f32 * spacing / 2.0,
        y: point.y as f32 * spacing + LAYER_BASE_HEIGHT,
        z: point.z as f32 * spacing - (dims.z - 1) as f32 * spacing / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_grid_has_75_points() {
        let dims = GridDims::default();
        assert_eq!(dims.count(), 75);
        assert_eq!(dims.points().count(), 75);
    }

    #[test]
    fn points_are_distinct() {
        let dims = GridDims::default();
        let set: HashSet<GridPoint> = dims.points().collect();
        assert_eq!(set.len(), 75, "grid produced duplicate points");
    }

    #[test]
    fn points_stay_in_bounds() {
        let dims = GridDims::default();
        for p in dims.points() {
            assert!(dims.contains(p), "{p:?} out of bounds");
        }
    }

    #[test]
    fn positions_centered_on_xz_plane() {
        let dims = GridDims::default();
        let sum_x: f32 = dims
            .points()
            .map(|p| position_of(p, dims, DEFAULT_SPACING).x)
            .sum();
        let sum_z: f32 = dims
            .points()
            .map(|p| position_of(p, dims, DEFAULT_SPACING).z)
            .sum();
        assert!(sum_x.abs() < 1e-3, "x positions not centered: {sum_x}");
        assert!(sum_z.abs() < 1e-3, "z positions not centered: {sum_z}");
    }

    #[test]
    fn lowest_layer_sits_above_floor() {
        let dims = GridDims::default();
        for p in dims.points() {
            let pos = position_of(p, dims, DEFAULT_SPACING);
            assert!(pos.y >= LAYER_BASE_HEIGHT);
        }
    }

    #[test]
    fn corner_positions() {
        let dims = GridDims::default();
        let origin = position_of(GridPoint { x: 0, y: 0, z: 0 }, dims, DEFAULT_SPACING);
        assert_eq!(origin.x, -4.0);
        assert_eq!(origin.y, 1.0);
        assert_eq!(origin.z, -4.0);

        let far = position_of(GridPoint { x: 4, y: 2, z: 4 }, dims, DEFAULT_SPACING);
        assert_eq!(far.x, 4.0);
        assert_eq!(far.y, 5.0);
        assert_eq!(far.z, 4.0);
    }

    #[test]
    fn contains_rejects_out_of_range() {
        let dims = GridDims::default();
        assert!(!dims.contains(GridPoint { x: 5, y: 0, z: 0 }));
        assert!(!dims.contains(GridPoint { x: 0, y: 3, z: 0 }));
        assert!(!dims.contains(GridPoint { x: 0, y: 0, z: 5 }));
    }
}
