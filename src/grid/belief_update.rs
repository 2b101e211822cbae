//! Range scan update for the belief grid.
//!
//! Processes a scan with a simple voting scheme, not Bayesian fusion:
//! - Cells along each ray are voted Free
//! - The cell at an obstacle return is voted Occupied
//!
//! Votes go through [`GridStorage::observe`], so Occupied always wins over
//! Free and nothing is ever voted back to Unknown.

use crate::core::Pose2D;
use crate::grid::ObserveResult;
use crate::grid::cell::BeliefCell;
use crate::grid::raycaster::RayWalk;
use crate::grid::storage::GridStorage;
use crate::sensor::RangeHit;

/// Update the grid with one scan taken from `pose`.
///
/// Each ray is re-projected from the pose position along the ray angle at
/// the reported distance. For every ray:
/// 1. Walk towards the end point in half-cell steps, voting each cell Free
///    (stopping one step short for obstacle returns)
/// 2. If the ray hit something farther away than `robot_radius`, vote the
///    end point cell Occupied
///
/// Out-of-bounds cells are skipped silently.
pub fn update_from_scan(
    storage: &mut GridStorage,
    pose: Pose2D,
    hits: &[RangeHit],
    robot_radius: f32,
) -> ObserveResult {
    let mut result = ObserveResult::default();

    let origin = pose.position();
    let cell_size = storage.cell_size();

    for reading in hits {
        let endpoint = origin.point_at(reading.angle, reading.distance);

        for coord in RayWalk::new(origin, endpoint, cell_size, reading.hit) {
            if !storage.is_valid_coord(coord) {
                result.cells_ignored += 1;
                continue;
            }
            if storage.observe(coord, BeliefCell::Free) {
                result.cells_free += 1;
            }
        }

        // Returns inside the robot body would stamp walls under the robot
        if reading.hit && reading.distance > robot_radius {
            let coord = storage.world_to_grid(endpoint);
            if !storage.is_valid_coord(coord) {
                result.cells_ignored += 1;
            } else if storage.observe(coord, BeliefCell::Occupied) {
                result.cells_occupied += 1;
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GridCoord, WorldPoint};

    fn hit_east(origin: WorldPoint, distance: f32) -> RangeHit {
        RangeHit::hit(origin, 0.0, distance)
    }

    #[test]
    fn test_single_hit_marks_free_then_occupied() {
        let mut storage = GridStorage::new(100, 80, 10.0);
        let pose = Pose2D::new(100.0, 300.0, 0.0);
        let hits = [hit_east(pose.position(), 200.0)];

        let result = update_from_scan(&mut storage, pose, &hits, 12.0);

        for col in 10..30 {
            assert_eq!(storage.get(GridCoord::new(col, 30)), Some(BeliefCell::Free), "col {col}");
        }
        assert_eq!(storage.get(GridCoord::new(30, 30)), Some(BeliefCell::Occupied));
        assert_eq!(result.cells_free, 20);
        assert_eq!(result.cells_occupied, 1);
    }

    #[test]
    fn test_miss_marks_no_obstacle() {
        let mut storage = GridStorage::new(100, 80, 10.0);
        let pose = Pose2D::new(100.0, 300.0, 0.0);
        let hits = [RangeHit::miss(pose.position(), 0.0, 100.0)];

        let result = update_from_scan(&mut storage, pose, &hits, 12.0);

        assert_eq!(result.cells_occupied, 0);
        assert_eq!(storage.counts().occupied, 0);
        assert_eq!(storage.get(GridCoord::new(19, 30)), Some(BeliefCell::Free));
    }

    #[test]
    fn test_hit_inside_robot_radius_not_marked() {
        let mut storage = GridStorage::new(100, 80, 10.0);
        let pose = Pose2D::new(100.0, 300.0, 0.0);
        let hits = [hit_east(pose.position(), 8.0)];

        let result = update_from_scan(&mut storage, pose, &hits, 12.0);

        assert_eq!(result.cells_occupied, 0);
        assert_eq!(storage.counts().occupied, 0);
    }

    #[test]
    fn test_occupied_survives_free_rays() {
        let mut storage = GridStorage::new(100, 80, 10.0);
        let pose = Pose2D::new(100.0, 300.0, 0.0);

        update_from_scan(&mut storage, pose, &[hit_east(pose.position(), 150.0)], 12.0);
        assert_eq!(storage.get(GridCoord::new(25, 30)), Some(BeliefCell::Occupied));

        // A later ray passes straight through the old obstacle cell
        update_from_scan(&mut storage, pose, &[hit_east(pose.position(), 300.0)], 12.0);
        assert_eq!(storage.get(GridCoord::new(25, 30)), Some(BeliefCell::Occupied));
        assert_eq!(storage.get(GridCoord::new(26, 30)), Some(BeliefCell::Free));
    }

    #[test]
    fn test_out_of_bounds_ray_is_ignored() {
        let mut storage = GridStorage::new(10, 10, 10.0);
        let pose = Pose2D::new(50.0, 50.0, 0.0);
        let hits = [hit_east(pose.position(), 200.0)];

        let result = update_from_scan(&mut storage, pose, &hits, 12.0);

        assert!(result.cells_ignored > 0);
        assert_eq!(storage.counts().occupied, 0);
        assert_eq!(storage.get(GridCoord::new(9, 5)), Some(BeliefCell::Free));
    }
}
