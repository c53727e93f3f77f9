use crate::ray::Ray;
use glam::Vec3;
use tilegrid_common::GridCell;

/// Rays steeper than this slope count as parallel to the plane.
const PARALLEL_EPS: f32 = 1e-6;

/// The invisible collision surface under the grid: a finite square region of
/// the y = 0 plane, centered at the world origin.
#[derive(Debug, Clone, Copy)]
pub struct GroundPlane {
    half_extent: f32,
}

impl GroundPlane {
    /// Side length of the default plane, matching the visible grid.
    pub const DEFAULT_EXTENT: f32 = 15.0;

    /// Create a plane spanning `extent` x `extent` units.
    pub fn new(extent: f32) -> Self {
        assert!(extent > 0.0, "extent must be positive");
        Self {
            half_extent: extent / 2.0,
        }
    }

    pub fn extent(&self) -> f32 {
        self.half_extent * 2.0
    }

    /// First intersection of the ray with the plane, or `None` when the ray
    /// is parallel, points away, or crosses outside the plane's bounds.
    pub fn intersect(&self, ray: &Ray) -> Option<Vec3> {
        if ray.dir.y.abs() < PARALLEL_EPS {
            return None;
        }
        let t = -ray.origin.y / ray.dir.y;
        if t < 0.0 {
            return None;
        }
        let point = ray.at(t);
        if point.x.abs() > self.half_extent || point.z.abs() > self.half_extent {
            return None;
        }
        Some(point)
    }

    /// The grid cell under the ray, if it hits the plane.
    pub fn pick_cell(&self, ray: &Ray) -> Option<GridCell> {
        let cell = self.intersect(ray).map(GridCell::from_world);
        if let Some(c) = cell {
            tracing::trace!(%c, "pick");
        }
        cell
    }
}

impl Default for GroundPlane {
    fn default() -> Self {
        Self::new(Self::DEFAULT_EXTENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_down(x: f32, z: f32) -> Ray {
        Ray::new(Vec3::new(x, 5.0, z), Vec3::NEG_Y)
    }

    #[test]
    fn vertical_ray_hits_below_origin() {
        let plane = GroundPlane::default();
        let hit = plane.intersect(&straight_down(2.3, -1.7)).unwrap();
        assert_eq!(hit, Vec3::new(2.3, 0.0, -1.7));
    }

    #[test]
    fn hit_snaps_to_cell_center() {
        let plane = GroundPlane::default();
        let cell = plane.pick_cell(&straight_down(2.3, -1.7)).unwrap();
        assert_eq!(cell, GridCell::new(2, -2));
        assert_eq!(cell.center(), Vec3::new(2.5, 0.0, -1.5));
    }

    #[test]
    fn parallel_ray_misses() {
        let plane = GroundPlane::default();
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X);
        assert!(plane.intersect(&ray).is_none());
    }

    #[test]
    fn ray_pointing_away_misses() {
        let plane = GroundPlane::default();
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::Y);
        assert!(plane.intersect(&ray).is_none());
    }

    #[test]
    fn hit_outside_extent_misses() {
        let plane = GroundPlane::default();
        assert!(plane.intersect(&straight_down(20.0, 0.0)).is_none());
        assert!(plane.intersect(&straight_down(0.0, -8.0)).is_none());
    }

    #[test]
    fn extent_boundary() {
        let plane = GroundPlane::default();
        // 15x15 plane spans [-7.5, 7.5] on each axis.
        assert!(plane.intersect(&straight_down(7.4, 7.4)).is_some());
        assert!(plane.intersect(&straight_down(7.6, 0.0)).is_none());
        assert_eq!(plane.extent(), 15.0);
    }

    #[test]
    fn oblique_ray_hits_where_expected() {
        let plane = GroundPlane::default();
        let ray = Ray::new(Vec3::new(0.0, 4.0, 0.0), Vec3::new(1.0, -1.0, 0.0));
        let hit = plane.intersect(&ray).unwrap();
        assert!((hit - Vec3::new(4.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    #[should_panic(expected = "extent must be positive")]
    fn zero_extent_rejected() {
        let _ = GroundPlane::new(0.0);
    }
}
