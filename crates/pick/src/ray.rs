use glam::{Mat4, Vec2, Vec3};

/// A ray in world space with a normalized direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize(),
        }
    }

    /// The picking ray through a normalized device coordinate, for a camera
    /// described by its combined view-projection matrix.
    ///
    /// Unprojects the near- and far-plane points under the pointer and casts
    /// from near through far.
    pub fn through_ndc(view_proj: Mat4, ndc: Vec2) -> Self {
        let inv = view_proj.inverse();
        let near = inv.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        let far = inv.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        Self::new(near, far - near)
    }

    /// Point along the ray at parameter `t`.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_is_normalized() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -3.0, 0.0));
        assert!((ray.dir.length() - 1.0).abs() < 1e-6);
        assert_eq!(ray.dir, Vec3::NEG_Y);
    }

    #[test]
    fn at_walks_along_direction() {
        let ray = Ray::new(Vec3::new(1.0, 5.0, 0.0), Vec3::NEG_Y);
        assert_eq!(ray.at(2.0), Vec3::new(1.0, 3.0, 0.0));
    }

    #[test]
    fn center_ndc_ray_points_at_camera_target() {
        let eye = Vec3::new(0.0, 10.0, 10.0);
        let target = Vec3::ZERO;
        let view = Mat4::look_at_rh(eye, target, Vec3::Y);
        let proj = Mat4::perspective_rh(60.0_f32.to_radians(), 1.0, 0.1, 1000.0);

        let ray = Ray::through_ndc(proj * view, Vec2::ZERO);
        let toward_target = (target - eye).normalize();
        assert!(ray.dir.dot(toward_target) > 0.999);
    }

    #[test]
    fn off_center_ndc_rays_diverge() {
        let view = Mat4::look_at_rh(Vec3::new(0.0, 5.0, 15.0), Vec3::ZERO, Vec3::Y);
        let proj = Mat4::perspective_rh(45.0_f32.to_radians(), 16.0 / 9.0, 0.1, 1000.0);
        let vp = proj * view;

        let left = Ray::through_ndc(vp, Vec2::new(-0.8, 0.0));
        let right = Ray::through_ndc(vp, Vec2::new(0.8, 0.0));
        assert!(left.dir.x < 0.0);
        assert!(right.dir.x > 0.0);
    }
}
