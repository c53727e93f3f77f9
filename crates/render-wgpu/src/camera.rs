use glam::{Mat4, Vec3};

/// Orbit camera: circles a fixed target at a yaw/pitch/distance.
/// Camera motion never feeds back into board state.
pub struct OrbitCamera {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub sensitivity: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::looking_from(Vec3::new(10.0, 15.0, -22.0), Vec3::ZERO)
    }
}

impl OrbitCamera {
    const MIN_DISTANCE: f32 = 2.0;
    const MAX_DISTANCE: f32 = 120.0;

    /// Build an orbit camera positioned at `eye`, circling `target`.
    pub fn looking_from(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let distance = offset.length().max(Self::MIN_DISTANCE);
        Self {
            target,
            yaw: offset.z.atan2(offset.x),
            pitch: (offset.y / distance).asin(),
            distance,
            fov: 45.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
            sensitivity: 0.005,
        }
    }

    /// Camera position in world space, derived from the orbit parameters.
    pub fn position(&self) -> Vec3 {
        let planar = self.pitch.cos() * self.distance;
        self.target
            + Vec3::new(
                planar * self.yaw.cos(),
                self.pitch.sin() * self.distance,
                planar * self.yaw.sin(),
            )
    }

    /// Swing the camera around the target by a pointer delta.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch = (self.pitch + dy * self.sensitivity)
            .clamp(-89.0_f32.to_radians(), 89.0_f32.to_radians());
    }

    /// Move toward or away from the target. Positive `steps` zooms in.
    pub fn zoom(&mut self, steps: f32) {
        self.distance =
            (self.distance - steps).clamp(Self::MIN_DISTANCE, Self::MAX_DISTANCE);
    }

    /// Update the projection aspect ratio from new viewport dimensions.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
