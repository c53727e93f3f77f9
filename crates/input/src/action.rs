use glam::Vec2;

/// Viewport dimensions in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Normalize viewport-relative pointer coordinates to device coordinates
    /// in [-1, 1], +y up.
    pub fn to_ndc(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(
            (x / self.width.max(1) as f32) * 2.0 - 1.0,
            -(y / self.height.max(1) as f32) * 2.0 + 1.0,
        )
    }
}

/// A raw pointer event in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Moved { x: f32, y: f32 },
    Pressed,
}

/// A high-level action produced from raw input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Re-aim the highlight cursor through the given device coordinate.
    Hover(Vec2),
    /// Place a tile at the cursor's cell.
    Place,
    /// Viewport dimensions changed.
    Resize(Viewport),
    /// No-op (used for input mapping that hasn't been bound yet).
    Noop,
}

/// Translate a raw pointer event into an action against the current viewport.
pub fn map_pointer(event: PointerEvent, viewport: Viewport) -> Action {
    match event {
        PointerEvent::Moved { x, y } => {
            let ndc = viewport.to_ndc(x, y);
            tracing::trace!(x, y, ?ndc, "pointer move");
            Action::Hover(ndc)
        }
        PointerEvent::Pressed => Action::Place,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ndc_corners() {
        let vp = Viewport::new(800, 600);
        assert_eq!(vp.to_ndc(0.0, 0.0), Vec2::new(-1.0, 1.0));
        assert_eq!(vp.to_ndc(800.0, 600.0), Vec2::new(1.0, -1.0));
        assert_eq!(vp.to_ndc(400.0, 300.0), Vec2::ZERO);
    }

    #[test]
    fn ndc_quarter_point() {
        let vp = Viewport::new(800, 600);
        assert_eq!(vp.to_ndc(200.0, 150.0), Vec2::new(-0.5, 0.5));
    }

    #[test]
    fn aspect_guards_zero_height() {
        let vp = Viewport::new(800, 0);
        assert_eq!(vp.aspect(), 800.0);
    }

    #[test]
    fn move_maps_to_hover() {
        let vp = Viewport::new(800, 600);
        let action = map_pointer(PointerEvent::Moved { x: 400.0, y: 300.0 }, vp);
        assert_eq!(action, Action::Hover(Vec2::ZERO));
    }

    #[test]
    fn press_maps_to_place() {
        let vp = Viewport::new(800, 600);
        assert_eq!(map_pointer(PointerEvent::Pressed, vp), Action::Place);
    }
}
