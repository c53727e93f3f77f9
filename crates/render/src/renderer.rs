use glam::Vec3;
use tilegrid_board::Board;

/// Camera/view configuration for rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Field of view in degrees.
    pub fov_degrees: f32,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            eye: Vec3::new(10.0, 15.0, -22.0),
            target: Vec3::ZERO,
            fov_degrees: 45.0,
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads board state and a view configuration, then produces
/// output. It never mutates the board.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given board state and view.
    fn render(&self, board: &Board, view: &RenderView) -> Self::Output;
}

/// Debug text renderer for headless use.
///
/// Produces a human-readable frame of the board state. Useful for CLI
/// output, logging, and testing the render interface.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, board: &Board, view: &RenderView) -> String {
        let mut out = String::new();
        out.push_str(&format!("=== Tile Grid (tiles={}) ===\n", board.tile_count()));
        out.push_str(&format!(
            "Camera: eye=({:.1}, {:.1}, {:.1}) target=({:.1}, {:.1}, {:.1}) fov={:.0}\n",
            view.eye.x,
            view.eye.y,
            view.eye.z,
            view.target.x,
            view.target.y,
            view.target.z,
            view.fov_degrees
        ));

        let cursor = board.cursor();
        out.push_str(&format!(
            "Cursor: cell={} color={} opacity={:.2}\n",
            cursor.cell(),
            cursor.color(),
            cursor.opacity
        ));

        for tile in board.tiles() {
            let p = tile.transform.position;
            out.push_str(&format!(
                "  [{:.8}] cell={} pos=({:.2}, {:.2}, {:.2}) color={}\n",
                &tile.id().0.to_string()[..8],
                tile.cell(),
                p.x,
                p.y,
                p.z,
                tile.color()
            ));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilegrid_common::GridCell;

    #[test]
    fn debug_renderer_empty_board() {
        let board = Board::new();
        let renderer = DebugTextRenderer::new();
        let output = renderer.render(&board, &RenderView::default());

        assert!(output.contains("tiles=0"));
        assert!(output.contains("Cursor: cell=(0, 0)"));
    }

    #[test]
    fn debug_renderer_lists_tiles() {
        let mut board = Board::new();
        let _ = board.place_at(GridCell::new(2, -3));
        let _ = board.place_at(GridCell::new(0, 1));

        let renderer = DebugTextRenderer::new();
        let output = renderer.render(&board, &RenderView::default());

        assert!(output.contains("tiles=2"));
        assert!(output.contains("cell=(2, -3)"));
        assert!(output.contains("#ffffff"));
    }

    #[test]
    fn render_view_default_matches_scene_framing() {
        let view = RenderView::default();
        assert_eq!(view.eye, Vec3::new(10.0, 15.0, -22.0));
        assert_eq!(view.target, Vec3::ZERO);
        assert_eq!(view.fov_degrees, 45.0);
    }
}
