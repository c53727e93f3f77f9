//! Rendering adapter: renderer-agnostic interface.
//!
//! # Invariants
//! - Renderers read board state; they never mutate it.
//! - A frame is a pure projection of (board, view).

mod renderer;

pub use renderer::{DebugTextRenderer, RenderView, Renderer};

pub fn crate_info() -> &'static str {
    "tilegrid-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
