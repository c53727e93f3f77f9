//! wgpu render backend for the tile grid.
//!
//! Renders the grid-line floor and instanced tile quads (placed tiles plus
//! the highlight cursor). Camera orbits a fixed target with mouse drag and
//! scroll zoom.
//!
//! # Invariants
//! - The renderer never mutates board state.
//! - Cursor opacity is clamped into a renderable alpha here, at the boundary.

mod camera;
mod gpu;
mod shaders;

pub use camera::OrbitCamera;
pub use gpu::WgpuRenderer;
