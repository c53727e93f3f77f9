//! Shared value types for the tile grid.
//!
//! # Invariants
//! - `GridCell` is the only currency for board positions; raw intersection
//!   points are snapped at the picking boundary and never stored.
//! - All types here are plain values: no interior mutability, no I/O.

pub mod types;

pub use types::{Color, GridCell, TileId, Transform};
