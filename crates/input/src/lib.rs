//! Input mapping: raw pointer events to shared actions.
//!
//! # Invariants
//! - The board consumes actions, never raw pointer events.
//! - Normalization to device coordinates happens here and nowhere else.

pub mod action;

pub use action::{Action, PointerEvent, Viewport, map_pointer};

pub fn crate_info() -> &'static str {
    "tilegrid-input v0.1.0"
}
