//! Board state: the placed-tile registry and the highlight cursor.
//!
//! # Invariants
//! - No two placed tiles share a grid cell; enforced at insertion.
//! - Tiles are kept in placement order and are never removed.
//! - The cursor only moves on a successful pick; a miss leaves it untouched.
//! - All state mutations flow through explicit operations.

pub mod board;

pub use board::{Board, BoardError, BoardEvent, HighlightCursor, PlaceOutcome, PlacedTile};
