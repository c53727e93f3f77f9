//! Ground plane & ray query: pure geometry between pointer and grid.
//!
//! # Invariants
//! - Picking is a pure function of camera state, pointer coordinates, and
//!   plane geometry; nothing here mutates board state.
//! - A ray that misses the plane yields no cell, never a fallback cell.

mod plane;
mod ray;

pub use plane::GroundPlane;
pub use ray::Ray;

pub fn crate_info() -> &'static str {
    "tilegrid-pick v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("pick"));
    }
}
