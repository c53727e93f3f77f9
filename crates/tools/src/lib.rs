//! Developer tooling: read-only board inspection.
//!
//! # Invariants
//! - Tools never mutate the board; they only derive views from it.

mod inspector;

pub use inspector::{BoardInspector, BoardSummary, TileInfo};

pub fn crate_info() -> &'static str {
    "tilegrid-tools v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("tools"));
    }
}
