use serde::Serialize;
use tilegrid_board::Board;
use tilegrid_common::{Color, GridCell, TileId};

/// Board inspector for developer tooling.
///
/// Provides read-only queries against the board state for debugging and
/// development UI.
pub struct BoardInspector;

impl BoardInspector {
    /// Produce a summary of the board state.
    pub fn summary(board: &Board) -> BoardSummary {
        BoardSummary {
            tile_count: board.tile_count(),
            cursor_cell: board.cursor().cell(),
            cursor_color: board.cursor().color(),
            pending_events: board.events().len(),
        }
    }

    /// Detailed info about a single tile.
    pub fn inspect_tile(board: &Board, id: TileId) -> Option<TileInfo> {
        board.get(id).map(|tile| {
            let p = tile.transform.position;
            TileInfo {
                id,
                cell: tile.cell(),
                position: [p.x, p.y, p.z],
                color: tile.color(),
            }
        })
    }

    /// List all tile ids in placement order.
    pub fn list_tiles(board: &Board) -> Vec<TileId> {
        board.tiles().iter().map(|t| t.id()).collect()
    }
}

/// Summary of board state for the inspector.
#[derive(Debug, Clone, Serialize)]
pub struct BoardSummary {
    pub tile_count: usize,
    pub cursor_cell: GridCell,
    pub cursor_color: Color,
    pub pending_events: usize,
}

impl std::fmt::Display for BoardSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Board: tiles={} cursor={} color={} pending_events={}",
            self.tile_count, self.cursor_cell, self.cursor_color, self.pending_events
        )
    }
}

/// Detailed info about a single tile.
#[derive(Debug, Clone, Serialize)]
pub struct TileInfo {
    pub id: TileId,
    pub cell: GridCell,
    pub position: [f32; 3],
    pub color: Color,
}

impl std::fmt::Display for TileInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Tile [{:.8}] cell={} pos=({:.2}, {:.2}, {:.2}) color={}",
            &self.id.0.to_string()[..8],
            self.cell,
            self.position[0],
            self.position[1],
            self.position[2],
            self.color,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilegrid_board::PlaceOutcome;

    #[test]
    fn summary_empty_board() {
        let board = Board::new();
        let summary = BoardInspector::summary(&board);
        assert_eq!(summary.tile_count, 0);
        assert_eq!(summary.cursor_cell, GridCell::new(0, 0));
    }

    #[test]
    fn summary_counts_tiles_and_events() {
        let mut board = Board::new();
        let _ = board.place_at(GridCell::new(0, 0));
        let _ = board.place_at(GridCell::new(1, 0));
        board.hover(Some(GridCell::new(1, 0)));

        let summary = BoardInspector::summary(&board);
        assert_eq!(summary.tile_count, 2);
        assert_eq!(summary.cursor_color, Color::RED);
        assert_eq!(summary.pending_events, 3); // 2 placements + cursor move
    }

    #[test]
    fn inspect_tile_found() {
        let mut board = Board::new();
        let PlaceOutcome::Placed(id) = board.place_at(GridCell::new(3, -4)) else {
            panic!("placement failed");
        };

        let info = BoardInspector::inspect_tile(&board, id).unwrap();
        assert_eq!(info.cell, GridCell::new(3, -4));
        assert_eq!(info.position, [3.5, 0.0, -3.5]);
        assert_eq!(info.color, Color::WHITE);
    }

    #[test]
    fn inspect_tile_not_found() {
        let board = Board::new();
        assert!(BoardInspector::inspect_tile(&board, TileId::new()).is_none());
    }

    #[test]
    fn list_tiles_in_placement_order() {
        let mut board = Board::new();
        let PlaceOutcome::Placed(a) = board.place_at(GridCell::new(0, 0)) else {
            panic!("placement failed");
        };
        let PlaceOutcome::Placed(b) = board.place_at(GridCell::new(1, 0)) else {
            panic!("placement failed");
        };
        assert_eq!(BoardInspector::list_tiles(&board), vec![a, b]);
    }

    #[test]
    fn summary_display() {
        let board = Board::new();
        let s = BoardInspector::summary(&board).to_string();
        assert!(s.contains("tiles=0"));
    }
}
