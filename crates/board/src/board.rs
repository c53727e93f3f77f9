use serde::{Deserialize, Serialize};
use tilegrid_common::{Color, GridCell, TileId, Transform};

/// An event record produced by every mutation to the board.
///
/// The log feeds diagnostics and the inspector; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BoardEvent {
    /// A tile was placed at the cell.
    Placed { id: TileId, cell: GridCell },
    /// A placement attempt hit an occupied cell and was ignored.
    Rejected { cell: GridCell },
    /// The highlight cursor moved to a new cell.
    CursorMoved { cell: GridCell },
    /// A tile's status color changed.
    Recolored { id: TileId, old: Color, new: Color },
}

/// A tile the user has placed on the board.
///
/// The cell is fixed at creation; the transform's height and rotation are
/// rewritten every frame by the animation driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedTile {
    id: TileId,
    cell: GridCell,
    pub transform: Transform,
    color: Color,
}

impl PlacedTile {
    fn new(cell: GridCell) -> Self {
        Self {
            id: TileId::new(),
            cell,
            transform: Transform {
                position: cell.center(),
                ..Transform::default()
            },
            color: Color::WHITE,
        }
    }

    pub fn id(&self) -> TileId {
        self.id
    }

    pub fn cell(&self) -> GridCell {
        self.cell
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// The singleton cursor tile that tracks the hovered cell.
///
/// Its opacity pulses each frame; its cell and color change only when a
/// pointer pick lands on the ground plane.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightCursor {
    cell: GridCell,
    color: Color,
    pub opacity: f32,
}

impl Default for HighlightCursor {
    fn default() -> Self {
        Self {
            cell: GridCell::new(0, 0),
            color: Color::WHITE,
            opacity: 0.0,
        }
    }
}

impl HighlightCursor {
    pub fn cell(&self) -> GridCell {
        self.cell
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// Result of a placement attempt. An occupied cell is a reported no-op,
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum PlaceOutcome {
    Placed(TileId),
    Occupied,
}

/// Errors from explicit board operations.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("tile {0:?} not found")]
    TileNotFound(TileId),
}

/// The authoritative interactive state: placed tiles plus the highlight
/// cursor. Renderers and tools derive from it and never mutate it directly.
#[derive(Debug, Clone, Default)]
pub struct Board {
    tiles: Vec<PlacedTile>,
    cursor: HighlightCursor,
    event_log: Vec<BoardEvent>,
}

impl Board {
    /// Create an empty board with the cursor at the origin cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Placed tiles in placement order.
    pub fn tiles(&self) -> &[PlacedTile] {
        &self.tiles
    }

    /// Mutable iteration over placed tiles, for the animation driver.
    /// Cell, id, and color stay crate-private; only the transform is open.
    pub fn tiles_mut(&mut self) -> std::slice::IterMut<'_, PlacedTile> {
        self.tiles.iter_mut()
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn cursor(&self) -> &HighlightCursor {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut HighlightCursor {
        &mut self.cursor
    }

    /// Look up a tile by id.
    pub fn get(&self, id: TileId) -> Option<&PlacedTile> {
        self.tiles.iter().find(|t| t.id == id)
    }

    /// The tile occupying a cell, if any. Linear scan; the board stays small.
    pub fn tile_at(&self, cell: GridCell) -> Option<&PlacedTile> {
        self.tiles.iter().find(|t| t.cell == cell)
    }

    pub fn is_occupied(&self, cell: GridCell) -> bool {
        self.tile_at(cell).is_some()
    }

    /// Drain and return the event log.
    pub fn drain_events(&mut self) -> Vec<BoardEvent> {
        std::mem::take(&mut self.event_log)
    }

    /// Read-only access to the event log.
    pub fn events(&self) -> &[BoardEvent] {
        &self.event_log
    }

    /// Move the cursor to the picked cell and recolor it: red over an
    /// occupied cell, white otherwise. A miss (`None`) changes nothing.
    pub fn hover(&mut self, hit: Option<GridCell>) {
        let Some(cell) = hit else {
            return;
        };
        if cell != self.cursor.cell {
            self.event_log.push(BoardEvent::CursorMoved { cell });
        }
        self.cursor.cell = cell;
        self.cursor.color = if self.is_occupied(cell) {
            Color::RED
        } else {
            Color::WHITE
        };
    }

    /// Place a tile at the cursor's cell.
    pub fn place(&mut self) -> PlaceOutcome {
        self.place_at(self.cursor.cell)
    }

    /// Place a tile at the given cell. Placement on an occupied cell is
    /// rejected with an informational diagnostic.
    pub fn place_at(&mut self, cell: GridCell) -> PlaceOutcome {
        if self.is_occupied(cell) {
            tracing::info!(%cell, "collision at occupied cell");
            self.event_log.push(BoardEvent::Rejected { cell });
            return PlaceOutcome::Occupied;
        }

        let tile = PlacedTile::new(cell);
        let id = tile.id;
        self.tiles.push(tile);
        self.event_log.push(BoardEvent::Placed { id, cell });
        self.promote_pending();
        PlaceOutcome::Placed(id)
    }

    /// Recolor a tile's status marker.
    pub fn set_color(&mut self, id: TileId, color: Color) -> Result<(), BoardError> {
        let tile = self
            .tiles
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(BoardError::TileNotFound(id))?;
        let old = tile.color;
        tile.color = color;
        self.event_log.push(BoardEvent::Recolored { id, old, new: color });
        Ok(())
    }

    /// When exactly one tile carries the pending marker, recolor the newest
    /// tile red. Placement never assigns the marker itself, so this only has
    /// an effect after an explicit `set_color(.., Color::PENDING)`.
    fn promote_pending(&mut self) {
        let pending = self
            .tiles
            .iter()
            .filter(|t| t.color == Color::PENDING)
            .count();
        if pending != 1 {
            return;
        }
        if let Some(last) = self.tiles.last_mut() {
            let old = last.color;
            last.color = Color::RED;
            let id = last.id;
            self.event_log.push(BoardEvent::Recolored {
                id,
                old,
                new: Color::RED,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_starts_empty() {
        let b = Board::new();
        assert_eq!(b.tile_count(), 0);
        assert_eq!(b.cursor().cell(), GridCell::new(0, 0));
        assert_eq!(b.cursor().opacity, 0.0);
    }

    #[test]
    fn hover_moves_and_recolors_cursor() {
        let mut b = Board::new();
        b.hover(Some(GridCell::new(2, -2)));
        assert_eq!(b.cursor().cell(), GridCell::new(2, -2));
        assert_eq!(b.cursor().color(), Color::WHITE);
    }

    #[test]
    fn hover_miss_leaves_cursor_unchanged() {
        let mut b = Board::new();
        b.hover(Some(GridCell::new(3, 4)));
        let before_cell = b.cursor().cell();
        let before_color = b.cursor().color();

        b.hover(None);
        assert_eq!(b.cursor().cell(), before_cell);
        assert_eq!(b.cursor().color(), before_color);
    }

    #[test]
    fn hover_over_occupied_cell_turns_red() {
        let mut b = Board::new();
        let cell = GridCell::new(1, 1);
        let _ = b.place_at(cell);

        b.hover(Some(cell));
        assert_eq!(b.cursor().color(), Color::RED);

        b.hover(Some(GridCell::new(0, 1)));
        assert_eq!(b.cursor().color(), Color::WHITE);
    }

    #[test]
    fn place_at_cursor_cell() {
        let mut b = Board::new();
        b.hover(Some(GridCell::new(2, -3)));
        let outcome = b.place();
        assert!(matches!(outcome, PlaceOutcome::Placed(_)));
        assert_eq!(b.tile_count(), 1);
        assert_eq!(b.tiles()[0].cell(), GridCell::new(2, -3));
        // New tiles start at the cell center on the ground.
        assert_eq!(b.tiles()[0].transform.position, GridCell::new(2, -3).center());
        assert_eq!(b.tiles()[0].color(), Color::WHITE);
    }

    #[test]
    fn second_place_at_same_cell_is_noop() {
        let mut b = Board::new();
        let cell = GridCell::new(2, -3);
        assert!(matches!(b.place_at(cell), PlaceOutcome::Placed(_)));
        assert_eq!(b.place_at(cell), PlaceOutcome::Occupied);
        assert_eq!(b.tile_count(), 1);
    }

    #[test]
    fn rejection_is_logged() {
        let mut b = Board::new();
        let cell = GridCell::new(0, 0);
        let _ = b.place_at(cell);
        let _ = b.place_at(cell);
        assert!(
            b.events()
                .iter()
                .any(|e| matches!(e, BoardEvent::Rejected { cell: c } if *c == cell))
        );
    }

    #[test]
    fn tiles_keep_placement_order() {
        let mut b = Board::new();
        let cells = [
            GridCell::new(0, 0),
            GridCell::new(5, -1),
            GridCell::new(-4, 2),
        ];
        for cell in cells {
            let _ = b.place_at(cell);
        }
        let placed: Vec<GridCell> = b.tiles().iter().map(|t| t.cell()).collect();
        assert_eq!(placed, cells);
    }

    #[test]
    fn get_and_tile_at() {
        let mut b = Board::new();
        let cell = GridCell::new(7, 7);
        let PlaceOutcome::Placed(id) = b.place_at(cell) else {
            panic!("placement failed");
        };
        assert_eq!(b.get(id).unwrap().cell(), cell);
        assert_eq!(b.tile_at(cell).unwrap().id(), id);
        assert!(b.tile_at(GridCell::new(6, 7)).is_none());
    }

    #[test]
    fn set_color_unknown_tile_is_error() {
        let mut b = Board::new();
        assert!(b.set_color(TileId::new(), Color::RED).is_err());
    }

    #[test]
    fn promotion_never_fires_under_normal_placement() {
        let mut b = Board::new();
        for x in 0..5 {
            let _ = b.place_at(GridCell::new(x, 0));
        }
        assert!(b.tiles().iter().all(|t| t.color() == Color::WHITE));
    }

    #[test]
    fn promotion_fires_after_explicit_pending_marker() {
        let mut b = Board::new();
        let PlaceOutcome::Placed(first) = b.place_at(GridCell::new(0, 0)) else {
            panic!("placement failed");
        };
        b.set_color(first, Color::PENDING).unwrap();

        let PlaceOutcome::Placed(second) = b.place_at(GridCell::new(1, 0)) else {
            panic!("placement failed");
        };
        // Exactly one pending tile existed, so the newest tile goes red.
        assert_eq!(b.get(second).unwrap().color(), Color::RED);
        assert_eq!(b.get(first).unwrap().color(), Color::PENDING);
    }

    #[test]
    fn promotion_skipped_with_two_pending_markers() {
        let mut b = Board::new();
        let PlaceOutcome::Placed(a) = b.place_at(GridCell::new(0, 0)) else {
            panic!("placement failed");
        };
        let PlaceOutcome::Placed(c) = b.place_at(GridCell::new(1, 0)) else {
            panic!("placement failed");
        };
        b.set_color(a, Color::PENDING).unwrap();
        b.set_color(c, Color::PENDING).unwrap();

        let PlaceOutcome::Placed(d) = b.place_at(GridCell::new(2, 0)) else {
            panic!("placement failed");
        };
        assert_eq!(b.get(d).unwrap().color(), Color::WHITE);
    }

    #[test]
    fn events_are_recorded_and_drained() {
        let mut b = Board::new();
        b.hover(Some(GridCell::new(1, 1)));
        let _ = b.place_at(GridCell::new(1, 1));
        assert_eq!(b.events().len(), 2); // cursor move + placement

        let events = b.drain_events();
        assert_eq!(events.len(), 2);
        assert!(b.events().is_empty());
    }

    #[test]
    fn hover_same_cell_logs_once() {
        let mut b = Board::new();
        b.hover(Some(GridCell::new(1, 1)));
        b.hover(Some(GridCell::new(1, 1)));
        let moves = b
            .events()
            .iter()
            .filter(|e| matches!(e, BoardEvent::CursorMoved { .. }))
            .count();
        assert_eq!(moves, 1);
    }
}
