//! Grid model — cells, the row-major board, start-number marking, trimming.
//!
//! The board is one flat `Vec<Cell>` indexed by `(row, col)` arithmetic;
//! placement and legality checks never hold references to individual cells,
//! only indices. The grid is built square and oversized, then cut down to
//! the occupied bounding box by [`Grid::trimmed`] before leaving the engine.

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

/// Marker used for empty cells on the wire.
pub const EMPTY_MARKER: char = '-';

/// Padding added to the longest word's length when sizing the square board,
/// leaving room for intersecting words on every side of the anchor.
pub const GRID_PADDING: usize = 20;

/// Placement axis of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Across,
    Down,
}

/// A single board square. `across_number`/`down_number` are set only on
/// cells where a word of that direction starts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
    pub letter: Option<char>,
    pub across_number: Option<u32>,
    pub down_number: Option<u32>,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        self.letter.is_none()
    }

    /// Display label for the cell: the distinct clue numbers anchored here,
    /// joined with `/` when an across and a down word share the start cell.
    pub fn label(&self) -> Option<String> {
        match (self.across_number, self.down_number) {
            (None, None) => None,
            (Some(n), None) | (None, Some(n)) => Some(n.to_string()),
            (Some(a), Some(d)) if a == d => Some(a.to_string()),
            (Some(a), Some(d)) => Some(format!("{a}/{d}")),
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Cell", 4)?;
        state.serialize_field("letter", &self.letter.unwrap_or(EMPTY_MARKER))?;
        state.serialize_field("across_number", &self.across_number)?;
        state.serialize_field("down_number", &self.down_number)?;
        state.serialize_field("label", &self.label())?;
        state.end()
    }
}

/// The board: a rectangular block of cells in one row-major buffer.
/// Square while words are being placed; rectangular after trimming.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// An empty square board of the given dimension.
    pub fn square(dimension: usize) -> Self {
        Self {
            rows: dimension,
            cols: dimension,
            cells: vec![Cell::default(); dimension * dimension],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[self.index(row, col)]
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        let i = self.index(row, col);
        &mut self.cells[i]
    }

    pub fn letter(&self, row: usize, col: usize) -> Option<char> {
        self.cell(row, col).letter
    }

    pub fn set_letter(&mut self, row: usize, col: usize, letter: char) {
        self.cell_mut(row, col).letter = Some(letter);
    }

    /// One full row as a slice.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        (0..self.rows).map(|r| self.row(r))
    }

    /// Marks the start cell of a placed word with its clue number.
    pub fn mark_start(&mut self, row: usize, col: usize, direction: Direction, number: u32) {
        let cell = self.cell_mut(row, col);
        match direction {
            Direction::Across => cell.across_number = Some(number),
            Direction::Down => cell.down_number = Some(number),
        }
    }

    /// The minimal bounding rectangle containing every lettered cell:
    /// fully-empty rows are dropped, then leading and trailing fully-empty
    /// columns. Idempotent — trimming a trimmed grid changes nothing.
    pub fn trimmed(&self) -> Grid {
        let kept_rows: Vec<usize> = (0..self.rows)
            .filter(|&r| self.row(r).iter().any(|cell| !cell.is_empty()))
            .collect();

        if kept_rows.is_empty() {
            return Grid {
                rows: 0,
                cols: 0,
                cells: Vec::new(),
            };
        }

        let mut lo = 0;
        let mut hi = self.cols;
        while lo < hi && kept_rows.iter().all(|&r| self.cell(r, lo).is_empty()) {
            lo += 1;
        }
        while hi > lo && kept_rows.iter().all(|&r| self.cell(r, hi - 1).is_empty()) {
            hi -= 1;
        }

        let mut cells = Vec::with_capacity(kept_rows.len() * (hi - lo));
        for &r in &kept_rows {
            cells.extend_from_slice(&self.row(r)[lo..hi]);
        }

        Grid {
            rows: kept_rows.len(),
            cols: hi - lo,
            cells,
        }
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter_rows())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_square_grid_starts_empty() {
        let grid = Grid::square(5);
        assert_eq!(grid.rows(), 5);
        assert_eq!(grid.cols(), 5);
        assert!(grid.iter_rows().flatten().all(Cell::is_empty));
    }

    #[test]
    fn test_set_and_read_letter() {
        let mut grid = Grid::square(4);
        grid.set_letter(1, 2, 'A');
        assert_eq!(grid.letter(1, 2), Some('A'));
        assert!(grid.cell(1, 2).across_number.is_none());
        assert!(grid.cell(0, 0).is_empty());
    }

    // ── labels ──────────────────────────────────────────────────────────────

    #[test]
    fn test_label_absent_on_unnumbered_cell() {
        assert_eq!(Cell::default().label(), None);
    }

    #[test]
    fn test_label_single_number() {
        let mut grid = Grid::square(3);
        grid.mark_start(0, 0, Direction::Across, 4);
        assert_eq!(grid.cell(0, 0).label(), Some("4".to_string()));
    }

    #[test]
    fn test_label_merges_shared_start_cell() {
        let mut grid = Grid::square(3);
        grid.mark_start(1, 1, Direction::Across, 2);
        grid.mark_start(1, 1, Direction::Down, 5);
        assert_eq!(grid.cell(1, 1).label(), Some("2/5".to_string()));
    }

    #[test]
    fn test_label_deduplicates_equal_numbers() {
        let mut grid = Grid::square(3);
        grid.mark_start(0, 0, Direction::Across, 3);
        grid.mark_start(0, 0, Direction::Down, 3);
        assert_eq!(grid.cell(0, 0).label(), Some("3".to_string()));
    }

    // ── trimming ────────────────────────────────────────────────────────────

    #[test]
    fn test_trim_crops_to_bounding_box() {
        let mut grid = Grid::square(7);
        grid.set_letter(2, 3, 'C');
        grid.set_letter(2, 4, 'A');
        grid.set_letter(2, 5, 'T');
        grid.set_letter(3, 4, 'T');

        let trimmed = grid.trimmed();
        assert_eq!(trimmed.rows(), 2);
        assert_eq!(trimmed.cols(), 3);
        assert_eq!(trimmed.letter(0, 0), Some('C'));
        assert_eq!(trimmed.letter(0, 2), Some('T'));
        assert_eq!(trimmed.letter(1, 1), Some('T'));
        assert!(trimmed.cell(1, 0).is_empty());
    }

    #[test]
    fn test_trim_is_idempotent() {
        let mut grid = Grid::square(9);
        grid.set_letter(4, 4, 'X');
        grid.set_letter(5, 4, 'O');

        let once = grid.trimmed();
        let twice = once.trimmed();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_trim_fully_empty_grid() {
        let trimmed = Grid::square(6).trimmed();
        assert_eq!(trimmed.rows(), 0);
        assert_eq!(trimmed.cols(), 0);
    }

    #[test]
    fn test_trim_preserves_numbers() {
        let mut grid = Grid::square(5);
        grid.set_letter(2, 2, 'A');
        grid.mark_start(2, 2, Direction::Down, 7);

        let trimmed = grid.trimmed();
        assert_eq!(trimmed.cell(0, 0).down_number, Some(7));
    }

    // ── serialization ───────────────────────────────────────────────────────

    #[test]
    fn test_cell_serializes_empty_marker() {
        let value = serde_json::to_value(Cell::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "letter": "-",
                "across_number": null,
                "down_number": null,
                "label": null
            })
        );
    }

    #[test]
    fn test_grid_serializes_row_major() {
        let mut grid = Grid::square(5);
        grid.set_letter(2, 2, 'Z');
        grid.mark_start(2, 2, Direction::Across, 1);

        let value = serde_json::to_value(grid.trimmed()).unwrap();
        assert_eq!(
            value,
            json!([[{
                "letter": "Z",
                "across_number": 1,
                "down_number": null,
                "label": "1"
            }]])
        );
    }
}
