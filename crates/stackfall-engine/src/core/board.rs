use serde::{Serialize, Serializer, ser::SerializeSeq as _};

use crate::OutOfBoundsError;

use super::{
    BOARD_HEIGHT, BOARD_WIDTH,
    catalog::{PieceColor, PieceKind},
    piece::Piece,
};

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
pub enum Cell {
    #[default]
    Empty,
    /// Settled block left behind by a landed piece.
    Filled(PieceColor),
}

impl Cell {
    /// Character used by [`Board::from_ascii`] and the serialized form.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Filled(color) => color.piece_kind().as_char(),
        }
    }
}

type Row = [Cell; BOARD_WIDTH];

const EMPTY_ROW: Row = [Cell::Empty; BOARD_WIDTH];

/// Settled cells of the playfield.
///
/// Row 0 is the top of the board and column 0 the left edge. The dimensions are
/// fixed at 10×20; rows are only ever rewritten by [`Board::fill_piece`] /
/// [`Board::commit`] and shifted by [`Board::collapse_row`].
///
/// # Example
///
/// ```
/// use stackfall_engine::Board;
///
/// let mut board = Board::from_ascii(
///     r"
///     IIIIIIIIII
///     ",
/// );
/// assert!(board.is_row_full(19));
/// assert_eq!(board.clear_lines(), 1);
/// assert_eq!(board.occupied_count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [Row; BOARD_HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Format: one string per row, top to bottom (e.g. "....TTT...")
        let mut seq = serializer.serialize_seq(Some(BOARD_HEIGHT))?;
        for row in &self.rows {
            let line: String = row.iter().map(|cell| cell.as_char()).collect();
            seq.serialize_element(&line)?;
        }
        seq.end()
    }
}

impl Board {
    pub const WIDTH: usize = BOARD_WIDTH;
    pub const HEIGHT: usize = BOARD_HEIGHT;

    pub const EMPTY: Self = Self {
        rows: [EMPTY_ROW; BOARD_HEIGHT],
    };

    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    fn index(col: i32, row: i32) -> Option<(usize, usize)> {
        let col = usize::try_from(col).ok().filter(|&c| c < Self::WIDTH)?;
        let row = usize::try_from(row).ok().filter(|&r| r < Self::HEIGHT)?;
        Some((col, row))
    }

    /// Returns the cell at `(col, row)`, or `None` outside the board.
    #[must_use]
    pub fn cell(&self, col: i32, row: i32) -> Option<Cell> {
        Self::index(col, row).map(|(c, r)| self.rows[r][c])
    }

    /// Whether `(col, row)` holds a settled block.
    ///
    /// Coordinates outside the board are an error rather than "empty".
    pub fn is_occupied(&self, col: i32, row: i32) -> Result<bool, OutOfBoundsError> {
        self.cell(col, row)
            .map(|cell| cell.is_filled())
            .ok_or(OutOfBoundsError { col, row })
    }

    /// Paints a single cell.
    pub fn commit(
        &mut self,
        col: i32,
        row: i32,
        color: PieceColor,
    ) -> Result<(), OutOfBoundsError> {
        let (c, r) = Self::index(col, row).ok_or(OutOfBoundsError { col, row })?;
        self.rows[r][c] = Cell::Filled(color);
        Ok(())
    }

    /// Whether every column of `row` is filled. Rows outside the board are never full.
    #[must_use]
    pub fn is_row_full(&self, row: usize) -> bool {
        self.rows
            .get(row)
            .is_some_and(|cells| cells.iter().all(|cell| cell.is_filled()))
    }

    /// Removes `row` and inserts an empty row at the top.
    ///
    /// Every row above `row` moves down by one; rows below it stay in place.
    pub fn collapse_row(&mut self, row: usize) {
        assert!(row < Self::HEIGHT, "row {row} is outside the board");
        self.rows.copy_within(0..row, 1);
        self.rows[0] = EMPTY_ROW;
    }

    /// Clears full rows and returns how many were removed.
    ///
    /// Rows are scanned from the bottom up. After a collapse the same index is
    /// checked again, since the row above has just moved into it.
    pub fn clear_lines(&mut self) -> usize {
        let mut count = 0;
        let mut row = Self::HEIGHT;
        while row > 0 {
            if self.is_row_full(row - 1) {
                self.collapse_row(row - 1);
                count += 1;
            } else {
                row -= 1;
            }
        }
        count
    }

    /// Settles the piece's cells into the board using its color.
    ///
    /// Cells above the top edge have nowhere to go and are dropped.
    pub fn fill_piece(&mut self, piece: &Piece) {
        let color = piece.color();
        for (col, row) in piece.occupied_positions() {
            if let Some((c, r)) = Self::index(col, row) {
                self.rows[r][c] = Cell::Filled(color);
            }
        }
    }

    /// Returns an iterator over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_WIDTH]> {
        self.rows.iter()
    }

    /// Number of filled cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.rows.iter().flatten().filter(|cell| cell.is_filled()).count()
    }

    /// Creates a `Board` from ASCII art, mainly for tests.
    ///
    /// '.' is an empty cell; a piece letter (`IOTSZJL`) is a cell of that
    /// piece's color, and '#' is shorthand for `I`. Rows are given top to
    /// bottom and are aligned to the *bottom* of the board, so short art
    /// describes the floor.
    #[must_use]
    pub fn from_ascii(art: &str) -> Self {
        let mut board = Self::EMPTY;
        let lines: Vec<&str> = art
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        assert!(
            lines.len() <= Self::HEIGHT,
            "At most {} rows allowed, got {}",
            Self::HEIGHT,
            lines.len()
        );

        let top = Self::HEIGHT - lines.len();
        for (i, line) in lines.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            assert_eq!(
                chars.len(),
                Self::WIDTH,
                "Each row must have exactly {} cells, got {} at row {}",
                Self::WIDTH,
                chars.len(),
                i
            );
            for (x, &ch) in chars.iter().enumerate() {
                board.rows[top + i][x] = match ch {
                    '.' => Cell::Empty,
                    '#' => Cell::Filled(PieceKind::I.color()),
                    _ => {
                        let kind = PieceKind::from_char(ch)
                            .unwrap_or_else(|| panic!("invalid board character: {ch:?}"));
                        Cell::Filled(kind.color())
                    }
                };
            }
        }
        board
    }
}
