use super::{board::Board, piece::Piece, shape::Shape};

/// Decides whether `shape` may sit with its top-left corner at `(col, row)`.
///
/// Every occupied cell must be inside the side walls and above the floor, and
/// must not overlap a settled block. Cells above the top edge (negative rows)
/// are not checked against the board, so a piece can spawn or rotate partly
/// above the visible field; they still have to respect the side walls.
///
/// # Example
///
/// ```
/// use stackfall_engine::{Board, PieceKind, is_valid_placement};
///
/// let board = Board::new();
/// let shape = PieceKind::O.shape();
/// assert!(is_valid_placement(&board, 0, -1, &shape));
/// assert!(!is_valid_placement(&board, -1, 0, &shape));
/// assert!(!is_valid_placement(&board, 0, 19, &shape));
/// ```
#[must_use]
pub fn is_valid_placement(board: &Board, col: i32, row: i32, shape: &Shape) -> bool {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let (width, height) = (Board::WIDTH as i32, Board::HEIGHT as i32);
    shape.occupied_cells().all(|(r, c)| {
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let (Some(x), Some(y)) = (col.checked_add(c as i32), row.checked_add(r as i32)) else {
            return false;
        };
        if x < 0 || x >= width || y >= height {
            return false;
        }
        if y < 0 {
            return true;
        }
        board.cell(x, y).is_some_and(|cell| cell.is_empty())
    })
}

impl Board {
    /// Whether `piece` is a legal placement on this board.
    #[must_use]
    pub fn is_valid(&self, piece: &Piece) -> bool {
        is_valid_placement(self, piece.col(), piece.row(), piece.shape())
    }
}
