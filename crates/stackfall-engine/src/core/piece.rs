use arrayvec::ArrayVec;
use serde::Serialize;

use super::{
    BOARD_WIDTH,
    catalog::{PieceColor, PieceKind},
    shape::Shape,
};

/// The falling piece: a catalog kind, its current (possibly rotated) shape and
/// the board offset of the shape's top-left corner.
///
/// Pieces are values. Movement returns a new `Piece` and never checks the
/// board; legality is decided by [`Board::is_valid`](super::Board::is_valid).
///
/// Offsets are signed: a rotated I piece keeps two empty columns in its box, so
/// its offset can sit left of column 0 while every occupied cell is on the
/// board, and a piece may have rows above the top edge.
///
/// # Example
///
/// ```
/// use stackfall_engine::{Piece, PieceKind};
///
/// let piece = Piece::spawn(PieceKind::T);
/// assert_eq!((piece.col(), piece.row()), (4, 0));
///
/// let moved = piece.right().down();
/// assert_eq!((moved.col(), moved.row()), (5, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Piece {
    kind: PieceKind,
    col: i32,
    row: i32,
    shape: Shape,
}

impl Piece {
    /// Places `kind` in its catalog orientation, horizontally centered on the top row.
    #[must_use]
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = kind.shape();
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let col = (BOARD_WIDTH / 2 - shape.size() / 2) as i32;
        Self {
            kind,
            col,
            row: 0,
            shape,
        }
    }

    /// Places `kind` in its catalog orientation at an arbitrary offset.
    #[must_use]
    pub fn new(kind: PieceKind, col: i32, row: i32) -> Self {
        Self {
            kind,
            col,
            row,
            shape: kind.shape(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub fn col(&self) -> i32 {
        self.col
    }

    #[must_use]
    pub fn row(&self) -> i32 {
        self.row
    }

    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[must_use]
    pub fn color(&self) -> PieceColor {
        self.kind.color()
    }

    /// Board coordinates `(col, row)` of the occupied cells.
    #[must_use]
    pub fn occupied_positions(&self) -> ArrayVec<(i32, i32), 4> {
        self.shape
            .occupied_cells()
            .map(|(r, c)| {
                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                let (r, c) = (r as i32, c as i32);
                (self.col.saturating_add(c), self.row.saturating_add(r))
            })
            .collect()
    }

    /// Returns the piece shifted by `dcol` columns and `drow` rows.
    #[must_use]
    pub fn moved(&self, dcol: i32, drow: i32) -> Self {
        Self {
            col: self.col.saturating_add(dcol),
            row: self.row.saturating_add(drow),
            ..*self
        }
    }

    #[must_use]
    pub fn left(&self) -> Self {
        self.moved(-1, 0)
    }

    #[must_use]
    pub fn right(&self) -> Self {
        self.moved(1, 0)
    }

    #[must_use]
    pub fn down(&self) -> Self {
        self.moved(0, 1)
    }

    /// Returns the piece at the same offset with a different shape.
    pub(crate) fn with_shape(&self, shape: Shape) -> Self {
        Self { shape, ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_is_centered() {
        assert_eq!(Piece::spawn(PieceKind::I).col(), 3);
        assert_eq!(Piece::spawn(PieceKind::O).col(), 4);
        for kind in [PieceKind::T, PieceKind::S, PieceKind::Z, PieceKind::J, PieceKind::L] {
            let piece = Piece::spawn(kind);
            assert_eq!((piece.col(), piece.row()), (4, 0), "{kind:?}");
            assert_eq!(piece.shape(), &kind.shape());
        }
    }

    #[test]
    fn test_occupied_positions_follow_offset() {
        let piece = Piece::new(PieceKind::T, 2, 5);
        let cells: Vec<_> = piece.occupied_positions().into_iter().collect();
        assert_eq!(cells, vec![(3, 5), (2, 6), (3, 6), (4, 6)]);
    }

    #[test]
    fn test_i_piece_spawn_cells() {
        let cells: Vec<_> = Piece::spawn(PieceKind::I)
            .occupied_positions()
            .into_iter()
            .collect();
        assert_eq!(cells, vec![(3, 1), (4, 1), (5, 1), (6, 1)]);
    }

    #[test]
    fn test_moves_keep_kind_and_shape() {
        let piece = Piece::spawn(PieceKind::L);
        let moved = piece.left().left().down();
        assert_eq!((moved.col(), moved.row()), (2, 1));
        assert_eq!(moved.kind(), PieceKind::L);
        assert_eq!(moved.shape(), piece.shape());
        assert_eq!(moved.color(), PieceColor::Orange);
    }

    #[test]
    fn test_moves_saturate_at_extremes() {
        let piece = Piece::new(PieceKind::O, i32::MAX, i32::MIN);
        let moved = piece.right().moved(0, -1);
        assert_eq!((moved.col(), moved.row()), (i32::MAX, i32::MIN));
        assert!(moved.occupied_positions().iter().all(|&(x, _)| x == i32::MAX));
    }

    #[test]
    fn test_piece_serialization() {
        let piece = Piece::new(PieceKind::O, 4, 18);
        let json = serde_json::to_value(piece).unwrap();
        assert_eq!(json["kind"], "O");
        assert_eq!(json["col"], 4);
        assert_eq!(json["row"], 18);
        assert_eq!(json["shape"], serde_json::json!(["##", "##"]));
    }
}
