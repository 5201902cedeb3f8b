use crate::{
    PieceCollisionError,
    core::{Board, Piece, PieceKind, rotate},
};

/// Board plus the piece currently falling on it.
///
/// The field never lets an invalid move through: [`Self::set_falling_piece`]
/// consults the placement oracle first. The only invalid state it can hold is a
/// freshly spawned piece that collides, which [`Self::land_and_spawn`] reports
/// so the session can end the game.
#[derive(Debug, Clone)]
pub struct GameField {
    board: Board,
    falling_piece: Piece,
}

impl GameField {
    /// Creates an empty board with `first` at its spawn position.
    #[must_use]
    pub fn new(first: PieceKind) -> Self {
        Self {
            board: Board::EMPTY,
            falling_piece: Piece::spawn(first),
        }
    }

    /// Creates a field from an existing board and piece, without validation.
    #[must_use]
    pub fn from_parts(board: Board, falling_piece: Piece) -> Self {
        Self {
            board,
            falling_piece,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn falling_piece(&self) -> &Piece {
        &self.falling_piece
    }

    /// Whether the falling piece is a legal placement.
    #[must_use]
    pub fn is_falling_piece_valid(&self) -> bool {
        self.board.is_valid(&self.falling_piece)
    }

    pub fn set_falling_piece(&mut self, piece: Piece) -> Result<(), PieceCollisionError> {
        if !self.board.is_valid(&piece) {
            return Err(PieceCollisionError);
        }
        self.falling_piece = piece;
        Ok(())
    }

    pub fn set_falling_piece_unchecked(&mut self, piece: Piece) {
        self.falling_piece = piece;
    }

    /// Rotates the falling piece clockwise, kicking if needed.
    pub fn try_rotate(&mut self) -> Result<(), PieceCollisionError> {
        let piece = rotate(&self.board, &self.falling_piece).ok_or(PieceCollisionError)?;
        self.set_falling_piece_unchecked(piece);
        Ok(())
    }

    /// Settles the falling piece, clears full rows and spawns `next`.
    ///
    /// Returns the number of cleared rows, and an error if the new piece
    /// collides at its spawn position. The colliding piece is kept as the
    /// falling piece so it can still be shown.
    pub fn land_and_spawn(&mut self, next: PieceKind) -> (usize, Result<(), PieceCollisionError>) {
        self.board.fill_piece(&self.falling_piece);
        let cleared_lines = self.board.clear_lines();

        self.falling_piece = Piece::spawn(next);
        if !self.is_falling_piece_valid() {
            return (cleared_lines, Err(PieceCollisionError));
        }
        (cleared_lines, Ok(()))
    }
}
