use super::{board::Board, piece::Piece};

/// Column offsets tried, in order, for a clockwise rotation.
///
/// This is a minimal wall kick: in place, one column right, one column left.
/// There are no vertical kicks and no per-piece kick tables.
const KICK_OFFSETS: [i32; 3] = [0, 1, -1];

/// Rotates `piece` 90° clockwise, kicking off a wall or stack if needed.
///
/// Returns the first legal candidate, or `None` when none fits; the caller keeps
/// the original piece in that case, so a rejected rotation never changes
/// anything. The O piece is returned unchanged.
///
/// # Example
///
/// ```
/// use stackfall_engine::{Board, Piece, PieceKind, rotate};
///
/// let board = Board::new();
/// let piece = Piece::spawn(PieceKind::O);
/// assert_eq!(rotate(&board, &piece), Some(piece));
///
/// let t = Piece::spawn(PieceKind::T);
/// let rotated = rotate(&board, &t).unwrap();
/// assert_eq!(rotated.shape(), &t.shape().rotated_right());
/// ```
#[must_use]
pub fn rotate(board: &Board, piece: &Piece) -> Option<Piece> {
    if piece.kind().is_rotation_invariant() {
        return Some(*piece);
    }
    let rotated = piece.with_shape(piece.shape().rotated_right());
    KICK_OFFSETS
        .into_iter()
        .map(|dcol| rotated.moved(dcol, 0))
        .find(|candidate| board.is_valid(candidate))
}
