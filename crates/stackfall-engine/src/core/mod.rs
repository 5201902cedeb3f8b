//! Board, piece catalog and the pure placement rules.
//!
//! Nothing in this module knows about time or game status:
//!
//! - [`Board`] - the 10×20 grid of settled cells
//! - [`PieceKind`] / [`PieceDefinition`] - the immutable tetromino catalog
//! - [`Shape`] - a square occupancy matrix and its clockwise rotation
//! - [`Piece`] - the falling piece (kind, offset, current shape)
//! - [`is_valid_placement`] - the collision oracle
//! - [`rotate`] - clockwise rotation with a one-column wall kick

pub use self::{board::*, catalog::*, collision::*, piece::*, rotation::*, shape::*};

pub(crate) mod board;
pub(crate) mod catalog;
pub(crate) mod collision;
pub(crate) mod piece;
pub(crate) mod rotation;
pub(crate) mod shape;

const BOARD_WIDTH: usize = 10;
const BOARD_HEIGHT: usize = 20;
