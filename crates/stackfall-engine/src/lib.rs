pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("piece colliding at candidate placement")]
pub struct PieceCollisionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("cell ({col}, {row}) is outside the board")]
pub struct OutOfBoundsError {
    pub col: i32,
    pub row: i32,
}

/// Reason a player command left the session unchanged.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum InputError {
    #[display("game is not running")]
    NotRunning,
    #[display("move rejected: {_0}")]
    Collision(PieceCollisionError),
    #[display("no rotation candidate fits")]
    RotationBlocked,
}

impl From<PieceCollisionError> for InputError {
    fn from(err: PieceCollisionError) -> Self {
        InputError::Collision(err)
    }
}
