use serde::Serialize;

use crate::core::{Board, Piece};

use super::{GameStats, GameStatus, PieceSeed};

/// Detached, serializable copy of a session's observable state.
///
/// # Example
///
/// ```
/// use stackfall_engine::GameSession;
///
/// let mut session = GameSession::new();
/// session.start();
///
/// let json = serde_json::to_value(session.snapshot()).unwrap();
/// assert_eq!(json["status"], "running");
/// assert_eq!(json["board"].as_array().unwrap().len(), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub seed: PieceSeed,
    pub ticks: u64,
    pub stats: GameStats,
    pub board: Board,
    pub falling_piece: Option<Piece>,
}

#[cfg(test)]
mod tests {
    use crate::GameSession;

    #[test]
    fn test_idle_snapshot_serialization() {
        let session = GameSession::with_seed("000000000000000000000000000000ff".parse().unwrap());
        let json = serde_json::to_value(session.snapshot()).unwrap();

        assert_eq!(json["status"], "idle");
        assert_eq!(json["seed"], "000000000000000000000000000000ff");
        assert_eq!(json["ticks"], 0);
        assert_eq!(json["stats"]["score"], 0);
        assert_eq!(json["stats"]["line_cleared_counter"], serde_json::json!([0, 0, 0, 0, 0]));
        assert_eq!(json["board"][0], "..........");
        assert!(json["falling_piece"].is_null());
    }
}
