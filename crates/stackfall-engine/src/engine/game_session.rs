use serde::Serialize;

use crate::{
    InputError,
    core::{Board, Piece},
};

use super::{
    game_field::GameField,
    game_stats::GameStats,
    piece_generator::{PieceGenerator, PieceSeed},
    snapshot::GameSnapshot,
};

static EMPTY_BOARD: Board = Board::EMPTY;

/// Lifecycle of a game.
///
/// ```text
/// Idle ──start──▶ Running ◀──resume/pause──▶ Paused
///                    │
///                    └── spawn collision ──▶ Over
/// ```
///
/// `start` / `restart` re-enter `Running` from any state.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[display("not started")]
    Idle,
    #[display("running")]
    Running,
    #[display("paused")]
    Paused,
    #[display("game over")]
    Over,
}

/// What a single [`GameSession::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum TickOutcome {
    /// The session was not running; nothing changed.
    Ignored,
    /// The falling piece moved down one row.
    Descended,
    /// The piece landed and the next one spawned.
    Landed { cleared_lines: usize },
    /// The piece landed but the next one collided at its spawn position.
    GameOver { cleared_lines: usize },
}

/// One game, from the first spawn to game over.
///
/// The session owns all mutable state and has no clock of its own. A host calls
/// [`Self::tick`] at its own pace while [`Self::wants_ticks`] is `true`, and
/// forwards player commands to the `try_*` methods. A rejected command returns
/// an [`InputError`] and leaves the session untouched, so hosts that don't care
/// can discard it.
///
/// # Example
///
/// ```
/// use stackfall_engine::{GameSession, GameStatus, PieceSeed};
///
/// let seed: PieceSeed = "00000000000000000000000000000001".parse().unwrap();
/// let mut session = GameSession::with_seed(seed);
/// assert_eq!(session.status(), GameStatus::Idle);
/// assert!(!session.wants_ticks());
///
/// session.start();
/// assert!(session.wants_ticks());
///
/// _ = session.try_move_left();
/// _ = session.try_rotate();
/// while session.tick().is_descended() {}
/// assert_eq!(session.stats().completed_pieces(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    generator: PieceGenerator,
    field: Option<GameField>,
    stats: GameStats,
    status: GameStatus,
    ticks: u64,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Creates an idle session with a random piece seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_generator(PieceGenerator::new())
    }

    /// Like [`Self::new`], but with a specific seed for a reproducible piece sequence.
    #[must_use]
    pub fn with_seed(seed: PieceSeed) -> Self {
        Self::with_generator(PieceGenerator::with_seed(seed))
    }

    fn with_generator(generator: PieceGenerator) -> Self {
        Self {
            generator,
            field: None,
            stats: GameStats::new(),
            status: GameStatus::Idle,
            ticks: 0,
        }
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the host should keep calling [`Self::tick`].
    ///
    /// `true` exactly while the game is running; pausing or game over turns it off.
    #[must_use]
    pub fn wants_ticks(&self) -> bool {
        self.status.is_running()
    }

    /// Settled cells. Empty before the first start.
    #[must_use]
    pub fn board(&self) -> &Board {
        self.field.as_ref().map_or(&EMPTY_BOARD, GameField::board)
    }

    /// The falling piece, `None` before the first start.
    ///
    /// After game over this is the piece that failed to spawn.
    #[must_use]
    pub fn falling_piece(&self) -> Option<&Piece> {
        self.field.as_ref().map(GameField::falling_piece)
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.stats.score()
    }

    /// Number of ticks processed since the last start.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[must_use]
    pub fn seed(&self) -> PieceSeed {
        self.generator.seed()
    }

    /// Returns an owned copy of everything a presentation layer reads.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            status: self.status,
            seed: self.seed(),
            ticks: self.ticks,
            stats: self.stats.clone(),
            board: self.board().clone(),
            falling_piece: self.falling_piece().copied(),
        }
    }

    /// Starts a new game, discarding any game in progress.
    ///
    /// The board and statistics are reset and the first piece spawns. If that
    /// piece cannot be placed the game is over immediately.
    pub fn start(&mut self) {
        let field = GameField::new(self.generator.next_kind());
        self.status = if field.is_falling_piece_valid() {
            GameStatus::Running
        } else {
            GameStatus::Over
        };
        self.field = Some(field);
        self.stats = GameStats::new();
        self.ticks = 0;
    }

    /// Same as [`Self::start`].
    pub fn restart(&mut self) {
        self.start();
    }

    /// Pauses a running game. Does nothing in any other state.
    pub fn pause(&mut self) {
        if self.status.is_running() {
            self.status = GameStatus::Paused;
        }
    }

    /// Resumes a paused game. Does nothing in any other state.
    pub fn resume(&mut self) {
        if self.status.is_paused() {
            self.status = GameStatus::Running;
        }
    }

    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            status @ (GameStatus::Idle | GameStatus::Over) => status,
        };
    }

    /// Advances the game by one gravity step.
    ///
    /// The falling piece moves down one row if it can. Otherwise it lands:
    /// its cells are settled, full rows are cleared and scored, and the next
    /// piece spawns. A spawn collision ends the game.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.status.is_running() {
            return TickOutcome::Ignored;
        }
        let Some(field) = self.field.as_mut() else {
            return TickOutcome::Ignored;
        };
        self.ticks += 1;

        let piece = field.falling_piece().down();
        if field.set_falling_piece(piece).is_ok() {
            return TickOutcome::Descended;
        }

        let (cleared_lines, result) = field.land_and_spawn(self.generator.next_kind());
        self.stats.record_landing(cleared_lines);
        if result.is_err() {
            self.status = GameStatus::Over;
            return TickOutcome::GameOver { cleared_lines };
        }
        TickOutcome::Landed { cleared_lines }
    }

    fn running_field(&mut self) -> Result<&mut GameField, InputError> {
        match (self.status, self.field.as_mut()) {
            (GameStatus::Running, Some(field)) => Ok(field),
            _ => Err(InputError::NotRunning),
        }
    }

    pub fn try_move_left(&mut self) -> Result<(), InputError> {
        let field = self.running_field()?;
        let piece = field.falling_piece().left();
        field.set_falling_piece(piece)?;
        Ok(())
    }

    pub fn try_move_right(&mut self) -> Result<(), InputError> {
        let field = self.running_field()?;
        let piece = field.falling_piece().right();
        field.set_falling_piece(piece)?;
        Ok(())
    }

    /// Moves the piece down one row. Never lands it; landing is left to [`Self::tick`].
    pub fn try_soft_down(&mut self) -> Result<(), InputError> {
        let field = self.running_field()?;
        let piece = field.falling_piece().down();
        field.set_falling_piece(piece)?;
        Ok(())
    }

    /// Rotates the piece clockwise with a one-column kick.
    pub fn try_rotate(&mut self) -> Result<(), InputError> {
        let field = self.running_field()?;
        field.try_rotate().map_err(|_| InputError::RotationBlocked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, PieceColor, PieceKind};

    const SEED: &str = "0123456789abcdeffedcba9876543210";

    fn seeded() -> GameSession {
        GameSession::with_seed(SEED.parse().unwrap())
    }

    fn running_with(board: Board, piece: Piece) -> GameSession {
        let mut session = seeded();
        session.field = Some(GameField::from_parts(board, piece));
        session.status = GameStatus::Running;
        session
    }

    #[test]
    fn test_idle_session() {
        let mut session = seeded();
        assert_eq!(session.status(), GameStatus::Idle);
        assert!(!session.wants_ticks());
        assert_eq!(session.board(), &Board::EMPTY);
        assert_eq!(session.falling_piece(), None);

        assert_eq!(session.tick(), TickOutcome::Ignored);
        assert_eq!(session.try_move_left(), Err(InputError::NotRunning));
        assert_eq!(session.try_rotate(), Err(InputError::NotRunning));
        session.pause();
        assert_eq!(session.status(), GameStatus::Idle);
        session.resume();
        assert_eq!(session.status(), GameStatus::Idle);
    }

    #[test]
    fn test_start_spawns_first_piece() {
        let mut session = seeded();
        session.start();
        assert_eq!(session.status(), GameStatus::Running);
        assert!(session.wants_ticks());
        let piece = session.falling_piece().unwrap();
        assert_eq!(piece, &Piece::spawn(piece.kind()));
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = seeded();
        let mut b = seeded();
        a.start();
        b.start();
        for _ in 0..200 {
            assert_eq!(a.tick(), b.tick());
        }
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn test_pause_and_resume() {
        let mut session = seeded();
        session.start();
        let before = session.snapshot();

        session.pause();
        assert_eq!(session.status(), GameStatus::Paused);
        assert!(!session.wants_ticks());
        assert_eq!(session.tick(), TickOutcome::Ignored);
        assert_eq!(session.try_move_right(), Err(InputError::NotRunning));
        assert_eq!(session.try_soft_down(), Err(InputError::NotRunning));
        let paused = session.snapshot();
        assert_eq!(paused.status, GameStatus::Paused);
        assert_eq!(
            GameSnapshot {
                status: GameStatus::Running,
                ..paused
            },
            before
        );

        session.pause();
        assert_eq!(session.status(), GameStatus::Paused);
        session.resume();
        assert_eq!(session.status(), GameStatus::Running);
        session.resume();
        assert_eq!(session.status(), GameStatus::Running);
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_toggle_pause() {
        let mut session = seeded();
        session.toggle_pause();
        assert_eq!(session.status(), GameStatus::Idle);
        session.start();
        session.toggle_pause();
        assert_eq!(session.status(), GameStatus::Paused);
        session.toggle_pause();
        assert_eq!(session.status(), GameStatus::Running);
    }

    #[test]
    fn test_moves_are_checked() {
        let mut session = running_with(Board::new(), Piece::new(PieceKind::O, 0, 5));
        assert_eq!(
            session.try_move_left(),
            Err(InputError::Collision(crate::PieceCollisionError))
        );
        assert_eq!(session.falling_piece().unwrap().col(), 0);

        assert_eq!(session.try_move_right(), Ok(()));
        assert_eq!(session.falling_piece().unwrap().col(), 1);
        assert_eq!(session.try_soft_down(), Ok(()));
        assert_eq!(session.falling_piece().unwrap().row(), 6);
    }

    #[test]
    fn test_soft_down_never_lands() {
        let mut session = running_with(Board::new(), Piece::new(PieceKind::O, 4, 18));
        assert!(session.try_soft_down().unwrap_err().is_collision());
        assert_eq!(session.board().occupied_count(), 0);
        assert_eq!(session.stats().completed_pieces(), 0);
        assert_eq!(session.falling_piece(), Some(&Piece::new(PieceKind::O, 4, 18)));
    }

    #[test]
    fn test_blocked_rotation_leaves_piece() {
        let board = Board::from_ascii(
            r"
            ZZZZ.ZZZZZ
            ZZZZ.ZZZZZ
            ZZZZ.ZZZZZ
            ",
        );
        let vertical =
            Piece::new(PieceKind::I, 2, 16).with_shape(PieceKind::I.shape().rotated_right());
        let mut session = running_with(board, vertical);
        assert_eq!(session.try_rotate(), Err(InputError::RotationBlocked));
        assert_eq!(session.falling_piece(), Some(&vertical));
    }

    #[test]
    fn test_tick_descends_then_lands() {
        let mut session = running_with(Board::new(), Piece::new(PieceKind::O, 4, 17));
        assert_eq!(session.tick(), TickOutcome::Descended);
        assert_eq!(session.falling_piece().unwrap().row(), 18);

        assert_eq!(session.tick(), TickOutcome::Landed { cleared_lines: 0 });
        for (col, row) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
            assert_eq!(
                session.board().cell(col, row),
                Some(Cell::Filled(PieceColor::Yellow))
            );
        }
        let next = session.falling_piece().unwrap();
        assert_eq!(next, &Piece::spawn(next.kind()));
        assert_eq!(session.score(), 0);
        assert_eq!(session.stats().completed_pieces(), 1);
        assert_eq!(session.ticks(), 2);
    }

    #[test]
    fn test_landing_clears_and_scores() {
        let board = Board::from_ascii(
            r"
            ...T......
            IIII..IIII
            ",
        );
        let mut session = running_with(board, Piece::new(PieceKind::O, 4, 18));
        assert_eq!(session.tick(), TickOutcome::Landed { cleared_lines: 1 });
        assert_eq!(session.score(), 100);

        let expected = Board::from_ascii(
            r"
            ...TOO....
            ",
        );
        assert_eq!(session.board(), &expected);
    }

    #[test]
    fn test_tetris_scores_800() {
        let board = Board::from_ascii(
            r"
            IIII.IIIII
            IIII.IIIII
            IIII.IIIII
            IIII.IIIII
            ",
        );
        let vertical =
            Piece::new(PieceKind::I, 2, 16).with_shape(PieceKind::I.shape().rotated_right());
        let mut session = running_with(board, vertical);
        assert_eq!(session.tick(), TickOutcome::Landed { cleared_lines: 4 });
        assert_eq!(session.score(), 800);
        assert_eq!(session.board(), &Board::EMPTY);
    }

    #[test]
    fn test_spawn_collision_ends_game() {
        let mut rows = vec![".IIIIIIIII"; 2];
        rows.extend([".........."; 18]);
        let board = Board::from_ascii(&rows.join("\n"));
        let mut session = running_with(board, Piece::new(PieceKind::O, 4, 18));

        assert_eq!(session.tick(), TickOutcome::GameOver { cleared_lines: 0 });
        assert_eq!(session.status(), GameStatus::Over);
        assert!(!session.wants_ticks());
        assert_eq!(session.stats().completed_pieces(), 1);

        let frozen = session.snapshot();
        assert_eq!(session.tick(), TickOutcome::Ignored);
        assert_eq!(session.try_move_left(), Err(InputError::NotRunning));
        session.toggle_pause();
        assert_eq!(session.snapshot(), frozen);
    }

    #[test]
    fn test_restart_resets_everything() {
        let board = Board::from_ascii(
            r"
            IIII..IIII
            ",
        );
        let mut session = running_with(board, Piece::new(PieceKind::O, 4, 18));
        session.tick();
        assert_eq!(session.score(), 100);
        session.tick();
        session.pause();

        session.restart();
        assert_eq!(session.status(), GameStatus::Running);
        assert_eq!(session.score(), 0);
        assert_eq!(session.ticks(), 0);
        assert_eq!(session.board(), &Board::EMPTY);
        assert_eq!(session.stats(), &GameStats::new());
    }

    #[test]
    fn test_long_game_ends_in_game_over() {
        let mut session = seeded();
        session.start();
        let mut outcome = TickOutcome::Ignored;
        for _ in 0..100_000 {
            outcome = session.tick();
            if outcome.is_game_over() {
                break;
            }
        }
        assert!(outcome.is_game_over());
        assert_eq!(session.status(), GameStatus::Over);
    }
}
