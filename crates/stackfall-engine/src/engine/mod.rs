//! Game rules that advance over time.
//!
//! - [`GameSession`] - the state machine a host drives with ticks and commands
//! - [`GameField`] - board and falling piece; landing, clearing and spawning
//! - [`GameStats`] - score and landing counters
//! - [`PieceGenerator`] / [`PieceSeed`] - seeded uniform piece selection
//! - [`GameSnapshot`] - owned copy of the observable state
//!
//! # Game Flow
//!
//! 1. [`GameSession::start`] resets the board and spawns the first piece
//! 2. The host calls [`GameSession::tick`] periodically while
//!    [`GameSession::wants_ticks`] holds
//! 3. Player commands move or rotate the falling piece through the placement oracle
//! 4. When a tick cannot move the piece down it lands, full rows are cleared
//!    and scored, and the next piece spawns
//! 5. A spawn collision ends the game
//!
//! # Example
//!
//! ```
//! use stackfall_engine::{GameSession, GameStatus, TickOutcome};
//!
//! let mut session = GameSession::new();
//! session.start();
//!
//! loop {
//!     _ = session.try_rotate();
//!     if let TickOutcome::GameOver { .. } = session.tick() {
//!         break;
//!     }
//! }
//! assert_eq!(session.status(), GameStatus::Over);
//! ```

pub use self::{game_field::*, game_session::*, game_stats::*, piece_generator::*, snapshot::*};

mod game_field;
mod game_session;
mod game_stats;
mod piece_generator;
mod snapshot;
