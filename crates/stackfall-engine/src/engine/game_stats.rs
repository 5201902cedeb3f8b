use serde::Serialize;

/// Points added for clearing `lines` rows with a single landing.
///
/// - 0 lines: 0 points
/// - 1 line: 100 points
/// - 2 lines: 300 points (1.5× bonus)
/// - 3 lines: 450 points (1.5× bonus)
/// - 4 lines: 800 points (2× bonus)
///
/// Larger counts cannot happen with four-cell pieces; they get the 1.5× bonus
/// rounded down.
///
/// # Example
///
/// ```
/// use stackfall_engine::line_clear_score;
///
/// assert_eq!(line_clear_score(0), 0);
/// assert_eq!(line_clear_score(3), 450);
/// assert_eq!(line_clear_score(4), 800);
/// ```
#[must_use]
pub const fn line_clear_score(lines: usize) -> usize {
    let base = 100 * lines;
    match lines {
        0 | 1 => base,
        4 => base * 2,
        _ => base * 3 / 2,
    }
}

/// Score and counters of one game.
///
/// - **Score**: sum of [`line_clear_score`] over every landing
/// - **Completed pieces**: number of pieces that landed
/// - **Line clear distribution**: landings by number of rows cleared
///
/// # Example
///
/// ```
/// use stackfall_engine::GameStats;
///
/// let mut stats = GameStats::new();
/// stats.record_landing(4);
///
/// assert_eq!(stats.score(), 800);
/// assert_eq!(stats.total_cleared_lines(), 4);
/// assert_eq!(stats.line_cleared_counter()[4], 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameStats {
    score: usize,
    completed_pieces: usize,
    total_cleared_lines: usize,
    line_cleared_counter: [usize; 5],
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStats {
    /// Creates a new game statistics tracker with all counters at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            completed_pieces: 0,
            total_cleared_lines: 0,
            line_cleared_counter: [0; 5],
        }
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Returns the total number of pieces that have landed.
    #[must_use]
    pub const fn completed_pieces(&self) -> usize {
        self.completed_pieces
    }

    #[must_use]
    pub const fn total_cleared_lines(&self) -> usize {
        self.total_cleared_lines
    }

    /// Returns a histogram of landings by rows cleared.
    ///
    /// Array indices represent:
    /// - `[0]`: Number of landings that cleared nothing
    /// - `[1]`: Number of singles (1 line)
    /// - `[2]`: Number of doubles (2 lines)
    /// - `[3]`: Number of triples (3 lines)
    /// - `[4]`: Number of tetrises (4 lines)
    #[must_use]
    pub const fn line_cleared_counter(&self) -> &[usize; 5] {
        &self.line_cleared_counter
    }

    /// Updates statistics after a piece lands and its full rows are cleared.
    pub const fn record_landing(&mut self, cleared_lines: usize) {
        self.completed_pieces += 1;
        self.total_cleared_lines += cleared_lines;
        if cleared_lines < self.line_cleared_counter.len() {
            self.line_cleared_counter[cleared_lines] += 1;
        }
        self.score += line_clear_score(cleared_lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_table() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 100);
        assert_eq!(line_clear_score(2), 300);
        assert_eq!(line_clear_score(3), 450);
        assert_eq!(line_clear_score(4), 800);
    }

    #[test]
    fn test_single_line_from_zero() {
        let mut stats = GameStats::new();
        stats.record_landing(1);
        assert_eq!(stats.score(), 100);
    }

    #[test]
    fn test_no_lines_keeps_score() {
        let mut stats = GameStats::new();
        stats.record_landing(2);
        stats.record_landing(0);
        assert_eq!(stats.score(), 300);
        assert_eq!(stats.completed_pieces(), 2);
        assert_eq!(stats.line_cleared_counter(), &[1, 0, 1, 0, 0]);
    }

    #[test]
    fn test_scores_accumulate() {
        let mut stats = GameStats::new();
        for lines in [1, 2, 3, 4] {
            stats.record_landing(lines);
        }
        assert_eq!(stats.score(), 100 + 300 + 450 + 800);
        assert_eq!(stats.total_cleared_lines(), 10);
        assert_eq!(stats.completed_pieces(), 4);
    }
}
