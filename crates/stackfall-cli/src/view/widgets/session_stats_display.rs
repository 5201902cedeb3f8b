use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};
use stackfall_engine::GameSession;

use crate::view::widgets::style;

const INNER_WIDTH: u16 = 20;

/// Counters panel shown next to the board.
pub struct SessionStatsDisplay<'a> {
    session: &'a GameSession,
    block: Option<BlockWidget<'a>>,
}

impl<'a> SessionStatsDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self {
            session,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        INNER_WIDTH + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        u16::try_from(self.lines().len()).unwrap()
            + super::block_vertical_margin(self.block.as_ref())
    }

    /// One entry per row; `None` is a blank separator.
    fn lines(&self) -> [Option<(&'static str, String)>; 10] {
        let stats = self.session.stats();
        let [_, singles, doubles, triples, tetrises] = *stats.line_cleared_counter();
        [
            Some(("SCORE:", stats.score().to_string())),
            None,
            Some(("LINES:", stats.total_cleared_lines().to_string())),
            Some(("PIECES:", stats.completed_pieces().to_string())),
            None,
            Some(("SINGLES:", singles.to_string())),
            Some(("DOUBLES:", doubles.to_string())),
            Some(("TRIPLES:", triples.to_string())),
            Some(("TETRIS:", tetrises.to_string())),
            Some(("TICKS:", self.session.ticks().to_string())),
        ]
    }
}

impl Widget for SessionStatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let width = usize::from(area.width);
        for (row, entry) in area.rows().zip(self.lines()) {
            let Some((label, value)) = entry else {
                continue;
            };
            let pad = width.saturating_sub(label.len());
            Line::styled(format!("{label}{value:>pad$}"), style::DEFAULT).render(row, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_labels_left_values_right() {
        let mut session = GameSession::new();
        session.start();
        _ = session.tick();

        let stats = SessionStatsDisplay::new(&session);
        let area = Rect::new(0, 0, stats.width(), stats.height());
        let mut buf = Buffer::empty(area);
        stats.render(area, &mut buf);

        assert_eq!(row_text(&buf, 0), format!("SCORE:{:>14}", 0));
        assert_eq!(row_text(&buf, 1).trim(), "");
        assert_eq!(row_text(&buf, 9), format!("TICKS:{:>14}", 1));
    }
}
