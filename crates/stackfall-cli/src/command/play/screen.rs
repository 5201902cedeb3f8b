use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};
use stackfall_engine::{GameSession, GameStatus, PieceSeed};

use crate::view::widgets::{KeyBinding, KeyBindingDisplay, SessionDisplay};

const IDLE_KEYS: &[KeyBinding] = &[(&["S", "Enter"], "Start"), (&["Q", "Esc"], "Quit")];
const RUNNING_KEYS: &[KeyBinding] = &[
    (&["←", "→"], "Move"),
    (&["↓"], "Soft Drop"),
    (&["↑"], "Rotate"),
    (&["P"], "Pause"),
    (&["S"], "Restart"),
    (&["Q"], "Quit"),
];
const PAUSED_KEYS: &[KeyBinding] = &[
    (&["P"], "Resume"),
    (&["S"], "Restart"),
    (&["Q"], "Quit"),
];
const OVER_KEYS: &[KeyBinding] = &[(&["S", "Enter"], "Restart"), (&["Q", "Esc"], "Quit")];

#[derive(Debug)]
pub struct PlayScreen {
    session: GameSession,
    is_exiting: bool,
}

impl PlayScreen {
    pub fn new(seed: Option<PieceSeed>) -> Self {
        let session = seed.map_or_else(GameSession::new, GameSession::with_seed);
        Self {
            session,
            is_exiting: false,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn wants_ticks(&self) -> bool {
        !self.is_exiting && self.session.wants_ticks()
    }

    pub fn is_exiting(&self) -> bool {
        self.is_exiting
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let session_display = SessionDisplay::new(&self.session);
        let bindings = match self.session.status() {
            GameStatus::Idle => IDLE_KEYS,
            GameStatus::Running => RUNNING_KEYS,
            GameStatus::Paused => PAUSED_KEYS,
            GameStatus::Over => OVER_KEYS,
        };
        let help = KeyBindingDisplay::new(bindings);

        let [main_area, help_area] =
            Layout::vertical([Constraint::Length(session_display.height()), Constraint::Length(1)])
                .areas::<2>(frame.area());
        frame.render_widget(session_display, main_area);
        frame.render_widget(help, help_area);
    }

    pub fn handle_event(&mut self, event: &Event) {
        let Some(key) = event.as_key_event() else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Left => _ = self.session.try_move_left(),
            KeyCode::Right => _ = self.session.try_move_right(),
            KeyCode::Down => _ = self.session.try_soft_down(),
            KeyCode::Up => _ = self.session.try_rotate(),
            KeyCode::Char('s') | KeyCode::Enter => self.session.restart(),
            KeyCode::Char('p') => self.session.toggle_pause(),
            KeyCode::Char('q') | KeyCode::Esc => self.is_exiting = true,
            _ => {}
        }
    }

    pub fn update(&mut self) {
        _ = self.session.tick();
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn press(screen: &mut PlayScreen, code: KeyCode) {
        screen.handle_event(&Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn screen() -> PlayScreen {
        PlayScreen::new(Some("0123456789abcdeffedcba9876543210".parse().unwrap()))
    }

    #[test]
    fn test_start_and_pause_keys() {
        let mut screen = screen();
        assert!(!screen.wants_ticks());

        press(&mut screen, KeyCode::Enter);
        assert_eq!(screen.session().status(), GameStatus::Running);
        assert!(screen.wants_ticks());

        press(&mut screen, KeyCode::Char('p'));
        assert_eq!(screen.session().status(), GameStatus::Paused);
        assert!(!screen.wants_ticks());

        press(&mut screen, KeyCode::Char('p'));
        assert!(screen.wants_ticks());
    }

    #[test]
    fn test_movement_keys_reach_session() {
        let mut screen = screen();
        press(&mut screen, KeyCode::Char('s'));
        let start = *screen.session().falling_piece().unwrap();

        press(&mut screen, KeyCode::Left);
        assert_eq!(screen.session().falling_piece().unwrap().col(), start.col() - 1);
        press(&mut screen, KeyCode::Right);
        press(&mut screen, KeyCode::Down);
        let moved = screen.session().falling_piece().unwrap();
        assert_eq!((moved.col(), moved.row()), (start.col(), start.row() + 1));
    }

    #[test]
    fn test_movement_ignored_before_start() {
        let mut screen = screen();
        press(&mut screen, KeyCode::Left);
        press(&mut screen, KeyCode::Up);
        press(&mut screen, KeyCode::Char('p'));
        assert_eq!(screen.session().status(), GameStatus::Idle);
        assert_eq!(screen.session().falling_piece(), None);
    }

    #[test]
    fn test_quit_stops_ticks() {
        let mut screen = screen();
        press(&mut screen, KeyCode::Char('s'));
        press(&mut screen, KeyCode::Esc);
        assert!(screen.is_exiting());
        assert!(!screen.wants_ticks());
    }

    #[test]
    fn test_update_drives_gravity() {
        let mut screen = screen();
        press(&mut screen, KeyCode::Char('s'));
        let row = screen.session().falling_piece().unwrap().row();
        screen.update();
        assert_eq!(screen.session().falling_piece().unwrap().row(), row + 1);
        assert_eq!(screen.session().ticks(), 1);
    }
}
