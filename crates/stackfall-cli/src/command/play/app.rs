use std::time::Duration;

use crossterm::event::Event;
use ratatui::Frame;
use stackfall_engine::{GameSession, PieceSeed};

use crate::{
    command::play::screen::PlayScreen,
    tui::{App, Tui},
};

#[derive(Debug)]
pub struct PlayApp {
    screen: PlayScreen,
    tick_interval: Duration,
}

impl PlayApp {
    pub fn new(tick_interval: Duration, seed: Option<PieceSeed>) -> Self {
        Self {
            screen: PlayScreen::new(seed),
            tick_interval,
        }
    }

    pub fn session(&self) -> &GameSession {
        self.screen.session()
    }

    /// Keeps the tick interval armed exactly while the session asks for ticks.
    fn sync_ticks(&self, tui: &mut Tui) {
        let interval = self.screen.wants_ticks().then_some(self.tick_interval);
        tui.set_tick_interval(interval);
    }
}

impl App for PlayApp {
    fn init(&mut self, tui: &mut Tui) {
        self.sync_ticks(tui);
    }

    fn should_exit(&self) -> bool {
        self.screen.is_exiting()
    }

    fn handle_event(&mut self, tui: &mut Tui, event: Event) {
        self.screen.handle_event(&event);
        self.sync_ticks(tui);
    }

    fn draw(&self, frame: &mut Frame) {
        self.screen.draw(frame);
    }

    fn update(&mut self, tui: &mut Tui) {
        self.screen.update();
        self.sync_ticks(tui);
    }
}
