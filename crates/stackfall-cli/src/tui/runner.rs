use std::time::Duration;

use ratatui::DefaultTerminal;

use crate::tui::{App, event::TuiEvent, event_loop::EventLoop};

/// Owns the terminal while an [`App`] runs and feeds it events.
///
/// Ticks arrive only while an interval is armed through
/// [`Tui::set_tick_interval`]; without one the loop just waits for input.
#[derive(Default, Debug)]
pub struct Tui {
    events: EventLoop,
}

impl Tui {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms (`Some`) or disarms (`None`) the tick interval.
    pub fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.events.set_tick_interval(interval);
    }

    pub fn run<A>(mut self, app: &mut A) -> anyhow::Result<()>
    where
        A: App,
    {
        app.init(&mut self);
        ratatui::run(|terminal| self.drive(app, terminal))
    }

    fn drive<A>(&mut self, app: &mut A, terminal: &mut DefaultTerminal) -> anyhow::Result<()>
    where
        A: App,
    {
        while !app.should_exit() {
            match self.events.next()? {
                TuiEvent::Render => _ = terminal.draw(|frame| app.draw(frame))?,
                TuiEvent::Tick => app.update(self),
                TuiEvent::Crossterm(event) => app.handle_event(self, event),
            }
        }
        Ok(())
    }
}
