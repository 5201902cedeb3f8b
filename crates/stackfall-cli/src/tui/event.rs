use crossterm::event::Event as CrosstermEvent;

/// Events dispatched to the running [`App`](super::App).
#[derive(Debug, Clone, derive_more::IsVariant, derive_more::From)]
pub(super) enum TuiEvent {
    /// Gravity step; only produced while a tick interval is armed.
    Tick,
    /// The screen is out of date and should be redrawn.
    Render,
    /// Terminal events such as key input, mouse, and resize.
    Crossterm(CrosstermEvent),
}
