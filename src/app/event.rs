use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Tick for status message expiry
    Tick,

    /// The terminal event stream failed or ended; no more keys will arrive
    InputClosed,
}
