//! Synchronous yes/no gate in front of destructive operations.
//!
//! The terminal UI answers through a modal dialog before the operation is
//! dispatched; tests answer with closures.

pub trait Confirm {
    /// Ask the user `message`. `false` aborts the operation.
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}
