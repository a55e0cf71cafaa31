//! Operator interaction
//!
//! Everything the session needs from the person at the scanner goes through
//! the [`Operator`] trait. The terminal implementation uses `inquire`; tests
//! replay canned answers through [`scripted::ScriptedOperator`].

pub mod terminal;

#[cfg(test)]
pub mod scripted;

pub use terminal::TerminalOperator;

use crate::error::Result;

/// Source of operator answers and sink for operator feedback
pub trait Operator {
    /// Free-form text answer
    fn text(&mut self, prompt: &str) -> Result<String>;

    /// Yes/no answer
    fn confirm(&mut self, prompt: &str) -> Result<bool>;

    /// Pick one entry of a menu
    ///
    /// Returns the raw answer (normally the menu index as text). Validation is
    /// left to the caller so a bad answer can be re-prompted.
    fn choose(&mut self, prompt: &str, options: &[String]) -> Result<String>;

    /// Progress feedback
    fn notify(&mut self, message: &str);

    /// Feedback about an answer that was turned down
    fn warn(&mut self, message: &str);
}
