//! Operator interaction errors

use super::SorterError;

/// Creates a prompt failure error
pub fn failed(message: impl Into<String>) -> SorterError {
    SorterError::PromptFailed {
        message: message.into(),
    }
}
