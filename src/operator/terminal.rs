//! Interactive terminal operator built on `inquire`

use console::Style;
use inquire::{Confirm, Select, Text};

use super::Operator;
use crate::error::Result;

/// Prompts on the controlling terminal
#[derive(Debug, Clone)]
pub struct TerminalOperator {
    notice: Style,
    warning: Style,
}

impl TerminalOperator {
    pub fn new() -> Self {
        Self {
            notice: Style::new().cyan(),
            warning: Style::new().yellow().bold(),
        }
    }
}

impl Default for TerminalOperator {
    fn default() -> Self {
        Self::new()
    }
}

impl Operator for TerminalOperator {
    fn text(&mut self, prompt: &str) -> Result<String> {
        Ok(Text::new(prompt).prompt()?)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(Confirm::new(prompt)
            .with_default(true)
            .with_help_message("Enter to confirm, 'n' for a new project")
            .prompt()?)
    }

    fn choose(&mut self, prompt: &str, options: &[String]) -> Result<String> {
        let selected = Select::new(prompt, options.to_vec())
            .with_page_size(options.len().max(1))
            .without_filtering()
            .with_help_message("↑↓ to move, ENTER to select, ESC to cancel")
            .raw_prompt()?;
        Ok(selected.index.to_string())
    }

    fn notify(&mut self, message: &str) {
        println!("{}", self.notice.apply_to(message));
    }

    fn warn(&mut self, message: &str) {
        eprintln!("{}", self.warning.apply_to(message));
    }
}
