//! Canned operator answers for tests

use std::collections::VecDeque;

use super::Operator;
use crate::error::{Result, prompt};

#[derive(Debug, Clone)]
enum Answer {
    Text(String),
    Confirm(bool),
    Choice(String),
}

/// Replays a fixed queue of answers and records what the session said back
#[derive(Debug, Default)]
pub struct ScriptedOperator {
    answers: VecDeque<Answer>,
    prompts: Vec<String>,
    notices: Vec<String>,
    warnings: Vec<String>,
}

impl ScriptedOperator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, answer: &str) -> Self {
        self.answers.push_back(Answer::Text(answer.to_string()));
        self
    }

    pub fn confirm(mut self, answer: bool) -> Self {
        self.answers.push_back(Answer::Confirm(answer));
        self
    }

    pub fn choice(mut self, answer: &str) -> Self {
        self.answers.push_back(Answer::Choice(answer.to_string()));
        self
    }

    /// Queue the answers for a complete bundle capture
    pub fn bundle(self, project: &str, building: &str, year: &str, month: &str, day: &str) -> Self {
        self.text(project)
            .choice(building)
            .text(year)
            .text(month)
            .text(day)
    }

    /// Queue the answers for a complete blueprint capture
    pub fn blueprint(self, title: &str, sheet: &str) -> Self {
        self.text(title).text(sheet)
    }

    pub fn is_exhausted(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    fn next(&mut self, prompt_text: &str) -> Result<Answer> {
        self.prompts.push(prompt_text.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| prompt::failed(format!("no scripted answer for '{prompt_text}'")))
    }
}

impl Operator for ScriptedOperator {
    fn text(&mut self, prompt_text: &str) -> Result<String> {
        match self.next(prompt_text)? {
            Answer::Text(s) => Ok(s),
            other => Err(prompt::failed(format!(
                "expected text for '{prompt_text}', script has {other:?}"
            ))),
        }
    }

    fn confirm(&mut self, prompt_text: &str) -> Result<bool> {
        match self.next(prompt_text)? {
            Answer::Confirm(b) => Ok(b),
            other => Err(prompt::failed(format!(
                "expected confirmation for '{prompt_text}', script has {other:?}"
            ))),
        }
    }

    fn choose(&mut self, prompt_text: &str, _options: &[String]) -> Result<String> {
        match self.next(prompt_text)? {
            Answer::Choice(s) => Ok(s),
            other => Err(prompt::failed(format!(
                "expected menu choice for '{prompt_text}', script has {other:?}"
            ))),
        }
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }
}
