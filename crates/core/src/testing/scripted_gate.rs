//! Scripted confirmation gate for testing.

use std::collections::VecDeque;

use crate::desk::{ConfirmationGate, PromptError};

/// Confirmation gate that replays queued answers.
///
/// Once the queue is empty, further questions fail with
/// [`PromptError::Closed`], like a terminal whose input ended.
#[derive(Debug, Default)]
pub struct ScriptedGate {
    answers: VecDeque<bool>,
    messages: Vec<String>,
}

impl ScriptedGate {
    /// Create a gate with no queued answers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next answer.
    pub fn answer(mut self, confirmed: bool) -> Self {
        self.answers.push_back(confirmed);
        self
    }

    /// Messages the gate was asked, oldest first.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl ConfirmationGate for ScriptedGate {
    fn confirm(&mut self, message: &str) -> Result<bool, PromptError> {
        self.messages.push(message.to_string());
        self.answers.pop_front().ok_or(PromptError::Closed)
    }
}
