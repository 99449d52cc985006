//! Scripted form collector for testing.

use std::collections::VecDeque;

use crate::desk::{FormCollector, FormRequest, PromptError};
use crate::ticket::TicketInput;

/// Form collector that replays queued submissions and cancellations.
#[derive(Debug, Default)]
pub struct ScriptedForm {
    responses: VecDeque<Option<TicketInput>>,
    requests: Vec<FormRequest>,
}

impl ScriptedForm {
    /// Create a form with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a submission.
    pub fn submit(mut self, input: TicketInput) -> Self {
        self.responses.push_back(Some(input));
        self
    }

    /// Queue a cancellation.
    pub fn cancel(mut self) -> Self {
        self.responses.push_back(None);
        self
    }

    /// Every form that was opened, oldest first.
    pub fn requests(&self) -> &[FormRequest] {
        &self.requests
    }
}

impl FormCollector for ScriptedForm {
    fn collect(&mut self, request: FormRequest) -> Result<Option<TicketInput>, PromptError> {
        self.requests.push(request);
        self.responses.pop_front().ok_or(PromptError::Closed)
    }
}
