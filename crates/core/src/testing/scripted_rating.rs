//! Scripted rating picker for testing.

use std::collections::VecDeque;

use crate::desk::{PromptError, RatingPicker};
use crate::ticket::{Ticket, TicketId};

/// Rating picker that replays queued picks.
#[derive(Debug, Default)]
pub struct ScriptedRatingPicker {
    picks: VecDeque<Option<u8>>,
    asked: Vec<TicketId>,
}

impl ScriptedRatingPicker {
    /// Create a picker with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a rating. Out-of-range values are passed through unchecked.
    pub fn choose(mut self, rating: u8) -> Self {
        self.picks.push_back(Some(rating));
        self
    }

    /// Queue a cancellation.
    pub fn cancel(mut self) -> Self {
        self.picks.push_back(None);
        self
    }

    /// Tickets the picker was shown, oldest first.
    pub fn asked(&self) -> &[TicketId] {
        &self.asked
    }
}

impl RatingPicker for ScriptedRatingPicker {
    fn pick(&mut self, ticket: &Ticket) -> Result<Option<u8>, PromptError> {
        self.asked.push(ticket.id.clone());
        self.picks.pop_front().ok_or(PromptError::Closed)
    }
}
