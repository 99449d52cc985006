//! Error types for the desk module.

use thiserror::Error;

use crate::ticket::TicketError;

/// Errors raised by an interactive collaborator.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The input source ended before an answer was given.
    #[error("Input closed before an answer was given")]
    Closed,

    /// Reading or writing the prompt failed.
    #[error("Prompt I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can end a desk workflow.
#[derive(Debug, Error)]
pub enum DeskError {
    /// The store refused the operation.
    #[error(transparent)]
    Ticket(#[from] TicketError),

    /// A collaborator could not produce an answer.
    #[error(transparent)]
    Prompt(#[from] PromptError),
}

impl DeskError {
    /// The underlying ticket error, if any.
    pub fn as_ticket_error(&self) -> Option<&TicketError> {
        match self {
            DeskError::Ticket(err) => Some(err),
            DeskError::Prompt(_) => None,
        }
    }
}
