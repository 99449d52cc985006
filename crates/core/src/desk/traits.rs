//! Collaborator traits the desk calls into.
//!
//! The desk never talks to a terminal or a window directly. Whatever front-end
//! drives it implements these traits.

use crate::ticket::{Ticket, TicketError, TicketInput};

use super::error::PromptError;

/// Whether a form creates a ticket or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Blank form for a new ticket.
    New,
    /// Form pre-filled from an existing ticket.
    Edit,
}

impl FormMode {
    /// Heading shown above the form.
    pub fn heading(&self) -> &'static str {
        match self {
            FormMode::New => "New Ticket",
            FormMode::Edit => "Edit Ticket",
        }
    }

    /// Label of the submit action.
    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::New => "Create",
            FormMode::Edit => "Update",
        }
    }
}

/// Everything a form collector needs to show one form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRequest {
    /// Create or edit.
    pub mode: FormMode,
    /// Values to pre-fill.
    pub initial: TicketInput,
    /// Why the previous submission was rejected, if it was.
    pub error: Option<TicketError>,
}

impl FormRequest {
    /// A fresh form with no previous error.
    pub fn new(mode: FormMode, initial: TicketInput) -> Self {
        Self {
            mode,
            initial,
            error: None,
        }
    }

    /// The same form re-opened with rejected input and the reason.
    pub fn retry(mode: FormMode, rejected: TicketInput, error: TicketError) -> Self {
        Self {
            mode,
            initial: rejected,
            error: Some(error),
        }
    }
}

/// Yes/no decision point guarding destructive actions.
pub trait ConfirmationGate {
    /// Ask the user; `true` means proceed.
    fn confirm(&mut self, message: &str) -> Result<bool, PromptError>;
}

/// Gathers title, description and status for create/edit.
pub trait FormCollector {
    /// Show the form. `None` means the user cancelled.
    fn collect(&mut self, request: FormRequest) -> Result<Option<TicketInput>, PromptError>;
}

/// Lets the user pick a rating for a completed ticket.
pub trait RatingPicker {
    /// `None` means the user cancelled.
    fn pick(&mut self, ticket: &Ticket) -> Result<Option<u8>, PromptError>;
}
