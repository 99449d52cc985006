//! Ticket storage trait and types.

use thiserror::Error;

use crate::ticket::{Ticket, TicketId, TicketInput, TicketStatus, MAX_RATING, MIN_RATING};

/// Input rejected before touching the collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Title is empty once whitespace is trimmed.
    #[error("Title is required")]
    EmptyTitle,
    /// Rating outside 1..=5.
    #[error("Rating must be between 1 and 5, got {0}")]
    OutOfRange(u8),
}

/// Status precondition an operation did not meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateViolation {
    /// Only completed tickets can be rated.
    #[error("ticket is not completed")]
    NotCompleted,
    /// Completed tickets are not offered for editing.
    #[error("ticket is already completed")]
    AlreadyCompleted,
}

/// Error type for ticket operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TicketError {
    /// Input failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Ticket not found.
    #[error("Ticket not found: {0}")]
    NotFound(TicketId),
    /// Cannot perform operation due to current status.
    #[error("Cannot {operation} ticket {ticket_id}: {violation} (status is {status})")]
    InvalidState {
        ticket_id: TicketId,
        status: TicketStatus,
        operation: &'static str,
        violation: StateViolation,
    },
    /// The backing storage could not be accessed.
    #[error("Ticket storage error: {0}")]
    Storage(String),
}

impl TicketError {
    /// Returns true if resubmitting corrected input could succeed.
    pub fn is_validation(&self) -> bool {
        matches!(self, TicketError::Validation(_))
    }
}

/// Filter for querying tickets.
///
/// The default filter matches every ticket, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketFilter {
    /// Filter by status.
    pub status: Option<TicketStatus>,
    /// Maximum number of results.
    pub limit: Option<usize>,
    /// Number of matching tickets to skip.
    pub offset: usize,
}

impl TicketFilter {
    /// Create a filter matching everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by status.
    pub fn with_status(mut self, status: TicketStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set offset.
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Returns true if the ticket passes the status condition.
    pub fn matches(&self, ticket: &Ticket) -> bool {
        self.status.is_none_or(|status| ticket.status == status)
    }
}

/// Check a rating before applying it.
pub fn validate_rating(rating: u8) -> Result<u8, ValidationError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(rating)
    } else {
        Err(ValidationError::OutOfRange(rating))
    }
}

/// Check create/update input before applying it.
pub fn validate_input(input: &TicketInput) -> Result<(), ValidationError> {
    if input.has_blank_title() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(())
}

/// Trait for ticket storage backends.
///
/// Implementations serialize all mutations: each call runs to completion
/// before the next one starts, and a failed call leaves the collection as it
/// was.
pub trait TicketStore: Send + Sync {
    /// Create a new ticket at the end of the collection, unrated.
    fn create(&self, input: TicketInput) -> Result<Ticket, TicketError>;

    /// Get a ticket by ID.
    fn get(&self, id: &TicketId) -> Result<Option<Ticket>, TicketError>;

    /// List tickets matching the filter, in insertion order.
    fn list(&self, filter: &TicketFilter) -> Result<Vec<Ticket>, TicketError>;

    /// Count tickets matching the filter (ignores limit and offset).
    fn count(&self, filter: &TicketFilter) -> Result<usize, TicketError>;

    /// Replace title, description and status. Id and rating are kept.
    ///
    /// Does not check the current status; keeping completed tickets out of
    /// the edit path is the caller's job.
    fn update(&self, id: &TicketId, input: TicketInput) -> Result<Ticket, TicketError>;

    /// Record a 1-5 rating on a completed ticket, overwriting any previous one.
    fn rate(&self, id: &TicketId, rating: u8) -> Result<Ticket, TicketError>;

    /// Permanently delete a ticket.
    /// Returns the deleted ticket if found.
    fn delete(&self, id: &TicketId) -> Result<Ticket, TicketError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rating_bounds() {
        assert_eq!(validate_rating(0), Err(ValidationError::OutOfRange(0)));
        assert_eq!(validate_rating(1), Ok(1));
        assert_eq!(validate_rating(5), Ok(5));
        assert_eq!(validate_rating(6), Err(ValidationError::OutOfRange(6)));
    }

    #[test]
    fn test_validate_input_trims_title() {
        assert_eq!(
            validate_input(&TicketInput::new("  ", "details")),
            Err(ValidationError::EmptyTitle)
        );
        assert!(validate_input(&TicketInput::new("x", "")).is_ok());
    }

    #[test]
    fn test_error_messages() {
        let err = TicketError::from(ValidationError::EmptyTitle);
        assert_eq!(err.to_string(), "Title is required");
        assert!(err.is_validation());

        let err = TicketError::NotFound(TicketId::new("42"));
        assert_eq!(err.to_string(), "Ticket not found: 42");
        assert!(!err.is_validation());

        let err = TicketError::InvalidState {
            ticket_id: TicketId::new("42"),
            status: TicketStatus::Created,
            operation: "rate",
            violation: StateViolation::NotCompleted,
        };
        assert_eq!(
            err.to_string(),
            "Cannot rate ticket 42: ticket is not completed (status is Created)"
        );
    }

    #[test]
    fn test_filter_builders() {
        let filter = TicketFilter::new()
            .with_status(TicketStatus::Completed)
            .with_limit(10)
            .with_offset(5);
        assert_eq!(filter.status, Some(TicketStatus::Completed));
        assert_eq!(filter.limit, Some(10));
        assert_eq!(filter.offset, 5);
        assert_eq!(TicketFilter::new(), TicketFilter::default());
    }
}
