//! Core ticket data types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lowest rating a completed ticket can receive.
pub const MIN_RATING: u8 = 1;

/// Highest rating a completed ticket can receive.
pub const MAX_RATING: u8 = 5;

/// Rating value of a ticket nobody has rated yet.
pub const UNRATED: u8 = 0;

// ============================================================================
// Identity
// ============================================================================

/// Opaque ticket identifier, assigned once at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    /// Wrap an existing identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TicketId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TicketId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// ============================================================================
// Status
// ============================================================================

/// Where a ticket is in its support lifecycle.
///
/// Transitions are free-form: any status may be set to any other through an
/// update. Only rating depends on the current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    /// Reported, nobody is working on it yet.
    #[default]
    Created,
    /// Support staff is handling it.
    UnderAssistance,
    /// Resolved. Can be rated, no longer offered for editing.
    Completed,
}

impl TicketStatus {
    /// All statuses in the order the status picker offers them.
    pub const ALL: [TicketStatus; 3] = [
        TicketStatus::Created,
        TicketStatus::UnderAssistance,
        TicketStatus::Completed,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Created => "Created",
            TicketStatus::UnderAssistance => "Under Assistance",
            TicketStatus::Completed => "Completed",
        }
    }

    /// Serialized name, as used in config and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Created => "created",
            TicketStatus::UnderAssistance => "under_assistance",
            TicketStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string does not name a ticket status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown ticket status: {0}")]
pub struct ParseStatusError(pub String);

impl FromStr for TicketStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "created" => Ok(TicketStatus::Created),
            "under_assistance" => Ok(TicketStatus::UnderAssistance),
            "completed" => Ok(TicketStatus::Completed),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

// ============================================================================
// Form input
// ============================================================================

/// The value a submitted create/edit form hands to the store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TicketInput {
    /// Ticket title. Must contain something besides whitespace.
    pub title: String,
    /// Free-form details, may be empty.
    #[serde(default)]
    pub description: String,
    /// Requested status.
    #[serde(default)]
    pub status: TicketStatus,
}

impl TicketInput {
    /// Create an input with the default `Created` status.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status: TicketStatus::default(),
        }
    }

    /// Set the requested status.
    pub fn with_status(mut self, status: TicketStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns true if the title is empty once whitespace is trimmed.
    pub fn has_blank_title(&self) -> bool {
        self.title.trim().is_empty()
    }
}

impl From<&Ticket> for TicketInput {
    fn from(ticket: &Ticket) -> Self {
        Self {
            title: ticket.title.clone(),
            description: ticket.description.clone(),
            status: ticket.status,
        }
    }
}

// ============================================================================
// Ticket
// ============================================================================

/// A user-reported support ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique identifier, never changes.
    pub id: TicketId,
    /// Short summary of the problem.
    pub title: String,
    /// Optional details.
    pub description: String,
    /// Current lifecycle status.
    pub status: TicketStatus,
    /// 1-5 once rated, 0 while unrated.
    pub rating: u8,
    /// When the ticket was created.
    pub created_at: DateTime<Utc>,
    /// When the ticket was last changed.
    pub updated_at: DateTime<Utc>,
}

impl Ticket {
    /// Returns true if the ticket has been resolved.
    pub fn is_completed(&self) -> bool {
        self.status == TicketStatus::Completed
    }

    /// Returns true if a rating has been recorded.
    pub fn is_rated(&self) -> bool {
        self.rating != UNRATED
    }

    /// Returns true if the edit form may be offered for this ticket.
    pub fn is_editable(&self) -> bool {
        !self.is_completed()
    }

    /// Returns true if the ticket accepts a rating.
    pub fn can_be_rated(&self) -> bool {
        self.is_completed()
    }
}
