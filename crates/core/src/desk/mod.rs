//! Presentation-facing ticket workflows.
//!
//! A front-end renders [`TicketDesk::tickets`] and routes user intent through
//! the desk, supplying its own [`FormCollector`], [`ConfirmationGate`] and
//! [`RatingPicker`].

mod error;
mod traits;
mod workflow;

pub use error::{DeskError, PromptError};
pub use traits::{ConfirmationGate, FormCollector, FormMode, FormRequest, RatingPicker};
pub use workflow::{DeskOutcome, TicketDesk, DELETE_CONFIRMATION};
