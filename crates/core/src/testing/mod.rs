//! Testing utilities and scripted collaborator implementations.
//!
//! The desk talks to its front-end through traits. The types here replay
//! canned answers and record what they were asked, so desk flows can be
//! tested without a terminal.
//!
//! # Example
//!
//! ```rust
//! use eyang_core::testing::{fixtures, ScriptedForm, ScriptedGate};
//! use eyang_core::{DeskOutcome, TicketDesk};
//!
//! let desk = TicketDesk::new(fixtures::sequential_store());
//!
//! let mut form = ScriptedForm::new().submit(fixtures::input("Printer jam"));
//! let DeskOutcome::Saved(ticket) = desk.create(&mut form).unwrap() else {
//!     unreachable!()
//! };
//!
//! let mut gate = ScriptedGate::new().answer(true);
//! desk.delete(&ticket.id, &mut gate).unwrap();
//! assert!(desk.tickets().unwrap().is_empty());
//! ```

mod scripted_form;
mod scripted_gate;
mod scripted_rating;

pub use scripted_form::ScriptedForm;
pub use scripted_gate::ScriptedGate;
pub use scripted_rating::ScriptedRatingPicker;

/// Test fixtures and helper functions.
pub mod fixtures {
    use std::sync::Arc;

    use crate::ticket::{IdStrategy, InMemoryTicketStore, TicketInput, TicketStatus};

    /// Empty store with ids `1`, `2`, `3`, ...
    pub fn sequential_store() -> Arc<InMemoryTicketStore> {
        Arc::new(InMemoryTicketStore::with_id_strategy(IdStrategy::Sequential))
    }

    /// Form input with the given title, no description, status `Created`.
    pub fn input(title: &str) -> TicketInput {
        TicketInput::new(title, "")
    }

    /// Form input for a ticket that is already resolved.
    pub fn completed_input(title: &str) -> TicketInput {
        input(title).with_status(TicketStatus::Completed)
    }
}
