//! Ticket system for tracking user-reported support requests.

mod id;
mod memory_store;
mod store;
mod types;

pub use id::{IdAllocator, IdStrategy};
pub use memory_store::InMemoryTicketStore;
pub use store::{
    validate_input, validate_rating, StateViolation, TicketError, TicketFilter, TicketStore,
    ValidationError,
};
pub use types::{
    ParseStatusError, Ticket, TicketId, TicketInput, TicketStatus, MAX_RATING, MIN_RATING,
    UNRATED,
};
