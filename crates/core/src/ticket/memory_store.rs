//! In-memory ticket store implementation.

use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use tracing::{debug, info};

use super::store::{validate_input, validate_rating};
use super::{
    IdAllocator, IdStrategy, StateViolation, Ticket, TicketError, TicketFilter, TicketId,
    TicketInput, TicketStore, UNRATED,
};

struct Inner {
    tickets: Vec<Ticket>,
    ids: IdAllocator,
}

impl Inner {
    fn position(&self, id: &TicketId) -> Result<usize, TicketError> {
        self.tickets
            .iter()
            .position(|t| &t.id == id)
            .ok_or_else(|| TicketError::NotFound(id.clone()))
    }
}

/// Ticket store that keeps the whole collection in process memory.
///
/// State lives for as long as the store does; nothing is persisted.
pub struct InMemoryTicketStore {
    inner: Mutex<Inner>,
}

impl InMemoryTicketStore {
    /// Create an empty store with timestamp-derived ids.
    pub fn new() -> Self {
        Self::with_id_strategy(IdStrategy::default())
    }

    /// Create an empty store using the given id strategy.
    pub fn with_id_strategy(strategy: IdStrategy) -> Self {
        Self {
            inner: Mutex::new(Inner {
                tickets: Vec::new(),
                ids: IdAllocator::new(strategy),
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, TicketError> {
        self.inner
            .lock()
            .map_err(|_| TicketError::Storage("ticket store lock poisoned".to_string()))
    }
}

impl Default for InMemoryTicketStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketStore for InMemoryTicketStore {
    fn create(&self, input: TicketInput) -> Result<Ticket, TicketError> {
        validate_input(&input)?;

        let mut inner = self.lock()?;
        let now = Utc::now();
        let ticket = Ticket {
            id: inner.ids.next_id(),
            title: input.title,
            description: input.description,
            status: input.status,
            rating: UNRATED,
            created_at: now,
            updated_at: now,
        };
        inner.tickets.push(ticket.clone());

        info!(ticket_id = %ticket.id, status = %ticket.status, "Ticket created");
        Ok(ticket)
    }

    fn get(&self, id: &TicketId) -> Result<Option<Ticket>, TicketError> {
        let inner = self.lock()?;
        Ok(inner.tickets.iter().find(|t| &t.id == id).cloned())
    }

    fn list(&self, filter: &TicketFilter) -> Result<Vec<Ticket>, TicketError> {
        let inner = self.lock()?;
        let matching = inner
            .tickets
            .iter()
            .filter(|t| filter.matches(t))
            .skip(filter.offset);

        let tickets = match filter.limit {
            Some(limit) => matching.take(limit).cloned().collect(),
            None => matching.cloned().collect(),
        };
        Ok(tickets)
    }

    fn count(&self, filter: &TicketFilter) -> Result<usize, TicketError> {
        let inner = self.lock()?;
        Ok(inner.tickets.iter().filter(|t| filter.matches(t)).count())
    }

    fn update(&self, id: &TicketId, input: TicketInput) -> Result<Ticket, TicketError> {
        validate_input(&input)?;

        let mut inner = self.lock()?;
        let index = inner.position(id)?;
        let ticket = &mut inner.tickets[index];
        let previous = ticket.status;

        ticket.title = input.title;
        ticket.description = input.description;
        ticket.status = input.status;
        ticket.updated_at = Utc::now();

        debug!(
            ticket_id = %id,
            from = %previous,
            to = %ticket.status,
            "Ticket updated"
        );
        Ok(ticket.clone())
    }

    fn rate(&self, id: &TicketId, rating: u8) -> Result<Ticket, TicketError> {
        let rating = validate_rating(rating)?;

        let mut inner = self.lock()?;
        let index = inner.position(id)?;
        let ticket = &mut inner.tickets[index];

        if !ticket.can_be_rated() {
            return Err(TicketError::InvalidState {
                ticket_id: id.clone(),
                status: ticket.status,
                operation: "rate",
                violation: StateViolation::NotCompleted,
            });
        }

        let previous = ticket.rating;
        ticket.rating = rating;
        ticket.updated_at = Utc::now();

        info!(ticket_id = %id, rating, previous, "Ticket rated");
        Ok(ticket.clone())
    }

    fn delete(&self, id: &TicketId) -> Result<Ticket, TicketError> {
        let mut inner = self.lock()?;
        let index = inner.position(id)?;
        let ticket = inner.tickets.remove(index);

        info!(ticket_id = %id, "Ticket deleted");
        Ok(ticket)
    }
}
