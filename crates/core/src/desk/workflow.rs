//! Ticket desk: the create/edit/delete/rate flows a front-end drives.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::ticket::{
    StateViolation, Ticket, TicketError, TicketFilter, TicketId, TicketInput, TicketStore,
};

use super::error::DeskError;
use super::traits::{ConfirmationGate, FormCollector, FormMode, FormRequest, RatingPicker};

/// Question asked before a ticket is deleted.
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this ticket?";

/// How a desk workflow ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeskOutcome {
    /// A ticket was created, updated or rated.
    Saved(Ticket),
    /// A ticket was removed.
    Deleted(Ticket),
    /// The user backed out; nothing changed.
    Cancelled,
}

/// Applies the user-facing rules on top of a [`TicketStore`].
///
/// The store is the source of truth for validation. The desk adds what the
/// store leaves to its callers: completed tickets are not editable, deletion
/// needs a confirmation, and rejected form input goes back to the user for
/// correction instead of being discarded.
#[derive(Clone)]
pub struct TicketDesk {
    store: Arc<dyn TicketStore>,
}

impl TicketDesk {
    /// Create a desk over the given store.
    pub fn new(store: Arc<dyn TicketStore>) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<dyn TicketStore> {
        &self.store
    }

    /// Current snapshot of every ticket, in insertion order.
    pub fn tickets(&self) -> Result<Vec<Ticket>, TicketError> {
        self.store.list(&TicketFilter::new())
    }

    /// Open a blank form and create a ticket from it.
    pub fn create<F>(&self, form: &mut F) -> Result<DeskOutcome, DeskError>
    where
        F: FormCollector + ?Sized,
    {
        self.submit_form(form, FormMode::New, TicketInput::default(), |input| {
            self.store.create(input)
        })
    }

    /// Open a pre-filled form and apply it to an existing ticket.
    ///
    /// Completed tickets are refused before any form is shown.
    pub fn edit<F>(&self, id: &TicketId, form: &mut F) -> Result<DeskOutcome, DeskError>
    where
        F: FormCollector + ?Sized,
    {
        let ticket = self.require(id)?;
        if !ticket.is_editable() {
            return Err(TicketError::InvalidState {
                ticket_id: ticket.id,
                status: ticket.status,
                operation: "edit",
                violation: StateViolation::AlreadyCompleted,
            }
            .into());
        }

        self.submit_form(form, FormMode::Edit, TicketInput::from(&ticket), |input| {
            self.store.update(id, input)
        })
    }

    /// Delete a ticket once the gate says yes.
    pub fn delete<G>(&self, id: &TicketId, gate: &mut G) -> Result<DeskOutcome, DeskError>
    where
        G: ConfirmationGate + ?Sized,
    {
        self.require(id)?;

        if !gate.confirm(DELETE_CONFIRMATION)? {
            debug!(ticket_id = %id, "Delete declined");
            return Ok(DeskOutcome::Cancelled);
        }

        let ticket = self.store.delete(id)?;
        Ok(DeskOutcome::Deleted(ticket))
    }

    /// Ask for a rating and record it on a completed ticket.
    pub fn rate<P>(&self, id: &TicketId, picker: &mut P) -> Result<DeskOutcome, DeskError>
    where
        P: RatingPicker + ?Sized,
    {
        let ticket = self.require(id)?;
        if !ticket.can_be_rated() {
            return Err(TicketError::InvalidState {
                ticket_id: ticket.id,
                status: ticket.status,
                operation: "rate",
                violation: StateViolation::NotCompleted,
            }
            .into());
        }

        match picker.pick(&ticket)? {
            Some(rating) => Ok(DeskOutcome::Saved(self.store.rate(id, rating)?)),
            None => {
                debug!(ticket_id = %id, "Rating cancelled");
                Ok(DeskOutcome::Cancelled)
            }
        }
    }

    fn require(&self, id: &TicketId) -> Result<Ticket, TicketError> {
        self.store
            .get(id)?
            .ok_or_else(|| TicketError::NotFound(id.clone()))
    }

    /// Show the form until the input is accepted or the user cancels.
    fn submit_form<F, S>(
        &self,
        form: &mut F,
        mode: FormMode,
        initial: TicketInput,
        mut save: S,
    ) -> Result<DeskOutcome, DeskError>
    where
        F: FormCollector + ?Sized,
        S: FnMut(TicketInput) -> Result<Ticket, TicketError>,
    {
        let mut request = FormRequest::new(mode, initial);
        loop {
            let Some(input) = form.collect(request.clone())? else {
                debug!(?mode, "Form cancelled");
                return Ok(DeskOutcome::Cancelled);
            };

            match save(input.clone()) {
                Ok(ticket) => {
                    info!(ticket_id = %ticket.id, ?mode, "Form submitted");
                    return Ok(DeskOutcome::Saved(ticket));
                }
                Err(err) if err.is_validation() => {
                    warn!(?mode, error = %err, "Form input rejected");
                    request = FormRequest::retry(mode, input, err);
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
