//! Ticket lifecycle integration tests.
//!
//! These tests walk tickets through the full lifecycle the desk exposes:
//! created -> edited -> completed -> rated -> deleted

use std::sync::Arc;

use eyang_core::{
    testing::{fixtures, ScriptedForm, ScriptedGate, ScriptedRatingPicker},
    DeskError, DeskOutcome, IdStrategy, InMemoryTicketStore, StateViolation, Ticket, TicketDesk,
    TicketError, TicketFilter, TicketInput, TicketStatus, TicketStore, ValidationError, UNRATED,
};

/// Test helper bundling a desk with direct access to its store.
struct TestHarness {
    store: Arc<InMemoryTicketStore>,
    desk: TicketDesk,
}

impl TestHarness {
    fn new() -> Self {
        let store = fixtures::sequential_store();
        let desk = TicketDesk::new(store.clone());
        Self { store, desk }
    }

    fn list(&self) -> Vec<Ticket> {
        self.store.list(&TicketFilter::new()).unwrap()
    }

    fn saved(outcome: DeskOutcome) -> Ticket {
        match outcome {
            DeskOutcome::Saved(ticket) => ticket,
            other => panic!("expected saved ticket, got {:?}", other),
        }
    }
}

#[test]
fn test_printer_jam_scenario() {
    let harness = TestHarness::new();

    // Create
    let ticket = harness
        .store
        .create(TicketInput::new("Printer jam", "").with_status(TicketStatus::Created))
        .unwrap();
    let list = harness.list();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].rating, UNRATED);

    // Complete
    harness
        .store
        .update(
            &ticket.id,
            TicketInput::new("Printer jam", "").with_status(TicketStatus::Completed),
        )
        .unwrap();
    let list = harness.list();
    assert_eq!(list[0].status, TicketStatus::Completed);
    assert_eq!(list[0].rating, UNRATED);

    // Rate
    harness.store.rate(&ticket.id, 5).unwrap();
    assert_eq!(harness.list()[0].rating, 5);

    // Delete after confirmation
    let mut gate = ScriptedGate::new().answer(true);
    let outcome = harness.desk.delete(&ticket.id, &mut gate).unwrap();
    assert!(matches!(outcome, DeskOutcome::Deleted(_)));
    assert!(harness.list().is_empty());
}

#[test]
fn test_deleting_first_of_two_keeps_second() {
    let harness = TestHarness::new();
    let a = harness.store.create(fixtures::input("A")).unwrap();
    let b = harness.store.create(fixtures::input("B")).unwrap();

    harness.store.delete(&a.id).unwrap();

    assert_eq!(harness.list(), vec![b]);
}

#[test]
fn test_full_desk_lifecycle() {
    let harness = TestHarness::new();

    // Create through the form, with one rejected submission first
    let mut form = ScriptedForm::new()
        .submit(TicketInput::new("", "Screen flickers"))
        .submit(TicketInput::new("Monitor", "Screen flickers"));
    let ticket = TestHarness::saved(harness.desk.create(&mut form).unwrap());
    assert_eq!(ticket.description, "Screen flickers");
    assert_eq!(form.requests().len(), 2);

    // Rating is refused while the ticket is open
    let mut picker = ScriptedRatingPicker::new();
    let err = harness.desk.rate(&ticket.id, &mut picker).unwrap_err();
    assert!(matches!(
        err,
        DeskError::Ticket(TicketError::InvalidState {
            violation: StateViolation::NotCompleted,
            ..
        })
    ));

    // Move through assistance to completion
    for status in [TicketStatus::UnderAssistance, TicketStatus::Completed] {
        let mut form =
            ScriptedForm::new().submit(TicketInput::new("Monitor", "Screen flickers").with_status(status));
        let updated = TestHarness::saved(harness.desk.edit(&ticket.id, &mut form).unwrap());
        assert_eq!(updated.status, status);
        assert_eq!(updated.id, ticket.id);
    }

    // Completed tickets are no longer editable
    let mut form = ScriptedForm::new();
    assert!(harness.desk.edit(&ticket.id, &mut form).is_err());

    // Rate, then re-rate
    let mut picker = ScriptedRatingPicker::new().choose(4).choose(2);
    let rated = TestHarness::saved(harness.desk.rate(&ticket.id, &mut picker).unwrap());
    assert_eq!(rated.rating, 4);
    let rerated = TestHarness::saved(harness.desk.rate(&ticket.id, &mut picker).unwrap());
    assert_eq!(rerated.rating, 2);

    // Declined delete keeps it, confirmed delete removes it
    let mut gate = ScriptedGate::new().answer(false).answer(true);
    assert_eq!(
        harness.desk.delete(&ticket.id, &mut gate).unwrap(),
        DeskOutcome::Cancelled
    );
    assert_eq!(harness.list().len(), 1);
    assert!(matches!(
        harness.desk.delete(&ticket.id, &mut gate).unwrap(),
        DeskOutcome::Deleted(_)
    ));
    assert!(harness.list().is_empty());

    // A repeated delete reports the missing ticket
    assert_eq!(
        harness.store.delete(&ticket.id),
        Err(TicketError::NotFound(ticket.id))
    );
}

#[test]
fn test_reopening_keeps_rating() {
    let harness = TestHarness::new();
    let ticket = harness
        .store
        .create(fixtures::completed_input("Password reset"))
        .unwrap();
    harness.store.rate(&ticket.id, 3).unwrap();

    let reopened = harness
        .store
        .update(
            &ticket.id,
            TicketInput::new("Password reset", "happened again")
                .with_status(TicketStatus::UnderAssistance),
        )
        .unwrap();

    assert_eq!(reopened.rating, 3);
    assert_eq!(reopened.status, TicketStatus::UnderAssistance);
}

#[test]
fn test_free_form_status_transitions() {
    let harness = TestHarness::new();
    let ticket = harness.store.create(fixtures::input("Laptop")).unwrap();

    let path = [
        TicketStatus::Completed,
        TicketStatus::Created,
        TicketStatus::UnderAssistance,
        TicketStatus::Created,
        TicketStatus::Completed,
    ];
    for status in path {
        let updated = harness
            .store
            .update(&ticket.id, fixtures::input("Laptop").with_status(status))
            .unwrap();
        assert_eq!(updated.status, status);
    }
}

#[test]
fn test_failed_operations_leave_store_untouched() {
    let harness = TestHarness::new();
    let open = harness.store.create(fixtures::input("Open")).unwrap();
    let done = harness.store.create(fixtures::completed_input("Done")).unwrap();
    let before = harness.list();

    let missing = "does-not-exist".into();
    let failures = [
        harness.store.create(fixtures::input(" ")).err(),
        harness.store.update(&open.id, fixtures::input("")).err(),
        harness.store.update(&missing, fixtures::input("x")).err(),
        harness.store.rate(&open.id, 3).err(),
        harness.store.rate(&done.id, 0).err(),
        harness.store.rate(&done.id, 6).err(),
        harness.store.delete(&missing).err(),
    ];

    assert!(failures.iter().all(Option::is_some));
    assert_eq!(
        failures[4],
        Some(TicketError::Validation(ValidationError::OutOfRange(0)))
    );
    assert_eq!(harness.list(), before);
}

#[test]
fn test_timestamp_ids_are_distinct_under_burst() {
    let store = InMemoryTicketStore::with_id_strategy(IdStrategy::Timestamp);
    let ids: Vec<_> = (0..200)
        .map(|i| store.create(fixtures::input(&format!("T{}", i))).unwrap().id)
        .collect();

    let mut deduped = ids.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), ids.len());
}

#[test]
fn test_store_shared_across_threads_serializes_mutations() {
    let store = fixtures::sequential_store();
    let handles: Vec<_> = (0..8)
        .map(|t| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                for i in 0..25 {
                    store
                        .create(fixtures::input(&format!("thread {} #{}", t, i)))
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let tickets = store.list(&TicketFilter::new()).unwrap();
    assert_eq!(tickets.len(), 200);
    let ids: Vec<u64> = tickets
        .iter()
        .map(|t| t.id.as_str().parse().unwrap())
        .collect();
    assert_eq!(ids, (1..=200).collect::<Vec<_>>());
}
