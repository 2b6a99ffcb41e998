//! Domain event sink trait and implementations.

use std::sync::{Arc, Mutex, PoisonError};

use super::DomainEvent;

/// Trait for receiving domain events.
///
/// Core services emit through this trait after a mutation has been committed.
/// `emit()` must not block, and a failed delivery must not surface to the caller.
pub trait DomainEventSink: Send + Sync {
    /// Emit a single domain event.
    fn emit(&self, event: DomainEvent);

    /// Emit multiple domain events, in order.
    fn emit_batch(&self, events: Vec<DomainEvent>) {
        for event in events {
            self.emit(event);
        }
    }
}

/// Discards every event.
#[derive(Clone, Default)]
pub struct NoOpDomainEventSink;

impl DomainEventSink for NoOpDomainEventSink {
    fn emit(&self, _event: DomainEvent) {}
}

/// Collects emitted events in memory.
#[derive(Clone, Default)]
pub struct MockDomainEventSink {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MockDomainEventSink {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Clears collected events.
    pub fn clear(&self) {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }

    /// Returns the number of collected events.
    pub fn len(&self) -> usize {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns true if no events have been collected.
    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).is_empty()
    }
}

impl DomainEventSink for MockDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transactions::{Transaction, TransactionKind};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn recorded(owner_id: i64, id: i64) -> DomainEvent {
        DomainEvent::transaction_recorded(
            owner_id,
            Transaction {
                id,
                user_id: owner_id,
                kind: TransactionKind::Expense,
                amount: dec!(12.50),
                category_id: 1,
                subcategory_id: None,
                description: String::new(),
                tags: Vec::new(),
                date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
                note: String::new(),
            },
        )
    }

    #[test]
    fn test_noop_sink_does_not_panic() {
        let sink = NoOpDomainEventSink;
        sink.emit(recorded(1, 1));
        sink.emit_batch(vec![recorded(1, 2), recorded(2, 3)]);
    }

    #[test]
    fn test_mock_sink_collects_events() {
        let sink = MockDomainEventSink::new();
        assert!(sink.is_empty());

        sink.emit(recorded(1, 1));
        assert_eq!(sink.len(), 1);

        sink.emit_batch(vec![recorded(1, 2), recorded(2, 3)]);
        assert_eq!(sink.len(), 3);

        let events = sink.events();
        assert_eq!(events[2].owner_id(), 2);

        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_event_serializes_with_type_tag() {
        let json = serde_json::to_value(recorded(7, 3)).unwrap();
        assert_eq!(json["type"], "transaction_recorded");
        assert_eq!(json["owner_id"], 7);
        assert_eq!(json["transaction"]["id"], 3);
    }
}
