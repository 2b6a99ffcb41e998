//! Web domain event sink implementation.
//!
//! Translates committed domain events into socket pushes on the [`EventBus`].

use budgetbuddy_core::events::{DomainEvent, DomainEventSink};

use crate::events::{EventBus, ServerEvent, NEW_TRANSACTION};

pub struct WebDomainEventSink {
    event_bus: EventBus,
}

impl WebDomainEventSink {
    pub fn new(event_bus: EventBus) -> Self {
        Self { event_bus }
    }
}

impl DomainEventSink for WebDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        match event {
            DomainEvent::TransactionRecorded {
                owner_id,
                transaction,
            } => match serde_json::to_value(&transaction) {
                Ok(payload) => self
                    .event_bus
                    .publish(ServerEvent::new(NEW_TRANSACTION, owner_id, payload)),
                Err(err) => {
                    tracing::error!("Failed to serialize transaction {}: {}", transaction.id, err)
                }
            },
        }
    }
}
