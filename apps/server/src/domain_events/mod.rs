//! Bridges core domain events to the live-update bus.

mod sink;

pub use sink::WebDomainEventSink;
