//! Domain events emitted after successful mutations.
//!
//! The server implements the sink to push events to connected clients.

mod domain_event;
mod sink;

pub use domain_event::*;
pub use sink::*;
