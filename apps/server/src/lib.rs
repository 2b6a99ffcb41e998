pub mod api;
pub mod auth;
pub mod config;
pub mod domain_events;
pub mod error;
pub mod events;
mod main_lib;

pub use main_lib::{build_state, init_tracing, AppState};
