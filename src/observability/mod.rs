//! Observability for the registry
//!
//! Structured one-line JSON logs with typed events.
//!
//! ```ignore
//! use airplane_registry::observability::{log_event, Event};
//!
//! log_event(Event::AirplaneCreated, &[("id", "42")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Logs an event at its own severity
pub fn log_event(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
