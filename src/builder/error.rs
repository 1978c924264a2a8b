//! Build errors for transition tables and engines.

use crate::booking::{BookingEvent, BookingState};
use thiserror::Error;

/// Errors that can occur when building transition tables and engines.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition event not specified. Call .on(event)")]
    MissingEvent,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error("Duplicate transition from '{from}' on '{event}'")]
    DuplicateTransition {
        from: BookingState,
        event: BookingEvent,
    },

    #[error("Transition from final state '{from}' on '{event}' is not allowed")]
    LeavesFinalState {
        from: BookingState,
        event: BookingEvent,
    },

    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),
}
