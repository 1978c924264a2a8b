use crate::booking::{BookingEvent, BookingState};
use crate::ledger::LedgerError;

/// Errors that can occur when applying an event to a booking.
///
/// Every variant is returned before anything on the booking changes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransitionError {
    #[error("Event '{event}' is not allowed while the booking is '{state}'")]
    InvalidPrecondition {
        event: BookingEvent,
        state: BookingState,
    },

    #[error("No transition from '{from}' on event '{event}'")]
    InvalidTransition {
        from: BookingState,
        event: BookingEvent,
    },

    #[error("Unknown event '{event}'")]
    UnknownEvent { event: String },

    #[error("Event '{event}' requires a room")]
    MissingRoom { event: BookingEvent },

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
