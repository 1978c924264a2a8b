//! Builder API for assembling transition tables and engines.
//!
//! This module provides fluent builders and the `state_enum!` macro for
//! defining lifecycles with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;
pub mod table;
pub mod transition;

pub use error::BuildError;
pub use machine::BookingEngineBuilder;
pub use table::TransitionTableBuilder;
pub use transition::TransitionBuilder;

use crate::booking::{BookingEvent, BookingState};
use crate::engine::{Transition, TransitionEffect};

/// Row that changes state without any other effect.
///
/// # Example
///
/// ```
/// use innkeeper::builder::simple_transition;
/// use innkeeper::{BookingEvent, BookingState};
///
/// let row = simple_transition(
///     BookingState::RoomSelected,
///     BookingEvent::ConfirmBooking,
///     BookingState::BookingConfirmed,
/// );
/// assert_eq!(row.to, BookingState::BookingConfirmed);
/// ```
pub fn simple_transition(from: BookingState, event: BookingEvent, to: BookingState) -> Transition {
    Transition {
        from,
        event,
        to,
        effect: TransitionEffect::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_transition_has_no_effect() {
        let row = simple_transition(
            BookingState::BookingConfirmed,
            BookingEvent::Cancel,
            BookingState::BookingCancelled,
        );

        assert_eq!(row.from, BookingState::BookingConfirmed);
        assert_eq!(row.event, BookingEvent::Cancel);
        assert_eq!(row.effect, TransitionEffect::None);
    }
}
