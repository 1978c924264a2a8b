//! Lifecycle states and events of a booking.

use crate::engine::TransitionError;
use crate::state_enum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

state_enum! {
    /// Stage of a booking's lifecycle.
    ///
    /// `Paid` and `BookingCancelled` are terminal.
    #[derive(Copy, Eq, Hash)]
    pub enum BookingState {
        Idle,
        RoomSelected,
        BookingConfirmed,
        Paid,
        BookingCancelled,
    }
    final: [Paid, BookingCancelled]
}

impl fmt::Display for BookingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(crate::core::State::name(self))
    }
}

/// Caller-initiated request to advance a booking.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BookingEvent {
    SelectRoom,
    ChangeRoom,
    ConfirmBooking,
    Pay,
    Cancel,
}

impl BookingEvent {
    pub const ALL: [BookingEvent; 5] = [
        BookingEvent::SelectRoom,
        BookingEvent::ChangeRoom,
        BookingEvent::ConfirmBooking,
        BookingEvent::Pay,
        BookingEvent::Cancel,
    ];

    /// Wire name of the event, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectRoom => "selectRoom",
            Self::ChangeRoom => "changeRoom",
            Self::ConfirmBooking => "confirmBooking",
            Self::Pay => "pay",
            Self::Cancel => "cancel",
        }
    }

    /// Whether the event carries a target room.
    pub fn needs_room(&self) -> bool {
        matches!(self, Self::SelectRoom | Self::ChangeRoom)
    }
}

impl fmt::Display for BookingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BookingEvent {
    type Err = TransitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "selectRoom" | "SelectRoom" => Ok(Self::SelectRoom),
            "changeRoom" | "ChangeRoom" => Ok(Self::ChangeRoom),
            "confirmBooking" | "ConfirmBooking" => Ok(Self::ConfirmBooking),
            "pay" | "Pay" => Ok(Self::Pay),
            "cancel" | "Cancel" => Ok(Self::Cancel),
            other => Err(TransitionError::UnknownEvent {
                event: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;

    #[test]
    fn terminal_states_are_final() {
        assert!(BookingState::Paid.is_final());
        assert!(BookingState::BookingCancelled.is_final());
        assert!(!BookingState::Idle.is_final());
        assert!(!BookingState::RoomSelected.is_final());
        assert!(!BookingState::BookingConfirmed.is_final());
    }

    #[test]
    fn display_uses_state_name() {
        assert_eq!(BookingState::BookingConfirmed.to_string(), "BookingConfirmed");
    }

    #[test]
    fn event_names_round_trip_through_from_str() {
        for event in BookingEvent::ALL {
            assert_eq!(event.name().parse::<BookingEvent>().unwrap(), event);
        }
        assert_eq!(
            "ConfirmBooking".parse::<BookingEvent>().unwrap(),
            BookingEvent::ConfirmBooking
        );
    }

    #[test]
    fn unknown_event_name_is_rejected() {
        let err = "refund".parse::<BookingEvent>().unwrap_err();
        assert!(matches!(err, TransitionError::UnknownEvent { ref event } if event == "refund"));
        assert!("PAY".parse::<BookingEvent>().is_err());
    }

    #[test]
    fn event_serializes_with_wire_name() {
        let json = serde_json::to_string(&BookingEvent::ConfirmBooking).unwrap();
        assert_eq!(json, "\"confirmBooking\"");
    }
}
