//! Typed requests carrying event payloads.

use super::room::Room;
use super::state::BookingEvent;
use crate::engine::TransitionError;

/// An event together with the payload it needs.
#[derive(Clone, Debug, PartialEq)]
pub enum BookingCommand {
    SelectRoom(Room),
    ChangeRoom(Room),
    ConfirmBooking,
    /// Pay, optionally redeeming a promo code. Unknown codes are ignored.
    Pay { promo_code: Option<String> },
    Cancel,
}

impl BookingCommand {
    /// Pay without a promo code.
    pub fn pay() -> Self {
        Self::Pay { promo_code: None }
    }

    /// Pay redeeming `code`.
    pub fn pay_with(code: impl Into<String>) -> Self {
        Self::Pay {
            promo_code: Some(code.into()),
        }
    }

    pub fn event(&self) -> BookingEvent {
        match self {
            Self::SelectRoom(_) => BookingEvent::SelectRoom,
            Self::ChangeRoom(_) => BookingEvent::ChangeRoom,
            Self::ConfirmBooking => BookingEvent::ConfirmBooking,
            Self::Pay { .. } => BookingEvent::Pay,
            Self::Cancel => BookingEvent::Cancel,
        }
    }

    /// Assemble a command from a bare event and optional payload.
    ///
    /// Payload that the event does not use is dropped. Room events without a
    /// target room fail with [`TransitionError::MissingRoom`].
    pub fn from_parts(
        event: BookingEvent,
        target_room: Option<Room>,
        promo_code: Option<&str>,
    ) -> Result<Self, TransitionError> {
        let command = match event {
            BookingEvent::SelectRoom | BookingEvent::ChangeRoom => {
                let room = target_room.ok_or(TransitionError::MissingRoom { event })?;
                if event == BookingEvent::SelectRoom {
                    Self::SelectRoom(room)
                } else {
                    Self::ChangeRoom(room)
                }
            }
            BookingEvent::ConfirmBooking => Self::ConfirmBooking,
            BookingEvent::Pay => Self::Pay {
                promo_code: promo_code.map(str::to_string),
            },
            BookingEvent::Cancel => Self::Cancel,
        };
        Ok(command)
    }

    pub(crate) fn target_room(&self) -> Option<&Room> {
        match self {
            Self::SelectRoom(room) | Self::ChangeRoom(room) => Some(room),
            _ => None,
        }
    }

    pub(crate) fn promo_code(&self) -> Option<&str> {
        match self {
            Self::Pay { promo_code } => promo_code.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deluxe() -> Room {
        Room::new(201, "deluxe", 10_000.0)
    }

    #[test]
    fn command_reports_its_event() {
        assert_eq!(
            BookingCommand::SelectRoom(deluxe()).event(),
            BookingEvent::SelectRoom
        );
        assert_eq!(BookingCommand::pay().event(), BookingEvent::Pay);
        assert_eq!(BookingCommand::Cancel.event(), BookingEvent::Cancel);
    }

    #[test]
    fn from_parts_requires_room_for_room_events() {
        let err = BookingCommand::from_parts(BookingEvent::ChangeRoom, None, None).unwrap_err();
        assert!(matches!(
            err,
            TransitionError::MissingRoom {
                event: BookingEvent::ChangeRoom
            }
        ));
    }

    #[test]
    fn from_parts_drops_unused_payload() {
        let command =
            BookingCommand::from_parts(BookingEvent::ConfirmBooking, Some(deluxe()), Some("X"))
                .unwrap();
        assert_eq!(command, BookingCommand::ConfirmBooking);
    }

    #[test]
    fn from_parts_keeps_promo_code_for_pay() {
        let command =
            BookingCommand::from_parts(BookingEvent::Pay, None, Some("HOLIDAY15")).unwrap();
        assert_eq!(command.promo_code(), Some("HOLIDAY15"));
        assert!(command.target_room().is_none());
    }
}
