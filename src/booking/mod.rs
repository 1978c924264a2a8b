//! Booking domain model: rooms, bookings, states, events and commands.

#[allow(clippy::module_inception)]
mod booking;
mod command;
mod room;
mod state;

pub use booking::{Booking, BookingId, UserId};
pub use command::BookingCommand;
pub use room::Room;
pub use state::{BookingEvent, BookingState};
