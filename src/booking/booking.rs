//! The booking entity.
//!
//! A booking is created by the ledger and mutated only by the transition
//! engine. Outside the crate it is read-only and cannot be constructed or
//! deserialized.

use super::room::Room;
use super::state::BookingState;
use crate::core::{State, StateHistory};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique, monotonically assigned booking identifier.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(pub u64);

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the user owning a booking.
pub type UserId = u64;

/// A hotel room booking moving through its lifecycle.
#[derive(Clone, Debug, Serialize)]
pub struct Booking {
    pub(crate) id: BookingId,
    #[serde(skip)]
    pub(crate) issuer: u64,
    pub(crate) user_id: UserId,
    pub(crate) state: BookingState,
    pub(crate) room: Option<Room>,
    pub(crate) total: f64,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) paid_at: Option<DateTime<Utc>>,
    pub(crate) history: StateHistory<BookingState>,
}

impl Booking {
    /// Fresh booking in `Idle` with no room and a zero total.
    pub(crate) fn new(
        id: BookingId,
        user_id: UserId,
        issuer: u64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            issuer,
            user_id,
            state: BookingState::Idle,
            room: None,
            total: 0.0,
            created_at,
            paid_at: None,
            history: StateHistory::new(),
        }
    }

    pub fn id(&self) -> BookingId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn state(&self) -> BookingState {
        self.state
    }

    pub fn room(&self) -> Option<&Room> {
        self.room.as_ref()
    }

    /// Amount charged. Zero until the booking is paid.
    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn paid_at(&self) -> Option<DateTime<Utc>> {
        self.paid_at
    }

    /// Committed transitions, oldest first.
    pub fn history(&self) -> &StateHistory<BookingState> {
        &self.history
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_final()
    }
}
