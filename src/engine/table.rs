//! Declarative transition table.
//!
//! Each row maps `(state, event)` to the destination state and the effect
//! that runs with it. Per-event guards sit alongside the rows: a guard
//! failure is a precondition error, a missing row is a transition error.

use crate::booking::{BookingEvent, BookingState};
use crate::builder::TransitionTableBuilder;
use crate::core::Guard;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Side effect staged together with a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionEffect {
    /// State change only.
    None,
    /// Replace the booking's room with the command's target room.
    AssignRoom,
    /// Compute the total (after any promo code) and stamp the payment time.
    SettlePayment,
}

/// One legal `(state, event) -> state` move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub from: BookingState,
    pub event: BookingEvent,
    pub to: BookingState,
    pub effect: TransitionEffect,
}

/// Legal transitions plus the guard attached to each event.
#[derive(Debug)]
pub struct TransitionTable {
    rows: HashMap<(BookingState, BookingEvent), Transition>,
    guards: HashMap<BookingEvent, Guard<BookingState>>,
}

impl TransitionTable {
    pub(crate) fn from_parts(
        rows: HashMap<(BookingState, BookingEvent), Transition>,
        guards: HashMap<BookingEvent, Guard<BookingState>>,
    ) -> Self {
        Self { rows, guards }
    }

    /// Start an empty table.
    pub fn builder() -> TransitionTableBuilder {
        TransitionTableBuilder::new()
    }

    /// The hotel booking lifecycle.
    ///
    /// Only `Idle`, `RoomSelected` and `BookingConfirmed` have outgoing rows.
    /// `Cancel` is guarded by "not `Paid`", so cancelling from `Idle` passes
    /// the guard but has no row.
    pub fn standard() -> Self {
        use BookingEvent::*;
        use BookingState::*;

        let rows = [
            (Idle, SelectRoom, RoomSelected, TransitionEffect::AssignRoom),
            (RoomSelected, ChangeRoom, RoomSelected, TransitionEffect::AssignRoom),
            (RoomSelected, ConfirmBooking, BookingConfirmed, TransitionEffect::None),
            (RoomSelected, Cancel, BookingCancelled, TransitionEffect::None),
            (BookingConfirmed, Pay, Paid, TransitionEffect::SettlePayment),
            (BookingConfirmed, Cancel, BookingCancelled, TransitionEffect::None),
        ]
        .into_iter()
        .map(|(from, event, to, effect)| {
            (
                (from, event),
                Transition {
                    from,
                    event,
                    to,
                    effect,
                },
            )
        })
        .collect();

        let guards = [
            (SelectRoom, Guard::only(Idle)),
            (ChangeRoom, Guard::only(RoomSelected)),
            (ConfirmBooking, Guard::only(RoomSelected)),
            (Pay, Guard::only(BookingConfirmed)),
            (Cancel, Guard::new(|s: &BookingState| *s != Paid)),
        ]
        .into_iter()
        .collect();

        Self { rows, guards }
    }

    /// Whether `event` may be requested in `state`.
    ///
    /// Events without a registered guard have no precondition.
    pub fn precondition_holds(&self, event: BookingEvent, state: &BookingState) -> bool {
        self.guards.get(&event).is_none_or(|g| g.check(state))
    }

    /// Row for `(from, event)`, if the move is legal.
    pub fn lookup(&self, from: BookingState, event: BookingEvent) -> Option<&Transition> {
        self.rows.get(&(from, event))
    }

    pub fn transitions(&self) -> impl Iterator<Item = &Transition> {
        self.rows.values()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;

    #[test]
    fn standard_table_has_six_rows() {
        let table = TransitionTable::standard();
        assert_eq!(table.len(), 6);
        assert!(table.transitions().all(|t| !t.from.is_final()));
    }

    #[test]
    fn only_three_states_have_rows() {
        let table = TransitionTable::standard();
        for event in BookingEvent::ALL {
            assert!(table.lookup(BookingState::Paid, event).is_none());
            assert!(table.lookup(BookingState::BookingCancelled, event).is_none());
        }
        assert!(table
            .lookup(BookingState::Idle, BookingEvent::Cancel)
            .is_none());
    }

    #[test]
    fn rows_carry_effects() {
        let table = TransitionTable::standard();
        let pay = table
            .lookup(BookingState::BookingConfirmed, BookingEvent::Pay)
            .unwrap();
        assert_eq!(pay.to, BookingState::Paid);
        assert_eq!(pay.effect, TransitionEffect::SettlePayment);

        let change = table
            .lookup(BookingState::RoomSelected, BookingEvent::ChangeRoom)
            .unwrap();
        assert_eq!(change.to, BookingState::RoomSelected);
        assert_eq!(change.effect, TransitionEffect::AssignRoom);
    }

    #[test]
    fn cancel_guard_rejects_only_paid() {
        let table = TransitionTable::standard();
        assert!(table.precondition_holds(BookingEvent::Cancel, &BookingState::Idle));
        assert!(table.precondition_holds(BookingEvent::Cancel, &BookingState::BookingCancelled));
        assert!(!table.precondition_holds(BookingEvent::Cancel, &BookingState::Paid));
    }

    #[test]
    fn single_state_guards() {
        let table = TransitionTable::standard();
        assert!(table.precondition_holds(BookingEvent::SelectRoom, &BookingState::Idle));
        assert!(!table.precondition_holds(BookingEvent::SelectRoom, &BookingState::RoomSelected));
        assert!(!table.precondition_holds(BookingEvent::Pay, &BookingState::RoomSelected));
        assert!(table.precondition_holds(BookingEvent::Pay, &BookingState::BookingConfirmed));
    }
}
