//! Transition engine: validates a request, stages its effects and commits
//! them atomically.

use crate::booking::{Booking, BookingCommand, BookingEvent, BookingState, Room, UserId};
use crate::builder::BookingEngineBuilder;
use crate::core::{State, StateTransition};
use crate::engine::error::TransitionError;
use crate::engine::table::{Transition, TransitionEffect, TransitionTable};
use crate::env::{
    discounted, BookingObserver, Clock, DiscountApplied, DiscountLookup, TransitionRecorded,
};
use crate::ledger::{Ledger, LedgerError};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Payment computed while staging a `Pay` transition.
#[derive(Clone, Debug, PartialEq)]
struct Settlement {
    total: f64,
    paid_at: DateTime<Utc>,
    discount: Option<(String, f64)>,
}

/// Everything a transition will change, computed before anything changes.
#[derive(Clone, Debug, PartialEq)]
struct Staged {
    from: BookingState,
    to: BookingState,
    event: BookingEvent,
    room: Option<Room>,
    settlement: Option<Settlement>,
}

/// Drives bookings through their lifecycle.
///
/// The engine is the only writer of a booking's state, room, total and
/// payment time. Requests either commit fully or leave the booking untouched.
pub struct BookingEngine {
    table: TransitionTable,
    ledger: Ledger,
    discounts: Box<dyn DiscountLookup>,
    clock: Arc<dyn Clock>,
    observer: Box<dyn BookingObserver>,
}

impl BookingEngine {
    pub(crate) fn from_parts(
        table: TransitionTable,
        ledger: Ledger,
        discounts: Box<dyn DiscountLookup>,
        clock: Arc<dyn Clock>,
        observer: Box<dyn BookingObserver>,
    ) -> Self {
        Self {
            table,
            ledger,
            discounts,
            clock,
            observer,
        }
    }

    pub fn builder() -> BookingEngineBuilder {
        BookingEngineBuilder::new()
    }

    /// Open a new booking for `user_id` in `Idle`.
    pub fn open_booking(&mut self, user_id: UserId) -> Result<Booking, LedgerError> {
        self.ledger.allocate(user_id)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// Apply a typed command to `booking`.
    ///
    /// The per-event guard is checked first, then the table row for
    /// `(state, event)`. The row supplies both the destination and the effect.
    /// A booking this engine did not open, or one it already settled, fails
    /// with [`LedgerError::NotOpen`]. On success the transition is committed,
    /// observers are notified and a booking entering a final state is
    /// recorded in the ledger.
    pub fn apply(
        &mut self,
        booking: &mut Booking,
        command: BookingCommand,
    ) -> Result<(), TransitionError> {
        let staged = self.stage(booking, &command).inspect_err(|err| {
            tracing::debug!(booking_id = booking.id().0, error = %err, "request rejected");
        })?;
        self.commit(booking, staged)
    }

    /// Apply an event given by wire name with loose payload.
    ///
    /// Unknown names fail with [`TransitionError::UnknownEvent`]; room events
    /// without a room fail with [`TransitionError::MissingRoom`].
    pub fn apply_event(
        &mut self,
        booking: &mut Booking,
        event: &str,
        target_room: Option<Room>,
        promo_code: Option<&str>,
    ) -> Result<(), TransitionError> {
        let event: BookingEvent = event.parse()?;
        let command = BookingCommand::from_parts(event, target_room, promo_code)?;
        self.apply(booking, command)
    }

    fn stage(&self, booking: &Booking, command: &BookingCommand) -> Result<Staged, TransitionError> {
        let event = command.event();
        let from = booking.state();

        if !self.table.precondition_holds(event, &from) {
            return Err(TransitionError::InvalidPrecondition { event, state: from });
        }

        let Some(transition) = self.table.lookup(from, event) else {
            return Err(TransitionError::InvalidTransition { from, event });
        };

        self.ledger.ensure_open(booking)?;

        self.stage_effect(booking, command, transition)
    }

    fn stage_effect(
        &self,
        booking: &Booking,
        command: &BookingCommand,
        transition: &Transition,
    ) -> Result<Staged, TransitionError> {
        let mut staged = Staged {
            from: transition.from,
            to: transition.to,
            event: transition.event,
            room: None,
            settlement: None,
        };

        match transition.effect {
            TransitionEffect::None => {}
            TransitionEffect::AssignRoom => {
                let room = command.target_room().ok_or(TransitionError::MissingRoom {
                    event: transition.event,
                })?;
                staged.room = Some(room.clone());
            }
            TransitionEffect::SettlePayment => {
                let room = booking.room().ok_or(TransitionError::MissingRoom {
                    event: transition.event,
                })?;
                staged.settlement = Some(self.settle(room, command.promo_code()));
            }
        }

        Ok(staged)
    }

    fn settle(&self, room: &Room, promo_code: Option<&str>) -> Settlement {
        let discount = promo_code
            .and_then(|code| self.discounts.lookup(code).map(|pct| (code.to_string(), pct)));

        let total = match &discount {
            Some((_, percentage)) => discounted(room.price(), *percentage),
            None => room.price(),
        };

        Settlement {
            total,
            paid_at: self.clock.now(),
            discount,
        }
    }

    fn commit(&mut self, booking: &mut Booking, staged: Staged) -> Result<(), TransitionError> {
        let timestamp = staged
            .settlement
            .as_ref()
            .map_or_else(|| self.clock.now(), |s| s.paid_at);

        let mut next = booking.clone();
        if let Some(room) = staged.room {
            next.room = Some(room);
        }

        let mut discount_notice = None;
        if let Some(settlement) = staged.settlement {
            next.total = settlement.total;
            next.paid_at = Some(settlement.paid_at);
            discount_notice = settlement.discount.map(|(code, percentage)| DiscountApplied {
                booking_id: next.id,
                code,
                percentage,
                total: settlement.total,
            });
        }

        next.state = staged.to;
        next.history = next.history.record(StateTransition {
            from: staged.from,
            to: staged.to,
            event: staged.event.name().to_string(),
            timestamp,
        });

        if staged.to.is_final() {
            self.ledger.record(Arc::new(next.clone()))?;
        }
        *booking = next;

        if let Some(notice) = discount_notice {
            self.observer.discount_applied(&notice);
        }
        self.observer.transition_recorded(&TransitionRecorded {
            booking_id: booking.id,
            event: staged.event,
            from: staged.from,
            to: staged.to,
        });

        Ok(())
    }
}
