//! Booking identity allocation and the append-only record of bookings that
//! reached a terminal state.

mod error;
pub mod report;

pub use error::LedgerError;
pub use report::{BookingReceipt, LedgerReport, ReportError, SettlementStatus, REPORT_VERSION};

use crate::booking::{Booking, BookingId, UserId};
use crate::env::Clock;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_STAMP: AtomicU64 = AtomicU64::new(1);

/// Owns the booking id counter and the history of settled bookings.
///
/// Every booking carries the stamp of the ledger that allocated it. A
/// booking is open from allocation until it is recorded, and only open
/// bookings of this ledger may be recorded.
pub struct Ledger {
    stamp: u64,
    next_id: Option<u64>,
    clock: Arc<dyn Clock>,
    open: HashSet<BookingId>,
    entries: Vec<Arc<Booking>>,
}

impl Ledger {
    /// Ledger whose first booking gets id 1.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::starting_at(clock, 1)
    }

    pub fn starting_at(clock: Arc<dyn Clock>, first_booking_id: u64) -> Self {
        Self {
            stamp: NEXT_STAMP.fetch_add(1, Ordering::Relaxed),
            next_id: Some(first_booking_id),
            clock,
            open: HashSet::new(),
            entries: Vec::new(),
        }
    }

    /// Create a fresh `Idle` booking with the next identifier.
    ///
    /// Fails once the identifier space is used up; ids are never reused.
    pub fn allocate(&mut self, user_id: UserId) -> Result<Booking, LedgerError> {
        let raw = self.next_id.ok_or(LedgerError::IdsExhausted)?;
        self.next_id = raw.checked_add(1);

        let id = BookingId(raw);
        let booking = Booking::new(id, user_id, self.stamp, self.clock.now());
        self.open.insert(id);
        tracing::debug!(booking_id = id.0, user_id, "booking allocated");
        Ok(booking)
    }

    /// Whether `booking` was allocated here and has not been recorded yet.
    pub fn is_open(&self, booking: &Booking) -> bool {
        booking.issuer == self.stamp && self.open.contains(&booking.id())
    }

    pub(crate) fn ensure_open(&self, booking: &Booking) -> Result<(), LedgerError> {
        if self.is_open(booking) {
            Ok(())
        } else {
            Err(LedgerError::NotOpen { id: booking.id() })
        }
    }

    /// Append a settled booking and close its id.
    ///
    /// Entries are snapshots taken when the booking reached a terminal
    /// state. A terminal booking never changes again, so the snapshot stays
    /// equal to the caller's booking. Recording a booking this ledger did not
    /// allocate, or one already recorded, fails with
    /// [`LedgerError::NotOpen`].
    pub fn record(&mut self, booking: Arc<Booking>) -> Result<(), LedgerError> {
        self.ensure_open(&booking)?;
        self.open.remove(&booking.id());
        tracing::debug!(
            booking_id = booking.id().0,
            state = %booking.state(),
            "booking recorded in ledger"
        );
        self.entries.push(booking);
        Ok(())
    }

    /// Recorded bookings, in recording order.
    pub fn all(&self) -> &[Arc<Booking>] {
        &self.entries
    }

    pub fn get(&self, id: BookingId) -> Option<&Arc<Booking>> {
        self.entries.iter().find(|b| b.id() == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Identifier the next allocation will receive, if any remain.
    pub fn next_id(&self) -> Option<BookingId> {
        self.next_id.map(BookingId)
    }

    pub fn receipts(&self) -> Vec<BookingReceipt> {
        self.entries
            .iter()
            .filter_map(|b| BookingReceipt::for_booking(b))
            .collect()
    }

    /// Snapshot of all receipts, stamped with the current time.
    pub fn report(&self) -> LedgerReport {
        LedgerReport::new(self.clock.now(), self.receipts())
    }
}
