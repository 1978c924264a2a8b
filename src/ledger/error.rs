use crate::booking::BookingId;
use thiserror::Error;

/// Errors raised by the ledger's id counter and settlement record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Booking identifiers exhausted")]
    IdsExhausted,

    #[error("Booking #{id} is not open in this ledger")]
    NotOpen { id: BookingId },
}
