//! Receipts and serializable ledger reports.
//!
//! A report is an in-memory export of the ledger: a format version, the time
//! it was generated and one receipt per settled booking.

use crate::booking::{Booking, BookingId, BookingState, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Version identifier for the report format
pub const REPORT_VERSION: u32 = 1;

/// How a booking left the lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SettlementStatus {
    Paid,
    Cancelled,
}

impl fmt::Display for SettlementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paid => f.write_str("PAID"),
            Self::Cancelled => f.write_str("CANCELLED"),
        }
    }
}

/// Summary of one ledger entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingReceipt {
    pub booking_id: BookingId,
    pub user_id: UserId,
    pub room_id: Option<u32>,
    pub total: f64,
    pub status: SettlementStatus,
    pub paid_at: Option<DateTime<Utc>>,
}

impl BookingReceipt {
    /// Receipt for a booking in a terminal state; `None` otherwise.
    pub fn for_booking(booking: &Booking) -> Option<Self> {
        let status = match booking.state() {
            BookingState::Paid => SettlementStatus::Paid,
            BookingState::BookingCancelled => SettlementStatus::Cancelled,
            _ => return None,
        };

        Some(Self {
            booking_id: booking.id(),
            user_id: booking.user_id(),
            room_id: booking.room().map(|r| r.id()),
            total: booking.total(),
            status,
            paid_at: booking.paid_at(),
        })
    }
}

impl fmt::Display for BookingReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {} | Room: ", self.booking_id)?;
        match self.room_id {
            Some(room) => write!(f, "{room}")?,
            None => f.write_str("-")?,
        }
        write!(f, " | Total: {:.0} | Status: {}", self.total, self.status)
    }
}

/// Errors that can occur when exporting or importing a report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    #[error("Unsupported report version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}

/// Serializable snapshot of the ledger.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LedgerReport {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub receipts: Vec<BookingReceipt>,
}

impl LedgerReport {
    pub fn new(generated_at: DateTime<Utc>, receipts: Vec<BookingReceipt>) -> Self {
        Self {
            version: REPORT_VERSION,
            generated_at,
            receipts,
        }
    }

    /// Sum of all paid totals.
    pub fn revenue(&self) -> f64 {
        self.receipts
            .iter()
            .filter(|r| r.status == SettlementStatus::Paid)
            .map(|r| r.total)
            .sum()
    }

    pub fn count(&self, status: SettlementStatus) -> usize {
        self.receipts.iter().filter(|r| r.status == status).count()
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ReportError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(input: &str) -> Result<Self, ReportError> {
        let report: Self = serde_json::from_str(input)
            .map_err(|e| ReportError::DeserializationFailed(e.to_string()))?;
        if report.version != REPORT_VERSION {
            return Err(ReportError::UnsupportedVersion {
                found: report.version,
                supported: REPORT_VERSION,
            });
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn receipt(id: u64, room: Option<u32>, total: f64, status: SettlementStatus) -> BookingReceipt {
        BookingReceipt {
            booking_id: BookingId(id),
            user_id: 1000 + id,
            room_id: room,
            total,
            status,
            paid_at: None,
        }
    }

    fn generated_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 18, 0, 0).unwrap()
    }

    #[test]
    fn receipt_display_matches_history_line() {
        let line = receipt(1, Some(101), 4_500.0, SettlementStatus::Paid).to_string();
        assert_eq!(line, "ID: 1 | Room: 101 | Total: 4500 | Status: PAID");

        let line = receipt(2, None, 0.0, SettlementStatus::Cancelled).to_string();
        assert_eq!(line, "ID: 2 | Room: - | Total: 0 | Status: CANCELLED");
    }

    #[test]
    fn status_serializes_upper_case() {
        assert_eq!(
            serde_json::to_string(&SettlementStatus::Cancelled).unwrap(),
            "\"CANCELLED\""
        );
    }

    #[test]
    fn revenue_counts_only_paid() {
        let report = LedgerReport::new(
            generated_at(),
            vec![
                receipt(1, Some(101), 4_500.0, SettlementStatus::Paid),
                receipt(2, Some(201), 0.0, SettlementStatus::Cancelled),
                receipt(3, Some(201), 10_000.0, SettlementStatus::Paid),
            ],
        );

        assert_eq!(report.revenue(), 14_500.0);
        assert_eq!(report.count(SettlementStatus::Paid), 2);
        assert_eq!(report.count(SettlementStatus::Cancelled), 1);
    }

    #[test]
    fn report_survives_json_export() {
        let report = LedgerReport::new(
            generated_at(),
            vec![receipt(1, Some(101), 4_500.0, SettlementStatus::Paid)],
        );

        let json = report.to_json().unwrap();
        assert_eq!(LedgerReport::from_json(&json).unwrap(), report);
    }

    #[test]
    fn unknown_version_is_rejected() {
        let mut report = LedgerReport::new(generated_at(), Vec::new());
        report.version = REPORT_VERSION + 1;
        let json = report.to_json().unwrap();

        assert!(matches!(
            LedgerReport::from_json(&json),
            Err(ReportError::UnsupportedVersion { found, supported })
                if found == REPORT_VERSION + 1 && supported == REPORT_VERSION
        ));
    }

    #[test]
    fn garbage_is_a_deserialization_error() {
        assert!(matches!(
            LedgerReport::from_json("not json"),
            Err(ReportError::DeserializationFailed(_))
        ));
    }
}
