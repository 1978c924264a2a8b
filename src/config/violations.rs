//! Configuration violations and errors.

use thiserror::Error;

/// A single problem found while validating a [`BookingConfig`](super::BookingConfig).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("First booking id must be at least 1")]
    ZeroFirstBookingId,

    #[error("Promo code must not be empty or blank")]
    EmptyPromoCode,

    #[error("Discount for '{code}' must be within 0..=100 (got {percentage})")]
    PercentageOutOfRange { code: String, percentage: f64 },
}

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {}", render(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn render(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
