//! Validation rules for booking configuration.
//!
//! Every rule runs; violations are accumulated with Stillwater's
//! `Validation` so a bad config file reports all of its problems at once.

use crate::config::violations::ConfigViolation;
use crate::config::BookingConfig;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

fn check_first_id(first_booking_id: u64) -> Check {
    if first_booking_id == 0 {
        Validation::fail(ConfigViolation::ZeroFirstBookingId)
    } else {
        Validation::success(())
    }
}

fn check_code(code: &str) -> Check {
    if code.trim().is_empty() {
        Validation::fail(ConfigViolation::EmptyPromoCode)
    } else {
        Validation::success(())
    }
}

fn check_percentage(code: &str, percentage: f64) -> Check {
    if percentage.is_finite() && (0.0..=100.0).contains(&percentage) {
        Validation::success(())
    } else {
        Validation::fail(ConfigViolation::PercentageOutOfRange {
            code: code.to_string(),
            percentage,
        })
    }
}

/// Run every rule against `config`, accumulating ALL violations.
pub fn validate(config: &BookingConfig) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    let mut checks = vec![check_first_id(config.first_booking_id)];

    for (code, percentage) in &config.discounts {
        checks.push(check_code(code));
        checks.push(check_percentage(code, *percentage));
    }

    Validation::all_vec(checks).map(|_| ())
}
