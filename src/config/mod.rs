//! Engine configuration.
//!
//! Configuration is plain data: the first booking identifier the ledger
//! hands out and the promo code table. It is usually read from JSON:
//!
//! ```rust
//! use innkeeper::config::BookingConfig;
//!
//! let config = BookingConfig::from_json(
//!     r#"{ "first_booking_id": 100, "discounts": { "SPRING20": 20.0 } }"#,
//! ).unwrap();
//!
//! assert_eq!(config.first_booking_id, 100);
//! assert_eq!(config.discounts["SPRING20"], 20.0);
//! ```

pub mod rules;
pub mod violations;

pub use violations::{ConfigError, ConfigViolation};

use crate::env::DiscountTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use stillwater::validation::Validation;

fn default_first_booking_id() -> u64 {
    1
}

fn default_discounts() -> BTreeMap<String, f64> {
    [("LOYALTY10".to_string(), 10.0), ("HOLIDAY15".to_string(), 15.0)]
        .into_iter()
        .collect()
}

/// Settings for a [`BookingEngine`](crate::engine::BookingEngine).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Identifier given to the first allocated booking.
    #[serde(default = "default_first_booking_id")]
    pub first_booking_id: u64,

    /// Promo code to percentage off.
    #[serde(default = "default_discounts")]
    pub discounts: BTreeMap<String, f64>,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            first_booking_id: default_first_booking_id(),
            discounts: default_discounts(),
        }
    }
}

impl BookingConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every rule, reporting all violations together.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match rules::validate(self) {
            Validation::Success(()) => Ok(()),
            Validation::Failure(errors) => {
                Err(ConfigError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }

    /// Discount table built from the configured codes.
    pub fn discount_table(&self) -> DiscountTable {
        DiscountTable::from(self.discounts.clone())
    }
}
