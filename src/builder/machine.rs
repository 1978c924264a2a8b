//! Builder for constructing booking engines.

use crate::builder::error::BuildError;
use crate::config::BookingConfig;
use crate::engine::{BookingEngine, TransitionTable};
use crate::env::{BookingObserver, Clock, DiscountLookup, SystemClock, TracingObserver};
use crate::ledger::Ledger;
use std::sync::Arc;

/// Builder for [`BookingEngine`] with a fluent API.
///
/// Every part is optional: the standard table, the configured discount
/// codes, the system clock and the tracing observer are used by default.
#[derive(Default)]
pub struct BookingEngineBuilder {
    config: Option<BookingConfig>,
    table: Option<TransitionTable>,
    discounts: Option<Box<dyn DiscountLookup>>,
    clock: Option<Arc<dyn Clock>>,
    observer: Option<Box<dyn BookingObserver>>,
}

impl BookingEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `config` for the first booking id and, unless overridden with
    /// [`discounts`](Self::discounts), the promo codes.
    pub fn config(mut self, config: BookingConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn table(mut self, table: TransitionTable) -> Self {
        self.table = Some(table);
        self
    }

    pub fn discounts(mut self, discounts: impl DiscountLookup + 'static) -> Self {
        self.discounts = Some(Box::new(discounts));
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn observer(mut self, observer: impl BookingObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Build the engine.
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> Result<BookingEngine, BuildError> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let clock: Arc<dyn Clock> = match self.clock {
            Some(clock) => clock,
            None => Arc::new(SystemClock),
        };
        let discounts: Box<dyn DiscountLookup> = match self.discounts {
            Some(discounts) => discounts,
            None => Box::new(config.discount_table()),
        };
        let observer: Box<dyn BookingObserver> = match self.observer {
            Some(observer) => observer,
            None => Box::new(TracingObserver),
        };
        let ledger = Ledger::starting_at(Arc::clone(&clock), config.first_booking_id);

        Ok(BookingEngine::from_parts(
            self.table.unwrap_or_default(),
            ledger,
            discounts,
            clock,
            observer,
        ))
    }
}
