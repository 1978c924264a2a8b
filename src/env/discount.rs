//! Promo code lookup.

use std::collections::BTreeMap;

/// Resolves a promo code to a discount percentage.
pub trait DiscountLookup: Send + Sync {
    /// Percentage off (e.g. `15.0` for 15%), or `None` if the code is unknown.
    fn lookup(&self, code: &str) -> Option<f64>;
}

/// In-memory code table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiscountTable {
    entries: BTreeMap<String, f64>,
}

impl DiscountTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The reference codes: `LOYALTY10` and `HOLIDAY15`.
    pub fn standard() -> Self {
        Self::new().with("LOYALTY10", 10.0).with("HOLIDAY15", 15.0)
    }

    pub fn with(mut self, code: impl Into<String>, percentage: f64) -> Self {
        self.entries.insert(code.into(), percentage);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<BTreeMap<String, f64>> for DiscountTable {
    fn from(entries: BTreeMap<String, f64>) -> Self {
        Self { entries }
    }
}

impl DiscountLookup for DiscountTable {
    fn lookup(&self, code: &str) -> Option<f64> {
        self.entries.get(code).copied()
    }
}

/// Apply `percentage` off `price`.
pub fn discounted(price: f64, percentage: f64) -> f64 {
    price * (1.0 - percentage / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_knows_reference_codes() {
        let table = DiscountTable::standard();
        assert_eq!(table.lookup("LOYALTY10"), Some(10.0));
        assert_eq!(table.lookup("HOLIDAY15"), Some(15.0));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn lookup_is_exact_match() {
        let table = DiscountTable::standard();
        assert_eq!(table.lookup("loyalty10"), None);
        assert_eq!(table.lookup(""), None);
        assert_eq!(table.lookup("XYZ"), None);
    }

    #[test]
    fn discounted_applies_percentage() {
        assert_eq!(discounted(10_000.0, 15.0), 8_500.0);
        assert_eq!(discounted(5_000.0, 10.0), 4_500.0);
        assert_eq!(discounted(5_000.0, 0.0), 5_000.0);
    }
}
