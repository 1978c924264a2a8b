use serde::{Deserialize, Serialize};

/// Bookable room. Immutable once created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Room {
    id: u32,
    category: String,
    price: f64,
}

impl Room {
    pub fn new(id: u32, category: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            category: category.into(),
            price,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Unit price before any discount.
    pub fn price(&self) -> f64 {
        self.price
    }
}
