//! Core state machine types and logic.
//!
//! This module contains the pure functional core:
//! - State definitions via the `State` trait
//! - Guard predicates for transition control
//! - Immutable history tracking
//!
//! Nothing here performs side effects.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
