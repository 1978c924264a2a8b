//! Transition engine.
//!
//! This is the imperative shell around the pure core: it stages the effects
//! of a request against the transition table, commits them in one step, and
//! reports the outcome to the observer and the ledger.

mod error;
mod machine;
mod table;

pub use error::TransitionError;
pub use machine::BookingEngine;
pub use table::{Transition, TransitionEffect, TransitionTable};
