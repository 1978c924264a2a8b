//! Innkeeper: the hotel booking lifecycle as a table-driven state machine
//!
//! A booking moves from room selection through confirmation and payment, or
//! is cancelled. Each request is checked against the guard for its event and
//! the declarative transition table; its effects (room assignment, discounted
//! total, payment time) are staged and committed together or not at all.
//!
//! # Core Concepts
//!
//! - **State**: lifecycle stages via the `State` trait ([`BookingState`])
//! - **Guards**: per-event preconditions over the current state
//! - **Transition table**: `(state, event) -> (state, effect)` rows
//! - **Ledger**: id allocation and the append-only record of settled bookings
//!
//! # Example
//!
//! ```rust
//! use innkeeper::{BookingCommand, BookingEngine, BookingState, Room};
//!
//! let mut engine = BookingEngine::builder().build().unwrap();
//! let mut booking = engine.open_booking(1001).unwrap();
//!
//! engine
//!     .apply(&mut booking, BookingCommand::SelectRoom(Room::new(101, "standard", 5000.0)))
//!     .unwrap();
//! engine.apply(&mut booking, BookingCommand::ConfirmBooking).unwrap();
//! engine.apply(&mut booking, BookingCommand::pay_with("LOYALTY10")).unwrap();
//!
//! assert_eq!(booking.state(), BookingState::Paid);
//! assert_eq!(booking.total(), 4500.0);
//! assert_eq!(engine.ledger().len(), 1);
//! ```

pub mod booking;
pub mod builder;
pub mod config;
pub mod core;
pub mod engine;
pub mod env;
pub mod ledger;

// Re-export commonly used types
pub use booking::{Booking, BookingCommand, BookingEvent, BookingId, BookingState, Room, UserId};
pub use config::BookingConfig;
pub use crate::core::{Guard, State, StateHistory, StateTransition};
pub use engine::{BookingEngine, TransitionError, TransitionTable};
pub use ledger::{BookingReceipt, Ledger, LedgerError, SettlementStatus};
