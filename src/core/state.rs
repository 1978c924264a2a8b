//! Core State trait for lifecycle states.
//!
//! Every state a booking can occupy implements this trait, which provides
//! pure methods for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. States are immutable values describing the current
/// position of a booking in its lifecycle.
///
/// # Required Traits
///
/// - `Clone`: states are copied into transition history
/// - `PartialEq`: states are compared by guards and the transition table
/// - `Debug`: states show up in error messages
/// - `Serialize` + `Deserialize`: states are exported in ledger reports
///
/// # Example
///
/// ```rust
/// use innkeeper::core::State;
/// use innkeeper::BookingState;
///
/// assert_eq!(BookingState::RoomSelected.name(), "RoomSelected");
/// assert!(BookingState::Paid.is_final());
/// assert!(!BookingState::BookingConfirmed.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// No transition may leave a final state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::BookingState;

    #[test]
    fn booking_states_are_named_after_their_variant() {
        let names: Vec<_> = [
            BookingState::Idle,
            BookingState::RoomSelected,
            BookingState::BookingConfirmed,
            BookingState::Paid,
            BookingState::BookingCancelled,
        ]
        .iter()
        .map(|s| s.name().to_string())
        .collect();

        assert_eq!(
            names,
            vec!["Idle", "RoomSelected", "BookingConfirmed", "Paid", "BookingCancelled"]
        );
    }

    #[test]
    fn only_settlement_states_are_final() {
        assert!(!BookingState::Idle.is_final());
        assert!(!BookingState::RoomSelected.is_final());
        assert!(!BookingState::BookingConfirmed.is_final());
        assert!(BookingState::Paid.is_final());
        assert!(BookingState::BookingCancelled.is_final());
    }

    #[test]
    fn is_final_defaults_to_false() {
        #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
        struct Waitlisted;

        impl State for Waitlisted {
            fn name(&self) -> &str {
                "Waitlisted"
            }
        }

        assert!(!Waitlisted.is_final());
    }
}
