//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions over the current state. The engine
//! evaluates the guard registered for an event before it consults the
//! transition table, so a failing guard surfaces as a precondition error.

use super::state::State;
use std::fmt;
use std::marker::PhantomData;

/// Pure predicate that determines if an event may be applied in a state.
///
/// # Example
///
/// ```rust
/// use innkeeper::core::{Guard, State};
/// use innkeeper::BookingState;
///
/// // Cancellation is allowed anywhere except after payment.
/// let can_cancel = Guard::new(|state: &BookingState| *state != BookingState::Paid);
///
/// assert!(can_cancel.check(&BookingState::RoomSelected));
/// assert!(can_cancel.check(&BookingState::BookingConfirmed));
/// assert!(!can_cancel.check(&BookingState::Paid));
/// ```
pub struct Guard<S: State> {
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Guard that passes only in exactly one state.
    pub fn only(state: S) -> Self
    where
        S: 'static,
    {
        Self::new(move |current: &S| *current == state)
    }

    /// Check if the guard allows the transition from this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::BookingState;

    #[test]
    fn guard_allows_matching_states() {
        let guard = Guard::new(|s: &BookingState| matches!(s, BookingState::Idle));

        assert!(guard.check(&BookingState::Idle));
        assert!(!guard.check(&BookingState::RoomSelected));
    }

    #[test]
    fn guard_checks_non_final_states() {
        let guard = Guard::new(|s: &BookingState| !s.is_final());

        assert!(guard.check(&BookingState::Idle));
        assert!(guard.check(&BookingState::RoomSelected));
        assert!(guard.check(&BookingState::BookingConfirmed));
        assert!(!guard.check(&BookingState::Paid));
        assert!(!guard.check(&BookingState::BookingCancelled));
    }

    #[test]
    fn only_guard_matches_single_state() {
        let guard = Guard::only(BookingState::BookingConfirmed);

        assert!(guard.check(&BookingState::BookingConfirmed));
        assert!(!guard.check(&BookingState::RoomSelected));
        assert!(!guard.check(&BookingState::Paid));
    }

    #[test]
    fn guard_is_deterministic() {
        let state = BookingState::RoomSelected;
        let guard = Guard::new(|s: &BookingState| !s.is_final());

        assert_eq!(guard.check(&state), guard.check(&state));
    }
}
