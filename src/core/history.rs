//! State transition history tracking.
//!
//! Provides immutable tracking of the transitions a booking went through,
//! following functional programming principles.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single committed state transition.
///
/// # Example
///
/// ```rust
/// use innkeeper::core::StateTransition;
/// use innkeeper::BookingState;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: BookingState::Idle,
///     to: BookingState::RoomSelected,
///     event: "selectRoom".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.event, "selectRoom");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Wire name of the event that drove the transition
    pub event: String,
    /// When the transition was committed
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state transitions.
///
/// History is immutable: `record` returns a new history with the transition
/// appended.
///
/// # Example
///
/// ```rust
/// use innkeeper::core::{StateHistory, StateTransition};
/// use innkeeper::BookingState;
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: BookingState::Idle,
///         to: BookingState::RoomSelected,
///         event: "selectRoom".to_string(),
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         from: BookingState::RoomSelected,
///         to: BookingState::BookingCancelled,
///         event: "cancel".to_string(),
///         timestamp: Utc::now(),
///     });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // Idle -> RoomSelected -> BookingCancelled
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// This does not mutate the existing history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first transition followed by the
    /// `to` state of every transition. Empty if nothing was recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Check that every transition starts where the previous one ended.
    pub fn is_contiguous(&self) -> bool {
        self.transitions
            .windows(2)
            .all(|pair| pair[0].to == pair[1].from)
    }

    /// Time elapsed between the first and last recorded transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    /// Get all transitions in recording order.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}
