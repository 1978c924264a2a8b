//! Builder for constructing transition tables.

use crate::booking::{BookingEvent, BookingState};
use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::Guard;
use crate::engine::{Transition, TransitionTable};
use std::collections::HashMap;

/// Builder for a [`TransitionTable`] with a fluent API.
#[derive(Debug, Default)]
pub struct TransitionTableBuilder {
    rows: Vec<Transition>,
    guards: HashMap<BookingEvent, Guard<BookingState>>,
}

impl TransitionTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder) -> Result<Self, BuildError> {
        self.rows.push(builder.build()?);
        Ok(self)
    }

    /// Add a pre-built row.
    pub fn add_transition(mut self, transition: Transition) -> Self {
        self.rows.push(transition);
        self
    }

    /// Attach a precondition to `event`, replacing any earlier one.
    pub fn guard<F>(mut self, event: BookingEvent, predicate: F) -> Self
    where
        F: Fn(&BookingState) -> bool + Send + Sync + 'static,
    {
        self.guards.insert(event, Guard::new(predicate));
        self
    }

    /// Build the table.
    /// Rejects empty tables, duplicate `(state, event)` pairs and rows
    /// leaving a final state.
    pub fn build(self) -> Result<TransitionTable, BuildError> {
        if self.rows.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        let mut rows = HashMap::with_capacity(self.rows.len());
        for transition in self.rows {
            let key = (transition.from, transition.event);
            if crate::core::State::is_final(&transition.from) {
                return Err(BuildError::LeavesFinalState {
                    from: transition.from,
                    event: transition.event,
                });
            }
            if rows.insert(key, transition).is_some() {
                return Err(BuildError::DuplicateTransition {
                    from: key.0,
                    event: key.1,
                });
            }
        }

        Ok(TransitionTable::from_parts(rows, self.guards))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::TransitionEffect;

    fn select_room() -> TransitionBuilder {
        TransitionBuilder::new()
            .from(BookingState::Idle)
            .on(BookingEvent::SelectRoom)
            .to(BookingState::RoomSelected)
            .effect(TransitionEffect::AssignRoom)
    }

    #[test]
    fn builder_requires_transitions() {
        let result = TransitionTableBuilder::new().build();
        assert!(matches!(result, Err(BuildError::NoTransitions)));
    }

    #[test]
    fn fluent_api_builds_table() {
        let table = TransitionTableBuilder::new()
            .transition(select_room())
            .unwrap()
            .guard(BookingEvent::SelectRoom, |s| *s == BookingState::Idle)
            .build()
            .unwrap();

        assert_eq!(table.len(), 1);
        assert!(table
            .lookup(BookingState::Idle, BookingEvent::SelectRoom)
            .is_some());
        assert!(!table.precondition_holds(BookingEvent::SelectRoom, &BookingState::Paid));
        assert!(table.precondition_holds(BookingEvent::Pay, &BookingState::Paid));
    }

    #[test]
    fn duplicate_rows_are_rejected() {
        let result = TransitionTableBuilder::new()
            .transition(select_room())
            .unwrap()
            .transition(select_room())
            .unwrap()
            .build();

        assert!(matches!(
            result,
            Err(BuildError::DuplicateTransition {
                from: BookingState::Idle,
                event: BookingEvent::SelectRoom
            })
        ));
    }

    #[test]
    fn prebuilt_rows_out_of_final_states_are_rejected() {
        let result = TransitionTableBuilder::new()
            .add_transition(Transition {
                from: BookingState::BookingCancelled,
                event: BookingEvent::SelectRoom,
                to: BookingState::RoomSelected,
                effect: TransitionEffect::AssignRoom,
            })
            .build();

        assert!(matches!(result, Err(BuildError::LeavesFinalState { .. })));
    }
}
