//! Builder for constructing table rows.

use crate::booking::{BookingEvent, BookingState};
use crate::builder::error::BuildError;
use crate::core::State;
use crate::engine::{Transition, TransitionEffect};

/// Builder for constructing transitions with a fluent API.
///
/// The effect defaults to [`TransitionEffect::None`].
#[derive(Debug, Default)]
pub struct TransitionBuilder {
    from: Option<BookingState>,
    event: Option<BookingEvent>,
    to: Option<BookingState>,
    effect: Option<TransitionEffect>,
}

impl TransitionBuilder {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source state (required).
    pub fn from(mut self, state: BookingState) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the triggering event (required).
    pub fn on(mut self, event: BookingEvent) -> Self {
        self.event = Some(event);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: BookingState) -> Self {
        self.to = Some(state);
        self
    }

    /// Set the effect staged with the transition (optional).
    pub fn effect(mut self, effect: TransitionEffect) -> Self {
        self.effect = Some(effect);
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let event = self.event.ok_or(BuildError::MissingEvent)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        if from.is_final() {
            return Err(BuildError::LeavesFinalState { from, event });
        }

        Ok(Transition {
            from,
            event,
            to,
            effect: self.effect.unwrap_or(TransitionEffect::None),
        })
    }
}
