//! Observability sink for engine notifications.

use crate::booking::{BookingEvent, BookingId, BookingState};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// A committed state change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecorded {
    pub booking_id: BookingId,
    pub event: BookingEvent,
    pub from: BookingState,
    pub to: BookingState,
}

/// A promo code that reduced a payment total.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiscountApplied {
    pub booking_id: BookingId,
    pub code: String,
    pub percentage: f64,
    pub total: f64,
}

/// Receives notifications from the transition engine.
///
/// Notifications are delivered only after a transition has been committed.
pub trait BookingObserver: Send + Sync {
    fn transition_recorded(&self, notice: &TransitionRecorded);

    fn discount_applied(&self, notice: &DiscountApplied);
}

/// Emits notifications as `tracing` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl BookingObserver for TracingObserver {
    fn transition_recorded(&self, notice: &TransitionRecorded) {
        tracing::info!(
            booking_id = notice.booking_id.0,
            event = notice.event.name(),
            from = %notice.from,
            to = %notice.to,
            "booking transitioned"
        );
    }

    fn discount_applied(&self, notice: &DiscountApplied) {
        tracing::info!(
            booking_id = notice.booking_id.0,
            code = %notice.code,
            percentage = notice.percentage,
            total = notice.total,
            "promo code applied"
        );
    }
}

/// Notification captured by [`RecordingObserver`].
#[derive(Clone, Debug, PartialEq)]
pub enum Notification {
    Transition(TransitionRecorded),
    Discount(DiscountApplied),
}

/// Keeps every notification in memory, in delivery order.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.seen.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn transitions(&self) -> Vec<TransitionRecorded> {
        self.notifications()
            .into_iter()
            .filter_map(|n| match n {
                Notification::Transition(t) => Some(t),
                Notification::Discount(_) => None,
            })
            .collect()
    }

    pub fn discounts(&self) -> Vec<DiscountApplied> {
        self.notifications()
            .into_iter()
            .filter_map(|n| match n {
                Notification::Discount(d) => Some(d),
                Notification::Transition(_) => None,
            })
            .collect()
    }

    fn push(&self, notification: Notification) {
        self.seen
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(notification);
    }
}

impl BookingObserver for RecordingObserver {
    fn transition_recorded(&self, notice: &TransitionRecorded) {
        self.push(Notification::Transition(notice.clone()));
    }

    fn discount_applied(&self, notice: &DiscountApplied) {
        self.push(Notification::Discount(notice.clone()));
    }
}

impl<T: BookingObserver + ?Sized> BookingObserver for std::sync::Arc<T> {
    fn transition_recorded(&self, notice: &TransitionRecorded) {
        (**self).transition_recorded(notice);
    }

    fn discount_applied(&self, notice: &DiscountApplied) {
        (**self).discount_applied(notice);
    }
}
