//! Collaborators injected into the engine: clock, discount lookup and
//! observability sink.

mod clock;
mod discount;
mod observer;

pub use clock::{Clock, FixedClock, SystemClock};
pub use discount::{discounted, DiscountLookup, DiscountTable};
pub use observer::{
    BookingObserver, DiscountApplied, Notification, RecordingObserver, TracingObserver,
    TransitionRecorded,
};
