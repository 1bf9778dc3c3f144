//! Countdown state machine
//!
//! Pure, clock-injected logic behind the session countdown: remaining-time
//! derivation, the extend dialog threshold, the terminal error surface, and
//! the view snapshot a renderer draws. Scheduling lives in the client crate.

mod format;
mod machine;
mod view;

pub use format::format_time;
pub use machine::{Countdown, CountdownState, ExtendResult, TickOutcome};
pub use view::{ExtendDialog, OfferView, View};
