//! # Session Timer Client
//!
//! Runtime for the session countdown: the periodic tick task, the extend
//! endpoint client, and a text renderer for view snapshots.

pub mod api;
pub mod clock;
pub mod error;
pub mod render;
pub mod runtime;

pub use api::{ExtendApi, ExtendReply, HttpExtendApi};
pub use clock::{Clock, SystemClock};
pub use error::ClientError;
pub use render::render_text;
pub use runtime::CountdownHandle;
