//! Time source and trailing-edge debounce for re-parsing the draft.
//!
//! Everything here is single-threaded and cooperative. Nothing spawns a
//! thread or registers an OS timer: the host calls
//! [`CreatorSession::tick`](crate::CreatorSession::tick) from its event loop
//! and a due parse fires inside that call. Tests drive time with
//! [`ManualClock`] instead of sleeping.

pub mod clock;
pub mod debounce;

pub use clock::{Clock, ManualClock, SystemClock};
pub use debounce::{Debouncer, PendingParse};
