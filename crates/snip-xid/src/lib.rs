//! Globally unique, sortable identifiers for short links.
//!
//! An [`Xid`] packs a creation second, a machine id, a process id and a
//! per-process counter into 12 bytes and renders them as 20 lowercase
//! base32hex characters (`[0-9a-v]`). No coordination between processes is
//! needed to keep ids unique.

mod clock;
pub mod error;
mod generator;
mod xid;

pub use clock::{Clock, SystemClock};
pub use error::Error;
pub use generator::{parse_machine_id, XidGenerator, XidSettings};
pub use xid::{Xid, ENCODED_LEN};
