use crate::Generator;
use snip_core::ShortId;
use snip_xid::Xid;
use std::sync::atomic::{AtomicU32, Ordering};

/// A deterministic generator that numbers ids sequentially.
///
/// Ids are xids with zeroed time, machine and process fields and the
/// sequence number in the counter, so `with_offset(0)` yields
/// `00000000000000000000`, `0000000000000000000g`, ... in sorted order.
/// Unique only within one instance and for its first 2^24 ids; meant for
/// tests and local runs.
#[derive(Debug)]
pub struct SeqGenerator {
    counter: AtomicU32,
}

impl SeqGenerator {
    pub fn new() -> Self {
        Self::with_offset(0)
    }

    /// Creates a generator whose first id carries `offset` as its sequence number.
    pub fn with_offset(offset: u32) -> Self {
        Self {
            counter: AtomicU32::new(offset),
        }
    }
}

impl Default for SeqGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for SeqGenerator {
    type Output = Xid;

    fn generate(&self) -> Xid {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        Xid::from_parts(0, [0; 3], 0, count)
    }
}
