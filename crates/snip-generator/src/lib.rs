pub mod seq;

use snip_core::ShortId;
use snip_xid::{Clock, XidGenerator};

/// Trait for generating short ids.
///
/// Implementations are pure generators that don't interact with storage.
/// The store does not enforce uniqueness, so every implementation must
/// produce globally unique ids on its own.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<ShortId>;
    /// Generates a value that can be converted into a globally unique short id.
    fn generate(&self) -> Self::Output;
}

impl<C: Clock + 'static> Generator for XidGenerator<C> {
    type Output = ShortId;

    fn generate(&self) -> Self::Output {
        ShortId::from(self.next_id())
    }
}
