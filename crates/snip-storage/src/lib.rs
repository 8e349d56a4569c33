//! Association store backends.

pub mod memory;
pub mod mysql;

pub use memory::InMemoryStore;
pub use mysql::MySqlStore;
pub use snip_core::{ReadStore, StorageError, Store};
