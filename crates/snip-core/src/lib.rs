//! Core types and traits for the Snip URL shortener.
//!
//! This crate provides the association model, the short id type and the
//! contracts shared by the storage backends, the association service and the
//! HTTP gateway.

pub mod association;
pub mod associations;
pub mod error;
pub mod short_id;
pub mod store;

pub use association::UrlAssociation;
pub use associations::Associations;
pub use error::{CoreError, ServiceError, StorageError};
pub use short_id::ShortId;
pub use store::{ReadStore, Store};
