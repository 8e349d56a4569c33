//! Association service implementation.
//!
//! Orchestrates create/read/update/delete of URL associations over any
//! [`Store`](snip_core::Store) and [`Generator`](snip_generator::Generator).

pub mod service;

pub use service::AssociationService;
