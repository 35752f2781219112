//! In-memory catalog storage shared by all three services.
//!
//! One generic [`CatalogStore`] replaces the per-service map + counter +
//! mutex triples: each service instantiates it with its own record type
//! and seeds it at startup via [`seed`].

pub mod seed;
pub mod store;

pub use store::CatalogStore;
