//! Catalog core — media record models and the error taxonomy shared by
//! the movie (SOAP), series (REST), and anime (GraphQL) services.

pub mod error;
pub mod record;

pub use error::CatalogError;
pub use record::{Anime, CatalogRecord, Episode, Movie, Series};
