//! Request and response body shapes for the movie SOAP operations.
//!
//! Element names mirror the emulated service: requests are decoded
//! without their `mov:` prefix (strict decoding ignores the root name and
//! matches child elements), responses serialize with the prefix spelled
//! out so the envelope body is namespace-qualified on the wire.

use serde::{Deserialize, Serialize};

use catalog_core::{CatalogError, Movie};

/// Parameters of a by-ID lookup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GetMovieDetailsRequest {
    #[serde(rename = "ID")]
    pub id: u32,
}

/// Parameters of a create. Only the title is required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddMovieRequest {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Genre", default)]
    pub genre: String,
    #[serde(rename = "Year", default)]
    pub year: u32,
}

/// Body of a successful list: all movies under a `Movies` wrapper.
#[derive(Debug, Serialize)]
#[serde(rename = "mov:ListMoviesResponse")]
pub struct ListMoviesResponse {
    #[serde(rename = "Movies")]
    pub movies: MovieList,
}

impl ListMoviesResponse {
    #[must_use]
    pub fn new(movies: Vec<Movie>) -> Self {
        Self {
            movies: MovieList { items: movies },
        }
    }
}

/// Repeated `<Movie>` elements inside the `Movies` wrapper.
#[derive(Debug, Serialize)]
pub struct MovieList {
    #[serde(rename = "Movie")]
    pub items: Vec<Movie>,
}

/// Body of a successful by-ID lookup.
#[derive(Debug, Serialize)]
#[serde(rename = "mov:GetMovieDetailsResponse")]
pub struct GetMovieDetailsResponse {
    #[serde(rename = "Movie")]
    pub movie: Movie,
}

/// Body of a successful create, echoing the stored record with its ID.
#[derive(Debug, Serialize)]
#[serde(rename = "mov:AddMovieResponse")]
pub struct AddMovieResponse {
    #[serde(rename = "Movie")]
    pub movie: Movie,
}

/// Structured failure rendered in place of a success body.
#[derive(Debug, Serialize)]
#[serde(rename = "soapenv:Fault")]
pub struct SoapFault {
    #[serde(rename = "faultcode")]
    pub code: &'static str,
    #[serde(rename = "faultstring")]
    pub message: String,
}

/// Fault-code classification carried in `faultcode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultCode {
    /// The request was malformed or unroutable.
    Client,
    /// The store or the server itself reported the failure.
    Server,
}

impl FaultCode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Client => "Client",
            Self::Server => "Server",
        }
    }
}

impl SoapFault {
    /// Maps an error to its fault: `Client` for unroutable or malformed
    /// requests, `Server` for everything the store or codec reported.
    #[must_use]
    pub fn from_error(err: &CatalogError) -> Self {
        let code = match err {
            CatalogError::UnknownOperation | CatalogError::MalformedRequest(_) => {
                FaultCode::Client
            }
            CatalogError::NotFound { .. }
            | CatalogError::InvalidInput(_)
            | CatalogError::Serialization(_) => FaultCode::Server,
        };
        Self {
            code: code.as_str(),
            message: err.to_string(),
        }
    }
}
