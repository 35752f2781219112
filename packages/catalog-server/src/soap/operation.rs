//! Operation dispatcher: classifies a raw payload into one typed
//! operation and turns it into exactly one store call.
//!
//! Classification is content-sniffing by design (the emulated protocol
//! carries no `SOAPAction` header): the first matching marker substring
//! wins. Parameter extraction is a two-step pipeline — strict structured
//! decode first, then a bounded `<Tag>…</Tag>` text scan, because the
//! outer envelope framing defeats strict decoding. The fallback is a
//! deliberately narrow recovery, not a general parser.

use tracing::debug;

use catalog_core::{CatalogError, Movie};

use crate::storage::CatalogStore;

use super::message::{
    AddMovieRequest, AddMovieResponse, GetMovieDetailsRequest, GetMovieDetailsResponse,
    ListMoviesResponse,
};

/// Marker substring identifying the list-all operation.
pub const LIST_MOVIES_MARKER: &str = "ListMoviesRequest";
/// Marker substring identifying the by-ID operation.
pub const GET_MOVIE_DETAILS_MARKER: &str = "GetMovieDetailsRequest";
/// Marker substring identifying the create operation.
pub const ADD_MOVIE_MARKER: &str = "AddMovieRequest";

/// One decoded call: operation kind plus its extracted parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoapOperation {
    ListMovies,
    GetMovieDetails { id: u32 },
    AddMovie { title: String, genre: String, year: u32 },
}

/// Successful operation result, one variant per response element.
#[derive(Debug)]
pub enum SoapResponseBody {
    List(ListMoviesResponse),
    Details(GetMovieDetailsResponse),
    Added(AddMovieResponse),
}

/// Classifies `payload` and extracts the operation's parameters.
///
/// Matching is case-sensitive substring presence against the raw payload
/// text; the first marker that matches wins. No store access happens
/// here.
///
/// # Errors
///
/// [`CatalogError::UnknownOperation`] when no marker matches, and
/// [`CatalogError::MalformedRequest`] when both extraction tiers fail to
/// produce well-formed parameters.
pub fn classify(payload: &str) -> Result<SoapOperation, CatalogError> {
    if payload.contains(LIST_MOVIES_MARKER) {
        debug!("detected ListMoviesRequest operation");
        Ok(SoapOperation::ListMovies)
    } else if payload.contains(GET_MOVIE_DETAILS_MARKER) {
        debug!("detected GetMovieDetailsRequest operation");
        extract_movie_id(payload).map(|id| SoapOperation::GetMovieDetails { id })
    } else if payload.contains(ADD_MOVIE_MARKER) {
        debug!("detected AddMovieRequest operation");
        extract_new_movie(payload)
    } else {
        debug!("no known operation marker in payload");
        Err(CatalogError::UnknownOperation)
    }
}

/// Invokes the single store operation matching `op`.
///
/// `AddMovie` mutates the store exactly once on success; the other
/// operations are read-only. Store errors propagate unchanged.
///
/// # Errors
///
/// [`CatalogError::NotFound`] from a by-ID lookup and
/// [`CatalogError::InvalidInput`] from a create.
pub fn dispatch(
    op: SoapOperation,
    store: &CatalogStore<Movie>,
) -> Result<SoapResponseBody, CatalogError> {
    match op {
        SoapOperation::ListMovies => {
            let movies = store.list();
            debug!(count = movies.len(), "returning movie list");
            Ok(SoapResponseBody::List(ListMoviesResponse::new(movies)))
        }
        SoapOperation::GetMovieDetails { id } => {
            let movie = store.get(id)?;
            debug!(id, "returning movie details");
            Ok(SoapResponseBody::Details(GetMovieDetailsResponse { movie }))
        }
        SoapOperation::AddMovie { title, genre, year } => {
            let movie = store.create(Movie {
                id: 0,
                title,
                genre,
                year,
            })?;
            debug!(id = movie.id, "stored new movie");
            Ok(SoapResponseBody::Added(AddMovieResponse { movie }))
        }
    }
}

/// Extracts the by-ID parameter: strict decode, then `<ID>…</ID>` scan.
fn extract_movie_id(payload: &str) -> Result<u32, CatalogError> {
    if let Ok(req) = quick_xml::de::from_str::<GetMovieDetailsRequest>(payload) {
        return Ok(req.id);
    }

    // Envelope framing defeats strict decoding; recover the one bounded
    // pattern we know how to find.
    let text = text_between(payload, "ID").ok_or_else(|| {
        CatalogError::MalformedRequest(
            "could not parse GetMovieDetailsRequest ID".to_string(),
        )
    })?;
    text.parse().map_err(|_| {
        CatalogError::MalformedRequest("invalid ID format in request".to_string())
    })
}

/// Extracts create parameters: strict decode, then per-field text scan.
///
/// A missing `<Title>` extracts as empty and is left for the store to
/// reject as invalid input; an unparsable `<Year>` is a malformed
/// request because extraction itself failed.
fn extract_new_movie(payload: &str) -> Result<SoapOperation, CatalogError> {
    if let Ok(req) = quick_xml::de::from_str::<AddMovieRequest>(payload) {
        return Ok(SoapOperation::AddMovie {
            title: req.title,
            genre: req.genre,
            year: req.year,
        });
    }

    let title = text_between(payload, "Title").unwrap_or_default().to_string();
    let genre = text_between(payload, "Genre").unwrap_or_default().to_string();
    let year = match text_between(payload, "Year") {
        None => 0,
        Some(text) => text.parse().map_err(|_| {
            CatalogError::MalformedRequest("invalid Year format in request".to_string())
        })?,
    };

    Ok(SoapOperation::AddMovie { title, genre, year })
}

/// Returns the text between the first `<tag>`/`</tag>` pair, if any.
fn text_between<'a>(payload: &'a str, tag: &str) -> Option<&'a str> {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");
    let start = payload.find(&open)? + open.len();
    let end = payload[start..].find(&close)? + start;
    Some(&payload[start..end])
}
