//! POST /soap handler: raw bytes in, envelope bytes out.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Response;
use axum::routing::post;
use axum::Router;
use bytes::Bytes;
use tracing::{debug, warn};

use catalog_core::Movie;

use crate::storage::CatalogStore;

use super::envelope::{render_fault, render_success};
use super::operation::{classify, dispatch};

/// Shared movie store handed to every handler invocation.
pub type MovieStore = Arc<CatalogStore<Movie>>;

/// Handles one SOAP request: classify, dispatch, render.
///
/// Method filtering happens in the router (only POST reaches this
/// function), so no classification runs for rejected methods.
pub async fn soap_handler(State(store): State<MovieStore>, body: Bytes) -> Response {
    let payload = String::from_utf8_lossy(&body);
    debug!(bytes = body.len(), "received SOAP request");

    match classify(&payload).and_then(|op| dispatch(op, &store)) {
        Ok(result) => render_success(&result),
        Err(err) => {
            warn!(%err, "SOAP request failed");
            render_fault(&err)
        }
    }
}

/// Builds the movie service router: `POST /soap` only.
pub fn router(store: MovieStore) -> Router {
    Router::new()
        .route("/soap", post(soap_handler))
        .with_state(store)
}
