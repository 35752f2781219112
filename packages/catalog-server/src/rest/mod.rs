//! REST/JSON series service: a thin adapter over the shared store.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tracing::debug;

use catalog_core::{CatalogError, Series};

use crate::storage::CatalogStore;

/// Shared series store handed to every handler invocation.
pub type SeriesStore = Arc<CatalogStore<Series>>;

/// Failure response for the REST adapter: status code plus a plain
/// message, one per [`CatalogError`] kind.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        let status = match err {
            CatalogError::NotFound { .. } => StatusCode::NOT_FOUND,
            CatalogError::UnknownOperation
            | CatalogError::MalformedRequest(_)
            | CatalogError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            CatalogError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

/// GET /api/series — snapshot of all series.
async fn list_series(State(store): State<SeriesStore>) -> Json<Vec<Series>> {
    let series = store.list();
    debug!(count = series.len(), "returning series list");
    Json(series)
}

/// GET /api/series/{id} — one series or 404.
///
/// A non-numeric ID is rejected by the typed path extractor before this
/// handler runs.
async fn get_series(
    State(store): State<SeriesStore>,
    Path(id): Path<u32>,
) -> Result<Json<Series>, ApiError> {
    let series = store.get(id)?;
    debug!(id, "returning series details");
    Ok(Json(series))
}

/// POST /api/series — create from a JSON body, echoing the stored record.
async fn create_series(
    State(store): State<SeriesStore>,
    Json(series): Json<Series>,
) -> Result<(StatusCode, Json<Series>), ApiError> {
    let created = store.create(series)?;
    debug!(id = created.id, "created series");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Builds the series service router.
pub fn router(store: SeriesStore) -> Router {
    Router::new()
        .route("/api/series", get(list_series).post(create_series))
        .route("/api/series/{id}", get(get_series))
        .with_state(store)
}
