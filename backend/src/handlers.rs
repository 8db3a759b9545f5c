use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{error, info};
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::models::{ErrorBody, Listing};
use crate::AppState;

/// Failures surfaced by the read endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to fetch properties")]
    ListUnavailable,
    #[error("Failed to fetch property")]
    DetailUnavailable,
    #[error("Property not found")]
    PropertyNotFound,
    #[error("Not found")]
    RouteNotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::ListUnavailable | ApiError::DetailUnavailable => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::PropertyNotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Fetches the full catalog in store order
pub async fn list_properties(
    State(state): State<AppState>,
) -> Result<Json<Vec<Listing>>, ApiError> {
    match state.catalog.list_all().await {
        Ok(listings) => {
            info!("Serving {} properties", listings.len());
            Ok(Json(listings.as_ref().clone()))
        }
        Err(e) => {
            error!("Failed to fetch properties: {}", e);
            Err(ApiError::ListUnavailable)
        }
    }
}

/// Fetches a single property by its numeric id.
///
/// An id that does not parse as an integer cannot match any listing, so it
/// is reported as not found.
pub async fn get_property(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Listing>, ApiError> {
    let id: i64 = match raw_id.trim().parse() {
        Ok(id) => id,
        Err(_) => {
            info!("Property not found: non-numeric id {:?}", raw_id);
            return Err(ApiError::PropertyNotFound);
        }
    };

    match state.catalog.get_by_id(id).await {
        Ok(listing) => Ok(Json(listing)),
        Err(CatalogError::NotFound(id)) => {
            info!("Property not found: {}", id);
            Err(ApiError::PropertyNotFound)
        }
        Err(e) => {
            error!("Failed to fetch property {}: {}", id, e);
            Err(ApiError::DetailUnavailable)
        }
    }
}

pub async fn fallback() -> ApiError {
    ApiError::RouteNotFound
}
