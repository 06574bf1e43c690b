//! # HTTP API
//!
//! axum routers for `/api/cars` and `/api/dango`. Handlers are thin: they log the request,
//! call the typed client and map the resource error to an HTTP status through [`ApiError`].

pub mod cars;
pub mod dango;

use crate::clients::{MenuClient, VehicleClient};
use crate::menu_actor::MenuItemError;
use crate::vehicle_actor::VehicleError;
use axum::{
    Json, Router,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::error;

/// Shared application state. Cloned into every handler; the clients are channel senders.
#[derive(Clone)]
pub struct AppState {
    pub vehicles: VehicleClient,
    pub menu: MenuClient,
    /// Fixture read by `POST /api/dango/initialize`.
    pub menu_seed: Arc<PathBuf>,
}

impl AppState {
    pub fn new(vehicles: VehicleClient, menu: MenuClient, menu_seed: impl Into<PathBuf>) -> Self {
        Self {
            vehicles,
            menu,
            menu_seed: Arc::new(menu_seed.into()),
        }
    }
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(cars::routes())
        .merge(dango::routes())
}

/// `OPTIONS` reply advertising the collection's verbs.
pub(crate) fn allow_response(capabilities: &[&str]) -> Response {
    match HeaderValue::from_str(&capabilities.join(", ")) {
        Ok(allow) => (StatusCode::OK, [(header::ALLOW, allow)]).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

/// Standard API error response body.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: u16,
    pub message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            message: message.into(),
        }
    }

    fn internal(message: String) -> Self {
        error!(%message, "Resource actor unavailable");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = Json(serde_json::json!({
            "error": {
                "code": self.code,
                "message": self.message,
            }
        }));
        (status, body).into_response()
    }
}

impl From<VehicleError> for ApiError {
    fn from(err: VehicleError) -> Self {
        match err {
            VehicleError::NotFound(_) => ApiError::new(StatusCode::NOT_FOUND, err.to_string()),
            VehicleError::InvalidYear { .. } => {
                ApiError::new(StatusCode::BAD_REQUEST, err.to_string())
            }
            VehicleError::ActorCommunicationError(_) => ApiError::internal(err.to_string()),
        }
    }
}

impl From<MenuItemError> for ApiError {
    fn from(err: MenuItemError) -> Self {
        match err {
            MenuItemError::NotFound(_) => ApiError::new(StatusCode::NOT_FOUND, err.to_string()),
            MenuItemError::InvalidSkewerCount(_) | MenuItemError::SeedUnavailable(_) => {
                ApiError::new(StatusCode::BAD_REQUEST, err.to_string())
            }
            MenuItemError::ActorCommunicationError(_) => ApiError::internal(err.to_string()),
        }
    }
}
