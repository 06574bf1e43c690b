use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::info;
use uuid::Uuid;

use super::{AppState, ApiError, allow_response};
use crate::model::{MenuItem, MenuItemCreate, MenuItemPatch};
use crate::seed;
use actor_framework::ActorClient;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/dango",
            get(list_dango)
                .head(head_dango)
                .post(create_dango)
                .options(dango_options),
        )
        .route("/dango/initialize", post(initialize_menu))
        .route(
            "/dango/{id}",
            get(get_dango)
                .put(replace_dango)
                .patch(patch_dango)
                .delete(delete_dango),
        )
}

async fn list_dango(State(state): State<AppState>) -> Result<Json<Vec<MenuItem>>, ApiError> {
    info!("GET all dango");
    Ok(Json(state.menu.list().await?))
}

async fn head_dango() -> StatusCode {
    info!("HEAD dango");
    StatusCode::OK
}

async fn dango_options(State(state): State<AppState>) -> Response {
    info!("OPTIONS dango");
    allow_response(state.menu.capabilities())
}

async fn get_dango(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MenuItem>, ApiError> {
    info!("GET dango {id}");
    Ok(Json(state.menu.get(id).await?))
}

async fn create_dango(
    State(state): State<AppState>,
    Json(body): Json<MenuItemCreate>,
) -> Result<Response, ApiError> {
    info!(flavor = %body.flavor, skewer_count = body.skewer_count, "POST dango");
    let item = state.menu.create_item(body).await?;
    let location = format!("/api/dango/{}", item.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(item)).into_response())
}

async fn replace_dango(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<MenuItemCreate>,
) -> Result<StatusCode, ApiError> {
    info!("PUT dango {id}");
    state.menu.replace(id, body).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn patch_dango(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<MenuItemPatch>,
) -> Result<StatusCode, ApiError> {
    info!("PATCH dango {id}");
    state.menu.patch(id, body).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_dango(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    info!("DELETE dango {id}");
    state.menu.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// Not advertised in the Allow header.
async fn initialize_menu(State(state): State<AppState>) -> Result<Json<&'static str>, ApiError> {
    info!("POST initialize dango menu");
    seed::initialize_menu(&state.menu, &state.menu_seed).await?;
    Ok(Json("Menu initialized"))
}
