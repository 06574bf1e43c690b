use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::info;
use uuid::Uuid;

use super::{AppState, ApiError, allow_response};
use crate::model::{Vehicle, VehicleCreate, VehiclePatch};
use actor_framework::ActorClient;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/cars",
            get(list_cars)
                .head(head_cars)
                .post(create_car)
                .options(car_options),
        )
        .route(
            "/cars/{id}",
            get(get_car).put(replace_car).patch(patch_car).delete(delete_car),
        )
}

async fn list_cars(State(state): State<AppState>) -> Result<Json<Vec<Vehicle>>, ApiError> {
    info!("GET all cars");
    Ok(Json(state.vehicles.list().await?))
}

async fn head_cars() -> StatusCode {
    info!("HEAD cars");
    StatusCode::OK
}

async fn car_options(State(state): State<AppState>) -> Response {
    info!("OPTIONS cars");
    allow_response(state.vehicles.capabilities())
}

async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vehicle>, ApiError> {
    info!("GET car {id}");
    Ok(Json(state.vehicles.get(id).await?))
}

async fn create_car(
    State(state): State<AppState>,
    Json(body): Json<VehicleCreate>,
) -> Result<Response, ApiError> {
    info!(make = %body.make, model = %body.model, year = body.year, "POST car");
    let car = state.vehicles.create_vehicle(body).await?;
    let location = format!("/api/cars/{}", car.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(car)).into_response())
}

async fn replace_car(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<VehicleCreate>,
) -> Result<StatusCode, ApiError> {
    info!("PUT car {id}");
    state.vehicles.replace(id, body).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn patch_car(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<VehiclePatch>,
) -> Result<StatusCode, ApiError> {
    info!("PATCH car {id}");
    state.vehicles.patch(id, body).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    info!("DELETE car {id}");
    state.vehicles.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
