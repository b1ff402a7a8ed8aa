//! Airplane HTTP Routes
//!
//! - `POST   /airplane`      store a new airplane
//! - `GET    /airplane/:id`  fetch an airplane
//! - `PUT    /airplane/:id`  update its next destination
//! - `DELETE /airplane/:id`  delete it
//!
//! Handlers only extract, delegate to the [`RecordService`] and render.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};

use super::errors::{ApiError, ApiResult};
use crate::observability::{log_event, Event};
use crate::service::{
    AirplaneId, AirplaneRecord, CreateAirplaneRequest, DeletionConfirmation, RecordService,
    UpdateAirplaneRequest,
};

/// Create airplane routes
pub fn airplane_routes(service: RecordService) -> Router {
    Router::new()
        .route("/airplane", post(create_airplane_handler))
        .route(
            "/airplane/:id",
            get(get_airplane_handler)
                .put(update_airplane_handler)
                .delete(delete_airplane_handler),
        )
        .with_state(service)
}

fn parse_id(raw: &str) -> ApiResult<AirplaneId> {
    raw.parse::<AirplaneId>().map_err(|e| {
        log_event(Event::InvalidIdentifier, &[("id", raw)]);
        ApiError::from(e)
    })
}

async fn create_airplane_handler(
    State(service): State<RecordService>,
    payload: Result<Json<CreateAirplaneRequest>, JsonRejection>,
) -> ApiResult<Json<AirplaneRecord>> {
    let Json(request) = payload?;
    Ok(Json(service.create(&request)?))
}

async fn get_airplane_handler(
    State(service): State<RecordService>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<AirplaneRecord>> {
    let id = parse_id(&raw_id)?;
    Ok(Json(service.read(id)?))
}

async fn update_airplane_handler(
    State(service): State<RecordService>,
    Path(raw_id): Path<String>,
    payload: Result<Json<UpdateAirplaneRequest>, JsonRejection>,
) -> ApiResult<Json<AirplaneRecord>> {
    let id = parse_id(&raw_id)?;
    // Unknown ids are reported as not found even when the body is bad.
    service.ensure_exists(id)?;
    let Json(request) = payload?;
    Ok(Json(service.update(id, &request)?))
}

async fn delete_airplane_handler(
    State(service): State<RecordService>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<DeletionConfirmation>> {
    let id = parse_id(&raw_id)?;
    Ok(Json(service.delete(id)?))
}

