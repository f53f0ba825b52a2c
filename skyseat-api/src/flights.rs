use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use skyseat_core::{Flight, FlightFilter};
use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/flights", get(list_flights))
        .route("/api/flights/{id}", get(get_flight))
}

/// GET /api/flights?destination=&date=&max_price=&max_duration_hours=
async fn list_flights(
    State(state): State<AppState>,
    Query(filter): Query<FlightFilter>,
) -> Result<Json<Vec<Flight>>, AppError> {
    let flights = state.catalog.list_flights().await?;
    let matching = filter.apply(&flights);
    tracing::debug!("{} of {} flights match {:?}", matching.len(), flights.len(), filter);

    Ok(Json(matching))
}

/// GET /api/flights/{id}
async fn get_flight(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Flight>, AppError> {
    Ok(Json(fetch_flight(&state, id).await?))
}

pub(crate) async fn fetch_flight(state: &AppState, id: i64) -> Result<Flight, AppError> {
    state
        .catalog
        .get_flight(id)
        .await?
        .ok_or_else(|| AppError::NotFoundError(format!("Flight not found: {}", id)))
}
