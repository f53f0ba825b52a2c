use std::collections::BTreeSet;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use skyseat_seating::{
    price_breakdown, total_price, AllocationStrategy, CabinClass, PreferenceRequest, PriceBreakdown,
    SeatNumber, SeatPreference,
};
use crate::{error::AppError, flights::fetch_flight, state::AppState};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct SeatView {
    pub seat: SeatNumber,
    pub row: u32,
    pub cabin: CabinClass,
    pub features: Vec<SeatPreference>,
    pub booked: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SeatChartResponse {
    pub flight_id: i64,
    pub row_width: u32,
    pub seats: Vec<SeatView>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub seats: Vec<SeatNumber>,
    pub strategy: AllocationStrategy,
    pub total_price: i64,
}

#[derive(Debug, Deserialize)]
pub struct PriceRequest {
    pub seats: Vec<SeatNumber>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/flights/{id}/seats", get(seat_chart))
        .route("/api/flights/{id}/recommendation", post(recommend_seats))
        .route("/api/flights/{id}/price", post(price_seats))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/flights/{id}/seats
async fn seat_chart(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<SeatChartResponse>, AppError> {
    let flight = fetch_flight(&state, id).await?;
    let seat_map = state.allocator.seat_map();

    let seats = seat_map
        .seats()
        .map(|seat| SeatView {
            seat,
            row: seat_map.row_of(seat),
            cabin: seat_map.cabin_class(seat),
            features: seat_map.features(seat),
            booked: flight.booked_seats.contains(&seat),
        })
        .collect();

    Ok(Json(SeatChartResponse {
        flight_id: flight.id,
        row_width: seat_map.row_width(),
        seats,
    }))
}

/// POST /api/flights/{id}/recommendation
async fn recommend_seats(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<PreferenceRequest>,
) -> Result<Json<RecommendationResponse>, AppError> {
    if req.party_size == 0 {
        return Err(AppError::ValidationError("party_size must be at least 1".to_string()));
    }

    let flight = fetch_flight(&state, id).await?;

    let recommendation = state
        .allocator
        .recommend(&flight.booked_seats, &req)
        .inspect_err(|e| tracing::info!("No recommendation for flight {}: {:?}", id, e))?;

    tracing::debug!(
        "Recommended {:?} on flight {} via {:?}",
        recommendation.seats,
        id,
        recommendation.strategy
    );

    let total_price = total_price(
        &recommendation.seats,
        state.allocator.seat_map().business_zone(),
        flight.economy_price,
        flight.business_price,
    );

    Ok(Json(RecommendationResponse {
        seats: recommendation.seats,
        strategy: recommendation.strategy,
        total_price,
    }))
}

/// POST /api/flights/{id}/price
/// Every seat must exist, be free and appear once
async fn price_seats(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<PriceRequest>,
) -> Result<Json<PriceBreakdown>, AppError> {
    let flight = fetch_flight(&state, id).await?;
    let seat_map = state.allocator.seat_map();

    let mut seen = BTreeSet::new();
    for &seat in &req.seats {
        if !seat_map.contains(seat) {
            return Err(AppError::ValidationError(format!("Seat {} does not exist", seat)));
        }
        if !seen.insert(seat) {
            return Err(AppError::ValidationError(format!("Seat {} is listed twice", seat)));
        }
        if flight.booked_seats.contains(&seat) {
            return Err(AppError::ConflictError(format!("Seat {} is already booked", seat)));
        }
    }

    Ok(Json(price_breakdown(seat_map, &req.seats, flight.seat_prices())))
}
