use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::errors::AppError;
use crate::handlers::ApiResponse;
use crate::models::{Booking, BookingPatch, BookingStats, CreateBooking};
use crate::services::bookings;
use crate::state::AppState;

// GET /api/bookings
pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<Booking>>>, AppError> {
    let bookings = bookings::get_all(state.store.as_ref()).await?;
    Ok(Json(ApiResponse::success(bookings)))
}

// GET /api/bookings/:id
pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Booking>>, AppError> {
    let booking = bookings::get_by_id(state.store.as_ref(), &id).await?;
    Ok(Json(ApiResponse::success(booking)))
}

// POST /api/bookings
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(input): Json<CreateBooking>,
) -> Result<(StatusCode, Json<ApiResponse<Booking>>), AppError> {
    let booking = bookings::create(state.store.as_ref(), state.clock.as_ref(), input).await?;
    tracing::info!(id = %booking.id, date = %booking.date, time = %booking.time, "booking created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            booking,
            "Booking created successfully",
        )),
    ))
}

// PUT /api/bookings/:id
pub async fn update_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<BookingPatch>,
) -> Result<Json<ApiResponse<Booking>>, AppError> {
    let booking = bookings::update(
        state.store.as_ref(),
        state.clock.as_ref(),
        state.config.validate_updates,
        &id,
        patch,
    )
    .await?;
    tracing::info!(id = %booking.id, "booking updated");

    Ok(Json(ApiResponse::success_with_message(
        booking,
        "Booking updated successfully",
    )))
}

// DELETE /api/bookings/:id
pub async fn delete_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<bool>>, AppError> {
    bookings::delete(state.store.as_ref(), &id).await?;
    tracing::info!(id = %id, "booking deleted");

    Ok(Json(ApiResponse::success_with_message(
        true,
        "Booking deleted successfully",
    )))
}

// GET /api/bookings/stats
pub async fn booking_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<BookingStats>>, AppError> {
    let stats = bookings::stats(state.store.as_ref(), state.clock.as_ref()).await?;
    Ok(Json(ApiResponse::success(stats)))
}
