//! Blocking endpoints (dates, time ranges)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        appointment::Appointment,
        schedule::{parse_date, BlockDateRequest, BlockTimeSlotRequest, DateException, UnblockDateResponse},
    },
};

use super::AuthenticatedBarber;

/// List blocked dates of a barber
#[utoipa::path(
    get,
    path = "/barbers/{id}/blocked-dates",
    tag = "blocking",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Barber ID")),
    responses(
        (status = 200, description = "Blocked dates", body = Vec<DateException>)
    )
)]
pub async fn list_blocked_dates(
    State(state): State<crate::AppState>,
    AuthenticatedBarber(_claims): AuthenticatedBarber,
    Path(barber_id): Path<i32>,
) -> AppResult<Json<Vec<DateException>>> {
    let dates = state.services.blocking.list_blocked_dates(barber_id).await?;
    Ok(Json(dates))
}

/// Block a whole date
#[utoipa::path(
    post,
    path = "/barbers/{id}/blocked-dates",
    tag = "blocking",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Barber ID")),
    request_body = BlockDateRequest,
    responses(
        (status = 201, description = "Date blocked", body = DateException)
    )
)]
pub async fn block_date(
    State(state): State<crate::AppState>,
    AuthenticatedBarber(_claims): AuthenticatedBarber,
    Path(barber_id): Path<i32>,
    Json(data): Json<BlockDateRequest>,
) -> AppResult<(StatusCode, Json<DateException>)> {
    let date = parse_date(&data.date, "date")?;
    let exception = state
        .services
        .blocking
        .block_date(barber_id, date, data.reason.as_deref())
        .await?;
    Ok((StatusCode::CREATED, Json(exception)))
}

/// Unblock a date
#[utoipa::path(
    delete,
    path = "/barbers/{id}/blocked-dates/{date}",
    tag = "blocking",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Barber ID"),
        ("date" = String, Path, description = "Date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Blocks removed", body = UnblockDateResponse)
    )
)]
pub async fn unblock_date(
    State(state): State<crate::AppState>,
    AuthenticatedBarber(_claims): AuthenticatedBarber,
    Path((barber_id, date)): Path<(i32, String)>,
) -> AppResult<Json<UnblockDateResponse>> {
    let date = parse_date(&date, "date")?;
    let removed = state.services.blocking.unblock_date(barber_id, date).await?;
    Ok(Json(UnblockDateResponse { removed }))
}

/// Block a time range
#[utoipa::path(
    post,
    path = "/barbers/{id}/blocked-slots",
    tag = "blocking",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Barber ID")),
    request_body = BlockTimeSlotRequest,
    responses(
        (status = 201, description = "Range blocked", body = Appointment)
    )
)]
pub async fn block_time_slot(
    State(state): State<crate::AppState>,
    AuthenticatedBarber(_claims): AuthenticatedBarber,
    Path(barber_id): Path<i32>,
    Json(data): Json<BlockTimeSlotRequest>,
) -> AppResult<(StatusCode, Json<Appointment>)> {
    let date = parse_date(&data.date, "date")?;
    let blocked = state
        .services
        .blocking
        .block_time_slot(barber_id, date, &data.start_time, &data.end_time)
        .await?;
    Ok((StatusCode::CREATED, Json(blocked)))
}
