//! Schedule API endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::schedule::{Schedule, UpdateBarberSchedule, UpdateSchedule},
};

use super::AuthenticatedBarber;

/// Weekly schedule of a barber
#[utoipa::path(
    get,
    path = "/barbers/{id}/schedule",
    tag = "schedules",
    params(("id" = i32, Path, description = "Barber ID")),
    responses(
        (status = 200, description = "Schedule rows by weekday", body = Vec<Schedule>)
    )
)]
pub async fn get_barber_schedule(
    State(state): State<crate::AppState>,
    Path(barber_id): Path<i32>,
) -> AppResult<Json<Vec<Schedule>>> {
    let schedule = state.services.schedules.get_barber_schedule(barber_id).await?;
    Ok(Json(schedule))
}

/// Set one weekday of a barber's schedule
#[utoipa::path(
    put,
    path = "/barbers/{id}/schedule/{day_of_week}",
    tag = "schedules",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Barber ID"),
        ("day_of_week" = i16, Path, description = "Day of week (0=Sunday, 6=Saturday)")
    ),
    request_body = UpdateBarberSchedule,
    responses(
        (status = 200, description = "Schedule row", body = Schedule)
    )
)]
pub async fn update_barber_schedule(
    State(state): State<crate::AppState>,
    AuthenticatedBarber(_claims): AuthenticatedBarber,
    Path((barber_id, day_of_week)): Path<(i32, i16)>,
    Json(data): Json<UpdateBarberSchedule>,
) -> AppResult<Json<Schedule>> {
    let schedule = state
        .services
        .schedules
        .update_barber_schedule(barber_id, day_of_week, &data)
        .await?;
    Ok(Json(schedule))
}

/// List every barber's schedule
#[utoipa::path(
    get,
    path = "/schedules",
    tag = "schedules",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All schedule rows", body = Vec<Schedule>)
    )
)]
pub async fn list_schedules(
    State(state): State<crate::AppState>,
    AuthenticatedBarber(_claims): AuthenticatedBarber,
) -> AppResult<Json<Vec<Schedule>>> {
    let schedules = state.services.schedules.list_schedules().await?;
    Ok(Json(schedules))
}

/// Update a schedule row
#[utoipa::path(
    put,
    path = "/schedules/{id}",
    tag = "schedules",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Schedule ID")),
    request_body = UpdateSchedule,
    responses(
        (status = 200, description = "Schedule updated", body = Schedule),
        (status = 404, description = "Schedule not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_schedule(
    State(state): State<crate::AppState>,
    AuthenticatedBarber(_claims): AuthenticatedBarber,
    Path(id): Path<i32>,
    Json(data): Json<UpdateSchedule>,
) -> AppResult<Json<Schedule>> {
    let schedule = state.services.schedules.update_schedule(id, &data).await?;
    Ok(Json(schedule))
}
