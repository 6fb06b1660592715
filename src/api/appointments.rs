//! Appointment endpoints (booking, status workflow, listings)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::appointment::{
        Appointment, AppointmentDetails, CreateAppointment, UpdateAppointmentStatus,
    },
};

use super::AuthenticatedBarber;

/// Book an appointment
#[utoipa::path(
    post,
    path = "/appointments",
    tag = "appointments",
    request_body = CreateAppointment,
    responses(
        (status = 201, description = "Appointment requested (PENDING)", body = Appointment),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 404, description = "Unknown barber or service", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_appointment(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateAppointment>,
) -> AppResult<(StatusCode, Json<Appointment>)> {
    let appointment = state.services.booking.create_appointment(&data).await?;
    Ok((StatusCode::CREATED, Json(appointment)))
}

/// Change an appointment status
#[utoipa::path(
    put,
    path = "/appointments/{id}/status",
    tag = "appointments",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Appointment ID")),
    request_body = UpdateAppointmentStatus,
    responses(
        (status = 200, description = "Status updated", body = Appointment),
        (status = 400, description = "Status not allowed", body = crate::error::ErrorResponse),
        (status = 404, description = "Appointment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_status(
    State(state): State<crate::AppState>,
    AuthenticatedBarber(_claims): AuthenticatedBarber,
    Path(id): Path<i32>,
    Json(data): Json<UpdateAppointmentStatus>,
) -> AppResult<Json<Appointment>> {
    let appointment = state.services.appointments.update_status(id, data.status).await?;
    Ok(Json(appointment))
}

/// List all appointments
#[utoipa::path(
    get,
    path = "/appointments",
    tag = "appointments",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Appointments, most recent first", body = Vec<AppointmentDetails>)
    )
)]
pub async fn list_appointments(
    State(state): State<crate::AppState>,
    AuthenticatedBarber(_claims): AuthenticatedBarber,
) -> AppResult<Json<Vec<AppointmentDetails>>> {
    let appointments = state.services.appointments.list_all().await?;
    Ok(Json(appointments))
}

/// List a barber's appointments
#[utoipa::path(
    get,
    path = "/barbers/{id}/appointments",
    tag = "appointments",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Barber ID")),
    responses(
        (status = 200, description = "Appointments, oldest first", body = Vec<AppointmentDetails>)
    )
)]
pub async fn list_barber_appointments(
    State(state): State<crate::AppState>,
    AuthenticatedBarber(_claims): AuthenticatedBarber,
    Path(barber_id): Path<i32>,
) -> AppResult<Json<Vec<AppointmentDetails>>> {
    let appointments = state.services.appointments.list_for_barber(barber_id).await?;
    Ok(Json(appointments))
}
