//! Public booking endpoints (catalog, availability)

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{
        appointment::{AvailabilityQuery, TimeSlot},
        catalog::{Barber, Service},
        schedule::parse_date,
    },
};

/// List barbers
#[utoipa::path(
    get,
    path = "/barbers",
    tag = "catalog",
    responses(
        (status = 200, description = "Barbers", body = Vec<Barber>)
    )
)]
pub async fn list_barbers(State(state): State<crate::AppState>) -> Json<Vec<Barber>> {
    Json(state.services.catalog.list_barbers().await)
}

/// List services
#[utoipa::path(
    get,
    path = "/services",
    tag = "catalog",
    responses(
        (status = 200, description = "Services", body = Vec<Service>)
    )
)]
pub async fn list_services(State(state): State<crate::AppState>) -> Json<Vec<Service>> {
    Json(state.services.catalog.list_services().await)
}

/// Bookable slots of a barber on a date
#[utoipa::path(
    get,
    path = "/barbers/{id}/availability",
    tag = "catalog",
    params(
        ("id" = i32, Path, description = "Barber ID"),
        AvailabilityQuery
    ),
    responses(
        (status = 200, description = "Slots of the day, empty when closed", body = Vec<TimeSlot>),
        (status = 400, description = "Invalid date", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_availability(
    State(state): State<crate::AppState>,
    Path(barber_id): Path<i32>,
    Query(query): Query<AvailabilityQuery>,
) -> AppResult<Json<Vec<TimeSlot>>> {
    let date = parse_date(&query.date, "date")?;
    let slots = state.services.availability.get_availability(barber_id, date).await?;
    Ok(Json(slots))
}
