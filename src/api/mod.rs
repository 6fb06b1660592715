//! API handlers for Shear Magic REST endpoints

pub mod appointments;
pub mod auth;
pub mod blocking;
pub mod catalog;
pub mod health;
pub mod openapi;
pub mod schedules;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    routing::{delete, get, post, put},
    Router,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, models::user::SessionClaims, AppState};

/// Extractor for the logged-in barber, from the bearer session token
pub struct AuthenticatedBarber(pub SessionClaims);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedBarber {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError::Authentication("Missing or malformed authorization header".to_string()))?;

        let claims = state.services.auth.validate_token(bearer.token())?;
        Ok(AuthenticatedBarber(claims))
    }
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Authentication
        .route("/auth/login", post(auth::login))
        .route("/auth/me", get(auth::me))
        .route("/auth/logout", post(auth::logout))
        // Catalog & availability
        .route("/barbers", get(catalog::list_barbers))
        .route("/services", get(catalog::list_services))
        .route("/barbers/:id/availability", get(catalog::get_availability))
        // Appointments
        .route("/appointments", post(appointments::create_appointment))
        .route("/appointments", get(appointments::list_appointments))
        .route("/appointments/:id/status", put(appointments::update_status))
        .route("/barbers/:id/appointments", get(appointments::list_barber_appointments))
        // Blocking
        .route("/barbers/:id/blocked-dates", get(blocking::list_blocked_dates))
        .route("/barbers/:id/blocked-dates", post(blocking::block_date))
        .route("/barbers/:id/blocked-dates/:date", delete(blocking::unblock_date))
        .route("/barbers/:id/blocked-slots", post(blocking::block_time_slot))
        // Schedules
        .route("/barbers/:id/schedule", get(schedules::get_barber_schedule))
        .route("/barbers/:id/schedule/:day_of_week", put(schedules::update_barber_schedule))
        .route("/schedules", get(schedules::list_schedules))
        .route("/schedules/:id", put(schedules::update_schedule))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors),
        )
}
