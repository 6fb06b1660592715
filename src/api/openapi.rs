//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{appointments, auth, blocking, catalog, health, schedules};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shear Magic API",
        version = "1.0.0",
        description = "Barbershop booking REST API",
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::me,
        auth::logout,
        // Catalog
        catalog::list_barbers,
        catalog::list_services,
        catalog::get_availability,
        // Appointments
        appointments::create_appointment,
        appointments::update_status,
        appointments::list_appointments,
        appointments::list_barber_appointments,
        // Blocking
        blocking::list_blocked_dates,
        blocking::block_date,
        blocking::unblock_date,
        blocking::block_time_slot,
        // Schedules
        schedules::get_barber_schedule,
        schedules::update_barber_schedule,
        schedules::list_schedules,
        schedules::update_schedule,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            auth::LogoutResponse,
            crate::models::user::SessionBarber,
            // Catalog
            crate::models::catalog::Barber,
            crate::models::catalog::Service,
            crate::models::appointment::TimeSlot,
            crate::models::appointment::AvailabilityQuery,
            // Appointments
            crate::models::appointment::Appointment,
            crate::models::appointment::AppointmentDetails,
            crate::models::appointment::AppointmentStatus,
            crate::models::appointment::CreateAppointment,
            crate::models::appointment::UpdateAppointmentStatus,
            // Blocking
            crate::models::schedule::DateException,
            crate::models::schedule::BlockDateRequest,
            crate::models::schedule::BlockTimeSlotRequest,
            crate::models::schedule::UnblockDateResponse,
            // Schedules
            crate::models::schedule::Schedule,
            crate::models::schedule::UpdateBarberSchedule,
            crate::models::schedule::UpdateSchedule,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Barber authentication"),
        (name = "catalog", description = "Barbers, services and availability"),
        (name = "appointments", description = "Booking and status workflow"),
        (name = "blocking", description = "Blocked dates and time ranges"),
        (name = "schedules", description = "Weekly working hours")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
