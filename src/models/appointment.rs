//! Appointment model and related types

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

/// Customer name written on administrator-blocked ranges
pub const BLOCKED_CUSTOMER_NAME: &str = "BLOCKED";
/// Customer phone written on administrator-blocked ranges
pub const BLOCKED_CUSTOMER_PHONE: &str = "--";
/// Note written on administrator-blocked ranges
pub const BLOCKED_NOTES: &str = "Blocked by barber";

/// Appointment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "appointment_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Denied,
    Cancelled,
    /// Synthetic row standing for an administrator-blocked range
    Blocked,
}

impl AppointmentStatus {
    /// Whether an administrator may set this status through the status workflow
    pub fn is_workflow_target(self) -> bool {
        matches!(
            self,
            AppointmentStatus::Confirmed | AppointmentStatus::Denied | AppointmentStatus::Cancelled
        )
    }

    /// Whether a row with this status still occupies its slot
    pub fn occupies_slot(self) -> bool {
        !matches!(self, AppointmentStatus::Cancelled | AppointmentStatus::Denied)
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AppointmentStatus::Pending => "PENDING",
            AppointmentStatus::Confirmed => "CONFIRMED",
            AppointmentStatus::Denied => "DENIED",
            AppointmentStatus::Cancelled => "CANCELLED",
            AppointmentStatus::Blocked => "BLOCKED",
        };
        write!(f, "{}", label)
    }
}

/// Appointment model from database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Appointment {
    pub id: i32,
    pub barber_id: i32,
    /// Absent for blocked ranges
    pub service_id: Option<i32>,
    #[schema(value_type = String, example = "2025-03-14T10:30:00")]
    pub start_time: NaiveDateTime,
    #[schema(value_type = String, example = "2025-03-14T11:00:00")]
    pub end_time: NaiveDateTime,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub is_priority: bool,
    pub total_price: Decimal,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Appointment with the names of its barber and service, for listings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AppointmentDetails {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub appointment: Appointment,
    pub barber_name: String,
    pub service_name: Option<String>,
}

/// Row to insert, built by the booking and blocking paths
#[derive(Debug, Clone, PartialEq)]
pub struct NewAppointment {
    pub barber_id: i32,
    pub service_id: Option<i32>,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub is_priority: bool,
    pub total_price: Decimal,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
}

/// Create appointment request (customer booking)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateAppointment {
    pub barber_id: i32,
    pub service_id: i32,
    /// Date (YYYY-MM-DD)
    pub date: String,
    /// Slot start (HH:MM)
    pub time: String,
    #[validate(
        length(min = 1, max = 120, message = "customer_name is required"),
        custom(function = "not_blank")
    )]
    pub customer_name: String,
    #[validate(
        length(min = 3, max = 40, message = "customer_phone is required"),
        custom(function = "not_blank")
    )]
    pub customer_phone: String,
    #[validate(email(message = "customer_email is not a valid email address"))]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub is_priority: bool,
}

/// Rejects values made only of whitespace; stored fields are trimmed
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// Status change request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateAppointmentStatus {
    /// One of CONFIRMED, DENIED, CANCELLED
    pub status: AppointmentStatus,
}

/// One bookable 30-minute slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TimeSlot {
    /// Slot start (HH:MM)
    pub time: String,
    pub available: bool,
    /// Slot is taken but may be booked with the priority surcharge
    pub is_priority_eligible: bool,
}

/// Query parameters for availability
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct AvailabilityQuery {
    /// Date (YYYY-MM-DD)
    pub date: String,
}
