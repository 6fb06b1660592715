//! Schedule models (weekly hours, date exceptions)

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Opening time used when a schedule row is created without one
pub const DEFAULT_START_TIME: &str = "10:00";
/// Closing time used when a schedule row is created without one
pub const DEFAULT_END_TIME: &str = "17:00";

// ---------------------------------------------------------------------------
// Schedule
// ---------------------------------------------------------------------------

/// Working hours of a barber for one weekday
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Schedule {
    pub id: i32,
    pub barber_id: i32,
    /// Day of week (0=Sunday, 6=Saturday)
    pub day_of_week: i16,
    pub is_working: bool,
    #[schema(value_type = String, example = "10:00")]
    pub start_time: NaiveTime,
    #[schema(value_type = String, example = "17:00")]
    pub end_time: NaiveTime,
}

/// Upsert request for one weekday of a barber's schedule
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateBarberSchedule {
    pub is_working: bool,
    /// Start time (HH:MM)
    pub start_time: Option<String>,
    /// End time (HH:MM)
    pub end_time: Option<String>,
}

/// Full update of a schedule row by ID
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateSchedule {
    /// Start time (HH:MM)
    pub start_time: String,
    /// End time (HH:MM)
    pub end_time: String,
    pub is_working: bool,
}

/// Parsed form of [`UpdateBarberSchedule`], handed to the store
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleChange {
    pub is_working: bool,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
}

// ---------------------------------------------------------------------------
// DateException
// ---------------------------------------------------------------------------

/// A whole day on which a barber takes no bookings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct DateException {
    pub id: i32,
    pub barber_id: i32,
    pub date: NaiveDate,
    pub reason: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Block date request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BlockDateRequest {
    /// Date to block (YYYY-MM-DD)
    pub date: String,
    pub reason: Option<String>,
}

/// Block time range request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BlockTimeSlotRequest {
    /// Date (YYYY-MM-DD)
    pub date: String,
    /// Range start (HH:MM)
    pub start_time: String,
    /// Range end (HH:MM)
    pub end_time: String,
}

/// Result of an unblock request
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UnblockDateResponse {
    /// Number of exceptions removed
    pub removed: u64,
}

// ---------------------------------------------------------------------------
// Parsing helpers
// ---------------------------------------------------------------------------

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(value: &str, field: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("Invalid {} (use YYYY-MM-DD)", field)))
}

/// Parse an `HH:MM` wall-clock time
pub fn parse_time(value: &str, field: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|_| AppError::Validation(format!("Invalid {} (use HH:MM)", field)))
}
