//! Blocking of whole dates and time ranges
//!
//! Whole dates go to `date_exceptions`. Partial days are stored as BLOCKED
//! appointments with placeholder customer fields, outside the schedule
//! window check. The two mechanisms are independent.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{
    error::{AppError, AppResult},
    models::{
        appointment::{
            Appointment, AppointmentStatus, NewAppointment, BLOCKED_CUSTOMER_NAME,
            BLOCKED_CUSTOMER_PHONE, BLOCKED_NOTES,
        },
        schedule::{parse_time, DateException},
    },
    repository::{AppointmentStore, ScheduleStore},
};

/// Reason stored when an administrator gives none
pub const DEFAULT_BLOCK_REASON: &str = "Unavailable";

#[derive(Clone)]
pub struct BlockingService {
    schedules: Arc<dyn ScheduleStore>,
    appointments: Arc<dyn AppointmentStore>,
}

impl BlockingService {
    pub fn new(schedules: Arc<dyn ScheduleStore>, appointments: Arc<dyn AppointmentStore>) -> Self {
        Self { schedules, appointments }
    }

    pub async fn block_date(
        &self,
        barber_id: i32,
        date: NaiveDate,
        reason: Option<&str>,
    ) -> AppResult<DateException> {
        let reason = reason
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(DEFAULT_BLOCK_REASON);
        let exception = self.schedules.create_date_exception(barber_id, date, reason).await?;
        tracing::info!(barber_id, %date, reason, "Date blocked");
        Ok(exception)
    }

    /// Remove every block of that date, returning how many were removed
    pub async fn unblock_date(&self, barber_id: i32, date: NaiveDate) -> AppResult<u64> {
        let removed = self.schedules.delete_date_exceptions(barber_id, date).await?;
        tracing::info!(barber_id, %date, removed, "Date unblocked");
        Ok(removed)
    }

    pub async fn list_blocked_dates(&self, barber_id: i32) -> AppResult<Vec<DateException>> {
        self.schedules.list_date_exceptions(barber_id).await
    }

    pub async fn block_time_slot(
        &self,
        barber_id: i32,
        date: NaiveDate,
        start_time: &str,
        end_time: &str,
    ) -> AppResult<Appointment> {
        let start = parse_time(start_time, "start_time")?;
        let end = parse_time(end_time, "end_time")?;
        if end <= start {
            return Err(AppError::Validation("end_time must be after start_time".to_string()));
        }

        let data = NewAppointment {
            barber_id,
            service_id: None,
            start_time: date.and_time(start),
            end_time: date.and_time(end),
            customer_name: BLOCKED_CUSTOMER_NAME.to_string(),
            customer_phone: BLOCKED_CUSTOMER_PHONE.to_string(),
            customer_email: None,
            is_priority: false,
            total_price: Decimal::ZERO,
            status: AppointmentStatus::Blocked,
            notes: Some(BLOCKED_NOTES.to_string()),
        };

        let appointment = self.appointments.insert_appointment(&data).await?;
        tracing::info!(barber_id, %date, start_time, end_time, "Time range blocked");
        Ok(appointment)
    }
}
