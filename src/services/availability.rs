//! Availability calculation
//!
//! A day is cut into 30-minute slots from the schedule's start (inclusive) to
//! its end (exclusive). A slot counts as taken only when an appointment starts
//! at exactly the same `HH:MM`; appointments that merely overlap a slot do not
//! mark it.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Datelike, Duration, NaiveDate, NaiveTime};

use crate::{
    error::AppResult,
    models::appointment::{Appointment, TimeSlot},
    repository::{AppointmentStore, ScheduleStore},
};

/// Slot length in minutes
pub const SLOT_MINUTES: i64 = 30;

/// Schedule day index for a date (0=Sunday, 6=Saturday)
pub fn day_of_week(date: NaiveDate) -> i16 {
    date.weekday().num_days_from_sunday() as i16
}

/// Build the slot list for one working window
pub fn generate_slots(start: NaiveTime, end: NaiveTime, appointments: &[Appointment]) -> Vec<TimeSlot> {
    let taken: HashSet<String> = appointments
        .iter()
        .filter(|a| a.status.occupies_slot())
        .map(|a| a.start_time.format("%H:%M").to_string())
        .collect();

    let mut slots = Vec::new();
    let mut current = start;
    while current < end {
        let time = current.format("%H:%M").to_string();
        let is_taken = taken.contains(&time);
        slots.push(TimeSlot {
            time,
            available: !is_taken,
            is_priority_eligible: is_taken,
        });

        let (next, wrapped) = current.overflowing_add_signed(Duration::minutes(SLOT_MINUTES));
        if wrapped != 0 {
            break;
        }
        current = next;
    }
    slots
}

#[derive(Clone)]
pub struct AvailabilityService {
    schedules: Arc<dyn ScheduleStore>,
    appointments: Arc<dyn AppointmentStore>,
}

impl AvailabilityService {
    pub fn new(schedules: Arc<dyn ScheduleStore>, appointments: Arc<dyn AppointmentStore>) -> Self {
        Self { schedules, appointments }
    }

    /// Bookable slots of a barber on a date; empty when the barber is off
    pub async fn get_availability(&self, barber_id: i32, date: NaiveDate) -> AppResult<Vec<TimeSlot>> {
        let schedule = match self.schedules.schedule_for_day(barber_id, day_of_week(date)).await? {
            Some(schedule) if schedule.is_working => schedule,
            _ => return Ok(Vec::new()),
        };

        if self.schedules.has_date_exception(barber_id, date).await? {
            tracing::debug!(barber_id, %date, "Date blocked, no availability");
            return Ok(Vec::new());
        }

        let appointments = self.appointments.active_appointments_on(barber_id, date).await?;
        Ok(generate_slots(schedule.start_time, schedule.end_time, &appointments))
    }
}
