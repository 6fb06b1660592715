//! Schedules service (weekly hours)

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::schedule::{
        parse_time, Schedule, ScheduleChange, UpdateBarberSchedule, UpdateSchedule,
        DEFAULT_END_TIME, DEFAULT_START_TIME,
    },
    repository::ScheduleStore,
};

#[derive(Clone)]
pub struct SchedulesService {
    store: Arc<dyn ScheduleStore>,
}

impl SchedulesService {
    pub fn new(store: Arc<dyn ScheduleStore>) -> Self {
        Self { store }
    }

    pub async fn get_barber_schedule(&self, barber_id: i32) -> AppResult<Vec<Schedule>> {
        self.store.list_barber_schedule(barber_id).await
    }

    pub async fn list_schedules(&self) -> AppResult<Vec<Schedule>> {
        self.store.list_schedules().await
    }

    /// Upsert one weekday of a barber's schedule
    pub async fn update_barber_schedule(
        &self,
        barber_id: i32,
        day_of_week: i16,
        data: &UpdateBarberSchedule,
    ) -> AppResult<Schedule> {
        if !(0..=6).contains(&day_of_week) {
            return Err(AppError::Validation(
                "day_of_week must be between 0 (Sunday) and 6 (Saturday)".to_string(),
            ));
        }

        let change = ScheduleChange {
            is_working: data.is_working,
            start_time: data.start_time.as_deref().map(|t| parse_time(t, "start_time")).transpose()?,
            end_time: data.end_time.as_deref().map(|t| parse_time(t, "end_time")).transpose()?,
        };

        // A missing time keeps the stored value, or the default on insert
        let (start, end) = match (change.start_time, change.end_time) {
            (Some(start), Some(end)) => (start, end),
            (start, end) => {
                let existing = self.store.schedule_for_day(barber_id, day_of_week).await?;
                let stored_start = existing.as_ref().map(|s| s.start_time);
                let stored_end = existing.as_ref().map(|s| s.end_time);
                (
                    match start.or(stored_start) {
                        Some(start) => start,
                        None => parse_time(DEFAULT_START_TIME, "start_time")?,
                    },
                    match end.or(stored_end) {
                        Some(end) => end,
                        None => parse_time(DEFAULT_END_TIME, "end_time")?,
                    },
                )
            }
        };
        if end <= start {
            return Err(AppError::Validation("end_time must be after start_time".to_string()));
        }

        let schedule = self.store.upsert_schedule(barber_id, day_of_week, &change).await?;
        tracing::info!(barber_id, day_of_week, is_working = schedule.is_working, "Schedule updated");
        Ok(schedule)
    }

    /// Replace the hours of a schedule row by ID
    pub async fn update_schedule(&self, id: i32, data: &UpdateSchedule) -> AppResult<Schedule> {
        let start = parse_time(&data.start_time, "start_time")?;
        let end = parse_time(&data.end_time, "end_time")?;
        if end <= start {
            return Err(AppError::Validation("end_time must be after start_time".to_string()));
        }

        let change = ScheduleChange {
            is_working: data.is_working,
            start_time: Some(start),
            end_time: Some(end),
        };
        self.store.update_schedule(id, &change).await
    }
}
