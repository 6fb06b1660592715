//! Weekly schedules and date exceptions

use async_trait::async_trait;
use chrono::NaiveDate;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::schedule::{
        DateException, Schedule, ScheduleChange, DEFAULT_END_TIME, DEFAULT_START_TIME,
    },
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    // ---- Schedules ----
    async fn schedule_for_day(&self, barber_id: i32, day_of_week: i16) -> AppResult<Option<Schedule>>;
    async fn list_barber_schedule(&self, barber_id: i32) -> AppResult<Vec<Schedule>>;
    async fn list_schedules(&self) -> AppResult<Vec<Schedule>>;
    async fn upsert_schedule(
        &self,
        barber_id: i32,
        day_of_week: i16,
        change: &ScheduleChange,
    ) -> AppResult<Schedule>;
    async fn update_schedule(&self, id: i32, change: &ScheduleChange) -> AppResult<Schedule>;

    // ---- Date exceptions ----
    async fn has_date_exception(&self, barber_id: i32, date: NaiveDate) -> AppResult<bool>;
    async fn list_date_exceptions(&self, barber_id: i32) -> AppResult<Vec<DateException>>;
    async fn create_date_exception(
        &self,
        barber_id: i32,
        date: NaiveDate,
        reason: &str,
    ) -> AppResult<DateException>;
    async fn delete_date_exceptions(&self, barber_id: i32, date: NaiveDate) -> AppResult<u64>;
}

#[async_trait]
impl ScheduleStore for Repository {
    async fn schedule_for_day(&self, barber_id: i32, day_of_week: i16) -> AppResult<Option<Schedule>> {
        let row = sqlx::query_as::<_, Schedule>(
            "SELECT * FROM schedules WHERE barber_id = $1 AND day_of_week = $2"
        )
        .bind(barber_id)
        .bind(day_of_week)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_barber_schedule(&self, barber_id: i32) -> AppResult<Vec<Schedule>> {
        let rows = sqlx::query_as::<_, Schedule>(
            "SELECT * FROM schedules WHERE barber_id = $1 ORDER BY day_of_week"
        )
        .bind(barber_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_schedules(&self) -> AppResult<Vec<Schedule>> {
        let rows = sqlx::query_as::<_, Schedule>(
            "SELECT * FROM schedules ORDER BY barber_id, day_of_week"
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert or update one weekday; missing times fall back to the defaults on
    /// insert and keep their stored value on update
    async fn upsert_schedule(
        &self,
        barber_id: i32,
        day_of_week: i16,
        change: &ScheduleChange,
    ) -> AppResult<Schedule> {
        let query = format!(
            r#"
            INSERT INTO schedules (barber_id, day_of_week, is_working, start_time, end_time)
            VALUES ($1, $2, $3, COALESCE($4, TIME '{}'), COALESCE($5, TIME '{}'))
            ON CONFLICT (barber_id, day_of_week) DO UPDATE SET
                is_working = EXCLUDED.is_working,
                start_time = COALESCE($4, schedules.start_time),
                end_time = COALESCE($5, schedules.end_time)
            RETURNING *
            "#,
            DEFAULT_START_TIME, DEFAULT_END_TIME
        );

        let row = sqlx::query_as::<_, Schedule>(&query)
            .bind(barber_id)
            .bind(day_of_week)
            .bind(change.is_working)
            .bind(change.start_time)
            .bind(change.end_time)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update_schedule(&self, id: i32, change: &ScheduleChange) -> AppResult<Schedule> {
        sqlx::query_as::<_, Schedule>(
            r#"
            UPDATE schedules SET
                is_working = $2,
                start_time = COALESCE($3, start_time),
                end_time = COALESCE($4, end_time)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(change.is_working)
        .bind(change.start_time)
        .bind(change.end_time)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Schedule {} not found", id)))
    }

    async fn has_date_exception(&self, barber_id: i32, date: NaiveDate) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM date_exceptions WHERE barber_id = $1 AND date = $2)"
        )
        .bind(barber_id)
        .bind(date)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn list_date_exceptions(&self, barber_id: i32) -> AppResult<Vec<DateException>> {
        let rows = sqlx::query_as::<_, DateException>(
            "SELECT * FROM date_exceptions WHERE barber_id = $1 ORDER BY date"
        )
        .bind(barber_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn create_date_exception(
        &self,
        barber_id: i32,
        date: NaiveDate,
        reason: &str,
    ) -> AppResult<DateException> {
        let row = sqlx::query_as::<_, DateException>(
            "INSERT INTO date_exceptions (barber_id, date, reason) VALUES ($1, $2, $3) RETURNING *"
        )
        .bind(barber_id)
        .bind(date)
        .bind(reason)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Delete every exception of the barber on that date
    async fn delete_date_exceptions(&self, barber_id: i32, date: NaiveDate) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM date_exceptions WHERE barber_id = $1 AND date = $2")
            .bind(barber_id)
            .bind(date)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
