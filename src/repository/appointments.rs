//! Appointment persistence

use async_trait::async_trait;
use chrono::NaiveDate;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::appointment::{Appointment, AppointmentDetails, AppointmentStatus, NewAppointment},
};

const DETAILS_SELECT: &str = r#"
    SELECT a.*, b.name AS barber_name, s.name AS service_name
    FROM appointments a
    JOIN barbers b ON a.barber_id = b.id
    LEFT JOIN services s ON a.service_id = s.id
"#;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    /// Appointments starting on `date` that still hold their slot
    async fn active_appointments_on(&self, barber_id: i32, date: NaiveDate) -> AppResult<Vec<Appointment>>;
    async fn insert_appointment(&self, data: &NewAppointment) -> AppResult<Appointment>;
    async fn set_appointment_status(&self, id: i32, status: AppointmentStatus) -> AppResult<Appointment>;
    async fn list_appointments(&self) -> AppResult<Vec<AppointmentDetails>>;
    async fn list_barber_appointments(&self, barber_id: i32) -> AppResult<Vec<AppointmentDetails>>;
}

#[async_trait]
impl AppointmentStore for Repository {
    async fn active_appointments_on(&self, barber_id: i32, date: NaiveDate) -> AppResult<Vec<Appointment>> {
        let rows = sqlx::query_as::<_, Appointment>(
            r#"
            SELECT * FROM appointments
            WHERE barber_id = $1
              AND start_time::date = $2
              AND status NOT IN ('CANCELLED', 'DENIED')
            ORDER BY start_time
            "#,
        )
        .bind(barber_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn insert_appointment(&self, data: &NewAppointment) -> AppResult<Appointment> {
        let row = sqlx::query_as::<_, Appointment>(
            r#"
            INSERT INTO appointments (
                barber_id, service_id, start_time, end_time,
                customer_name, customer_phone, customer_email,
                is_priority, total_price, status, notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(data.barber_id)
        .bind(data.service_id)
        .bind(data.start_time)
        .bind(data.end_time)
        .bind(&data.customer_name)
        .bind(&data.customer_phone)
        .bind(&data.customer_email)
        .bind(data.is_priority)
        .bind(data.total_price)
        .bind(data.status)
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Overwrite the status, whatever the current one is
    async fn set_appointment_status(&self, id: i32, status: AppointmentStatus) -> AppResult<Appointment> {
        sqlx::query_as::<_, Appointment>(
            "UPDATE appointments SET status = $2 WHERE id = $1 RETURNING *"
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Appointment {} not found", id)))
    }

    /// All appointments, most recent first
    async fn list_appointments(&self) -> AppResult<Vec<AppointmentDetails>> {
        let query = format!("{} ORDER BY a.start_time DESC", DETAILS_SELECT);
        let rows = sqlx::query_as::<_, AppointmentDetails>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// A barber's appointments, oldest first
    async fn list_barber_appointments(&self, barber_id: i32) -> AppResult<Vec<AppointmentDetails>> {
        let query = format!("{} WHERE a.barber_id = $1 ORDER BY a.start_time ASC", DETAILS_SELECT);
        let rows = sqlx::query_as::<_, AppointmentDetails>(&query)
            .bind(barber_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
