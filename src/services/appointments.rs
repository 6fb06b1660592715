//! Appointment status workflow and listings

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::appointment::{Appointment, AppointmentDetails, AppointmentStatus},
    repository::AppointmentStore,
};

#[derive(Clone)]
pub struct AppointmentsService {
    store: Arc<dyn AppointmentStore>,
}

impl AppointmentsService {
    pub fn new(store: Arc<dyn AppointmentStore>) -> Self {
        Self { store }
    }

    /// Set an appointment to CONFIRMED, DENIED or CANCELLED.
    ///
    /// The current status is not checked: any of the three targets is written
    /// over whatever the row holds, and repeating a change is not an error.
    pub async fn update_status(&self, id: i32, status: AppointmentStatus) -> AppResult<Appointment> {
        if !status.is_workflow_target() {
            return Err(AppError::Validation(format!(
                "Status {} cannot be set here (use CONFIRMED, DENIED or CANCELLED)",
                status
            )));
        }

        let appointment = self.store.set_appointment_status(id, status).await?;
        tracing::info!(appointment_id = id, %status, "Appointment status updated");
        Ok(appointment)
    }

    pub async fn list_all(&self) -> AppResult<Vec<AppointmentDetails>> {
        self.store.list_appointments().await
    }

    pub async fn list_for_barber(&self, barber_id: i32) -> AppResult<Vec<AppointmentDetails>> {
        self.store.list_barber_appointments(barber_id).await
    }
}
