//! Customer booking

use std::sync::Arc;

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;
use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        appointment::{Appointment, AppointmentStatus, CreateAppointment, NewAppointment},
        schedule::{parse_date, parse_time},
    },
    repository::{AppointmentStore, CatalogStore},
    services::{
        catalog::CatalogService,
        notification::{AppointmentNotification, NotificationSender},
    },
};

/// Flat surcharge for squeezing into an already booked slot
pub const PRIORITY_SURCHARGE: i64 = 15;

/// Price of a booking: base price, plus the surcharge when priority
pub fn total_price(base: Decimal, is_priority: bool) -> Decimal {
    if is_priority {
        base + Decimal::from(PRIORITY_SURCHARGE)
    } else {
        base
    }
}

/// End of an appointment starting at `start` and lasting `duration_minutes`
pub fn end_time(start: NaiveDateTime, duration_minutes: i32) -> NaiveDateTime {
    start + Duration::minutes(i64::from(duration_minutes))
}

#[derive(Clone)]
pub struct BookingService {
    catalog: CatalogService,
    appointments: Arc<dyn AppointmentStore>,
    notifier: Arc<dyn NotificationSender>,
}

impl BookingService {
    pub fn new(
        catalog: Arc<dyn CatalogStore>,
        appointments: Arc<dyn AppointmentStore>,
        notifier: Arc<dyn NotificationSender>,
    ) -> Self {
        Self {
            catalog: CatalogService::new(catalog),
            appointments,
            notifier,
        }
    }

    /// Create a PENDING appointment and notify the barber
    pub async fn create_appointment(&self, request: &CreateAppointment) -> AppResult<Appointment> {
        request.validate()?;
        let date = parse_date(&request.date, "date")?;
        let time = parse_time(&request.time, "time")?;
        let start = date.and_time(time);

        let service = self.catalog.get_service(request.service_id).await?;
        let barber = self.catalog.get_barber(request.barber_id).await?;

        let data = NewAppointment {
            barber_id: barber.id,
            service_id: Some(service.id),
            start_time: start,
            end_time: end_time(start, service.duration),
            customer_name: request.customer_name.trim().to_string(),
            customer_phone: request.customer_phone.trim().to_string(),
            customer_email: request
                .customer_email
                .as_deref()
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(str::to_string),
            is_priority: request.is_priority,
            total_price: total_price(service.price, request.is_priority),
            status: AppointmentStatus::Pending,
            notes: None,
        };

        let appointment = self.appointments.insert_appointment(&data).await?;
        tracing::info!(
            appointment_id = appointment.id,
            barber_id = barber.id,
            start_time = %appointment.start_time,
            is_priority = appointment.is_priority,
            "Appointment requested"
        );

        let notification = AppointmentNotification {
            appointment_id: appointment.id,
            barber_name: barber.name,
            customer_name: appointment.customer_name.clone(),
            customer_phone: appointment.customer_phone.clone(),
            service_name: service.name,
            start_time: appointment.start_time,
            is_priority: appointment.is_priority,
        };
        if let Err(e) = self.notifier.appointment_requested(&notification).await {
            tracing::warn!(appointment_id = appointment.id, "Notification not delivered: {}", e);
        }

        Ok(appointment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::catalog::{Barber, Service};
    use crate::repository::{appointments::MockAppointmentStore, catalog::MockCatalogStore};
    use crate::services::notification::MockNotificationSender;
    use chrono::NaiveDate;

    fn request(is_priority: bool) -> CreateAppointment {
        CreateAppointment {
            barber_id: 2,
            service_id: 1,
            date: "2025-03-14".into(),
            time: "10:30".into(),
            customer_name: "Marcus".into(),
            customer_phone: "555-0101".into(),
            customer_email: Some("marcus@example.com".into()),
            is_priority,
        }
    }

    fn catalog() -> MockCatalogStore {
        let mut store = MockCatalogStore::new();
        store.expect_get_service().returning(|id| {
            Ok((id == 1).then(|| Service {
                id: 1,
                name: "Adult Haircut".into(),
                price: Decimal::from(20),
                duration: 45,
                description: "Classic haircut".into(),
            }))
        });
        store.expect_get_barber().returning(|id| {
            Ok(Some(Barber {
                id,
                name: "Darrien Berkins".into(),
                title: "Barber".into(),
                bio: "Fades".into(),
                image_url: None,
            }))
        });
        store
    }

    fn echo_store() -> MockAppointmentStore {
        let mut store = MockAppointmentStore::new();
        store.expect_insert_appointment().times(1).returning(|data| {
            Ok(Appointment {
                id: 42,
                barber_id: data.barber_id,
                service_id: data.service_id,
                start_time: data.start_time,
                end_time: data.end_time,
                customer_name: data.customer_name.clone(),
                customer_phone: data.customer_phone.clone(),
                customer_email: data.customer_email.clone(),
                is_priority: data.is_priority,
                total_price: data.total_price,
                status: data.status,
                notes: data.notes.clone(),
                created_at: None,
            })
        });
        store
    }

    fn ok_notifier() -> MockNotificationSender {
        let mut notifier = MockNotificationSender::new();
        notifier.expect_appointment_requested().returning(|_| Ok(()));
        notifier
    }

    #[test]
    fn test_total_price() {
        assert_eq!(total_price(Decimal::from(20), true), Decimal::from(35));
        assert_eq!(total_price(Decimal::from(20), false), Decimal::from(20));
        assert_eq!(total_price(Decimal::new(2250, 2), true), Decimal::new(3750, 2));
    }

    #[test]
    fn test_end_time() {
        let start = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap().and_hms_opt(16, 30, 0).unwrap();
        assert_eq!(end_time(start, 45).format("%H:%M").to_string(), "17:15");
    }

    #[tokio::test]
    async fn test_create_priority_appointment() {
        let service = BookingService::new(
            Arc::new(catalog()),
            Arc::new(echo_store()),
            Arc::new(ok_notifier()),
        );

        let appointment = service.create_appointment(&request(true)).await.unwrap();
        assert_eq!(appointment.total_price, Decimal::from(35));
        assert_eq!(appointment.status, AppointmentStatus::Pending);
        assert_eq!(appointment.start_time.format("%Y-%m-%d %H:%M").to_string(), "2025-03-14 10:30");
        assert_eq!(appointment.end_time.format("%H:%M").to_string(), "11:15");
        assert!(appointment.is_priority);
    }

    #[tokio::test]
    async fn test_create_regular_appointment() {
        let service = BookingService::new(
            Arc::new(catalog()),
            Arc::new(echo_store()),
            Arc::new(ok_notifier()),
        );

        let appointment = service.create_appointment(&request(false)).await.unwrap();
        assert_eq!(appointment.total_price, Decimal::from(20));
        assert_eq!(appointment.status, AppointmentStatus::Pending);
    }

    #[tokio::test]
    async fn test_unknown_service_writes_nothing() {
        let mut appointments = MockAppointmentStore::new();
        appointments.expect_insert_appointment().never();
        let mut notifier = MockNotificationSender::new();
        notifier.expect_appointment_requested().never();

        let service = BookingService::new(Arc::new(catalog()), Arc::new(appointments), Arc::new(notifier));

        let mut req = request(false);
        req.service_id = 99;
        let err = service.create_appointment(&req).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_invalid_time_writes_nothing() {
        let mut appointments = MockAppointmentStore::new();
        appointments.expect_insert_appointment().never();

        let service = BookingService::new(
            Arc::new(MockCatalogStore::new()),
            Arc::new(appointments),
            Arc::new(MockNotificationSender::new()),
        );

        let mut req = request(false);
        req.time = "half past ten".into();
        let err = service.create_appointment(&req).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_blank_name_and_phone_write_nothing() {
        let mut appointments = MockAppointmentStore::new();
        appointments.expect_insert_appointment().never();
        let mut notifier = MockNotificationSender::new();
        notifier.expect_appointment_requested().never();

        let service = BookingService::new(Arc::new(catalog()), Arc::new(appointments), Arc::new(notifier));

        let mut req = request(false);
        req.customer_name = "   ".into();
        req.customer_phone = "    ".into();
        let err = service.create_appointment(&req).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_notification_failure_is_not_propagated() {
        let mut notifier = MockNotificationSender::new();
        notifier
            .expect_appointment_requested()
            .times(1)
            .returning(|_| Err(AppError::Notification("smtp down".into())));

        let service = BookingService::new(Arc::new(catalog()), Arc::new(echo_store()), Arc::new(notifier));

        let appointment = service.create_appointment(&request(false)).await.unwrap();
        assert_eq!(appointment.id, 42);
    }

    #[tokio::test]
    async fn test_notification_names_barber_and_service() {
        let mut notifier = MockNotificationSender::new();
        notifier
            .expect_appointment_requested()
            .withf(|n| {
                n.appointment_id == 42
                    && n.barber_name == "Darrien Berkins"
                    && n.service_name == "Adult Haircut"
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = BookingService::new(Arc::new(catalog()), Arc::new(echo_store()), Arc::new(notifier));
        service.create_appointment(&request(false)).await.unwrap();
    }
}
