//! Business logic services

pub mod appointments;
pub mod auth;
pub mod availability;
pub mod blocking;
pub mod booking;
pub mod catalog;
pub mod notification;
pub mod schedules;

use std::sync::Arc;

use crate::{
    config::{AuthConfig, EmailConfig, NotificationChannel, NotificationsConfig},
    error::{AppError, AppResult},
    repository::Repository,
};
use notification::{EmailNotifier, LogNotifier, NotificationSender};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub availability: availability::AvailabilityService,
    pub booking: booking::BookingService,
    pub appointments: appointments::AppointmentsService,
    pub blocking: blocking::BlockingService,
    pub schedules: schedules::SchedulesService,
    pub auth: auth::AuthService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(
        repository: Repository,
        auth_config: AuthConfig,
        email_config: EmailConfig,
        notifications_config: NotificationsConfig,
    ) -> AppResult<Self> {
        let store = Arc::new(repository.clone());
        let notifier = build_notifier(email_config, notifications_config)?;

        Ok(Self {
            catalog: catalog::CatalogService::new(store.clone()),
            availability: availability::AvailabilityService::new(store.clone(), store.clone()),
            booking: booking::BookingService::new(store.clone(), store.clone(), notifier),
            appointments: appointments::AppointmentsService::new(store.clone()),
            blocking: blocking::BlockingService::new(store.clone(), store.clone()),
            schedules: schedules::SchedulesService::new(store.clone()),
            auth: auth::AuthService::new(store, auth_config),
            repository,
        })
    }

    /// Check that the database answers
    pub async fn ping_database(&self) -> AppResult<()> {
        self.repository.ping().await.map_err(AppError::from)
    }
}

fn build_notifier(
    email_config: EmailConfig,
    config: NotificationsConfig,
) -> AppResult<Arc<dyn NotificationSender>> {
    match config.channel {
        NotificationChannel::Log => Ok(Arc::new(LogNotifier)),
        NotificationChannel::Email => {
            let recipient = config.recipient.ok_or_else(|| {
                AppError::Internal("notifications.recipient is required for the email channel".to_string())
            })?;
            tracing::info!(%recipient, "Booking notifications sent by email");
            Ok(Arc::new(EmailNotifier::new(email_config, recipient)))
        }
    }
}
