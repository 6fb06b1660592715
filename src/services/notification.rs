//! Booking notifications
//!
//! Booking only sees the [`NotificationSender`] trait. The log sender is the
//! default; the email sender delivers over SMTP to the shop inbox.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use lettre::{
    message::{header::ContentType, Mailbox, Message, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Tokio1Executor,
};
use std::{str::FromStr, time::Duration};

use crate::{
    config::EmailConfig,
    error::{AppError, AppResult},
};

/// Everything a barber needs to know about a new request
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentNotification {
    pub appointment_id: i32,
    pub barber_name: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub service_name: String,
    pub start_time: NaiveDateTime,
    pub is_priority: bool,
}

impl AppointmentNotification {
    fn subject(&self) -> String {
        format!("New appointment request for {}", self.barber_name)
    }

    fn body(&self) -> String {
        format!(
            r#"
New appointment request for {barber}

Customer: {customer}
Phone: {phone}
Service: {service}
Date/Time: {when}
Priority: {priority}
Status: PENDING - awaiting confirmation
"#,
            barber = self.barber_name,
            customer = self.customer_name,
            phone = self.customer_phone,
            service = self.service_name,
            when = self.start_time.format("%A %-d %B %Y, %H:%M"),
            priority = if self.is_priority { "yes" } else { "no" },
        )
    }
}

/// Escape text for inclusion in an HTML document
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// HTML alternative of a plain-text body; customer fields are untrusted
fn html_body(body: &str) -> String {
    format!(
        r#"<html><body><pre>{}</pre></body></html>"#,
        escape_html(body).replace('\n', "<br>")
    )
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn appointment_requested(&self, notification: &AppointmentNotification) -> AppResult<()>;
}

/// Writes notifications to the application log
#[derive(Clone, Default)]
pub struct LogNotifier;

#[async_trait]
impl NotificationSender for LogNotifier {
    async fn appointment_requested(&self, n: &AppointmentNotification) -> AppResult<()> {
        tracing::info!(
            appointment_id = n.appointment_id,
            barber = %n.barber_name,
            customer = %n.customer_name,
            phone = %n.customer_phone,
            service = %n.service_name,
            start_time = %n.start_time,
            is_priority = n.is_priority,
            "New appointment request (PENDING, awaiting confirmation)"
        );
        Ok(())
    }
}

/// Sends notifications by email
#[derive(Clone)]
pub struct EmailNotifier {
    config: EmailConfig,
    recipient: String,
}

impl EmailNotifier {
    pub fn new(config: EmailConfig, recipient: String) -> Self {
        Self { config, recipient }
    }

    async fn send_email(&self, subject: &str, body: &str) -> AppResult<()> {
        let from_name = self
            .config
            .smtp_from_name
            .as_deref()
            .unwrap_or("Shear Magic");
        let from_mailbox = Mailbox::from_str(&format!("{} <{}>", from_name, self.config.smtp_from))
            .map_err(|e| AppError::Notification(format!("Invalid from address: {}", e)))?;

        let to_mailbox = Mailbox::from_str(&self.recipient)
            .map_err(|e| AppError::Notification(format!("Invalid to address: {}", e)))?;

        let email = Message::builder()
            .from(from_mailbox)
            .to(to_mailbox)
            .subject(subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(body.to_string()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(html_body(body)),
                    ),
            )
            .map_err(|e| AppError::Notification(format!("Failed to build email: {}", e)))?;

        let mailer_builder = if self.config.smtp_use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)
                .map_err(|e| AppError::Notification(format!("Failed to create SMTP transport: {}", e)))?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&self.config.smtp_host)
        }
        .port(self.config.smtp_port)
        .timeout(Some(Duration::from_secs(self.config.smtp_timeout_secs)));

        let mailer_builder = if let (Some(username), Some(password)) = (
            &self.config.smtp_username,
            &self.config.smtp_password,
        ) {
            mailer_builder.credentials(Credentials::new(username.clone(), password.clone()))
        } else {
            mailer_builder
        };

        mailer_builder
            .build()
            .send(email)
            .await
            .map_err(|e| AppError::Notification(format!("Failed to send email: {}", e)))?;

        Ok(())
    }
}

#[async_trait]
impl NotificationSender for EmailNotifier {
    async fn appointment_requested(&self, n: &AppointmentNotification) -> AppResult<()> {
        self.send_email(&n.subject(), &n.body()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn notification() -> AppointmentNotification {
        AppointmentNotification {
            appointment_id: 12,
            barber_name: "Darrien Berkins".into(),
            customer_name: "Marcus".into(),
            customer_phone: "555-0101".into(),
            service_name: "Adult Haircut".into(),
            start_time: NaiveDate::from_ymd_opt(2025, 3, 14)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap(),
            is_priority: true,
        }
    }

    #[test]
    fn test_body_contents() {
        let body = notification().body();
        assert!(body.contains("Customer: Marcus"));
        assert!(body.contains("Service: Adult Haircut"));
        assert!(body.contains("Friday 14 March 2025, 10:30"));
        assert!(body.contains("Priority: yes"));
        assert_eq!(notification().subject(), "New appointment request for Darrien Berkins");
    }

    #[test]
    fn test_html_body_escapes_customer_fields() {
        let mut n = notification();
        n.customer_name = "<script>alert(\"x\")</script> & Co".into();
        let html = html_body(&n.body());

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; Co"));
        assert!(html.starts_with("<html><body><pre>"));
        assert!(html.contains("<br>"));
    }

    #[tokio::test]
    async fn test_log_notifier_never_fails() {
        assert!(LogNotifier.appointment_requested(&notification()).await.is_ok());
    }

    #[tokio::test]
    async fn test_email_notifier_rejects_bad_recipient() {
        let notifier = EmailNotifier::new(EmailConfig::default(), "not an address".into());
        let err = notifier.appointment_requested(&notification()).await.unwrap_err();
        assert!(matches!(err, AppError::Notification(_)));
    }
}
