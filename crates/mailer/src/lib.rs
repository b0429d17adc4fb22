//! # Salonbook Mailer
//!
//! Renders and delivers transactional email. [`SendGridMailer`] posts to the
//! SendGrid v3 API; [`LogMailer`] writes the message to the log and is used
//! when no API key is configured.

pub mod config;
pub mod template;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use eyre::Result;
use reqwest::Client;
use salonbook_core::{
    errors::{BookingError, BookingResult},
    models::email::ConfirmationEmail,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use config::{MailerConfig, SalonProfile};

const SEND_TIMEOUT: Duration = Duration::from_secs(10);
const FALLBACK_MESSAGE_ID: &str = "sendgrid-success";

#[derive(Debug, Clone, PartialEq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SentEmail {
    pub message_id: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    /// Delivers `message`. Provider failures surface as `BookingError::Delivery`.
    async fn send(&self, message: EmailMessage) -> BookingResult<SentEmail>;
}

/// Renders the confirmation for `email` and hands it to `mailer`.
pub async fn send_confirmation(
    mailer: &dyn Mailer,
    salon: &SalonProfile,
    email: &ConfirmationEmail,
) -> BookingResult<SentEmail> {
    let message = EmailMessage {
        to: email.to.clone(),
        subject: template::confirmation_subject(email),
        html: template::render_confirmation_email(email, salon),
    };

    let sent = mailer.send(message).await?;
    info!(message_id = %sent.message_id, "confirmation email sent");
    Ok(sent)
}

/// Picks the provider-backed mailer when an API key is configured.
pub fn build_mailer(config: &MailerConfig) -> Result<Arc<dyn Mailer>> {
    match (&config.api_key, &config.from) {
        (Some(api_key), Some(from)) => {
            info!("Email delivery through SendGrid as {}", from);
            Ok(Arc::new(SendGridMailer::new(
                api_key.clone(),
                from.clone(),
                config.api_url.clone(),
            )?))
        }
        _ => {
            warn!("SENDGRID_API_KEY not set; confirmation emails will only be logged");
            Ok(Arc::new(LogMailer))
        }
    }
}

#[derive(Debug, Serialize)]
struct Address<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct Personalization<'a> {
    to: Vec<Address<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    value: &'a str,
}

/// Body of a SendGrid v3 `mail/send` request.
#[derive(Debug, Serialize)]
pub struct SendGridPayload<'a> {
    personalizations: Vec<Personalization<'a>>,
    from: Address<'a>,
    subject: &'a str,
    content: Vec<Content<'a>>,
}

impl<'a> SendGridPayload<'a> {
    pub fn new(from: &'a str, message: &'a EmailMessage) -> Self {
        Self {
            personalizations: vec![Personalization {
                to: vec![Address { email: &message.to }],
            }],
            from: Address { email: from },
            subject: &message.subject,
            content: vec![Content {
                kind: "text/html",
                value: &message.html,
            }],
        }
    }
}

pub struct SendGridMailer {
    client: Client,
    api_key: String,
    from: String,
    api_url: String,
}

impl SendGridMailer {
    pub fn new(api_key: String, from: String, api_url: String) -> Result<Self> {
        let client = Client::builder().timeout(SEND_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_key,
            from,
            api_url,
        })
    }
}

#[async_trait]
impl Mailer for SendGridMailer {
    async fn send(&self, message: EmailMessage) -> BookingResult<SentEmail> {
        let payload = SendGridPayload::new(&self.from, &message);

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| BookingError::Delivery(format!("SendGrid error: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(BookingError::Delivery(format!(
                "SendGrid error: {} {}",
                status, error_text
            )));
        }

        let message_id = response
            .headers()
            .get("x-message-id")
            .and_then(|value| value.to_str().ok())
            .unwrap_or(FALLBACK_MESSAGE_ID)
            .to_string();

        Ok(SentEmail { message_id })
    }
}

/// Writes messages to the log instead of sending them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: EmailMessage) -> BookingResult<SentEmail> {
        let message_id = format!("logged-{}", Uuid::new_v4());
        info!(
            to = %message.to,
            subject = %message.subject,
            message_id = %message_id,
            "email not delivered, no provider configured"
        );
        Ok(SentEmail { message_id })
    }
}
