use eyre::{eyre, Result};
use std::env;

pub const DEFAULT_SENDGRID_API_URL: &str = "https://api.sendgrid.com/v3/mail/send";
pub const DEFAULT_SALON_NAME: &str = "NXL Beauty Bar";

/// Configuration for outbound email.
///
/// Without an API key the service logs confirmation emails instead of
/// sending them.
#[derive(Debug, Clone)]
pub struct MailerConfig {
    /// SendGrid API key (optional)
    pub api_key: Option<String>,
    /// Sender address; required when `api_key` is set
    pub from: Option<String>,
    pub api_url: String,
    /// Name shown in the email header and footer
    pub salon_name: String,
    /// Address customers are told to contact for changes
    pub contact_email: Option<String>,
}

impl MailerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns the value of a
    /// variable or `None` when it is unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key = non_empty("SENDGRID_API_KEY");
        let from = non_empty("EMAIL_FROM");

        if api_key.is_some() && from.is_none() {
            return Err(eyre!("EMAIL_FROM must be set when SENDGRID_API_KEY is set"));
        }

        let api_url = non_empty("SENDGRID_API_URL").unwrap_or_else(|| DEFAULT_SENDGRID_API_URL.to_string());
        let salon_name = non_empty("SALON_NAME").unwrap_or_else(|| DEFAULT_SALON_NAME.to_string());
        let contact_email = non_empty("SALON_CONTACT_EMAIL");

        Ok(Self {
            api_key,
            from,
            api_url,
            salon_name,
            contact_email,
        })
    }

    /// Whether emails go out through the provider rather than the log.
    pub fn delivers(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn salon(&self) -> SalonProfile {
        SalonProfile {
            name: self.salon_name.clone(),
            contact_email: self.contact_email.clone(),
        }
    }
}

/// Salon details printed into customer-facing emails.
#[derive(Debug, Clone, PartialEq)]
pub struct SalonProfile {
    pub name: String,
    pub contact_email: Option<String>,
}

impl Default for SalonProfile {
    fn default() -> Self {
        Self {
            name: DEFAULT_SALON_NAME.to_string(),
            contact_email: None,
        }
    }
}
