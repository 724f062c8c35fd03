//! Mail delivery configuration module

use serde::{Deserialize, Serialize};

/// Configuration for the transactional mail HTTP API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Base URL of the mail delivery API
    pub base_url: String,

    /// Sender address used for outgoing mail
    pub sender: String,

    /// Base URL embedded in password-reset links
    pub reset_link_base: String,

    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("http://localhost:8025"),
            sender: String::from("no-reply@mealtrack.local"),
            reset_link_base: String::from("http://localhost:3000/reset-password"),
            request_timeout_secs: 10,
        }
    }
}

impl MailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("MAIL_API_URL").unwrap_or_else(|_| "http://localhost:8025".to_string());
        let sender = std::env::var("MAIL_SENDER")
            .unwrap_or_else(|_| "no-reply@mealtrack.local".to_string());
        let reset_link_base = std::env::var("MAIL_RESET_LINK_BASE")
            .unwrap_or_else(|_| "http://localhost:3000/reset-password".to_string());
        let request_timeout_secs = std::env::var("MAIL_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Self {
            base_url,
            sender,
            reset_link_base,
            request_timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mail_config_default() {
        let config = MailConfig::default();
        assert!(config.sender.contains('@'));
        assert_eq!(config.request_timeout_secs, 10);
    }
}
