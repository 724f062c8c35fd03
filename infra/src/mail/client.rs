//! HTTP mail API client
//!
//! Implements the core's `Mailer` port against a JSON mail gateway. The
//! password-reset token is embedded in a link built from the configured
//! frontend base URL; the token itself is never logged.

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::{error, info};

use mt_core::services::mail::Mailer;
use mt_shared::config::MailConfig;

use crate::InfrastructureError;

/// Mail gateway client
pub struct HttpMailClient {
    http: reqwest::Client,
    config: MailConfig,
}

#[derive(Serialize)]
struct MailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: String,
}

impl HttpMailClient {
    /// Create a new mail client
    pub fn new(config: MailConfig) -> Result<Self, InfrastructureError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(InfrastructureError::Http)?;

        info!("Mail client initialized with sender: {}", config.sender);

        Ok(Self { http, config })
    }

    /// Build the reset link mailed to the user
    fn reset_link(&self, token: &str) -> String {
        format!("{}?token={}", self.config.reset_link_base, token)
    }

    async fn send(&self, to: &str, subject: &str, text: String) -> Result<(), InfrastructureError> {
        let request = MailRequest {
            from: &self.config.sender,
            to,
            subject,
            text,
        };

        let url = format!("{}/messages", self.config.base_url);
        self.http
            .post(&url)
            .json(&request)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| {
                error!("Mail API request failed: {}", e);
                InfrastructureError::Http(e)
            })?;

        Ok(())
    }
}

#[async_trait]
impl Mailer for HttpMailClient {
    async fn send_password_reset(&self, email: &str, token: &str) -> Result<(), String> {
        let link = self.reset_link(token);
        let text = format!(
            "A password reset was requested for your account.\n\n\
             Follow this link to choose a new password:\n{}\n\n\
             The link expires in 24 hours. If you did not request a reset, \
             you can ignore this message.",
            link
        );

        self.send(email, "Reset your password", text)
            .await
            .map_err(|e| e.to_string())?;

        info!("Password reset mail sent");
        Ok(())
    }
}
