//! EmailJS REST client
//!
//! Sends contact submissions through the EmailJS `email/send` endpoint. The
//! service answers with a plain-text body, which is surfaced verbatim on
//! failure.

use super::error::DispatchError;
use super::traits::EmailDispatcher;
use crate::config::EmailJsConfig;
use crate::state::ContactSubmission;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

const SEND_PATH: &str = "/api/v1.0/email/send";

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactSubmission,
}

/// Client for the EmailJS REST API
pub struct EmailJsClient {
    http: reqwest::Client,
    config: EmailJsConfig,
}

impl EmailJsClient {
    pub fn new(config: EmailJsConfig) -> Result<Self, DispatchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    fn send_url(&self) -> String {
        format!("{}{}", self.config.api_base.trim_end_matches('/'), SEND_PATH)
    }

    /// Check that every identifier is present before sending anything
    fn ensure_configured(&self) -> Result<(), DispatchError> {
        let required = [
            ("service_id", &self.config.service_id),
            ("template_id", &self.config.template_id),
            ("public_key", &self.config.public_key),
        ];
        match required.into_iter().find(|(_, value)| value.trim().is_empty()) {
            Some((name, _)) => Err(DispatchError::NotConfigured(name)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl EmailDispatcher for EmailJsClient {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), DispatchError> {
        self.ensure_configured()?;

        let body = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: submission,
        };

        let response = self.http.post(self.send_url()).json(&body).send().await?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(status = status.as_u16(), "EmailJS accepted message");
            return Ok(());
        }

        let text = response.text().await.unwrap_or_default();
        Err(DispatchError::Rejected {
            status: status.as_u16(),
            text,
        })
    }
}
