//! HTTP submitter for the REST backend and the spreadsheet webhook

use super::error::{SubmitError, SubmitReply};
use super::traits::Submitter;
use super::{rest, webhook};
use crate::config::AppConfig;
use crate::state::{SubmissionRequest, SubmitTarget};
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;

/// Sends submissions over HTTP, picking the collaborator from the request's target
pub struct HttpSubmitter {
    client: reqwest::Client,
    api_base: String,
    webhook_url: Option<String>,
}

impl HttpSubmitter {
    pub fn new(api_base: impl Into<String>, webhook_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.into(),
            webhook_url,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base(), config.webhook_url().map(str::to_string))
    }

    /// POST a JSON body and return the status and raw body text
    async fn post_json(&self, url: &str, body: &Value) -> Result<(u16, String), SubmitError> {
        let response = self.client.post(url).json(body).send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        Ok((status, text))
    }

    async fn submit_rest(&self, path: &str, payload: &Value) -> Result<SubmitReply, SubmitError> {
        let url = rest::endpoint_url(&self.api_base, path);
        let (status, body) = self.post_json(&url, payload).await?;
        tracing::debug!("REST {url} answered {status}");
        rest::interpret_reply(status, &body)
    }

    async fn submit_webhook(
        &self,
        submission_type: &str,
        payload: &Value,
    ) -> Result<SubmitReply, SubmitError> {
        let url = self
            .webhook_url
            .as_deref()
            .ok_or(SubmitError::NotConfigured)?;
        let body = webhook::envelope(submission_type, payload, Utc::now());
        let (status, text) = self.post_json(url, &body).await?;
        tracing::debug!("webhook answered {status}");
        webhook::interpret_reply(status, &text)
    }
}

#[async_trait]
impl Submitter for HttpSubmitter {
    async fn submit(&self, request: &SubmissionRequest) -> Result<SubmitReply, SubmitError> {
        let field_count = request.payload.as_object().map_or(0, |m| m.len());
        tracing::info!(
            "Submitting {:?} form ({field_count} fields) to {:?}",
            request.form,
            request.target
        );

        let result = match &request.target {
            SubmitTarget::Rest { path } => self.submit_rest(path, &request.payload).await,
            SubmitTarget::Webhook { submission_type } => {
                self.submit_webhook(submission_type, &request.payload).await
            }
        };

        match &result {
            Ok(_) => tracing::info!("{:?} submission accepted", request.form),
            Err(e) => tracing::warn!("{:?} submission failed: {e:?}", request.form),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FormKind;
    use serde_json::json;

    #[tokio::test]
    async fn test_webhook_without_url_is_not_configured() {
        let submitter = HttpSubmitter::new("http://localhost:8000", None);
        let request = SubmissionRequest {
            form: FormKind::WebTeam,
            target: SubmitTarget::Webhook {
                submission_type: "web_team".to_string(),
            },
            payload: json!({"name": "Linus"}),
        };
        assert_eq!(
            submitter.submit(&request).await,
            Err(SubmitError::NotConfigured)
        );
    }

    #[test]
    fn test_from_config_uses_defaults() {
        let submitter = HttpSubmitter::from_config(&AppConfig::default());
        assert_eq!(submitter.api_base, "http://localhost:8000");
        assert!(submitter.webhook_url.is_none());
    }
}
