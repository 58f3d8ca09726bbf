use super::backend::{VoiceClient, VoiceClientFactory};
use super::messages::{ControlMessage, WebCallRequest, WebCallResponse};
use crate::assistant::StartRequest;
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{info, warn};

/// Voice API client for a single web call
pub struct VapiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    call: Option<WebCallResponse>,
}

impl VapiClient {
    pub fn new(http: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            call: None,
        }
    }

    /// ID of the call created by `start`, if any
    pub fn call_id(&self) -> Option<&str> {
        self.call.as_ref().map(|c| c.id.as_str())
    }

    async fn check(resp: reqwest::Response, action: &str) -> Result<reqwest::Response> {
        if resp.status().is_success() {
            return Ok(resp);
        }

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        anyhow::bail!("Voice API {} failed ({}): {}", action, status, body)
    }
}

#[async_trait::async_trait]
impl VoiceClient for VapiClient {
    async fn start(&mut self, request: &StartRequest) -> Result<()> {
        let url = format!("{}/call/web", self.base_url);
        info!("Creating web call ({})", request.describe());

        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&WebCallRequest::from(request))
            .send()
            .await
            .context("Failed to reach voice API")?;

        let call: WebCallResponse = Self::check(resp, "start")
            .await?
            .json()
            .await
            .context("Invalid web call response")?;

        info!("Web call {} created", call.id);
        self.call = Some(call);

        Ok(())
    }

    async fn stop(&mut self) -> Result<()> {
        let call = self
            .call
            .take()
            .ok_or_else(|| anyhow::anyhow!("No call has been started"))?;

        let control_url = call
            .monitor
            .as_ref()
            .and_then(|m| m.control_url.as_deref());

        let resp = match control_url {
            Some(control_url) => self
                .http
                .post(control_url)
                .json(&ControlMessage::end_call())
                .send()
                .await
                .context("Failed to reach call control URL")?,
            None => {
                warn!("Call {} has no control URL, deleting it instead", call.id);
                self.http
                    .delete(format!("{}/call/{}", self.base_url, call.id))
                    .bearer_auth(&self.api_key)
                    .send()
                    .await
                    .context("Failed to reach voice API")?
            }
        };

        Self::check(resp, "stop").await?;
        info!("Web call {} ended", call.id);

        Ok(())
    }

    fn name(&self) -> &str {
        "vapi"
    }

    fn join_url(&self) -> Option<&str> {
        self.call.as_ref().and_then(|c| c.web_call_url.as_deref())
    }
}

/// Creates `VapiClient`s sharing one connection pool
pub struct VapiClientFactory {
    http: reqwest::Client,
    base_url: String,
}

impl VapiClientFactory {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.to_string(),
        })
    }
}

impl VoiceClientFactory for VapiClientFactory {
    fn connect(&self, api_key: &str) -> Result<Box<dyn VoiceClient>> {
        if api_key.trim().is_empty() {
            anyhow::bail!("Voice API key is empty");
        }

        Ok(Box::new(VapiClient::new(
            self.http.clone(),
            &self.base_url,
            api_key.trim(),
        )))
    }
}
