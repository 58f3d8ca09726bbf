use super::status::{SessionSnapshot, SessionStatus};
use crate::assistant::StartRequest;
use crate::vapi::{VoiceClient, VoiceClientFactory};
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Please enter your Vapi API Key")]
    MissingCredential,

    #[error("A session is already active")]
    AlreadyActive,

    #[error("No active session to stop")]
    NotActive,

    #[error("{0}")]
    StartFailed(String),
}

/// Result of a stop action; the controller is INACTIVE either way
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopOutcome {
    Stopped,

    /// The remote stop failed; the remote session may still be running
    Orphaned { error: String },
}

/// Two-state lifecycle of one remote voice session.
///
/// Status is ACTIVE exactly when a client handle is held.
pub struct SessionController {
    /// Flow name for logging
    flow: &'static str,

    status: SessionStatus,

    /// Remote Session Handle, owned exclusively by this controller
    handle: Option<Box<dyn VoiceClient>>,

    started_at: Option<DateTime<Utc>>,

    orphan_warning: Option<String>,
}

impl SessionController {
    pub fn new(flow: &'static str) -> Self {
        Self {
            flow,
            status: SessionStatus::Inactive,
            handle: None,
            started_at: None,
            orphan_warning: None,
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn has_handle(&self) -> bool {
        self.handle.is_some()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            status: self.status,
            started_at: self.started_at,
            join_url: self
                .handle
                .as_ref()
                .and_then(|h| h.join_url())
                // Rendered as a link, so only plain https URLs are passed on
                .filter(|url| url.starts_with("https://"))
                .map(str::to_string),
            orphan_warning: self.orphan_warning.clone(),
        }
    }

    /// Start a remote session.
    ///
    /// The client is only retained once its start primitive has returned
    /// successfully; on any failure the controller stays INACTIVE.
    pub async fn start(
        &mut self,
        factory: &dyn VoiceClientFactory,
        api_key: Option<&str>,
        request: StartRequest,
    ) -> Result<(), SessionError> {
        let api_key = match api_key.map(str::trim) {
            Some(key) if !key.is_empty() => key,
            _ => {
                warn!("[{}] Start rejected: no API key", self.flow);
                return Err(SessionError::MissingCredential);
            }
        };

        if self.status.is_active() {
            warn!("[{}] Start rejected: session already active", self.flow);
            return Err(SessionError::AlreadyActive);
        }

        info!("[{}] Starting session with {}", self.flow, request.describe());

        let mut client = factory.connect(api_key).map_err(|e| {
            error!("[{}] Failed to create voice client: {:#}", self.flow, e);
            SessionError::StartFailed(format!("{:#}", e))
        })?;

        if let Err(e) = client.start(&request).await {
            error!("[{}] Failed to start session: {:#}", self.flow, e);
            return Err(SessionError::StartFailed(format!("{:#}", e)));
        }

        info!("[{}] Session started via {}", self.flow, client.name());

        self.handle = Some(client);
        self.status = SessionStatus::Active;
        self.started_at = Some(Utc::now());
        self.orphan_warning = None;

        Ok(())
    }

    /// Stop the held session.
    ///
    /// Local state is reset to INACTIVE and the handle released even when the
    /// remote stop fails; that case is reported as `StopOutcome::Orphaned`
    /// and remembered as a warning until the next successful start.
    pub async fn stop(&mut self) -> Result<StopOutcome, SessionError> {
        let mut client = self.handle.take().ok_or(SessionError::NotActive)?;

        info!("[{}] Stopping session via {}", self.flow, client.name());
        let result = client.stop().await;

        self.status = SessionStatus::Inactive;
        self.started_at = None;
        drop(client);

        match result {
            Ok(()) => {
                info!("[{}] Session stopped", self.flow);
                Ok(StopOutcome::Stopped)
            }
            Err(e) => {
                let error = format!("{:#}", e);
                error!(
                    "[{}] Remote stop failed, session may be orphaned: {}",
                    self.flow, error
                );
                self.orphan_warning = Some(format!(
                    "The last session could not be stopped cleanly and may still be running remotely: {}",
                    error
                ));
                Ok(StopOutcome::Orphaned { error })
            }
        }
    }
}
