use crate::assistant::StartRequest;
use anyhow::Result;

/// A remote voice session client
///
/// Implementations:
/// - `VapiClient`: the hosted voice API over HTTPS
/// - test doubles that record calls and inject failures
#[async_trait::async_trait]
pub trait VoiceClient: Send + Sync {
    /// Start a voice session for a pre-registered or generated assistant
    async fn start(&mut self, request: &StartRequest) -> Result<()>;

    /// End the session started by `start`
    async fn stop(&mut self) -> Result<()>;

    /// Client name for logging
    fn name(&self) -> &str;

    /// Browser URL for joining the running session, when the API returns one
    fn join_url(&self) -> Option<&str> {
        None
    }
}

/// Builds a voice client bound to one credential
pub trait VoiceClientFactory: Send + Sync {
    fn connect(&self, api_key: &str) -> Result<Box<dyn VoiceClient>>;
}
