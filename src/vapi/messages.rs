use crate::assistant::{AssistantConfig, StartRequest};
use serde::{Deserialize, Serialize};

/// Body of the web call creation request
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebCallRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assistant_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assistant: Option<AssistantConfig>,
}

impl From<&StartRequest> for WebCallRequest {
    fn from(request: &StartRequest) -> Self {
        match request {
            StartRequest::AssistantId(id) => Self {
                assistant_id: Some(id.clone()),
                assistant: None,
            },
            StartRequest::Assistant(config) => Self {
                assistant_id: None,
                assistant: Some(config.clone()),
            },
        }
    }
}

/// Created web call as returned by the voice API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebCallResponse {
    pub id: String,
    pub web_call_url: Option<String>,
    pub monitor: Option<CallMonitor>,
}

/// Live call endpoints, present when monitoring is enabled on the account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallMonitor {
    pub listen_url: Option<String>,
    pub control_url: Option<String>,
}

/// Message posted to a call's control URL
#[derive(Debug, Serialize, Deserialize)]
pub struct ControlMessage {
    #[serde(rename = "type")]
    pub kind: String,
}

impl ControlMessage {
    pub fn end_call() -> Self {
        Self {
            kind: "end-call".to_string(),
        }
    }
}
