use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language model the remote assistant runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Model {
    #[default]
    #[serde(rename = "gpt-4o")]
    Gpt4o,
}

impl Model {
    pub const ALL: [Model; 1] = [Model::Gpt4o];

    pub fn as_str(&self) -> &'static str {
        match self {
            Model::Gpt4o => "gpt-4o",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Model {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        Model::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Unsupported model: {}", s))
    }
}

/// Synthesized voice the remote assistant speaks with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Voice {
    #[default]
    #[serde(rename = "jennifer-playht")]
    JenniferPlayht,
}

impl Voice {
    pub const ALL: [Voice; 1] = [Voice::JenniferPlayht];

    pub fn as_str(&self) -> &'static str {
        match self {
            Voice::JenniferPlayht => "jennifer-playht",
        }
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Voice {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        Voice::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Unsupported voice: {}", s))
    }
}

/// Definition of a synthesized assistant sent to the voice API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantConfig {
    /// Spoken as soon as the call connects
    pub first_message: String,

    /// Instruction text the model runs under
    pub context: String,

    pub model: Model,

    pub voice: Voice,

    /// Whether the remote side records the call
    pub recording_enabled: bool,

    /// Whether the caller may talk over the assistant
    pub interruptions_enabled: bool,
}

/// Payload handed to the start primitive of a voice client.
///
/// Serializes to exactly one key: `{"assistant_id": ...}` for a
/// pre-registered assistant or `{"assistant": {...}}` for a generated one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartRequest {
    AssistantId(String),
    Assistant(AssistantConfig),
}

impl StartRequest {
    /// Short description for logs; never includes the instruction text
    pub fn describe(&self) -> String {
        match self {
            StartRequest::AssistantId(id) => format!("assistant id {}", id),
            StartRequest::Assistant(config) => {
                format!("custom assistant ({}, {})", config.model, config.voice)
            }
        }
    }
}
