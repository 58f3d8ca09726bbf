use super::config::{AssistantConfig, Model, StartRequest, Voice};
use crate::config::AssistantDefaults;
use serde::{Deserialize, Deserializer, Serialize};

/// Values of the assistant configuration form for one render pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantForm {
    /// Pre-registered assistant; when set the custom fields are ignored
    #[serde(default)]
    pub assistant_id: String,

    #[serde(default)]
    pub first_message: String,

    #[serde(default)]
    pub context: String,

    #[serde(default)]
    pub model: Model,

    #[serde(default)]
    pub voice: Voice,

    /// Unchecked boxes are absent from a submitted form
    #[serde(default, deserialize_with = "checkbox")]
    pub recording_enabled: bool,

    #[serde(default, deserialize_with = "checkbox")]
    pub interruptions_enabled: bool,
}

impl AssistantForm {
    /// Initial form values: recording on, interruptions off
    pub fn with_defaults(defaults: &AssistantDefaults) -> Self {
        Self {
            assistant_id: String::new(),
            first_message: defaults.first_message.clone(),
            context: defaults.context.clone(),
            model: Model::default(),
            voice: Voice::default(),
            recording_enabled: true,
            interruptions_enabled: false,
        }
    }

    /// The bypass identifier, if one was entered
    pub fn bypass_id(&self) -> Option<&str> {
        let id = self.assistant_id.trim();
        (!id.is_empty()).then_some(id)
    }

    /// Build what the start primitive should receive.
    ///
    /// A bypass identifier short-circuits composition entirely: no
    /// `AssistantConfig` is constructed in that case.
    pub fn start_request(&self) -> StartRequest {
        match self.bypass_id() {
            Some(id) => StartRequest::AssistantId(id.to_string()),
            None => StartRequest::Assistant(AssistantConfig {
                first_message: self.first_message.clone(),
                context: self.context.clone(),
                model: self.model,
                voice: self.voice,
                recording_enabled: self.recording_enabled,
                interruptions_enabled: self.interruptions_enabled,
            }),
        }
    }
}

fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(match value.as_deref() {
        None | Some("") | Some("false") | Some("off") | Some("0") => false,
        Some(_) => true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_assistant_id_is_not_a_bypass() {
        let mut form = AssistantForm::with_defaults(&AssistantDefaults::default());
        form.assistant_id = "   ".to_string();
        assert_eq!(form.bypass_id(), None);
        assert!(matches!(form.start_request(), StartRequest::Assistant(_)));
    }

    #[test]
    fn bypass_id_is_trimmed() {
        let mut form = AssistantForm::with_defaults(&AssistantDefaults::default());
        form.assistant_id = " abc123 ".to_string();
        assert_eq!(
            form.start_request(),
            StartRequest::AssistantId("abc123".to_string())
        );
    }
}
