use super::options::{CompanyType, InterviewDuration, Level, Role, TemplateError};
use super::templates::{
    company_fragment, duration_fragment, role_fragment, CLOSING_INSTRUCTION, GUIDELINES,
    NO_ADDITIONAL_CONTEXT,
};
use crate::assistant::{AssistantConfig, Model, Voice};
use serde::{Deserialize, Serialize};

/// Resolved interview options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InterviewSettings {
    pub role: Role,
    pub level: Level,
    pub duration: InterviewDuration,
    pub company: CompanyType,
}

impl InterviewSettings {
    /// Resolve raw table keys, failing on the first one that is not recognized
    pub fn from_keys(
        role: &str,
        level: &str,
        duration: &str,
        company: &str,
    ) -> Result<Self, TemplateError> {
        Ok(Self {
            role: role.parse()?,
            level: level.parse()?,
            duration: duration.parse()?,
            company: company.parse()?,
        })
    }
}

/// Build the interviewer instruction text.
///
/// Paragraph order is fixed: role brief, company context, pacing, position
/// context, numbered guidelines, closing instruction.
pub fn compose_instructions(settings: &InterviewSettings, job_description: &str) -> String {
    let job_description = job_description.trim();
    let position_context = if job_description.is_empty() {
        NO_ADDITIONAL_CONTEXT
    } else {
        job_description
    };

    let guidelines = GUIDELINES
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{}. {}", i + 1, line))
        .collect::<Vec<String>>()
        .join("\n");

    [
        role_fragment(settings.role, settings.level).to_string(),
        company_fragment(settings.company).to_string(),
        duration_fragment(settings.duration).to_string(),
        format!("Additional context about the position: {}", position_context),
        format!("Important guidelines:\n{}", guidelines),
        CLOSING_INSTRUCTION.to_string(),
    ]
    .join("\n\n")
}

/// First sentence the interviewer speaks
pub fn opening_message(role: Role) -> String {
    format!(
        "Hello, I'll be conducting your interview today for the {} position. Let's get started with the first question.",
        role.spoken_name()
    )
}

/// Assistant definition for a mock interview: recorded, not interruptible
pub fn interview_assistant(settings: &InterviewSettings, job_description: &str) -> AssistantConfig {
    AssistantConfig {
        first_message: opening_message(settings.role),
        context: compose_instructions(settings, job_description),
        model: Model::Gpt4o,
        voice: Voice::JenniferPlayht,
        recording_enabled: true,
        interruptions_enabled: false,
    }
}
