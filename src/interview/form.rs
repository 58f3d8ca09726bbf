use super::composer::InterviewSettings;
use super::options::TemplateError;
use serde::{Deserialize, Serialize};

/// Submitted interview configuration, still as raw table keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterviewForm {
    pub role: String,
    pub level: String,
    pub duration: String,
    pub company: String,

    /// Free text pasted by the candidate, usually a job posting
    pub job_description: String,
}

impl InterviewForm {
    /// Form pre-filled from previously used settings
    pub fn from_settings(settings: &InterviewSettings) -> Self {
        Self {
            role: settings.role.key().to_string(),
            level: settings.level.key().to_string(),
            duration: settings.duration.key().to_string(),
            company: settings.company.key().to_string(),
            job_description: String::new(),
        }
    }

    pub fn settings(&self) -> Result<InterviewSettings, TemplateError> {
        InterviewSettings::from_keys(&self.role, &self.level, &self.duration, &self.company)
    }
}

impl Default for InterviewForm {
    fn default() -> Self {
        Self::from_settings(&InterviewSettings::default())
    }
}
