pub mod assistant;
pub mod config;
pub mod http;
pub mod interview;
pub mod session;
pub mod vapi;

pub use assistant::{AssistantConfig, AssistantForm, Model, StartRequest, Voice};
pub use config::Config;
pub use http::{create_router, AppState};
pub use interview::{compose_instructions, interview_assistant, InterviewForm, InterviewSettings, TemplateError};
pub use session::{Notice, SessionController, SessionError, SessionSnapshot, SessionStatus, StopOutcome};
pub use vapi::{VapiClient, VapiClientFactory, VoiceClient, VoiceClientFactory};
