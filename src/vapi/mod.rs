pub mod backend;
pub mod client;
pub mod messages;

pub use backend::{VoiceClient, VoiceClientFactory};
pub use client::{VapiClient, VapiClientFactory};
pub use messages::{CallMonitor, ControlMessage, WebCallRequest, WebCallResponse};
