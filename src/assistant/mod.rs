//! Generic assistant flow
//!
//! Holds the record describing a synthesized assistant, the payload passed to
//! a voice client's start primitive, and the form that produces them.

mod config;
mod form;

pub use config::{AssistantConfig, Model, StartRequest, Voice};
pub use form::AssistantForm;
