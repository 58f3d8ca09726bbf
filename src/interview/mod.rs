//! Mock interview flow
//!
//! Interview options resolve against immutable template tables; the composer
//! turns them into a single interviewer prompt:
//! - role × level brief
//! - company context
//! - duration pacing
//! - optional job description
//! - fixed guidelines and closing instruction

mod composer;
mod form;
mod options;
mod templates;
mod tips;

pub use composer::{compose_instructions, interview_assistant, opening_message, InterviewSettings};
pub use form::InterviewForm;
pub use options::{CompanyType, InterviewDuration, Level, Role, TemplateError};
pub use templates::{company_fragment, duration_fragment, role_fragment, GUIDELINES};
pub use tips::{preparation_tips, PreparationTips, IN_PROGRESS_TIPS};
