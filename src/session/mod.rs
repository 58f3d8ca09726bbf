//! Remote voice session management
//!
//! This module provides the `SessionController` that owns:
//! - The ACTIVE/INACTIVE status of one flow
//! - The handle to the remote voice session
//! - Snapshots and notices the pages render after every action

mod controller;
mod status;

pub use controller::{SessionController, SessionError, StopOutcome};
pub use status::{Notice, NoticeLevel, SessionSnapshot, SessionStatus};
