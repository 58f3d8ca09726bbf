//! HTTP page server for both flows
//!
//! This module serves the forms and session controls:
//! - GET / - Assistant configuration page
//! - POST /assistant/start, POST /assistant/stop - Assistant call control
//! - GET /interview - Interview configuration page
//! - POST /interview/start, POST /interview/stop - Interview call control
//! - GET /assistant/status, GET /interview/status - Session snapshots as JSON
//! - GET /health - Health check

mod handlers;
mod pages;
mod routes;
mod state;

pub use handlers::SESSION_COOKIE;
pub use pages::Pages;
pub use routes::create_router;
pub use state::{AppState, BrowserSession};
