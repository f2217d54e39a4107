//! # Application State
//!
//! Core business state for the chat session. This module contains domain
//! logic only - no TUI-specific types. Presentation state lives in the
//! `tui` module.
//!
//! ```text
//! App
//! ├── service: Arc<dyn AnsweringService>  // remote QnA endpoint
//! ├── log: ChatLog                    // append-only conversation log
//! ├── status_message: String          // status bar text
//! ├── is_loading: bool                // a request is in flight
//! └── connection_error: Option<String>  // latched "cannot connect" state
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.
//!
//! One `App` exists per process; nothing is persisted. The log and the
//! latch die with the session.

use std::sync::Arc;

use crate::qa::{AnsweringService, ChatLog};

pub struct App {
    pub service: Arc<dyn AnsweringService>,
    pub log: ChatLog,
    pub status_message: String,
    pub is_loading: bool,
    /// Set when the service could not be reached at all. Once set it is
    /// never cleared, and it disables submission for the rest of the
    /// session.
    pub connection_error: Option<String>,
}

impl App {
    pub fn new(service: Arc<dyn AnsweringService>) -> Self {
        Self {
            service,
            log: ChatLog::new(),
            status_message: String::from("Welcome to QnA!"),
            is_loading: false,
            connection_error: None,
        }
    }

    /// Whether a new question may be submitted right now.
    ///
    /// False while a request is in flight, and permanently false once a
    /// connection error has latched.
    pub fn can_submit(&self) -> bool {
        !self.is_loading && self.connection_error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to QnA!");
        assert!(!app.is_loading);
        assert!(app.log.is_empty());
        assert!(app.connection_error.is_none());
        assert!(app.can_submit());
    }

    #[test]
    fn test_can_submit_blocked_while_loading() {
        let mut app = test_app();
        app.is_loading = true;
        assert!(!app.can_submit());
    }

    #[test]
    fn test_can_submit_blocked_by_latched_connection_error() {
        let mut app = test_app();
        app.connection_error = Some("offline".to_string());
        assert!(!app.can_submit());
    }
}
