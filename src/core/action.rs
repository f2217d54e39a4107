//! # Actions
//!
//! Everything that can happen in the chat session becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! The service answers? That's `Action::AnswerReceived(text)`.
//!
//! The `update()` function takes the current state and an action,
//! then returns an `Effect` describing the I/O the caller should perform.
//! No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: submit, feed in a failure, assert on
//! the log. And debuggable: log every action, replay the exact session.

use log::debug;

use crate::core::state::App;
use crate::qa::{Role, ServiceError};

#[derive(Debug)]
pub enum Action {
    /// The user submitted the input buffer contents.
    Submit(String),
    /// The service returned a usable answer.
    AnswerReceived(String),
    /// The request ended in any of the classified failure modes.
    RequestFailed(ServiceError),
    /// The user cancelled the in-flight request (Esc while loading).
    CancelRequest,
    Quit,
}

/// I/O the event loop must perform after an `update()` call.
#[derive(Debug, PartialEq)]
pub enum Effect {
    None,
    /// Spawn the outbound call for this question.
    SpawnRequest(String),
    Quit,
}

/// The reducer. Applies `action` to `app` and returns the effect to run.
///
/// Submission is a silent no-op (log untouched, no request spawned) for a
/// blank question, while a request is in flight, or while a connection
/// error is latched. Every terminal action clears `is_loading`.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Submit(text) => {
            let question = text.trim();
            if question.is_empty() {
                return Effect::None;
            }
            if app.is_loading {
                debug!("Submit dropped: request already in flight");
                return Effect::None;
            }
            if app.connection_error.is_some() {
                debug!("Submit dropped: connection error latched");
                return Effect::None;
            }

            app.connection_error = None;
            app.log.push(Role::User, question.to_string());
            app.is_loading = true;
            app.status_message = String::from("Sending...");
            Effect::SpawnRequest(question.to_string())
        }
        Action::AnswerReceived(answer) => {
            app.is_loading = false;
            app.status_message.clear();
            app.log.push(Role::Assistant, answer);
            Effect::None
        }
        Action::RequestFailed(failure) => {
            debug!("Request failed: {}", failure);
            app.is_loading = false;
            app.status_message.clear();
            let text = failure.user_message();
            if failure.is_connection_failure() {
                app.connection_error = Some(text.clone());
            }
            app.log.push(Role::Error, format!("Error: {text}"));
            Effect::None
        }
        Action::CancelRequest => {
            // The request is abandoned: no terminal entry joins the log.
            app.is_loading = false;
            app.status_message = String::from("Request cancelled");
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    fn network_failure() -> ServiceError {
        ServiceError::Network("connection refused".to_string())
    }

    #[test]
    fn test_submit_appends_user_message_and_spawns_request() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Submit("What is Rust?".to_string()));

        assert_eq!(effect, Effect::SpawnRequest("What is Rust?".to_string()));
        assert_eq!(app.log.len(), 1);
        assert_eq!(app.log.messages[0].role, Role::User);
        assert_eq!(app.log.messages[0].content, "What is Rust?");
        assert!(app.is_loading);
    }

    #[test]
    fn test_submit_trims_the_question() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Submit("  hello  ".to_string()));
        assert_eq!(effect, Effect::SpawnRequest("hello".to_string()));
        assert_eq!(app.log.messages[0].content, "hello");
    }

    #[test]
    fn test_blank_submit_is_a_no_op() {
        let mut app = test_app();
        for input in ["", "   ", "\t\n"] {
            let effect = update(&mut app, Action::Submit(input.to_string()));
            assert_eq!(effect, Effect::None);
        }
        assert!(app.log.is_empty());
        assert!(!app.is_loading);
    }

    #[test]
    fn test_submit_while_in_flight_is_a_no_op() {
        let mut app = test_app();
        update(&mut app, Action::Submit("first".to_string()));
        assert_eq!(app.log.len(), 1);

        let effect = update(&mut app, Action::Submit("second".to_string()));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.log.len(), 1, "log length unchanged");
    }

    #[test]
    fn test_successful_answer_appends_assistant_message() {
        let mut app = test_app();
        update(&mut app, Action::Submit("capital of France?".to_string()));
        update(&mut app, Action::AnswerReceived("Paris".to_string()));

        assert_eq!(app.log.len(), 2);
        assert_eq!(app.log.messages[0].role, Role::User);
        assert_eq!(app.log.messages[0].content, "capital of France?");
        assert_eq!(app.log.messages[1].role, Role::Assistant);
        assert_eq!(app.log.messages[1].content, "Paris");
        assert!(!app.is_loading);
    }

    #[test]
    fn test_application_failure_message_text() {
        let mut app = test_app();
        update(&mut app, Action::Submit("q".to_string()));
        update(
            &mut app,
            Action::RequestFailed(ServiceError::Application {
                error: "bad_input".to_string(),
                message: Some("missing field".to_string()),
            }),
        );

        assert_eq!(app.log.len(), 2);
        assert_eq!(app.log.messages[1].role, Role::Error);
        assert_eq!(app.log.messages[1].content, "Error: bad_input: missing field");
        assert!(!app.is_loading);
        assert!(app.connection_error.is_none(), "application errors never latch");
    }

    #[test]
    fn test_empty_answer_failure_message_text() {
        let mut app = test_app();
        update(&mut app, Action::Submit("q".to_string()));
        update(&mut app, Action::RequestFailed(ServiceError::EmptyAnswer));

        assert_eq!(
            app.log.messages[1].content,
            "Error: Received empty response from server"
        );
    }

    #[test]
    fn test_timeout_failure_message_and_loading_cleared() {
        let mut app = test_app();
        update(&mut app, Action::Submit("q".to_string()));
        update(&mut app, Action::RequestFailed(ServiceError::Timeout));

        assert_eq!(
            app.log.messages[1].content,
            "Error: Request timed out. The server took too long to respond."
        );
        assert!(!app.is_loading);
        assert!(app.can_submit(), "timeouts are recoverable");
    }

    #[test]
    fn test_server_error_includes_status_and_body() {
        let mut app = test_app();
        update(&mut app, Action::Submit("q".to_string()));
        update(
            &mut app,
            Action::RequestFailed(ServiceError::Api {
                status: 503,
                body: "overloaded".to_string(),
            }),
        );

        assert_eq!(app.log.messages[1].content, "Error: Server error (503): overloaded");
        assert!(app.can_submit(), "server errors are recoverable");
    }

    #[test]
    fn test_connection_failure_latches_the_session() {
        let mut app = test_app();
        update(&mut app, Action::Submit("q".to_string()));
        update(&mut app, Action::RequestFailed(network_failure()));

        assert_eq!(
            app.log.messages[1].content,
            "Error: Cannot connect to server. Make sure the backend is running on port 4000."
        );
        assert!(app.connection_error.is_some());

        // Latched: later submissions are dropped for the rest of the session.
        let effect = update(&mut app, Action::Submit("retry?".to_string()));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.log.len(), 2);
    }

    #[test]
    fn test_cancel_clears_loading_without_log_entry() {
        let mut app = test_app();
        update(&mut app, Action::Submit("q".to_string()));
        assert!(app.is_loading);

        let effect = update(&mut app, Action::CancelRequest);
        assert_eq!(effect, Effect::None);
        assert!(!app.is_loading);
        assert_eq!(app.log.len(), 1, "abandoned request appends nothing");
    }

    #[test]
    fn test_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
