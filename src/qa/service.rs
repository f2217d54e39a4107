use std::fmt;

use async_trait::async_trait;

/// Everything that can go wrong between submitting a question and getting
/// a usable answer back. Variants carry enough info to build the log entry
/// shown to the user.
#[derive(Debug)]
pub enum ServiceError {
    /// The service could not be reached at all (DNS, refused, TLS).
    Network(String),
    /// The caller-side budget expired before the service responded.
    Timeout,
    /// The service answered with a non-success HTTP status.
    Api { status: u16, body: String },
    /// HTTP 2xx, but the body carried an explicit error field.
    Application {
        error: String,
        message: Option<String>,
    },
    /// HTTP 2xx with no usable answer text.
    EmptyAnswer,
    /// The response body was not valid JSON of the expected shape.
    Parse(String),
}

impl ServiceError {
    /// The text shown in the log, without the `Error: ` prefix.
    ///
    /// Timeout and connection failures use fixed phrasings; everything else
    /// surfaces what the service actually said.
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Timeout => {
                "Request timed out. The server took too long to respond.".to_string()
            }
            ServiceError::Network(_) => {
                "Cannot connect to server. Make sure the backend is running on port 4000."
                    .to_string()
            }
            ServiceError::Api { status, body } => format!("Server error ({status}): {body}"),
            ServiceError::Application { error, message } => match message {
                Some(msg) => format!("{error}: {msg}"),
                None => error.clone(),
            },
            ServiceError::EmptyAnswer => "Received empty response from server".to_string(),
            ServiceError::Parse(msg) => msg.clone(),
        }
    }

    /// Connection failures latch the session: once one is seen, further
    /// submissions are disabled.
    pub fn is_connection_failure(&self) -> bool {
        matches!(self, ServiceError::Network(_))
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Network(msg) => write!(f, "network error: {msg}"),
            ServiceError::Timeout => write!(f, "request timed out"),
            ServiceError::Api { status, body } => {
                write!(f, "API error (HTTP {status}): {body}")
            }
            ServiceError::Application { error, message } => match message {
                Some(msg) => write!(f, "application error: {error}: {msg}"),
                None => write!(f, "application error: {error}"),
            },
            ServiceError::EmptyAnswer => write!(f, "empty answer"),
            ServiceError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {}

/// The seam between the chat session and the remote answering service.
///
/// One call per submitted question, exactly one attempt, no retries. The
/// implementation owns the timeout; callers only see the classified outcome.
#[async_trait]
pub trait AnsweringService: Send + Sync {
    /// Submits a question and resolves to the answer text, or to the
    /// classified failure.
    async fn ask(&self, question: &str) -> Result<String, ServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_timeout() {
        assert_eq!(
            ServiceError::Timeout.user_message(),
            "Request timed out. The server took too long to respond."
        );
    }

    #[test]
    fn test_user_message_network() {
        let err = ServiceError::Network("connection refused".to_string());
        assert_eq!(
            err.user_message(),
            "Cannot connect to server. Make sure the backend is running on port 4000."
        );
    }

    #[test]
    fn test_user_message_api_includes_status_and_body() {
        let err = ServiceError::Api {
            status: 500,
            body: "internal failure".to_string(),
        };
        assert_eq!(err.user_message(), "Server error (500): internal failure");
    }

    #[test]
    fn test_user_message_application_with_and_without_detail() {
        let err = ServiceError::Application {
            error: "bad_input".to_string(),
            message: Some("missing field".to_string()),
        };
        assert_eq!(err.user_message(), "bad_input: missing field");

        let err = ServiceError::Application {
            error: "bad_input".to_string(),
            message: None,
        };
        assert_eq!(err.user_message(), "bad_input");
    }

    #[test]
    fn test_user_message_empty_answer() {
        assert_eq!(
            ServiceError::EmptyAnswer.user_message(),
            "Received empty response from server"
        );
    }

    #[test]
    fn test_only_network_errors_latch() {
        assert!(ServiceError::Network("x".to_string()).is_connection_failure());
        assert!(!ServiceError::Timeout.is_connection_failure());
        assert!(
            !ServiceError::Api {
                status: 502,
                body: String::new()
            }
            .is_connection_failure()
        );
        assert!(!ServiceError::EmptyAnswer.is_connection_failure());
    }
}
