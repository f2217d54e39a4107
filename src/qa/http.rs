//! HTTP implementation of the answering service client.
//!
//! Wraps a single endpoint: `POST {base_url}/api/ask` with a JSON body of
//! `{ "question": ..., "maxLength": ... }`. The request is bounded by a
//! caller-side timeout; when the budget expires the in-flight future is
//! dropped, which cancels the underlying call.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::qa::service::{AnsweringService, ServiceError};
use crate::qa::types::{AskRequest, AskResponse};

pub struct HttpAnsweringService {
    base_url: String,
    timeout: Duration,
    max_length: u32,
    client: reqwest::Client,
}

impl HttpAnsweringService {
    pub fn new(base_url: String, timeout: Duration, max_length: u32) -> Self {
        Self {
            base_url,
            timeout,
            max_length,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl AnsweringService for HttpAnsweringService {
    async fn ask(&self, question: &str) -> Result<String, ServiceError> {
        let request = AskRequest {
            question: question.to_string(),
            max_length: self.max_length,
        };

        info!(
            "Ask request: url={}/api/ask, question_len={}, max_length={}",
            self.base_url,
            question.len(),
            self.max_length
        );

        // The timeout covers connecting and receiving the response head.
        // Anything reqwest reports at this stage is a failure to reach the
        // service.
        let send = self
            .client
            .post(format!("{}/api/ask", self.base_url))
            .json(&request)
            .send();

        let response = match tokio::time::timeout(self.timeout, send).await {
            Err(_) => {
                warn!("Ask request timed out after {:?}", self.timeout);
                return Err(ServiceError::Timeout);
            }
            Ok(Err(e)) => {
                warn!("Ask request failed to reach service: {}", e);
                return Err(ServiceError::Network(e.to_string()));
            }
            Ok(Ok(response)) => response,
        };

        debug!("Ask response status: {}", response.status());

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Ask API error: {} - {}", status.as_u16(), body);
            return Err(ServiceError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body: AskResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::Parse(e.to_string()))?;

        // Classification order matters: an explicit error field wins over a
        // missing answer.
        if let Some(error) = body.error {
            return Err(ServiceError::Application {
                error,
                message: body.message,
            });
        }

        match body.answer {
            Some(answer) if !answer.trim().is_empty() => {
                debug!("Ask answer received: {} bytes", answer.len());
                Ok(answer)
            }
            _ => Err(ServiceError::EmptyAnswer),
        }
    }
}
