//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::qa::{AnsweringService, ServiceError};

/// A canned-answer service for tests that don't need real HTTP calls.
pub struct NoopService;

#[async_trait]
impl AnsweringService for NoopService {
    async fn ask(&self, _question: &str) -> Result<String, ServiceError> {
        Ok("ok".to_string())
    }
}

/// Creates a test App backed by a NoopService.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(NoopService))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_service_answers() {
        let answer = tokio_test::block_on(NoopService.ask("anything")).unwrap();
        assert_eq!(answer, "ok");
    }
}
