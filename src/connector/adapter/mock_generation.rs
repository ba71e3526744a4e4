use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tracing::debug;

use crate::application::GenerationService;
use crate::domain::DomainError;

/// Canned reply used by `serve --mock` so the service can be exercised end to
/// end without a provider credential.
const CANNED_REPLY: &str = r#"```json
{
  "specialist": "General Physician",
  "medications": ["Paracetamol", "Oral rehydration salts"],
  "instantReliefTips": ["Rest in a quiet room", "Drink plenty of water"]
}
```"#;

/// Deterministic [`GenerationService`] for tests and offline runs.
///
/// Returns a fixed reply (or a fixed error) and counts how many times it was
/// called, so tests can assert that the provider was invoked exactly once,
/// or, for the misconfiguration path, not at all.
pub struct MockGeneration {
    reply: Result<String, String>,
    calls: AtomicUsize,
}

impl MockGeneration {
    pub fn new() -> Self {
        Self::with_reply(CANNED_REPLY)
    }

    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: Ok(reply.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockGeneration {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerationService for MockGeneration {
    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        debug!("MockGeneration called with a {}-byte prompt", prompt.len());

        match &self.reply {
            Ok(reply) => Ok(reply.clone()),
            Err(message) => Err(DomainError::upstream(message.clone())),
        }
    }
}
