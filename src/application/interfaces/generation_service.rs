use async_trait::async_trait;

use crate::domain::DomainError;

/// An interface for sending a prompt to a generative-language provider and
/// receiving its free-text reply.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. Consumers (e.g. [`crate::application::TriageUseCase`]) remain
/// decoupled from any particular provider or HTTP client library, so tests
/// can substitute a deterministic fake without network access.
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Send `prompt` and return the model's raw text reply.
    ///
    /// Called at most once per triage request; there is no retry loop and no
    /// streaming. The reply may be wrapped in markdown code fences; cleaning
    /// it up is the caller's job, not the transport's.
    async fn generate(&self, prompt: &str) -> Result<String, DomainError>;
}
