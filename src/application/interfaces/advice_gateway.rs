use async_trait::async_trait;

use crate::domain::{AdviceResult, DomainError};

/// Client-side transport for the advice service.
///
/// One method, one request: the intake widget calls this exactly once per
/// submission and maps any error (transport failure, non-2xx status, or a
/// body that fails shape validation) to its `Failed` state.
#[async_trait]
pub trait AdviceGateway: Send + Sync {
    async fn request_advice(&self, symptoms: &str) -> Result<AdviceResult, DomainError>;
}
