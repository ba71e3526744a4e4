use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::AdviceGateway;
use crate::domain::{AdviceResult, DomainError};

const ADVICE_PATH: &str = "/api/advice";

#[derive(Serialize)]
struct AdviceRequest<'a> {
    symptoms: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// reqwest-backed [`AdviceGateway`] talking to a running advice service.
///
/// A non-2xx reply surfaces the service's `message` field when present; a
/// 2xx body that does not deserialize into a full [`AdviceResult`] is an
/// error, never a partial result.
pub struct HttpAdviceGateway {
    client: reqwest::Client,
    /// Full endpoint URL (base + ADVICE_PATH).
    url: String,
}

impl HttpAdviceGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), ADVICE_PATH);
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait]
impl AdviceGateway for HttpAdviceGateway {
    async fn request_advice(&self, symptoms: &str) -> Result<AdviceResult, DomainError> {
        let response = self
            .client
            .post(&self.url)
            .json(&AdviceRequest { symptoms })
            .send()
            .await
            .map_err(|e| DomainError::upstream(format!("advice service unreachable: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.message)
                .unwrap_or_else(|_| format!("advice service returned {status}"));
            return Err(DomainError::upstream(message));
        }

        response
            .json::<AdviceResult>()
            .await
            .map_err(|e| DomainError::parse(format!("malformed advice response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_is_built_from_base() {
        let gateway = HttpAdviceGateway::new("http://127.0.0.1:3000/");
        assert_eq!(gateway.url, "http://127.0.0.1:3000/api/advice");
    }

    #[test]
    fn test_request_body_shape() {
        let json = serde_json::to_value(AdviceRequest { symptoms: "sore throat" }).unwrap();
        assert_eq!(json["symptoms"], "sore throat");
    }
}
