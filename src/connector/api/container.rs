use std::sync::Arc;

use tracing::debug;

use crate::application::{GenerationService, TriageUseCase};
use crate::connector::adapter::{GeminiClient, MockGeneration, DEFAULT_BASE_URL, DEFAULT_MODEL};

pub struct ContainerConfig {
    /// Upstream provider credential. `None` means the service is
    /// misconfigured: requests are rejected before any upstream call.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    /// Serve canned advice from a deterministic fake instead of calling the
    /// real provider. The fake needs no credential.
    pub mock_generation: bool,
}

impl ContainerConfig {
    /// Read configuration from the environment once, at startup.
    ///
    /// `GEMINI_API_KEY` is the primary credential variable; `GOOGLE_AI_API_KEY`
    /// is accepted as a fallback for parity with earlier deployments. An empty
    /// value counts as absent.
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .or_else(|| std::env::var("GOOGLE_AI_API_KEY").ok())
            .filter(|key| !key.trim().is_empty());
        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url =
            std::env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self {
            api_key,
            model,
            base_url,
            mock_generation: false,
        }
    }
}

pub struct Container {
    generation: Arc<dyn GenerationService>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let generation: Arc<dyn GenerationService> = if config.mock_generation {
            debug!("Using mock generation service");
            Arc::new(MockGeneration::new())
        } else {
            debug!("Using Gemini generation service ({})", config.model);
            Arc::new(GeminiClient::new(
                config.api_key.clone().unwrap_or_default(),
                &config.model,
                &config.base_url,
            ))
        };

        Self { generation, config }
    }

    /// Construct with an externally supplied generation service.
    ///
    /// Lets tests wire in a counting or failing fake regardless of what the
    /// config says about credentials.
    pub fn with_generation(config: ContainerConfig, generation: Arc<dyn GenerationService>) -> Self {
        Self { generation, config }
    }

    pub fn triage_use_case(&self) -> TriageUseCase {
        TriageUseCase::new(self.generation.clone())
    }

    /// Whether the upstream credential requirement is satisfied.
    ///
    /// The mock provider needs no key; the real one does. Checked per request
    /// so a misconfigured service fails fast instead of timing out upstream.
    pub fn is_configured(&self) -> bool {
        self.config.mock_generation || self.config.api_key.is_some()
    }
}
