use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use indicatif::ProgressBar;

use crate::application::IntakeWidget;
use crate::connector::adapter::HttpAdviceGateway;
use crate::domain::{AdviceResult, RequestState};

const NO_MEDICATIONS: &str = "No medications recommended";
const NO_TIPS: &str = "No instant relief tips available";

pub struct AskController;

impl AskController {
    pub fn new() -> Self {
        Self
    }

    /// Submit symptoms to a running advice service and return the rendered
    /// advice. A failed request becomes an error so the process exits
    /// nonzero; blank input short-circuits without any request.
    pub async fn ask(&self, symptoms: String, server_url: String) -> Result<String> {
        let gateway = Arc::new(HttpAdviceGateway::new(server_url));
        let widget = IntakeWidget::new(gateway);

        let spinner = ProgressBar::new_spinner();
        spinner.set_message("Consulting...");
        spinner.enable_steady_tick(Duration::from_millis(100));

        let state = widget.submit(&symptoms).await;
        spinner.finish_and_clear();

        match state {
            RequestState::Succeeded(advice) => {
                let rendered = self.format_advice(&advice);
                widget.dismiss().await;
                Ok(rendered)
            }
            RequestState::Failed(reason) => Err(anyhow!(reason)),
            _ => Ok("Describe your symptoms to get advice.".to_string()),
        }
    }

    fn format_advice(&self, advice: &AdviceResult) -> String {
        let mut output = String::from("Expert Advice for Your Symptoms\n");
        output.push_str("===============================\n\n");

        output.push_str("Specialist to Consult:\n");
        output.push_str(&format!("  {}\n\n", advice.specialist()));

        output.push_str("Recommended Medications:\n");
        output.push_str(&Self::format_list(advice.medications(), NO_MEDICATIONS));

        output.push_str("\nInstant Tips for Relief:\n");
        output.push_str(&Self::format_list(advice.instant_relief_tips(), NO_TIPS));

        output
    }

    /// An empty list renders a single fallback line, never an empty section.
    fn format_list(items: &[String], fallback: &str) -> String {
        if items.is_empty() {
            return format!("  {fallback}\n");
        }

        items
            .iter()
            .map(|item| format!("  - {item}\n"))
            .collect()
    }
}

impl Default for AskController {
    fn default() -> Self {
        Self::new()
    }
}
