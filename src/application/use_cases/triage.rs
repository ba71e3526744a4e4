use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use crate::application::GenerationService;
use crate::domain::{AdviceResult, DomainError, SymptomQuery};

/// Server-side triage pipeline: build the prompt, call the generation
/// provider once, clean and parse its reply, and shape-validate the result.
///
/// Parsing fails closed: a reply that is not valid JSON, or that parses but
/// deviates from the expected three-field shape, is an error, never a
/// default or partial [`AdviceResult`].
pub struct TriageUseCase {
    generation: Arc<dyn GenerationService>,
}

impl TriageUseCase {
    pub fn new(generation: Arc<dyn GenerationService>) -> Self {
        Self { generation }
    }

    pub async fn execute(&self, symptoms: &SymptomQuery) -> Result<AdviceResult, DomainError> {
        if symptoms.is_blank() {
            return Err(DomainError::invalid_input("symptoms must not be blank"));
        }

        info!("Requesting advice ({} bytes of symptom text)", symptoms.len());

        let prompt = build_prompt(symptoms.text());
        let reply = self.generation.generate(&prompt).await?;

        let cleaned = strip_code_fences(&reply);
        debug!("Model reply cleaned ({} -> {} bytes)", reply.len(), cleaned.len());

        let parsed: Value = serde_json::from_str(&cleaned)
            .map_err(|e| DomainError::parse(format!("model reply is not valid JSON: {e}")))?;

        validate_shape(&parsed)
    }
}

/// Deterministic prompt embedding the raw symptom text verbatim.
///
/// The model is told to answer with exactly three fields formatted as a JSON
/// object; the field names here must match what [`validate_shape`] expects.
pub fn build_prompt(symptoms: &str) -> String {
    format!(
        r#"Based on the following symptoms:
"{symptoms}"
Please provide:
1. The type of doctor specialist the patient should consult.
2. Basic over-the-counter medications or remedies that might help.
3. Immediate and simple tips to help alleviate the symptoms and feel better right now.
Respond in JSON format like this:
{{
  "specialist": "Name of specialist",
  "medications": ["Medication 1", "Medication 2", "Medication 3"],
  "instantReliefTips": ["Tip 1", "Tip 2", "Tip 3"]
}}"#
    )
}

/// Strip markdown code-fence markers from a model reply.
///
/// Models frequently wrap JSON answers in a ```json fence; every fence
/// marker is removed wherever it appears, then the result is trimmed.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Check that a parsed reply has a non-empty `specialist` string and
/// string-array `medications` / `instantReliefTips` fields, and build the
/// [`AdviceResult`] from exactly those three fields.
fn validate_shape(value: &Value) -> Result<AdviceResult, DomainError> {
    let specialist = value
        .get("specialist")
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| DomainError::invalid_response("missing or empty specialist"))?;

    let medications = string_list(value, "medications")?;
    let instant_relief_tips = string_list(value, "instantReliefTips")?;

    Ok(AdviceResult::new(specialist, medications, instant_relief_tips))
}

fn string_list(value: &Value, field: &str) -> Result<Vec<String>, DomainError> {
    let items = value
        .get(field)
        .and_then(Value::as_array)
        .ok_or_else(|| DomainError::invalid_response(format!("{field} is not a list")))?;

    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| DomainError::invalid_response(format!("{field} contains a non-string entry")))
        })
        .collect()
}
