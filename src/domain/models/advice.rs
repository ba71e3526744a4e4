use serde::{Deserialize, Serialize};

/// The validated three-field answer returned to the client: which specialist
/// to consult, over-the-counter medications, and instant relief tips.
///
/// Only ever constructed from a payload that passed shape validation; both
/// lists may be empty, in which case the client renders a fallback line
/// instead of an empty section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AdviceResult {
    specialist: String,
    medications: Vec<String>,
    instant_relief_tips: Vec<String>,
}

impl AdviceResult {
    pub fn new(
        specialist: impl Into<String>,
        medications: Vec<String>,
        instant_relief_tips: Vec<String>,
    ) -> Self {
        Self {
            specialist: specialist.into(),
            medications,
            instant_relief_tips,
        }
    }

    pub fn specialist(&self) -> &str {
        &self.specialist
    }

    pub fn medications(&self) -> &[String] {
        &self.medications
    }

    pub fn instant_relief_tips(&self) -> &[String] {
        &self.instant_relief_tips
    }

    pub fn has_medications(&self) -> bool {
        !self.medications.is_empty()
    }

    pub fn has_instant_relief_tips(&self) -> bool {
        !self.instant_relief_tips.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AdviceResult {
        AdviceResult::new(
            "Dermatologist",
            vec!["Calamine lotion".to_string()],
            vec!["Avoid scratching".to_string()],
        )
    }

    #[test]
    fn test_accessors() {
        let advice = sample();

        assert_eq!(advice.specialist(), "Dermatologist");
        assert_eq!(advice.medications(), ["Calamine lotion".to_string()]);
        assert!(advice.has_medications());
        assert!(advice.has_instant_relief_tips());
    }

    #[test]
    fn test_empty_lists_are_allowed() {
        let advice = AdviceResult::new("General Physician", vec![], vec![]);

        assert!(!advice.has_medications());
        assert!(!advice.has_instant_relief_tips());
    }

    #[test]
    fn test_serializes_with_camel_case_field_names() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["specialist"], "Dermatologist");
        assert!(json["medications"].is_array());
        assert!(json["instantReliefTips"].is_array());
        assert!(json.get("instant_relief_tips").is_none());
    }

    #[test]
    fn test_deserializes_from_wire_format() {
        let advice: AdviceResult = serde_json::from_str(
            r#"{"specialist":"ENT","medications":[],"instantReliefTips":["Rest"]}"#,
        )
        .unwrap();

        assert_eq!(advice.specialist(), "ENT");
        assert_eq!(advice.instant_relief_tips(), ["Rest".to_string()]);
    }
}
