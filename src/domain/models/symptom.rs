use serde::{Deserialize, Serialize};

/// Free-form text describing a visitor's symptoms.
///
/// Held only in transient state while a request is prepared; never persisted
/// and never written to logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomQuery {
    text: String,
}

impl SymptomQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Empty or whitespace-only input must never produce a request.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_detection() {
        assert!(SymptomQuery::new("").is_blank());
        assert!(SymptomQuery::new("   \n\t").is_blank());
        assert!(!SymptomQuery::new("itchy rash on arm").is_blank());
    }

    #[test]
    fn test_text_is_preserved_verbatim() {
        let query = SymptomQuery::new("  sore throat  ");
        assert_eq!(query.text(), "  sore throat  ");
    }
}
