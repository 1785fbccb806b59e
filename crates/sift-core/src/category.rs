//! Sensitive data categories and classification results.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Categories that text can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensitiveCategory {
    /// Names, government identifiers, contact details.
    Pii,
    /// Revenue, account numbers, financial statements.
    Financial,
    /// Diagnoses, treatments, medical records.
    Health,
    /// Trade secrets and internal business material.
    ProprietaryBusiness,
    /// Technology or data under export restrictions.
    ExportControlled,
    /// Nothing sensitive.
    NonSensitive,
}

impl SensitiveCategory {
    /// Returns all available categories, in prompt order.
    pub fn all() -> &'static [SensitiveCategory] {
        &[
            SensitiveCategory::Pii,
            SensitiveCategory::Financial,
            SensitiveCategory::Health,
            SensitiveCategory::ProprietaryBusiness,
            SensitiveCategory::ExportControlled,
            SensitiveCategory::NonSensitive,
        ]
    }

    /// Returns the label the model is asked to answer with.
    pub fn label(&self) -> &'static str {
        match self {
            SensitiveCategory::Pii => "Personally Identifiable Information (PII)",
            SensitiveCategory::Financial => "Financial Information",
            SensitiveCategory::Health => "Health Information",
            SensitiveCategory::ProprietaryBusiness => "Proprietary Business Information",
            SensitiveCategory::ExportControlled => "Export-Controlled Information",
            SensitiveCategory::NonSensitive => "Non-Sensitive",
        }
    }

    /// Looks up a category by its exact label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.label() == label)
    }

    /// All labels joined with `", "`, as embedded in the prompt.
    pub fn joined_labels() -> String {
        Self::all()
            .iter()
            .map(|c| c.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for SensitiveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of classifying a piece of text.
///
/// Fields hold whatever the model answered: `category` is not checked
/// against [`SensitiveCategory`] and `confidence` is not clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// The category label the text belongs to.
    pub category: String,
    /// Confidence score, nominally 0.0 to 1.0.
    pub confidence: f64,
    /// Explanation for the classification.
    pub explanation: String,
}

impl ClassificationResult {
    /// Creates a result from its three fields.
    pub fn new(
        category: impl Into<String>,
        confidence: f64,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            confidence,
            explanation: explanation.into(),
        }
    }

    /// Creates the fallback result returned when classification fails.
    pub fn fallback(error: impl fmt::Display) -> Self {
        Self::new(
            SensitiveCategory::NonSensitive.label(),
            0.0,
            format!("Failed to classify due to an error: {}", error),
        )
    }

    /// Returns the category as a known label, if it is one.
    pub fn known_category(&self) -> Option<SensitiveCategory> {
        SensitiveCategory::from_label(&self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_all_returns_all_variants() {
        let all = SensitiveCategory::all();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], SensitiveCategory::Pii);
        assert_eq!(all[5], SensitiveCategory::NonSensitive);
    }

    #[test]
    fn from_label_round_trips_every_category() {
        for category in SensitiveCategory::all() {
            assert_eq!(
                SensitiveCategory::from_label(category.label()),
                Some(*category)
            );
        }
    }

    #[test]
    fn from_label_is_exact() {
        assert_eq!(SensitiveCategory::from_label("PII"), None);
        assert_eq!(SensitiveCategory::from_label("non-sensitive"), None);
    }

    #[test]
    fn joined_labels_matches_prompt_list() {
        assert_eq!(
            SensitiveCategory::joined_labels(),
            "Personally Identifiable Information (PII), Financial Information, \
             Health Information, Proprietary Business Information, \
             Export-Controlled Information, Non-Sensitive"
        );
    }

    #[test]
    fn fallback_is_non_sensitive_with_error() {
        let result = ClassificationResult::fallback("connection refused");
        assert_eq!(result.category, "Non-Sensitive");
        assert_eq!(result.confidence, 0.0);
        assert_eq!(
            result.explanation,
            "Failed to classify due to an error: connection refused"
        );
        assert_eq!(
            result.known_category(),
            Some(SensitiveCategory::NonSensitive)
        );
    }

    #[test]
    fn unknown_category_is_kept_verbatim() {
        let result = ClassificationResult::new("Classified", 1.7, "odd answer");
        assert_eq!(result.category, "Classified");
        assert_eq!(result.confidence, 1.7);
        assert_eq!(result.known_category(), None);
    }
}
