//! Wire model for the moderation endpoint
//!
//! Mirrors the JSON contract of `POST /api/moderate`. Optional fields are
//! normalized here so the rest of the application never deals with missing
//! values.

use serde::{Deserialize, Serialize};

/// Fallback confidence shown for a safe verdict when the service omits one.
///
/// This is a display heuristic, not model output.
pub const SAFE_CONFIDENCE_FALLBACK: f64 = 0.95;

/// Fallback confidence shown for an unsafe verdict when the service omits one.
///
/// This is a display heuristic, not model output.
pub const UNSAFE_CONFIDENCE_FALLBACK: f64 = 0.85;

/// Request body for `POST /api/moderate`
#[derive(Debug, Serialize)]
pub struct ModerateRequest<'a> {
    pub text: &'a str,
}

/// Verdict returned by the moderation service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    Safe,
    Unsafe,
}

impl ModerationStatus {
    pub fn is_safe(self) -> bool {
        matches!(self, ModerationStatus::Safe)
    }
}

/// One violated category with its human-readable description
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryDetail {
    pub category: String,
    pub description: String,
}

/// Completed moderation verdict for a single submission
///
/// Immutable once received; the panel replaces it wholesale on the next
/// request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModerationResult {
    /// The text that was analyzed, echoed back by the service
    pub input: String,
    pub status: ModerationStatus,
    /// ISO-8601 completion timestamp as sent over the wire
    pub timestamp: String,
    /// Category identifiers, empty for safe content
    #[serde(default)]
    pub violated_categories: Vec<String>,
    /// Per-category findings, empty for safe content
    #[serde(default)]
    pub details: Vec<CategoryDetail>,
    /// Model confidence in `0.0..=1.0`, omitted by older service builds
    pub confidence_score: Option<f64>,
}

impl ModerationResult {
    /// Confidence to display for this result
    ///
    /// When the service omitted a score, a status-based fallback is
    /// substituted (0.95 safe / 0.85 unsafe). The fallback is cosmetic and
    /// must not be read back as genuine model output.
    pub fn confidence(&self) -> f64 {
        self.confidence_score.unwrap_or(match self.status {
            ModerationStatus::Safe => SAFE_CONFIDENCE_FALLBACK,
            ModerationStatus::Unsafe => UNSAFE_CONFIDENCE_FALLBACK,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_safe_response_without_score() {
        let json = r#"{
            "input": "What a beautiful day",
            "status": "safe",
            "timestamp": "2024-01-01T00:00:00Z"
        }"#;
        let result: ModerationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.status, ModerationStatus::Safe);
        assert!(result.violated_categories.is_empty());
        assert!(result.details.is_empty());
        assert_eq!(result.confidence(), 0.95);
    }

    #[test]
    fn parse_unsafe_response_without_score() {
        let json = r#"{
            "input": "I want to hurt someone",
            "status": "unsafe",
            "timestamp": "2024-01-01T00:00:00Z",
            "violated_categories": ["violence"],
            "details": [
                {"category": "Violence", "description": "Content suggests intent to harm"}
            ]
        }"#;
        let result: ModerationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.status, ModerationStatus::Unsafe);
        assert_eq!(result.violated_categories, vec!["violence"]);
        assert_eq!(result.details.len(), 1);
        assert_eq!(result.details[0].category, "Violence");
        assert_eq!(
            result.details[0].description,
            "Content suggests intent to harm"
        );
        assert_eq!(result.confidence(), 0.85);
    }

    #[test]
    fn explicit_score_wins_over_fallback() {
        let json = r#"{
            "input": "hello",
            "status": "unsafe",
            "timestamp": "2024-01-01T00:00:00Z",
            "confidence_score": 0.42
        }"#;
        let result: ModerationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.confidence(), 0.42);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let json = r#"{
            "input": "hello",
            "status": "borderline",
            "timestamp": "2024-01-01T00:00:00Z"
        }"#;
        assert!(serde_json::from_str::<ModerationResult>(json).is_err());
    }

    #[test]
    fn request_body_shape() {
        let body = serde_json::to_value(ModerateRequest { text: "hello" }).unwrap();
        assert_eq!(body, serde_json::json!({"text": "hello"}));
    }
}
