//! Strict decoding of the model's JSON analysis

use crate::error::{OptiScoreError, Result};
use serde::{Deserialize, Serialize};

/// Sentinel used when the model omits the match percentage.
pub const NOT_AVAILABLE: &str = "N/A";

/// Fallback when the model omits the profile summary.
pub const NO_SUMMARY: &str = "No summary available";

/// Result of one completed analysis. Immutable once parsed; keyword order
/// and casing are the model's literal output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub match_percentage: String,
    pub missing_keywords: Vec<String>,
    pub profile_summary: String,
}

/// Wire schema shared with the prompt template. "JD Match" may arrive as a
/// string ("78%") or a bare number; both are kept as opaque text.
#[derive(Debug, Deserialize)]
struct WireAnalysis {
    #[serde(rename = "JD Match")]
    jd_match: Option<MatchField>,
    #[serde(rename = "MissingKeywords", default)]
    missing_keywords: Vec<String>,
    #[serde(rename = "Profile Summary")]
    profile_summary: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MatchField {
    Text(String),
    Number(f64),
}

impl MatchField {
    fn into_string(self) -> String {
        match self {
            MatchField::Text(s) => s,
            MatchField::Number(n) => n.to_string(),
        }
    }
}

/// Decodes the raw model text as a strict JSON object. Anything that is not
/// a JSON object fails with a malformed-response error; there is no repair
/// pass and no regex fallback. Absent "JD Match" and "MissingKeywords"
/// fields fall back to their defaults instead of failing.
pub fn parse_response(raw: &str) -> Result<AnalysisResult> {
    let wire: WireAnalysis = serde_json::from_str(raw).map_err(|e| {
        OptiScoreError::MalformedResponse(format!("Model did not return valid JSON: {}", e))
    })?;

    Ok(AnalysisResult {
        match_percentage: wire
            .jd_match
            .map(MatchField::into_string)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        missing_keywords: wire.missing_keywords,
        profile_summary: wire
            .profile_summary
            .unwrap_or_else(|| NO_SUMMARY.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_response_round_trip() {
        let raw = r#"{"JD Match":"82%","MissingKeywords":["Docker","Kubernetes"],"Profile Summary":"Strong backend engineer."}"#;
        let result = parse_response(raw).unwrap();

        assert_eq!(result.match_percentage, "82%");
        assert_eq!(result.missing_keywords, vec!["Docker", "Kubernetes"]);
        assert_eq!(result.profile_summary, "Strong backend engineer.");
    }

    #[test]
    fn test_empty_object_defaults() {
        let result = parse_response("{}").unwrap();

        assert_eq!(result.match_percentage, NOT_AVAILABLE);
        assert!(result.missing_keywords.is_empty());
        assert_eq!(result.profile_summary, NO_SUMMARY);
    }

    #[test]
    fn test_not_json_is_malformed() {
        let err = parse_response("not json").unwrap_err();
        assert!(matches!(err, OptiScoreError::MalformedResponse(_)));
    }

    #[test]
    fn test_json_array_is_malformed() {
        let err = parse_response("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, OptiScoreError::MalformedResponse(_)));
    }

    #[test]
    fn test_numeric_match_kept_as_text() {
        let raw = r#"{"JD Match": 78, "MissingKeywords": [], "Profile Summary": "ok"}"#;
        let result = parse_response(raw).unwrap();
        assert_eq!(result.match_percentage, "78");
    }

    #[test]
    fn test_parsing_is_idempotent() {
        let raw = r#"{"JD Match":"64%","MissingKeywords":["Rust"],"Profile Summary":"Promising."}"#;
        let first = parse_response(raw).unwrap();
        let second = parse_response(raw).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_keyword_order_and_casing_preserved() {
        let raw = r#"{"JD Match":"50%","MissingKeywords":["kubernetes","Kubernetes","AWS"],"Profile Summary":"x"}"#;
        let result = parse_response(raw).unwrap();
        assert_eq!(
            result.missing_keywords,
            vec!["kubernetes", "Kubernetes", "AWS"]
        );
    }
}
