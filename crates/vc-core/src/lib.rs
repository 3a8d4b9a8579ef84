//! Veracity Checker Core
//!
//! This crate holds everything between the user's text and the rendered
//! verdict: the wire types exchanged with the detection service, the
//! confidence tier classifier, the HTTP client, and the request orchestrator
//! that drives a single check to completion.

pub mod client;
pub mod config;
pub mod orchestrator;
pub mod report;
pub mod verdict;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use client::{check, DetectionClient, HttpDetectionClient};
pub use config::ApiConfig;
pub use orchestrator::{submit_with, Orchestrator, RequestState};
pub use verdict::{classify, Indicators, Tier, TierCopy, Verdict};

/// Shown when the submitted text is empty or whitespace only.
pub const EMPTY_TEXT_MESSAGE: &str = "Please enter some text to check";

/// Shown for every transport, status or decoding failure.
pub const CHECK_FAILED_MESSAGE: &str = "Failed to check plagiarism. Please try again.";

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Please enter some text to check")]
    EmptyText,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Detection service returned status {0}")]
    Status(u16),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Report error: {0}")]
    Report(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

/// Broad failure categories, used to pick the copy shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Transport,
    Configuration,
    Report,
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::EmptyText => ErrorKind::Validation,
            CoreError::Http(_) | CoreError::Status(_) | CoreError::Parse(_) => ErrorKind::Transport,
            CoreError::Config(_) => ErrorKind::Configuration,
            CoreError::Report(_) => ErrorKind::Report,
        }
    }

    /// User-facing message. Transport detail never leaks through here.
    pub fn user_message(&self) -> String {
        match self.kind() {
            ErrorKind::Validation => EMPTY_TEXT_MESSAGE.to_string(),
            ErrorKind::Transport => CHECK_FAILED_MESSAGE.to_string(),
            ErrorKind::Configuration | ErrorKind::Report => self.to_string(),
        }
    }
}

/// Body of the POST sent to the detection service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectionRequest {
    text: String,
}

impl DetectionRequest {
    /// Rejects text that is empty after trimming. Accepted text is sent untouched.
    pub fn new(text: impl Into<String>) -> CoreResult<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(CoreError::EmptyText);
        }
        Ok(Self { text })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Detection outcome as reported by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "WireResult")]
pub struct DetectionResult {
    pub is_flagged: bool,
    pub confidence: f64,
    pub message: String,
}

/// Response body as sent. Older service builds report the flag as
/// `isPlagiarized`; when both names are present `isFlagged` wins.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireResult {
    is_flagged: Option<bool>,
    is_plagiarized: Option<bool>,
    confidence: f64,
    message: String,
}

impl TryFrom<WireResult> for DetectionResult {
    type Error = String;

    fn try_from(wire: WireResult) -> Result<Self, Self::Error> {
        let is_flagged = wire
            .is_flagged
            .or(wire.is_plagiarized)
            .ok_or_else(|| "missing field `isFlagged`".to_string())?;

        Ok(Self {
            is_flagged,
            confidence: wire.confidence,
            message: wire.message,
        })
    }
}

impl DetectionResult {
    pub fn tier(&self) -> Tier {
        classify(self.confidence)
    }

    pub fn percentage(&self) -> f64 {
        self.confidence * 100.0
    }

    /// e.g. `72.00% Confidence`
    pub fn confidence_label(&self) -> String {
        format!("{:.2}% Confidence", self.percentage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_rejects_blank_text() {
        assert!(matches!(DetectionRequest::new(""), Err(CoreError::EmptyText)));
        assert!(matches!(DetectionRequest::new("  \n\t "), Err(CoreError::EmptyText)));
    }

    #[test]
    fn test_request_keeps_surrounding_whitespace() {
        let request = DetectionRequest::new("  some text ").unwrap();
        assert_eq!(request.text(), "  some text ");
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"text":"  some text "}"#
        );
    }

    #[test]
    fn test_result_wire_format() {
        let result: DetectionResult =
            serde_json::from_str(r#"{"isFlagged":true,"confidence":0.72,"message":"copied"}"#)
                .unwrap();
        assert!(result.is_flagged);
        assert_eq!(result.confidence, 0.72);
        assert_eq!(result.message, "copied");
        assert_eq!(result.tier(), Tier::Critical);
    }

    #[test]
    fn test_result_accepts_legacy_flag_name() {
        let result: DetectionResult =
            serde_json::from_str(r#"{"isPlagiarized":false,"confidence":0.1,"message":"ok"}"#)
                .unwrap();
        assert!(!result.is_flagged);
    }

    #[test]
    fn test_result_prefers_current_flag_name() {
        let result: DetectionResult = serde_json::from_str(
            r#"{"isFlagged":true,"isPlagiarized":false,"confidence":0.5,"message":"ok"}"#,
        )
        .unwrap();
        assert!(result.is_flagged);
    }

    #[test]
    fn test_result_requires_a_flag() {
        let err = serde_json::from_str::<DetectionResult>(r#"{"confidence":0.5,"message":"ok"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("isFlagged"));
    }

    #[test]
    fn test_result_serializes_current_flag_name() {
        let result = DetectionResult {
            is_flagged: true,
            confidence: 0.5,
            message: "ok".to_string(),
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["isFlagged"], true);
        assert!(value.get("isPlagiarized").is_none());
    }

    #[test]
    fn test_confidence_label() {
        let result = DetectionResult {
            is_flagged: true,
            confidence: 0.72,
            message: String::new(),
        };
        assert_eq!(result.confidence_label(), "72.00% Confidence");
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(CoreError::EmptyText.user_message(), EMPTY_TEXT_MESSAGE);
        assert_eq!(CoreError::Status(500).user_message(), CHECK_FAILED_MESSAGE);
        assert_eq!(CoreError::Status(500).kind(), ErrorKind::Transport);
        let parse = serde_json::from_str::<DetectionResult>("nope").unwrap_err();
        assert_eq!(CoreError::from(parse).user_message(), CHECK_FAILED_MESSAGE);
    }
}
