//! Verdict rendering

pub mod json;
pub mod markdown;
pub mod text;

use crate::{CoreResult, Verdict};

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Markdown,
    Json,
}

impl ReportFormat {
    /// Parse a format name, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "text" | "txt" => Some(ReportFormat::Text),
            "markdown" | "md" => Some(ReportFormat::Markdown),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

/// Generate report in specified format
pub fn generate_report(verdict: &Verdict, format: ReportFormat) -> CoreResult<String> {
    match format {
        ReportFormat::Text => Ok(text::generate(verdict)),
        ReportFormat::Markdown => Ok(markdown::generate(verdict)),
        ReportFormat::Json => json::generate(verdict),
    }
}
