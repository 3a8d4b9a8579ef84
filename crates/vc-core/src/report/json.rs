//! JSON report generation

use crate::{CoreError, CoreResult, Verdict};

pub fn generate(verdict: &Verdict) -> CoreResult<String> {
    serde_json::to_string_pretty(verdict)
        .map_err(|e| CoreError::Report(format!("JSON serialization failed: {}", e)))
}
