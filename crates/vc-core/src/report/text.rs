//! Plain text report generation

use crate::Verdict;
use std::fmt::Write;

pub fn generate(verdict: &Verdict) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", verdict.headline());
    let _ = writeln!(out, "{}", "=".repeat(50));
    let _ = writeln!(out, "{}", verdict.confidence_label());
    let _ = writeln!(out, "Tier: {}", verdict.tier);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", verdict.copy.explanation);

    if !verdict.result.message.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Service message: {}", verdict.result.message);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Suggestions:");
    for (i, suggestion) in verdict.suggestions().iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, suggestion);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", verdict.indicators.title);
    for item in verdict.indicators.items {
        let _ = writeln!(out, "  - {}", item);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DetectionResult;

    #[test]
    fn test_text_report() {
        let verdict = Verdict::new(DetectionResult {
            is_flagged: false,
            confidence: 0.05,
            message: "ok".to_string(),
        });

        let report = generate(&verdict);

        assert!(report.starts_with("No Plagiarism Detected\n"));
        assert!(report.contains("5.00% Confidence"));
        assert!(report.contains("Tier: Clean"));
        assert!(report.contains("Service message: ok"));
        assert!(report.contains("  1. Keep citing your sources as you continue to write."));
        assert!(report.contains("Analysis Details:"));
    }
}
