//! Markdown report generation

use crate::Verdict;
use std::fmt::Write;

pub fn generate(verdict: &Verdict) -> String {
    let mut md = String::new();

    let _ = writeln!(md, "# {}\n", verdict.headline());
    let _ = writeln!(md, "**{}** (tier: {})\n", verdict.confidence_label(), verdict.tier);
    let _ = writeln!(md, "{}\n", verdict.copy.explanation);

    if !verdict.result.message.is_empty() {
        let _ = writeln!(md, "> {}\n", verdict.result.message);
    }

    md.push_str("## Suggestions\n\n");
    for (i, suggestion) in verdict.suggestions().iter().enumerate() {
        let _ = writeln!(md, "{}. {}", i + 1, suggestion);
    }

    let _ = writeln!(md, "\n## {}\n", verdict.indicators.title.trim_end_matches(':'));
    for item in verdict.indicators.items {
        let _ = writeln!(md, "- {}", item);
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DetectionResult;

    #[test]
    fn test_markdown_report() {
        let verdict = Verdict::new(DetectionResult {
            is_flagged: true,
            confidence: 0.72,
            message: String::new(),
        });

        let md = generate(&verdict);

        assert!(md.starts_with("# Critical Plagiarism Risk\n"));
        assert!(md.contains("**72.00% Confidence** (tier: Critical)"));
        assert!(md.contains("1. Completely rewrite the content using your own words and ideas."));
        assert!(md.contains("3. Talk to your instructor or editor before submitting this work."));
        assert!(md.contains("## Detection Indicators\n"));
        assert!(!md.contains("> "));
    }
}
