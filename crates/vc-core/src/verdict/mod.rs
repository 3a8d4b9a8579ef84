//! Confidence tiers and the copy attached to them

mod copy;

use crate::DetectionResult;
use serde::Serialize;

/// Severity bucket derived from a confidence score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Clean,
    Low,
    High,
    Critical,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Clean, Tier::Low, Tier::High, Tier::Critical];

    pub fn name(&self) -> &'static str {
        match self {
            Tier::Clean => "clean",
            Tier::Low => "low",
            Tier::High => "high",
            Tier::Critical => "critical",
        }
    }

    pub fn copy(&self) -> &'static TierCopy {
        &self.band().copy
    }

    fn band(&self) -> &'static TierBand {
        // Every tier appears exactly once in the table.
        match self {
            Tier::Clean => &TIER_BANDS[0],
            Tier::Low => &TIER_BANDS[1],
            Tier::High => &TIER_BANDS[2],
            Tier::Critical => &TIER_BANDS[3],
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Clean => write!(f, "Clean"),
            Tier::Low => write!(f, "Low"),
            Tier::High => write!(f, "High"),
            Tier::Critical => write!(f, "Critical"),
        }
    }
}

/// Headline, paragraph, accent colour and suggestions for one tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierCopy {
    pub headline: &'static str,
    pub explanation: &'static str,
    /// CSS hex colour
    pub accent: &'static str,
    pub suggestions: &'static [&'static str],
}

/// One row of the classification table
#[derive(Debug)]
pub struct TierBand {
    /// Inclusive upper bound on the percentage (`confidence * 100`)
    pub upper_bound: f64,
    pub tier: Tier,
    pub copy: TierCopy,
}

/// Ascending by upper bound; the first band whose bound is not exceeded wins.
pub static TIER_BANDS: [TierBand; 4] = [
    TierBand {
        upper_bound: 20.0,
        tier: Tier::Clean,
        copy: copy::CLEAN,
    },
    TierBand {
        upper_bound: 45.0,
        tier: Tier::Low,
        copy: copy::LOW,
    },
    TierBand {
        upper_bound: 60.0,
        tier: Tier::High,
        copy: copy::HIGH,
    },
    TierBand {
        upper_bound: f64::INFINITY,
        tier: Tier::Critical,
        copy: copy::CRITICAL,
    },
];

/// Map a confidence score to its tier.
///
/// Out-of-range scores follow the same inequalities. NaN compares false
/// against every bound and lands in [`Tier::Critical`].
pub fn classify(confidence: f64) -> Tier {
    let percentage = confidence * 100.0;
    TIER_BANDS
        .iter()
        .find(|band| percentage <= band.upper_bound)
        .map(|band| band.tier)
        .unwrap_or(Tier::Critical)
}

/// Secondary panel keyed on the service's flag rather than the tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Indicators {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

impl Indicators {
    pub fn for_flag(is_flagged: bool) -> &'static Indicators {
        if is_flagged {
            &copy::FLAGGED_INDICATORS
        } else {
            &copy::AUTHENTIC_INDICATORS
        }
    }
}

/// A detection result together with everything needed to render it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    #[serde(flatten)]
    pub result: DetectionResult,
    pub tier: Tier,
    pub copy: &'static TierCopy,
    pub indicators: &'static Indicators,
}

impl Verdict {
    pub fn new(result: DetectionResult) -> Self {
        let tier = classify(result.confidence);
        Self {
            tier,
            copy: tier.copy(),
            indicators: Indicators::for_flag(result.is_flagged),
            result,
        }
    }

    pub fn headline(&self) -> &'static str {
        self.copy.headline
    }

    pub fn suggestions(&self) -> &'static [&'static str] {
        self.copy.suggestions
    }

    pub fn confidence_label(&self) -> String {
        self.result.confidence_label()
    }
}

impl From<DetectionResult> for Verdict {
    fn from(result: DetectionResult) -> Self {
        Self::new(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(is_flagged: bool, confidence: f64) -> DetectionResult {
        DetectionResult {
            is_flagged,
            confidence,
            message: "test".to_string(),
        }
    }

    #[test]
    fn test_tier_boundaries_are_inclusive() {
        assert_eq!(classify(0.20), Tier::Clean);
        assert_eq!(classify(0.2000001), Tier::Low);
        assert_eq!(classify(0.45), Tier::Low);
        assert_eq!(classify(0.4500001), Tier::High);
        assert_eq!(classify(0.60), Tier::High);
        assert_eq!(classify(0.6000001), Tier::Critical);
    }

    #[test]
    fn test_tier_extremes() {
        assert_eq!(classify(0.0), Tier::Clean);
        assert_eq!(classify(1.0), Tier::Critical);
        assert_eq!(classify(-0.5), Tier::Clean);
        assert_eq!(classify(3.0), Tier::Critical);
        assert_eq!(classify(f64::NAN), Tier::Critical);
    }

    #[test]
    fn test_classification_is_deterministic() {
        for step in 0..=1000 {
            let confidence = step as f64 / 1000.0;
            let first = classify(confidence);
            for _ in 0..3 {
                assert_eq!(classify(confidence), first);
            }
        }
    }

    #[test]
    fn test_tiers_increase_with_confidence() {
        let mut previous = Tier::Clean;
        for step in 0..=1000 {
            let tier = classify(step as f64 / 1000.0);
            assert!(tier >= previous);
            previous = tier;
        }
    }

    #[test]
    fn test_band_table_is_ordered() {
        for pair in TIER_BANDS.windows(2) {
            assert!(pair[0].upper_bound < pair[1].upper_bound);
            assert!(pair[0].tier < pair[1].tier);
        }
        for tier in Tier::ALL {
            assert_eq!(tier.band().tier, tier);
        }
    }

    #[test]
    fn test_every_tier_has_two_or_three_suggestions() {
        for tier in Tier::ALL {
            let count = tier.copy().suggestions.len();
            assert!((2..=3).contains(&count), "{} has {} suggestions", tier, count);
            assert!(tier.copy().accent.starts_with('#'));
        }
    }

    #[test]
    fn test_clean_verdict_copy() {
        let verdict = Verdict::new(result(false, 0.05));
        assert_eq!(verdict.tier, Tier::Clean);
        assert_eq!(verdict.headline(), "No Plagiarism Detected");
        assert_eq!(verdict.indicators.title, "Analysis Details:");
    }

    #[test]
    fn test_critical_verdict_copy() {
        let verdict = Verdict::new(result(true, 0.72));
        assert_eq!(verdict.tier, Tier::Critical);
        assert_eq!(verdict.suggestions().len(), 3);
        assert_eq!(
            verdict.suggestions()[0],
            "Completely rewrite the content using your own words and ideas."
        );
        assert_eq!(verdict.indicators.title, "Detection Indicators:");
        assert_eq!(verdict.indicators.items.len(), 4);
    }
}
