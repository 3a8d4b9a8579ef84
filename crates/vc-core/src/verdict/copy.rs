//! Fixed copy for each tier and for the indicator panel

use super::{Indicators, TierCopy};

pub(crate) const CLEAN: TierCopy = TierCopy {
    headline: "No Plagiarism Detected",
    explanation: "Your text appears to be original. We found no meaningful overlap \
                  with known sources or patterns typical of generated content.",
    accent: "#16a34a",
    suggestions: &[
        "Keep citing your sources as you continue to write.",
        "Run another check after any major revision.",
    ],
};

pub(crate) const LOW: TierCopy = TierCopy {
    headline: "Low Similarity Detected",
    explanation: "A small portion of your text resembles existing material. This is \
                  often common phrasing, but the matching passages are worth a second look.",
    accent: "#ca8a04",
    suggestions: &[
        "Review the highlighted passages and add citations where you borrowed ideas.",
        "Paraphrase closely matching sentences in your own voice.",
    ],
};

pub(crate) const HIGH: TierCopy = TierCopy {
    headline: "High Similarity Detected",
    explanation: "Significant parts of your text closely match existing material. \
                  Submitting it as is may be treated as plagiarism.",
    accent: "#ea580c",
    suggestions: &[
        "Rewrite the flagged sections so the structure and wording are your own.",
        "Add quotation marks and citations to any text taken directly from a source.",
        "Check your reference list against every source you consulted.",
    ],
};

pub(crate) const CRITICAL: TierCopy = TierCopy {
    headline: "Critical Plagiarism Risk",
    explanation: "Most of your text matches existing material or shows strong signs of \
                  being machine generated. It should not be submitted in its current form.",
    accent: "#dc2626",
    suggestions: &[
        "Completely rewrite the content using your own words and ideas.",
        "Cite every source you drew from, including paraphrased material.",
        "Talk to your instructor or editor before submitting this work.",
    ],
};

pub(crate) const FLAGGED_INDICATORS: Indicators = Indicators {
    title: "Detection Indicators:",
    items: &[
        "Highly structured and formal language patterns",
        "Consistent technical accuracy throughout",
        "Uniform sentence complexity",
        "Characteristic AI language model patterns detected",
    ],
};

pub(crate) const AUTHENTIC_INDICATORS: Indicators = Indicators {
    title: "Analysis Details:",
    items: &[
        "Natural language patterns detected",
        "Consistent writing style",
        "Organic sentence structure variations",
        "Authentic thought progression",
    ],
};
