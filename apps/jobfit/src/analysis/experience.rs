#![allow(dead_code)]

//! Experience extractor — scans the résumé text for claimed years of
//! experience and scores them against the role's minimum.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Result of experience extraction for one résumé/role pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceAnalysis {
    /// Best estimate: the maximum year figure across all pattern matches,
    /// 0 if nothing matched.
    pub years: u32,
    pub meets_requirement: bool,
    /// min(100, 100 * years / required); 0.0 when the role requires 0 years.
    pub score: f64,
}

// Default phrasings: "3 years of experience" / "3+ years experience" and
// "experience: 3 years". Group 1 is the year count in both.
static DEFAULT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(\d+)\+?\s*years?\s*(?:of\s*)?experience").unwrap(),
        Regex::new(r"experience\s*:\s*(\d+)\+?\s*years?").unwrap(),
    ]
});

/// The pattern set applied to the text. Injected so new phrasings can be
/// added without touching the extraction logic.
#[derive(Debug, Clone)]
pub struct ExperiencePatterns {
    patterns: Vec<Regex>,
}

impl Default for ExperiencePatterns {
    fn default() -> Self {
        Self {
            patterns: DEFAULT_PATTERNS.clone(),
        }
    }
}

impl ExperiencePatterns {
    pub fn new(patterns: Vec<Regex>) -> Self {
        Self { patterns }
    }

    /// Maximum year figure across every match of every pattern; 0 if none.
    pub fn max_years(&self, text: &str) -> u32 {
        self.patterns
            .iter()
            .flat_map(|pattern| pattern.captures_iter(text))
            .filter_map(|caps| caps.get(1))
            .filter_map(|m| m.as_str().parse::<u32>().ok())
            .max()
            .unwrap_or(0)
    }
}

pub fn extract_experience(
    text: &str,
    required_years: u32,
    patterns: &ExperiencePatterns,
) -> ExperienceAnalysis {
    let years = patterns.max_years(text);
    let meets_requirement = years >= required_years;
    let score = if required_years > 0 {
        (f64::from(years) / f64::from(required_years) * 100.0).min(100.0)
    } else {
        0.0
    };

    ExperienceAnalysis {
        years,
        meets_requirement,
        score,
    }
}
