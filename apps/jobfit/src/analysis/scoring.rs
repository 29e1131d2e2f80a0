#![allow(dead_code)]

//! Score aggregation — combines the four axis scores into one overall match
//! percentage.

use serde::{Deserialize, Serialize};

/// Per-axis weights. The defaults are the fixed production weights and sum
/// to 1.0, so the aggregate stays in [0, 100] without clamping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub required_skills: f64,
    pub experience: f64,
    pub education: f64,
    pub preferred_skills: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            required_skills: 0.4,
            experience: 0.3,
            education: 0.2,
            preferred_skills: 0.1,
        }
    }
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.required_skills + self.experience + self.education + self.preferred_skills
    }
}

/// Weighted sum of the axis scores (each in [0, 100]).
pub fn aggregate(
    weights: &ScoringWeights,
    required_skills: f64,
    experience: f64,
    education: f64,
    preferred_skills: f64,
) -> f64 {
    weights.required_skills * required_skills
        + weights.experience * experience
        + weights.education * education
        + weights.preferred_skills * preferred_skills
}
