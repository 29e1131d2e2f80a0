//! Match report — the structured output of one analysis run, renderable as
//! console text or JSON.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::ResumeAnalysis;
use crate::catalogue::RoleRequirement;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub role: String,
    pub required_years: u32,
    pub salary_range: String,
    pub analysis: ResumeAnalysis,
    pub generated_at: DateTime<Utc>,
}

impl MatchReport {
    pub fn new(requirement: &RoleRequirement, analysis: ResumeAnalysis) -> Self {
        Self {
            role: requirement.role.clone(),
            required_years: requirement.min_experience_years,
            salary_range: requirement.salary_range.clone(),
            analysis,
            generated_at: Utc::now(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Console rendering: overall match, per-axis findings, numbered
    /// recommendations, salary range.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let analysis = &self.analysis;

        let _ = writeln!(out, "=== Analysis Results ===");
        let _ = writeln!(out);
        let _ = writeln!(out, "Role: {}", self.role);
        let _ = writeln!(out, "Overall Match: {:.1}%", analysis.overall_score);
        let _ = writeln!(out);
        let _ = writeln!(out, "Skills Analysis:");
        let _ = writeln!(
            out,
            "Required Skills Found: {}",
            analysis.required_skills.found.join(", ")
        );
        let _ = writeln!(
            out,
            "Preferred Skills Found: {}",
            analysis.preferred_skills.found.join(", ")
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "Experience: {} years", analysis.experience.years);
        let _ = writeln!(out, "Required: {} years", self.required_years);
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Education Fields Found: {}",
            analysis.education.found.join(", ")
        );

        if !analysis.recommendations.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Recommendations:");
            for (i, rec) in analysis.recommendations.iter().enumerate() {
                let _ = writeln!(out, "{}. {}", i + 1, rec);
            }
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Salary Range: {}", self.salary_range);

        out
    }
}
