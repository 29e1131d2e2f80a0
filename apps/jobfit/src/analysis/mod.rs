// Analysis pipeline: term matching, experience extraction, weighted
// aggregation, recommendations. Pure computation over the extracted text —
// extraction failures never reach this module.

pub mod experience;
pub mod matcher;
pub mod recommend;
pub mod scoring;

use serde::{Deserialize, Serialize};

use crate::catalogue::RoleRequirement;
use self::experience::{ExperienceAnalysis, ExperiencePatterns};
use self::matcher::TermAnalysis;
use self::scoring::ScoringWeights;

/// Full analysis of one (résumé text, role) pair. Immutable after
/// construction; lives only for the duration of one report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub required_skills: TermAnalysis,
    pub preferred_skills: TermAnalysis,
    pub experience: ExperienceAnalysis,
    pub education: TermAnalysis,
    /// Weighted sum of the four axis scores, in [0, 100].
    pub overall_score: f64,
    pub recommendations: Vec<String>,
}

/// Runs the four matchers over the (already lowercased) text and assembles
/// the aggregate. Empty text is valid input and yields near-zero scores.
pub fn analyze_resume(
    text: &str,
    requirement: &RoleRequirement,
    weights: &ScoringWeights,
    patterns: &ExperiencePatterns,
) -> ResumeAnalysis {
    let required_skills = matcher::match_terms(text, &requirement.required_skills);
    let preferred_skills = matcher::match_terms(text, &requirement.preferred_skills);
    let experience =
        experience::extract_experience(text, requirement.min_experience_years, patterns);
    let education = matcher::match_terms(text, &requirement.education_fields);

    let overall_score = scoring::aggregate(
        weights,
        required_skills.score,
        experience.score,
        education.score,
        preferred_skills.score,
    );

    let recommendations =
        recommend::build_recommendations(&required_skills, &experience, &education, requirement);

    ResumeAnalysis {
        required_skills,
        preferred_skills,
        experience,
        education,
        overall_score,
        recommendations,
    }
}
