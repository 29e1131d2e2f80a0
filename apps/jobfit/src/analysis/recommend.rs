//! Recommendation generator — turns analysis gaps into human-readable lines.

use crate::analysis::experience::ExperienceAnalysis;
use crate::analysis::matcher::TermAnalysis;
use crate::catalogue::RoleRequirement;

/// Fixed rule order, each rule appending at most one line. Preferred-skill
/// gaps never produce a recommendation.
pub fn build_recommendations(
    required_skills: &TermAnalysis,
    experience: &ExperienceAnalysis,
    education: &TermAnalysis,
    requirement: &RoleRequirement,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if !required_skills.missing.is_empty() {
        recommendations.push(format!(
            "Add these crucial skills: {}",
            required_skills.missing.join(", ")
        ));
    }

    if !experience.meets_requirement {
        recommendations.push(format!(
            "Highlight more experience - role requires {} years",
            requirement.min_experience_years
        ));
    }

    if !education.missing.is_empty() {
        recommendations.push(format!(
            "Add education in: {}",
            education.missing.join(", ")
        ));
    }

    recommendations
}
