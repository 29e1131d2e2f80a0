//! Role catalogue — the fixed requirement sets a résumé is scored against.

use serde::{Deserialize, Serialize};

/// Requirement set for a single role. Built once at startup, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRequirement {
    pub role: String,
    /// Lowercase terms; absence of one dominates the overall score.
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub min_experience_years: u32,
    pub education_fields: Vec<String>,
    /// Display-only; echoed in the report.
    pub salary_range: String,
}

/// The built-in role catalogue. Injected into callers rather than read as
/// ambient state.
#[derive(Debug, Clone)]
pub struct RoleCatalogue {
    roles: Vec<RoleRequirement>,
}

impl RoleCatalogue {
    pub fn builtin() -> Self {
        Self {
            roles: vec![
                RoleRequirement {
                    role: "software developer".to_string(),
                    required_skills: strings(&["python", "java", "javascript", "sql", "git"]),
                    preferred_skills: strings(&["react", "docker", "aws", "agile"]),
                    min_experience_years: 2,
                    education_fields: strings(&[
                        "computer science",
                        "software engineering",
                        "it",
                    ]),
                    salary_range: "$70,000 - $120,000".to_string(),
                },
                RoleRequirement {
                    role: "data analyst".to_string(),
                    required_skills: strings(&["python", "sql", "excel", "statistics"]),
                    preferred_skills: strings(&["tableau", "power bi", "r", "machine learning"]),
                    min_experience_years: 1,
                    education_fields: strings(&["data science", "statistics", "mathematics"]),
                    salary_range: "$60,000 - $100,000".to_string(),
                },
            ],
        }
    }

    /// Case-sensitive exact match against the catalogue keys. Keys are
    /// lowercase; callers normalize the role name before calling (the CLI
    /// lowercases its `--role` argument).
    pub fn lookup(&self, role: &str) -> Option<&RoleRequirement> {
        self.roles.iter().find(|r| r.role == role)
    }

    /// Role names in catalogue order, for the supported-roles listing.
    pub fn role_names(&self) -> Vec<&str> {
        self.roles.iter().map(|r| r.role.as_str()).collect()
    }
}

fn strings(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| (*t).to_string()).collect()
}
