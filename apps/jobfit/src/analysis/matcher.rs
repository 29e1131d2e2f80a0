//! Term matcher — partitions a term list into found/missing against the
//! résumé text and computes the coverage percentage.

use serde::{Deserialize, Serialize};

/// Result of matching one term list (skills or education fields).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermAnalysis {
    /// Terms present in the text, in input order.
    pub found: Vec<String>,
    /// The complement, same order.
    pub missing: Vec<String>,
    /// 100 * |found| / |terms|; 0.0 for an empty term list.
    pub score: f64,
}

/// A term is found iff it occurs as a literal substring of `text`. Both the
/// text and the catalogue terms are lowercase upstream, so no case folding
/// happens here. Pure function.
pub fn match_terms(text: &str, terms: &[String]) -> TermAnalysis {
    let (found, missing): (Vec<String>, Vec<String>) = terms
        .iter()
        .cloned()
        .partition(|term| text.contains(term.as_str()));

    let score = if terms.is_empty() {
        0.0
    } else {
        found.len() as f64 / terms.len() as f64 * 100.0
    };

    TermAnalysis {
        found,
        missing,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| (*t).to_string()).collect()
    }

    #[test]
    fn test_found_plus_missing_covers_all_terms() {
        let t = terms(&["python", "java", "sql", "git"]);
        let analysis = match_terms("python and sql developer", &t);
        assert_eq!(analysis.found.len() + analysis.missing.len(), t.len());
        for term in &analysis.found {
            assert!(!analysis.missing.contains(term));
        }
    }

    #[test]
    fn test_found_and_missing_preserve_input_order() {
        let t = terms(&["python", "java", "javascript", "sql", "git"]);
        let analysis = match_terms("git python sql", &t);
        assert_eq!(analysis.found, vec!["python", "sql", "git"]);
        assert_eq!(analysis.missing, vec!["java", "javascript"]);
    }

    #[test]
    fn test_empty_terms_score_is_zero() {
        let analysis = match_terms("anything at all", &[]);
        assert_eq!(analysis.score, 0.0);
        assert!(analysis.found.is_empty());
        assert!(analysis.missing.is_empty());
    }

    #[test]
    fn test_all_found_scores_100() {
        let t = terms(&["python", "sql"]);
        let analysis = match_terms("python sql", &t);
        assert!((analysis.score - 100.0).abs() < f64::EPSILON);
        assert!(analysis.missing.is_empty());
    }

    #[test]
    fn test_half_found_scores_50() {
        let t = terms(&["python", "cobol"]);
        let analysis = match_terms("python developer", &t);
        assert!((analysis.score - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_match_scores_zero() {
        let t = terms(&["haskell", "erlang"]);
        let analysis = match_terms("python developer", &t);
        assert_eq!(analysis.score, 0.0);
        assert_eq!(analysis.missing, vec!["haskell", "erlang"]);
    }

    /// Matching is literal substring presence, not word-boundary matching:
    /// the single-letter term "r" is found inside "developer".
    #[test]
    fn test_matching_is_literal_substring() {
        let t = terms(&["r"]);
        let analysis = match_terms("experienced developer", &t);
        assert_eq!(analysis.found, vec!["r"]);
    }

    #[test]
    fn test_empty_text_finds_nothing() {
        let t = terms(&["python", "sql"]);
        let analysis = match_terms("", &t);
        assert!(analysis.found.is_empty());
        assert_eq!(analysis.missing, vec!["python", "sql"]);
        assert_eq!(analysis.score, 0.0);
    }
}
