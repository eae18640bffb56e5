//! Skill set comparison — matched/missing lists and the match percentage.

use std::collections::BTreeSet;

/// Result of comparing resume skills against JD skills.
///
/// `matched` and `missing` are lexicographically sorted. `jd_skills_empty` is
/// set when the JD yielded no recognizable skills at all, so the caller can
/// reject the request instead of reporting a meaningless 0% match.
#[derive(Debug, Clone)]
pub struct SkillComparison {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub match_percentage: f64,
    pub jd_skills_empty: bool,
}

/// Total over any two finite skill sets; never fails.
///
/// `match_percentage = round(|matched| / |jd| * 100, 2)` (half away from zero),
/// or `0.0` when the JD set is empty.
pub fn compare_skills(
    resume_skills: &BTreeSet<String>,
    jd_skills: &BTreeSet<String>,
) -> SkillComparison {
    let matched: Vec<String> = resume_skills.intersection(jd_skills).cloned().collect();
    let missing: Vec<String> = jd_skills.difference(resume_skills).cloned().collect();

    let match_percentage = if jd_skills.is_empty() {
        0.0
    } else {
        round2(matched.len() as f64 / jd_skills.len() as f64 * 100.0)
    };

    SkillComparison {
        matched,
        missing,
        match_percentage,
        jd_skills_empty: jd_skills.is_empty(),
    }
}

/// Two decimal places, half away from zero (`f64::round` semantics).
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_matched_is_sorted_intersection() {
        let result = compare_skills(&set(&["Python", "Docker", "Go"]), &set(&["Docker", "Python"]));
        assert_eq!(result.matched, vec!["Docker", "Python"]);
        assert!(result.missing.is_empty());
        assert_eq!(result.match_percentage, 100.0);
    }

    #[test]
    fn test_matched_is_symmetric() {
        let a = set(&["Python", "Docker"]);
        let b = set(&["Docker", "AWS"]);
        assert_eq!(compare_skills(&a, &b).matched, compare_skills(&b, &a).matched);
    }

    #[test]
    fn test_missing_is_asymmetric() {
        let a = set(&["Python", "Docker"]);
        let b = set(&["Docker", "AWS"]);
        assert_eq!(compare_skills(&a, &b).missing, vec!["AWS"]);
        assert_eq!(compare_skills(&b, &a).missing, vec!["Python"]);
    }

    #[test]
    fn test_empty_resume_scores_zero() {
        let result = compare_skills(&set(&[]), &set(&["Python", "Docker"]));
        assert_eq!(result.match_percentage, 0.0);
        assert_eq!(result.missing, vec!["Docker", "Python"]);
        assert!(!result.jd_skills_empty);
    }

    #[test]
    fn test_empty_jd_flagged_and_scores_zero() {
        let result = compare_skills(&set(&["Python"]), &set(&[]));
        assert_eq!(result.match_percentage, 0.0);
        assert!(result.matched.is_empty());
        assert!(result.jd_skills_empty);
    }

    #[test]
    fn test_two_of_three_rounds_to_66_67() {
        let result = compare_skills(&set(&["Python", "Docker"]), &set(&["Python", "Docker", "AWS"]));
        assert_eq!(result.matched, vec!["Docker", "Python"]);
        assert_eq!(result.missing, vec!["AWS"]);
        assert_eq!(result.match_percentage, 66.67);
    }

    #[test]
    fn test_one_of_three_rounds_to_33_33() {
        let result = compare_skills(&set(&["AWS"]), &set(&["Python", "Docker", "AWS"]));
        assert_eq!(result.match_percentage, 33.33);
    }
}
