//! Match scoring: candidate skills against an extracted requirement set

use crate::error::{Result, SkillMatcherError};
use crate::matching::catalog::SkillCatalog;
use crate::matching::extractor::extract;
use crate::matching::report::MatchReport;
use serde::{Deserialize, Serialize};

/// One skill the candidate declares, with free-form experience text
/// (e.g. "1.5 years").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSkill {
    pub name: String,
    pub experience: String,
}

impl CandidateSkill {
    pub fn new(name: impl Into<String>, experience: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            experience: experience.into(),
        }
    }
}

/// Score the candidate's declared skills against a job description.
///
/// Required skills come from a case-insensitive substring scan of the
/// job description; candidate names are recognized by exact,
/// case-sensitive catalog membership. The asymmetry is intentional:
/// free text is scanned loosely, declared names must be canonical.
///
/// Fails with a validation error when the job description is blank or
/// any candidate entry has a blank name or experience. An empty
/// candidate list is valid and simply matches nothing.
pub fn score(
    job_description: &str,
    candidate_skills: &[CandidateSkill],
    catalog: &SkillCatalog,
) -> Result<MatchReport> {
    validate(job_description, candidate_skills)?;

    let required_skills = extract(job_description, catalog);

    let mut candidate_recognized_skills: Vec<String> = Vec::new();
    let mut unrecognized_candidate_skills: Vec<String> = Vec::new();
    for skill in candidate_skills {
        if catalog.contains(&skill.name) {
            if !candidate_recognized_skills.contains(&skill.name) {
                candidate_recognized_skills.push(skill.name.clone());
            }
        } else if !unrecognized_candidate_skills.contains(&skill.name) {
            unrecognized_candidate_skills.push(skill.name.clone());
        }
    }

    let matching_skills: Vec<String> = required_skills
        .iter()
        .filter(|skill| candidate_recognized_skills.contains(*skill))
        .cloned()
        .collect();
    let missing_skills: Vec<String> = required_skills
        .iter()
        .filter(|skill| !candidate_recognized_skills.contains(*skill))
        .cloned()
        .collect();

    let percentage = if required_skills.is_empty() {
        0
    } else {
        ((matching_skills.len() as f64 / required_skills.len() as f64) * 100.0).round() as u8
    };

    Ok(MatchReport {
        required_skills,
        candidate_recognized_skills,
        unrecognized_candidate_skills,
        matching_skills,
        missing_skills,
        percentage,
    })
}

fn validate(job_description: &str, candidate_skills: &[CandidateSkill]) -> Result<()> {
    if job_description.trim().is_empty() {
        return Err(SkillMatcherError::Validation(
            "job description must not be empty".to_string(),
        ));
    }

    for (index, skill) in candidate_skills.iter().enumerate() {
        if skill.name.trim().is_empty() || skill.experience.trim().is_empty() {
            return Err(SkillMatcherError::Validation(format!(
                "candidate skill #{} is incomplete: name and experience are both required",
                index + 1
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn web_catalog() -> SkillCatalog {
        SkillCatalog::new(vec![
            "JavaScript".to_string(),
            "React".to_string(),
            "Python".to_string(),
        ])
    }

    #[test]
    fn test_partial_match_scores_half() {
        let report = score(
            "We need a JavaScript and React developer",
            &[CandidateSkill::new("JavaScript", "2 years")],
            &web_catalog(),
        )
        .unwrap();

        assert_eq!(report.required_skills, vec!["JavaScript", "React"]);
        assert_eq!(report.matching_skills, vec!["JavaScript"]);
        assert_eq!(report.missing_skills, vec!["React"]);
        assert_eq!(report.percentage, 50);
    }

    #[test]
    fn test_no_required_skills_scores_zero() {
        let report = score(
            "Looking for a friendly barista",
            &[CandidateSkill::new("JavaScript", "2 years")],
            &web_catalog(),
        )
        .unwrap();

        assert!(report.required_skills.is_empty());
        assert!(report.matching_skills.is_empty());
        assert!(report.missing_skills.is_empty());
        assert_eq!(report.percentage, 0);
    }

    #[test]
    fn test_unrecognized_candidate_skill_cannot_match() {
        let report = score(
            "We need a JavaScript and React developer",
            &[
                CandidateSkill::new("Underwater Basket Weaving", "10 years"),
                CandidateSkill::new("React", "1 year"),
            ],
            &web_catalog(),
        )
        .unwrap();

        assert_eq!(report.candidate_recognized_skills, vec!["React"]);
        assert_eq!(
            report.unrecognized_candidate_skills,
            vec!["Underwater Basket Weaving"]
        );
        assert_eq!(report.matching_skills, vec!["React"]);
        assert_eq!(report.missing_skills, vec!["JavaScript"]);
    }

    #[test]
    fn test_full_coverage_scores_hundred() {
        let report = score(
            "JavaScript and React and Python shop",
            &[
                CandidateSkill::new("JavaScript", "3 years"),
                CandidateSkill::new("React", "2 years"),
                CandidateSkill::new("Python", "5 years"),
            ],
            &web_catalog(),
        )
        .unwrap();

        assert_eq!(report.percentage, 100);
        assert!(report.missing_skills.is_empty());
    }

    #[test]
    fn test_matching_and_missing_partition_required() {
        let report = score(
            "JavaScript, React and Python wanted",
            &[CandidateSkill::new("React", "2 years")],
            &web_catalog(),
        )
        .unwrap();

        let mut union: Vec<String> = Vec::new();
        union.extend(report.matching_skills.iter().cloned());
        union.extend(report.missing_skills.iter().cloned());
        union.sort();
        let mut required = report.required_skills.clone();
        required.sort();
        assert_eq!(union, required);

        assert!(report
            .matching_skills
            .iter()
            .all(|skill| !report.missing_skills.contains(skill)));
    }

    #[test]
    fn test_candidate_recognition_is_case_sensitive() {
        // "javascript" is not the canonical catalog name, so it is not
        // recognized even though extraction from free text is
        // case-insensitive.
        let report = score(
            "We need a JavaScript developer",
            &[CandidateSkill::new("javascript", "2 years")],
            &web_catalog(),
        )
        .unwrap();

        assert!(report.candidate_recognized_skills.is_empty());
        assert_eq!(report.unrecognized_candidate_skills, vec!["javascript"]);
        assert_eq!(report.missing_skills, vec!["JavaScript"]);
        assert_eq!(report.percentage, 0);
    }

    #[test]
    fn test_duplicate_candidate_entries_count_once() {
        let report = score(
            "React developer wanted",
            &[
                CandidateSkill::new("React", "1 year"),
                CandidateSkill::new("React", "2 years"),
            ],
            &web_catalog(),
        )
        .unwrap();

        assert_eq!(report.candidate_recognized_skills, vec!["React"]);
        assert_eq!(report.percentage, 100);
    }

    #[test]
    fn test_empty_candidate_list_is_valid() {
        let report = score("React developer wanted", &[], &web_catalog()).unwrap();
        assert_eq!(report.missing_skills, vec!["React"]);
        assert_eq!(report.percentage, 0);
    }

    #[test]
    fn test_empty_job_description_is_rejected() {
        let result = score("   ", &[CandidateSkill::new("React", "1 year")], &web_catalog());
        assert!(matches!(result, Err(SkillMatcherError::Validation(_))));
    }

    #[test]
    fn test_incomplete_candidate_skill_is_rejected() {
        let result = score(
            "React developer wanted",
            &[CandidateSkill::new("React", "  ")],
            &web_catalog(),
        );
        assert!(matches!(result, Err(SkillMatcherError::Validation(_))));

        let result = score(
            "React developer wanted",
            &[CandidateSkill::new("", "2 years")],
            &web_catalog(),
        );
        assert!(matches!(result, Err(SkillMatcherError::Validation(_))));
    }

    #[test]
    fn test_percentage_rounds_to_nearest_integer() {
        // 1 of 3 required skills covered: 33.33… rounds to 33.
        let catalog = SkillCatalog::new(vec![
            "JavaScript".to_string(),
            "React".to_string(),
            "Docker".to_string(),
        ]);
        let report = score(
            "JavaScript, React and Docker stack",
            &[CandidateSkill::new("React", "2 years")],
            &catalog,
        )
        .unwrap();
        assert_eq!(report.percentage, 33);

        // 2 of 3 covered: 66.67 rounds to 67.
        let report = score(
            "JavaScript, React and Docker stack",
            &[
                CandidateSkill::new("React", "2 years"),
                CandidateSkill::new("Docker", "1 year"),
            ],
            &catalog,
        )
        .unwrap();
        assert_eq!(report.percentage, 67);
    }
}
