//! Match report produced by the scorer

use serde::{Deserialize, Serialize};

/// Result of scoring a candidate's skills against a job description.
///
/// `matching_skills` and `missing_skills` partition `required_skills`:
/// their union is exactly the required set and they are disjoint. A
/// report is produced fresh on every scoring call and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Catalog skills mentioned in the job description, in catalog order.
    pub required_skills: Vec<String>,

    /// Candidate skill names that are catalog members, in candidate order.
    pub candidate_recognized_skills: Vec<String>,

    /// Candidate skill names the catalog does not know. They cannot
    /// contribute to the match and are surfaced here instead of being
    /// silently dropped.
    pub unrecognized_candidate_skills: Vec<String>,

    /// Required skills the candidate has.
    pub matching_skills: Vec<String>,

    /// Required skills the candidate lacks.
    pub missing_skills: Vec<String>,

    /// Share of required skills covered, rounded to an integer in [0, 100].
    /// Zero when no required skills were extracted.
    pub percentage: u8,
}

impl MatchReport {
    pub fn tier(&self) -> MatchTier {
        MatchTier::from_percentage(self.percentage)
    }
}

/// Qualitative band for a match percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchTier {
    Strong,
    Moderate,
    Weak,
}

impl MatchTier {
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            80..=100 => MatchTier::Strong,
            60..=79 => MatchTier::Moderate,
            _ => MatchTier::Weak,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchTier::Strong => "Strong match",
            MatchTier::Moderate => "Moderate match",
            MatchTier::Weak => "Weak match",
        }
    }
}
