//! Skill extraction and match scoring

pub mod catalog;
pub mod extractor;
pub mod report;
pub mod scorer;

pub use catalog::SkillCatalog;
pub use extractor::extract;
pub use report::{MatchReport, MatchTier};
pub use scorer::{score, CandidateSkill};
