//! Skill extraction from free text

use crate::matching::catalog::SkillCatalog;

/// Scan `text` for mentions of catalog skills.
///
/// A catalog entry counts as found when its lowercased form appears
/// anywhere as a substring of the lowercased text. The containment test
/// is deliberately naive: an entry that is a substring of a longer word
/// still matches ("Java" inside "JavaScript"), and switching to
/// word-boundary matching would change which skills get reported.
///
/// The result has set semantics (each entry at most once) and preserves
/// catalog iteration order. Empty text or an empty catalog yield an
/// empty result.
pub fn extract(text: &str, catalog: &SkillCatalog) -> Vec<String> {
    let text_lower = text.to_lowercase();
    catalog
        .iter()
        .filter(|skill| text_lower.contains(&skill.to_lowercase()))
        .map(|skill| skill.to_string())
        .collect()
}
