//! Skill catalog: the universe of skill names the matcher can recognize

use serde::{Deserialize, Serialize};

/// Ordered set of canonical skill names.
///
/// Iteration order is insertion order, which keeps extraction results
/// deterministic. The catalog is immutable during a scoring operation;
/// callers swap in a different catalog between operations to target a
/// different industry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCatalog {
    entries: Vec<String>,
}

impl SkillCatalog {
    /// Build a catalog from canonical names, dropping blank entries and
    /// exact duplicates while preserving first-occurrence order.
    pub fn new(entries: Vec<String>) -> Self {
        let mut deduped: Vec<String> = Vec::with_capacity(entries.len());
        for entry in entries {
            let entry = entry.trim().to_string();
            if entry.is_empty() || deduped.contains(&entry) {
                continue;
            }
            deduped.push(entry);
        }
        Self { entries: deduped }
    }

    /// Exact, case-sensitive membership test against canonical names.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SkillCatalog {
    /// Stock catalog of common software skills.
    fn default() -> Self {
        Self::new(
            [
                "JavaScript",
                "React",
                "Node.js",
                "Python",
                "Java",
                "TypeScript",
                "HTML",
                "CSS",
                "MongoDB",
                "SQL",
                "Git",
                "Docker",
                "AWS",
                "REST API",
                "GraphQL",
                "Redux",
                "Express.js",
                "Vue.js",
                "Angular",
                "PHP",
                "C++",
                "C#",
                ".NET",
                "Spring Boot",
                "Machine Learning",
                "Data Analysis",
                "Agile",
                "Scrum",
                "DevOps",
                "CI/CD",
                "Kubernetes",
                "Microservices",
                "Firebase",
                "PostgreSQL",
                "MySQL",
                "NoSQL",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_populated() {
        let catalog = SkillCatalog::default();
        assert!(!catalog.is_empty());
        assert!(catalog.contains("JavaScript"));
        assert!(catalog.contains("Kubernetes"));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let catalog = SkillCatalog::new(vec![
            "Rust".to_string(),
            "Go".to_string(),
            "Zig".to_string(),
        ]);
        let entries: Vec<&str> = catalog.iter().collect();
        assert_eq!(entries, vec!["Rust", "Go", "Zig"]);
    }

    #[test]
    fn test_duplicates_and_blanks_dropped() {
        let catalog = SkillCatalog::new(vec![
            "Rust".to_string(),
            "  ".to_string(),
            "Rust".to_string(),
            "Go".to_string(),
        ]);
        assert_eq!(catalog.len(), 2);
        let entries: Vec<&str> = catalog.iter().collect();
        assert_eq!(entries, vec!["Rust", "Go"]);
    }

    #[test]
    fn test_membership_is_case_sensitive() {
        let catalog = SkillCatalog::default();
        assert!(catalog.contains("Python"));
        assert!(!catalog.contains("python"));
        assert!(!catalog.contains("PYTHON"));
    }
}
