//! Input manager for job description text and candidate skill lists

use crate::error::{Result, SkillMatcherError};
use crate::input::file_detector::FileType;
use crate::matching::CandidateSkill;
use log::info;
use std::collections::HashMap;
use std::path::Path;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Load the job description text from a plain text or markdown file.
    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        // Check cache first
        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(SkillMatcherError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let text = match self.detect_file_type(path)? {
            FileType::Text | FileType::Markdown => {
                info!("Reading job description from: {}", path.display());
                tokio::fs::read_to_string(path).await?
            }
            other => {
                return Err(SkillMatcherError::UnsupportedFormat(format!(
                    "Cannot read a job description from a {:?} file: {}",
                    other,
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    /// Load candidate skills from a JSON array of `{name, experience}`
    /// objects or a plain text file with one `name, experience` pair per
    /// line.
    pub async fn load_candidate_skills(&mut self, path: &Path) -> Result<Vec<CandidateSkill>> {
        if !path.exists() {
            return Err(SkillMatcherError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        match self.detect_file_type(path)? {
            FileType::Json => {
                info!("Parsing candidate skills JSON: {}", path.display());
                let content = tokio::fs::read_to_string(path).await?;
                let skills: Vec<CandidateSkill> = serde_json::from_str(&content)?;
                Ok(skills)
            }
            FileType::Text => {
                info!("Parsing candidate skills list: {}", path.display());
                let content = tokio::fs::read_to_string(path).await?;
                Self::parse_skill_lines(&content)
            }
            other => Err(SkillMatcherError::UnsupportedFormat(format!(
                "Cannot read candidate skills from a {:?} file: {}",
                other,
                path.display()
            ))),
        }
    }

    fn parse_skill_lines(content: &str) -> Result<Vec<CandidateSkill>> {
        let mut skills = Vec::new();
        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (name, experience) = line.split_once(',').ok_or_else(|| {
                SkillMatcherError::InvalidInput(format!(
                    "Line {}: expected \"name, experience\", got \"{}\"",
                    line_no + 1,
                    line
                ))
            })?;
            skills.push(CandidateSkill::new(name.trim(), experience.trim()));
        }
        Ok(skills)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                SkillMatcherError::InvalidInput(format!(
                    "File has no extension: {}",
                    path.display()
                ))
            })?;

        Ok(FileType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
