//! ResumeSnapshot — the static resume content behind the portfolio site.
//!
//! Loaded once at startup and never mutated; the chat adapter serializes it
//! verbatim into its system instruction.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("Resume file not found at {0}")]
    NotFound(String),

    #[error("Failed to read resume file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Resume file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Resume is invalid: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSnapshot {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    pub contact: Contact,
    pub summary: String,
    pub skills: Vec<SkillCategory>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub phone: String,
    pub email: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    #[serde(default)]
    pub location: String,
    pub period: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub tech: Vec<String>,
    pub year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    pub year: String,
    #[serde(default)]
    pub location: String,
}

impl ResumeSnapshot {
    /// Reads and validates the snapshot from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ResumeError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ResumeError::NotFound(path.display().to_string()));
        }
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ResumeError> {
        let snapshot: ResumeSnapshot = serde_json::from_str(raw)?;
        if snapshot.name.trim().is_empty() {
            return Err(ResumeError::Invalid("name cannot be empty".to_string()));
        }
        Ok(snapshot)
    }

    /// First token of the name, used when the assistant refers to the candidate.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}
