//! CandidateProfile — the structured record the interview agent speaks from.
//!
//! Loaded once at process start from JSON. A missing or malformed file is fatal.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Profile not found at {0}. Create the profile JSON first.")]
    NotFound(String),

    #[error("Failed to read profile: {0}")]
    Io(#[from] std::io::Error),

    #[error("Profile is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub personal_info: PersonalInfo,
    pub compensation: Compensation,
    pub availability: Availability,
    pub location_preferences: LocationPreferences,
    pub work_authorization: WorkAuthorization,
    pub skills: Skills,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub career_narrative: CareerNarrative,
    pub role_preferences: RolePreferences,
    pub career_goals: CareerGoals,
    pub strengths: Strengths,
    pub behavioral_examples: BehavioralExamples,
    pub questions_for_employer: Vec<String>,
    pub references: References,
    pub additional_notes: AdditionalNotes,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub current_location: String,
    pub hometown: String,
    pub summary: String,
    /// Headline experience figure, e.g. "3+ years".
    #[serde(default)]
    pub total_experience: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Compensation {
    #[serde(rename = "currentCTC")]
    pub current_ctc: CurrentCtc,
    #[serde(rename = "expectedCTC")]
    pub expected_ctc: ExpectedCtc,
}

/// Amounts are whole rupees per year unless the field says monthly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentCtc {
    pub total: u64,
    pub breakdown: CtcBreakdown,
    pub monthly_gross: u64,
    pub monthly_take_home: u64,
    pub currency: String,
    pub display_value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtcBreakdown {
    pub basic: u64,
    pub hra: u64,
    pub special_allowance: u64,
    #[serde(rename = "employerPF")]
    pub employer_pf: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedCtc {
    pub minimum: u64,
    pub maximum: u64,
    pub negotiable: bool,
    pub display_range: String,
    pub reasoning: String,
    /// Lowest offer worth accepting. Falls back to `minimum` when absent.
    #[serde(default)]
    pub walk_away_floor: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub current_status: String,
    pub last_working_day: String,
    pub earliest_joining_date: String,
    pub notice_period: String,
    pub immediately_available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationPreferences {
    pub current_location: String,
    pub preferred_locations: Vec<String>,
    pub open_to_remote: bool,
    pub willing_to_relocate: bool,
    pub reasoning: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkAuthorization {
    pub nationality: String,
    pub valid_work_locations: Vec<String>,
    pub requires_sponsorship: bool,
    pub open_to_remote_for_foreign_companies: bool,
    pub visa_status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skills {
    pub languages: Vec<String>,
    pub databases: Vec<String>,
    pub bi_and_visualization: Vec<String>,
    pub libraries_and_frameworks: Vec<String>,
    pub data_engineering: Vec<String>,
    #[serde(default)]
    pub proficiency_levels: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub role: String,
    pub company: String,
    #[serde(default)]
    pub company_full_name: Option<String>,
    pub location: String,
    pub period: String,
    pub duration: String,
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub performance_rating: Option<String>,
    pub achievements: Vec<String>,
    #[serde(default)]
    pub key_metrics: BTreeMap<String, MetricValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub tech: Vec<String>,
    pub year: String,
    pub category: String,
    pub description: Vec<String>,
    #[serde(default)]
    pub metrics: Option<BTreeMap<String, MetricValue>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub period: String,
    pub duration: String,
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerNarrative {
    pub current_role: String,
    pub reason_for_leaving: String,
    pub reason_for_leaving_diplomatic: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePreferences {
    pub preferred_roles: Vec<String>,
    pub preferred_industries: Vec<String>,
    pub company_size_preference: String,
    pub work_mode_preference: String,
    pub deal_breakers: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerGoals {
    pub one_year: String,
    pub three_year: String,
    pub five_year: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Strengths {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
}

/// STAR-style stories, one per behavioral theme.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehavioralExamples {
    pub biggest_achievement: String,
    pub biggest_challenge: String,
    pub conflict_resolution: String,
    pub leadership: String,
    pub time_management: String,
    pub problem_solving: String,
    pub learning_agility: String,
}

impl BehavioralExamples {
    /// Stories paired with their section headings, in prompt order.
    pub fn titled(&self) -> [(&'static str, &str); 7] {
        [
            ("Biggest Achievement", self.biggest_achievement.as_str()),
            ("Biggest Challenge", self.biggest_challenge.as_str()),
            ("Conflict Resolution", self.conflict_resolution.as_str()),
            ("Leadership", self.leadership.as_str()),
            ("Time Management", self.time_management.as_str()),
            ("Problem Solving", self.problem_solving.as_str()),
            ("Learning Agility", self.learning_agility.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct References {
    pub available: bool,
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalNotes {
    pub notice_period_already_served: bool,
    pub can_start_immediately: bool,
    pub open_to_contract_roles: bool,
    pub prefer_full_time: bool,
    pub health_insurance_important: bool,
    pub learning_budget_preferred: bool,
    #[serde(default)]
    pub remote_work_setup: Option<String>,
    #[serde(default)]
    pub portfolio_website: Option<String>,
}

/// A metric value as written in the profile: either a number or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Number(n) => write!(f, "{n}"),
            MetricValue::Text(s) => f.write_str(s),
        }
    }
}

impl CandidateProfile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ProfileError::NotFound(path.display().to_string()));
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn first_name(&self) -> &str {
        let name = &self.personal_info.full_name;
        name.split_whitespace().next().unwrap_or(name)
    }

    /// The first performance rating recorded across experience entries.
    pub fn headline_rating(&self) -> Option<&str> {
        self.experience
            .iter()
            .find_map(|e| e.performance_rating.as_deref())
    }

    /// "Bangalore → Hyderabad, Remote"
    pub fn location_transition(&self) -> String {
        format!(
            "{} → {}",
            self.location_preferences.current_location,
            self.location_preferences.preferred_locations.join(", ")
        )
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// The bundled sample profile, parsed.
    pub fn sample_profile() -> CandidateProfile {
        serde_json::from_str(include_str!("../hr-data/profile.json"))
            .expect("bundled profile parses")
    }
}
