//! Session parameters chosen once at startup.

use std::fmt;

/// Interviewer archetype the answers are tuned for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InterviewMode {
    HrScreening,
    TechnicalRecruiter,
    HiringManager,
    Negotiation,
    #[default]
    General,
}

impl InterviewMode {
    pub const ALL: [InterviewMode; 5] = [
        InterviewMode::HrScreening,
        InterviewMode::TechnicalRecruiter,
        InterviewMode::HiringManager,
        InterviewMode::Negotiation,
        InterviewMode::General,
    ];

    /// Maps the menu answer `1`–`5`; anything else selects `General`.
    pub fn from_choice(input: &str) -> Self {
        match input.trim() {
            "1" => InterviewMode::HrScreening,
            "2" => InterviewMode::TechnicalRecruiter,
            "3" => InterviewMode::HiringManager,
            "4" => InterviewMode::Negotiation,
            _ => InterviewMode::General,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewMode::HrScreening => "hr-screening",
            InterviewMode::TechnicalRecruiter => "technical-recruiter",
            InterviewMode::HiringManager => "hiring-manager",
            InterviewMode::Negotiation => "negotiation",
            InterviewMode::General => "general",
        }
    }

    pub fn menu_label(&self) -> &'static str {
        match self {
            InterviewMode::HrScreening => "HR Screening (basic background, motivation, salary)",
            InterviewMode::TechnicalRecruiter => {
                "Technical Recruiter (skills validation, project details)"
            }
            InterviewMode::HiringManager => {
                "Hiring Manager (deep technical, behavioral, culture fit)"
            }
            InterviewMode::Negotiation => "Salary Negotiation (compensation discussion)",
            InterviewMode::General => "General (any HR question)",
        }
    }
}

impl fmt::Display for InterviewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape and length of generated answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseStyle {
    /// 30–45 seconds spoken
    Concise,
    /// 2–3 minutes spoken
    #[default]
    Detailed,
    /// Situation, Task, Action, Result
    Star,
}

impl ResponseStyle {
    pub const ALL: [ResponseStyle; 3] = [
        ResponseStyle::Concise,
        ResponseStyle::Detailed,
        ResponseStyle::Star,
    ];

    /// Maps the menu answer `1`–`3`; anything else selects `Detailed`.
    pub fn from_choice(input: &str) -> Self {
        match input.trim() {
            "1" => ResponseStyle::Concise,
            "3" => ResponseStyle::Star,
            _ => ResponseStyle::Detailed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseStyle::Concise => "concise",
            ResponseStyle::Detailed => "detailed",
            ResponseStyle::Star => "star",
        }
    }

    pub fn menu_label(&self) -> &'static str {
        match self {
            ResponseStyle::Concise => "Concise (30-45 seconds)",
            ResponseStyle::Detailed => "Detailed (2-3 minutes) [recommended]",
            ResponseStyle::Star => "STAR format (Situation, Task, Action, Result)",
        }
    }
}

impl fmt::Display for ResponseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
