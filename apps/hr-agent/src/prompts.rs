//! System prompt assembly for the interview agent.
//!
//! `generate_system_prompt` is pure: the same profile, mode and style always produce
//! the same text. Compensation anchors are derived from the profile so the
//! negotiation guidance cannot drift from the numbers it quotes.

use std::collections::BTreeMap;

use crate::modes::{InterviewMode, ResponseStyle};
use crate::money::{format_inr, format_lpa, percent_increase};
use crate::profile::{CandidateProfile, MetricValue};

/// Compensation figures quoted in negotiation guidance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegotiationAnchors {
    pub current_display: String,
    /// "₹16-21 LPA"
    pub expected_range: String,
    /// Rounded percentage increase at the bottom and top of the range.
    pub increase: Option<(i64, i64)>,
    /// "₹14 LPA"
    pub walk_away: String,
    pub includes_employer_pf: bool,
}

impl NegotiationAnchors {
    pub fn from_profile(profile: &CandidateProfile) -> Self {
        let current = &profile.compensation.current_ctc;
        let expected = &profile.compensation.expected_ctc;
        let floor = expected.walk_away_floor.unwrap_or(expected.minimum);

        let increase = percent_increase(current.total, expected.minimum)
            .zip(percent_increase(current.total, expected.maximum));

        Self {
            current_display: current.display_value.clone(),
            expected_range: format!(
                "₹{}-{} LPA",
                format_lpa(expected.minimum),
                format_lpa(expected.maximum)
            ),
            increase,
            walk_away: format!("₹{} LPA", format_lpa(floor)),
            includes_employer_pf: current.breakdown.employer_pf > 0,
        }
    }
}

/// Built-in catalogue printed by the `examples` command.
pub const COMMON_HR_QUESTIONS: &[(&str, &[&str])] = &[
    (
        "introduction",
        &[
            "Tell me about yourself",
            "Walk me through your resume",
            "What do you do in your current role?",
        ],
    ),
    (
        "motivation",
        &[
            "Why are you looking for a new job?",
            "Why do you want to work here?",
            "What interests you about this role?",
            "Where do you see yourself in 3-5 years?",
        ],
    ),
    (
        "experience",
        &[
            "What's your biggest achievement?",
            "Tell me about a challenging project you worked on",
            "Describe a time you failed and what you learned",
            "Tell me about a time you had a conflict with a teammate",
        ],
    ),
    (
        "technical",
        &[
            "What's your experience with Python/SQL?",
            "Walk me through your ETL pipeline design process",
            "How do you ensure data quality?",
            "What BI tools have you used?",
        ],
    ),
    (
        "compensation",
        &[
            "What are your salary expectations?",
            "What's your current CTC?",
            "What's your notice period?",
            "When can you join?",
        ],
    ),
    (
        "closing",
        &[
            "Do you have any questions for us?",
            "Is there anything else you'd like to share?",
            "Why should we hire you?",
        ],
    ),
];

pub fn generate_system_prompt(
    profile: &CandidateProfile,
    mode: InterviewMode,
    style: ResponseStyle,
) -> String {
    let anchors = NegotiationAnchors::from_profile(profile);
    let name = &profile.personal_info.full_name;
    let first = profile.first_name();

    [
        format!(
            "You are an AI assistant helping {name} prepare for HR interviews and job applications.\n\n"
        ),
        "# CANDIDATE PROFILE\n\n".to_string(),
        profile_sections(profile),
        "---\n\n# YOUR ROLE\n\n".to_string(),
        mode_instructions(mode, first, &anchors),
        format!("\n\n# RESPONSE STYLE: {}\n\n", style.as_str().to_uppercase()),
        style_instructions(style).to_string(),
        "\n\n# IMPORTANT GUIDELINES\n\n".to_string(),
        guidelines(profile),
        "\n# SALARY NEGOTIATION TIPS\n\n".to_string(),
        negotiation_tips(profile, &anchors),
        "\n# RED FLAGS TO AVOID\n\n".to_string(),
        RED_FLAGS.to_string(),
        "\n# RESPOND TO THE USER'S QUESTION BELOW\n".to_string(),
    ]
    .concat()
}

/// Every profile section, in prompt order. Each section ends with a blank line.
fn profile_sections(p: &CandidateProfile) -> String {
    [
        personal_section(p),
        compensation_section(p),
        experience_section(p),
        projects_section(p),
        skills_section(p),
        education_section(p),
        career_goals_section(p),
        strengths_section(p),
        behavioral_section(p),
        location_section(p),
        authorization_section(p),
        role_preferences_section(p),
        employer_questions_section(p),
    ]
    .concat()
}

fn personal_section(p: &CandidateProfile) -> String {
    let info = &p.personal_info;
    let experience = info
        .total_experience
        .as_ref()
        .map(|total| format!("- **Experience**: {total}\n"))
        .unwrap_or_default();

    format!(
        "## Personal Information
- **Name**: {}
- **Current Role**: {}
- **Location**: {} (relocating to {})
{experience}- **Summary**: {}

",
        info.full_name,
        p.career_narrative.current_role,
        info.current_location,
        info.hometown,
        info.summary
    )
}

fn compensation_section(p: &CandidateProfile) -> String {
    let current = &p.compensation.current_ctc;
    let expected = &p.compensation.expected_ctc;
    format!(
        "## Current Compensation
- **Current CTC**: {}
  - Monthly Gross: ₹{}
  - Monthly Take-home: ₹{}
- **Expected CTC**: {}
  - Reasoning: {}

",
        current.display_value,
        format_inr(current.monthly_gross),
        format_inr(current.monthly_take_home),
        expected.display_range,
        expected.reasoning
    )
}

fn experience_section(p: &CandidateProfile) -> String {
    let entries: String = p
        .experience
        .iter()
        .enumerate()
        .map(|(idx, exp)| {
            let rating = exp
                .performance_rating
                .as_ref()
                .map(|rating| format!("**Performance Rating**: {rating}\n"))
                .unwrap_or_default();
            format!(
                "### {}. {} at {} ({})\n{rating}**Achievements**:\n{}**Key Metrics**: {}\n\n",
                idx + 1,
                exp.role,
                exp.company,
                exp.period,
                bullets(&exp.achievements),
                metrics_line(&exp.key_metrics)
            )
        })
        .collect();
    format!("## Work Experience\n\n{entries}")
}

fn projects_section(p: &CandidateProfile) -> String {
    let entries: String = p
        .projects
        .iter()
        .enumerate()
        .map(|(idx, proj)| {
            let metrics = proj
                .metrics
                .as_ref()
                .map(|m| format!("**Metrics**: {}\n", metrics_line(m)))
                .unwrap_or_default();
            format!(
                "### {}. {} ({})\n**Category**: {} | **Tech**: {}\n**Description**:\n{}{metrics}\n",
                idx + 1,
                proj.title,
                proj.year,
                proj.category,
                proj.tech.join(", "),
                bullets(&proj.description)
            )
        })
        .collect();
    format!("## Key Projects\n\n{entries}")
}

fn skills_section(p: &CandidateProfile) -> String {
    let s = &p.skills;
    format!(
        "## Skills
- **Languages**: {}
- **Databases**: {}
- **BI & Visualization**: {}
- **Libraries**: {}
- **Data Engineering**: {}

",
        s.languages.join(", "),
        s.databases.join(", "),
        s.bi_and_visualization.join(", "),
        s.libraries_and_frameworks.join(", "),
        s.data_engineering.join(", ")
    )
}

fn education_section(p: &CandidateProfile) -> String {
    let entries: String = p
        .education
        .iter()
        .map(|edu| format!("- **{}** from {} ({})\n", edu.degree, edu.institution, edu.period))
        .collect();
    format!("## Education\n{entries}\n")
}

fn career_goals_section(p: &CandidateProfile) -> String {
    let goals = &p.career_goals;
    format!(
        "## Career Goals
- **1 Year**: {}
- **3 Years**: {}
- **5 Years**: {}

",
        goals.one_year, goals.three_year, goals.five_year
    )
}

fn strengths_section(p: &CandidateProfile) -> String {
    format!(
        "## Strengths\n**Technical**: {}\n**Soft Skills**: {}\n\n",
        p.strengths.technical.join(", "),
        p.strengths.soft.join(", ")
    )
}

fn behavioral_section(p: &CandidateProfile) -> String {
    let stories: String = p
        .behavioral_examples
        .titled()
        .iter()
        .map(|(title, story)| format!("### {title}\n{story}\n\n"))
        .collect();
    format!("## Behavioral Examples (Use these for STAR format answers)\n\n{stories}")
}

fn location_section(p: &CandidateProfile) -> String {
    let loc = &p.location_preferences;
    let avail = &p.availability;
    format!(
        "## Location & Availability
- **Current Location**: {}
- **Preferred Location**: {}
- **Remote**: {}
- **Reasoning**: {}
- **Notice Period**: {}
- **Last Working Day**: {}
- **Can Join**: {}

",
        loc.current_location,
        loc.preferred_locations.join(", "),
        yes_no(loc.open_to_remote),
        loc.reasoning,
        avail.notice_period,
        avail.last_working_day,
        avail.earliest_joining_date
    )
}

fn authorization_section(p: &CandidateProfile) -> String {
    let auth = &p.work_authorization;
    format!(
        "## Work Authorization
- **Nationality**: {}
- **Can Work In**: {}
- **Remote for Foreign Companies**: {}

",
        auth.nationality,
        auth.valid_work_locations.join(", "),
        yes_no(auth.open_to_remote_for_foreign_companies)
    )
}

fn role_preferences_section(p: &CandidateProfile) -> String {
    let roles = &p.role_preferences;
    format!(
        "## Role Preferences
- **Preferred Roles**: {}
- **Industries**: {}
- **Work Mode**: {}
- **Deal Breakers**: {}

",
        roles.preferred_roles.join(", "),
        roles.preferred_industries.join(", "),
        roles.work_mode_preference,
        roles.deal_breakers.join("; ")
    )
}

fn employer_questions_section(p: &CandidateProfile) -> String {
    let questions: String = p
        .questions_for_employer
        .iter()
        .enumerate()
        .map(|(i, q)| format!("{}. {q}\n", i + 1))
        .collect();
    format!("## Questions to Ask Employer\n{questions}\n")
}

fn bullets(items: &[String]) -> String {
    items.iter().map(|item| format!("- {item}\n")).collect()
}

fn metrics_line(metrics: &BTreeMap<String, MetricValue>) -> String {
    metrics
        .iter()
        .map(|(k, v)| format!("{k}: {v}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn mode_instructions(mode: InterviewMode, first: &str, anchors: &NegotiationAnchors) -> String {
    match mode {
        InterviewMode::HrScreening => format!(
            "You are preparing {first} for an HR screening call. Focus on:
- Basic background and experience overview
- Reasons for job change (diplomatic answer)
- Salary expectations and negotiation
- Notice period and availability
- Cultural fit and soft skills
- Motivation and career goals

HR screeners want to know: Can this candidate do the job? Will they accept our offer? Are they a culture fit?"
        ),
        InterviewMode::TechnicalRecruiter => format!(
            "You are preparing {first} for a technical recruiter call. Focus on:
- Technical skills depth (languages, pipelines, dashboards)
- Specific project details with metrics
- Tools and technologies used
- Problem-solving approach
- Technical challenges overcome
- Salary aligned with technical skills

Technical recruiters want to validate technical competency and assess skill level."
        ),
        InterviewMode::HiringManager => format!(
            "You are preparing {first} for a hiring manager interview. Focus on:
- Detailed project walkthroughs (STAR format)
- System design and architecture decisions
- Collaboration with cross-functional teams
- Ownership and initiative
- Impact on business metrics
- How {first} approaches ambiguous problems
- Career aspirations and growth

Hiring managers want to know: Can this person solve our problems? Will they thrive in our team?"
        ),
        InterviewMode::Negotiation => format!(
            "You are preparing {first} for salary negotiation. Focus on:
- Anchoring expected range ({range})
- Justifying the increase with achievements and market rates
- Understanding total compensation (base, bonus, equity, benefits)
- Being flexible but firm on minimum ({floor})
- Asking about non-monetary benefits (learning budget, remote setup, growth path)
- Demonstrating value without sounding arrogant

Negotiation is collaborative, not adversarial. The goal is a win-win outcome.",
            range = anchors.expected_range,
            floor = anchors.walk_away,
        ),
        InterviewMode::General => format!(
            "You are helping {first} prepare for any HR-related question. Provide:
- Thoughtful, well-structured answers
- Specific examples from experience
- Metrics and impact wherever possible
- Professional but authentic tone
- First-person perspective (\"I achieved...\")

Answer the question directly and comprehensively."
        ),
    }
}

fn style_instructions(style: ResponseStyle) -> &'static str {
    match style {
        ResponseStyle::Concise => {
            "Keep your response SHORT and PUNCHY (30-45 seconds when spoken).
- 2-3 sentences maximum
- Hit the key point immediately
- Use 1-2 specific metrics
- Perfect for quick screening questions

Example: \"I'm a Data Analyst with 3+ years building production data systems. In my current role I built 20 ETL pipelines supporting 25,000+ students and created 30+ dashboards that improved load times by 80%. I'm now looking for a role where I can grow into data engineering.\""
        }
        ResponseStyle::Detailed => {
            "Provide a COMPREHENSIVE answer (2-3 minutes when spoken).
- Start with a clear opening statement
- Provide context and background
- Include 3-4 specific examples with metrics
- Explain your thought process and approach
- End with impact or learning
- Use natural transitions

Example: \"I'd describe myself as someone who owns data problems end to end. When I joined my current team there was no central data system, so I started by mapping every source the business relied on. From there I designed an analytics-ready schema and wrote the pipelines feeding it, which let us consolidate 40+ fragile jobs into 20. Once the data was trustworthy I built dashboards on top, and load times dropped by 80%. The biggest lesson was that reliable foundations make everything downstream faster.\"

This is the default style for most interview questions."
        }
        ResponseStyle::Star => {
            "Use the STAR format (Situation, Task, Action, Result).

**Structure**:
1. **Situation**: Set the context (1-2 sentences)
2. **Task**: Explain your responsibility or challenge (1 sentence)
3. **Action**: Describe what YOU did - be specific with steps (3-4 sentences)
4. **Result**: Quantify the impact with metrics (2-3 sentences)

Perfect for behavioral questions like \"Tell me about a time when...\"

Example:
**Situation**: When I joined, there was no centralized data system - teams used manual spreadsheets.
**Task**: I was tasked with building the entire data infrastructure from scratch.
**Action**: I designed an analytics-ready PostgreSQL schema, developed 20 Python ETL pipelines to sync data from MySQL/MongoDB, built 30+ dashboards, and automated reports using the Google Docs API.
**Result**: The infrastructure now supports 25,000+ students and 40+ business users. Dashboard load times improved by 80% and manual work dropped by 20 hours/week."
        }
    }
}

fn guidelines(profile: &CandidateProfile) -> String {
    let first = profile.first_name();
    let rating = match profile.headline_rating() {
        Some(rating) => format!("**Highlight the '{rating}' performance rating** when relevant"),
        None => "**Highlight strong performance reviews** when relevant".to_string(),
    };

    format!(
        "1. **Always respond in FIRST PERSON** (\"I have...\", \"My experience...\", \"I achieved...\")
2. **Use specific metrics** from the profile above (numbers, percentages, scale)
3. **Be honest and authentic** - don't exaggerate or make up information
4. **Stay professional** but conversational - you're helping {first} practice
5. {rating}
6. **Emphasize end-to-end ownership** - {first} built entire systems from scratch
7. **Focus on impact** - how the work helped the business, not just technical tasks
8. **Be concise yet comprehensive** - provide value without rambling
9. **Stay consistent with the facts above** - never quote compensation, dates or notice period figures that differ from the profile
"
    )
}

fn negotiation_tips(profile: &CandidateProfile, anchors: &NegotiationAnchors) -> String {
    let pf_note = if anchors.includes_employer_pf {
        " (annual package including employer PF)"
    } else {
        " (annual package)"
    };
    let expecting = match anchors.increase {
        Some((low, high)) => format!("{} ({low}-{high}% increase)", anchors.expected_range),
        None => anchors.expected_range.clone(),
    };

    let mut justification: Vec<String> = Vec::new();
    if let Some(total) = &profile.personal_info.total_experience {
        justification.push(format!("{total} experience"));
    }
    if let Some(rating) = profile.headline_rating() {
        justification.push(format!("\"{rating}\" rating"));
    }
    justification.push("full-stack data skills".to_string());
    justification.push("production systems".to_string());

    format!(
        "- Current CTC is {current}{pf_note}
- Expecting {expecting}
- Justify with: {justification}
- Be flexible: \"The range is {range} depending on role scope, growth opportunities, and overall compensation including benefits\"
- Minimum walk-away: {floor} (don't go below this)
",
        current = anchors.current_display,
        justification = justification.join(", "),
        range = anchors.expected_range,
        floor = anchors.walk_away,
    )
}

const RED_FLAGS: &str = "- Don't badmouth current or previous employers
- Don't give a purely personal reason for leaving (mention career growth too)
- Don't sound desperate - you're a strong candidate with options
- Don't negotiate aggressively - stay collaborative
";
