// System instruction for the resume chat widget.
// Built once from the ResumeSnapshot; the output is the whole contract with the model.

use crate::models::resume::ResumeSnapshot;

/// Renders the system instruction for a snapshot. Pure: same snapshot, same text.
pub fn build_system_instruction(resume: &ResumeSnapshot) -> String {
    let name = &resume.name;
    let first = resume.first_name();

    let skills = resume
        .skills
        .iter()
        .map(|s| format!("{}: {}", s.category, s.skills.join(", ")))
        .collect::<Vec<_>>()
        .join("; ");

    let experience = resume
        .experience
        .iter()
        .map(|e| {
            format!(
                "{} at {} ({}). Achievements: {}",
                e.role,
                e.company,
                e.period,
                e.achievements.join(" ")
            )
        })
        .collect::<Vec<_>>()
        .join(" | ");

    let projects = resume
        .projects
        .iter()
        .map(|p| {
            format!(
                "{} ({}) using {}. {}",
                p.title,
                p.year,
                p.tech.join(", "),
                p.description.join(" ")
            )
        })
        .collect::<Vec<_>>()
        .join(" | ");

    let education = resume
        .education
        .iter()
        .map(|e| format!("{} from {} ({})", e.degree, e.school, e.year))
        .collect::<Vec<_>>()
        .join("; ");

    format!(
        "You are an AI assistant for {name}'s professional portfolio website.
Your goal is to answer questions about {first}'s experience, skills, and projects based strictly on the resume data provided below.
Be professional, concise, and enthusiastic about {first}'s data engineering and analysis capabilities.

Resume Context:
Name: {name}
Summary: {summary}
Skills: {skills}
Experience: {experience}
Projects: {projects}
Education: {education}

Rules:
1. Only answer questions related to {first}'s professional life.
2. If asked about contact info, provide it from the context (Email: {email}, LinkedIn: {linkedin}).
3. Keep answers under 3 sentences unless asked for a detailed explanation.
4. Speak in the third person (\"{first} has experience in...\") or represent {first} directly if specifically asked, but default to being a helpful assistant promoting {first}'s work.
5. Highlight specific quantified achievements from the resume (percentages, counts, scale) when relevant.
",
        summary = resume.summary,
        email = resume.contact.email,
        linkedin = resume.contact.linkedin,
    )
}
