//! Suggested resume sections and markdown rendering of the edited result.

use serde::{Deserialize, Serialize};

const SUMMARY_FALLBACK_CHARS: usize = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedSection {
    pub title: String,
    pub content: String,
}

/// Contact header for a rendered resume. Missing fields fall back to placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub name: String,
    pub title: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            title: "Professional Title or Career Focus".to_string(),
            location: "City, State".to_string(),
            email: "you@email.com".to_string(),
            phone: "(123) 456-7890".to_string(),
            linkedin: Some("linkedin.com/in/yourname".to_string()),
            github: Some("github.com/yourname".to_string()),
        }
    }
}

/// (trigger terms, title, canned content). Any trigger found in the job text
/// adds the section; order is fixed.
const SECTION_RULES: &[(&[&str], &str, &str)] = &[
    (
        &["communication"],
        "Communication Skills",
        "Demonstrated ability to clearly convey ideas and collaborate with cross-functional teams.",
    ),
    (
        &["leadership"],
        "Leadership Experience",
        "Led teams and initiatives with a focus on mentorship, delegation, and strategic outcomes.",
    ),
    (
        &["project", "manage"],
        "Project Management",
        "Experienced in managing timelines, budgets, and deliverables for technical and operational projects.",
    ),
    (
        &["sql", "python"],
        "Technical Skills",
        "Proficient in Python and SQL for data analysis, automation, and reporting.",
    ),
    (
        &["customer"],
        "Customer Service",
        "Skilled in delivering customer satisfaction through empathy, responsiveness, and efficiency.",
    ),
    (
        &["data"],
        "Data Analysis",
        "Analyzed trends and patterns to derive insights using statistical tools and data visualization techniques.",
    ),
];

pub fn suggest_resume_sections(job_text: &str, resume_text: &str) -> Vec<SuggestedSection> {
    let job_lower = job_text.to_lowercase();

    let mut sections: Vec<SuggestedSection> = SECTION_RULES
        .iter()
        .filter(|(triggers, _, _)| triggers.iter().any(|t| job_lower.contains(t)))
        .map(|(_, title, content)| SuggestedSection {
            title: title.to_string(),
            content: content.to_string(),
        })
        .collect();

    if sections.is_empty() {
        sections.push(SuggestedSection {
            title: "Summary".to_string(),
            content: resume_text.chars().take(SUMMARY_FALLBACK_CHARS).collect(),
        });
    }

    sections
}

/// Markdown resume: profile header, a rule, then every non-blank section.
pub fn render_final_resume(sections: &[SuggestedSection], profile: Option<&UserProfile>) -> String {
    let default_profile = UserProfile::default();
    let profile = profile.unwrap_or(&default_profile);

    let mut lines = vec![
        format!("# {}", profile.name),
        format!("**{}**", profile.title),
        format!("{} · {} · {}", profile.location, profile.email, profile.phone),
    ];

    let mut links = Vec::new();
    if let Some(linkedin) = profile.linkedin.as_deref().filter(|s| !s.is_empty()) {
        links.push(format!("[LinkedIn]({linkedin})"));
    }
    if let Some(github) = profile.github.as_deref().filter(|s| !s.is_empty()) {
        links.push(format!("[GitHub]({github})"));
    }
    if !links.is_empty() {
        lines.push(links.join(" • "));
    }

    lines.push("\n---\n".to_string());

    for section in sections {
        let content = section.content.trim();
        if content.is_empty() {
            continue;
        }
        lines.push(format!("## {}", section.title));
        lines.push(content.to_string());
        lines.push("\n".to_string());
    }

    lines.join("\n")
}
