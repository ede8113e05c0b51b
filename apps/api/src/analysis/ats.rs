//! ATS compatibility checks over plain resume text.
//!
//! The layout of the original document is invisible here, so the formatting
//! check is a naive keyword sniff. It is the one inverse-sense flag: `true`
//! means a potential problem was found.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

const REQUIRED_SECTIONS: [&str; 3] = ["experience", "education", "skills"];

const ATS_KEYWORDS: &[&str] = &[
    "project management",
    "python",
    "data analysis",
    "communication",
    "teamwork",
    "leadership",
];

const ACTION_VERBS: &[&str] = &[
    "developed",
    "led",
    "created",
    "implemented",
    "managed",
    "streamlined",
];

const RISKY_FORMATTING: &[&str] = &["table", "text box", "header", "footer"];

const MIN_KEYWORD_COVERAGE: f64 = 0.5;
const MIN_ACTION_VERBS: usize = 3;

/// Number of boolean checks that feed `pass_score`.
const CHECK_COUNT: u32 = 7;

static ACTION_VERB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{})\b", ACTION_VERBS.join("|")))
        .expect("valid action verb pattern")
});

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w.-]+@[\w.-]+").expect("valid regex literal"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?\d[\d\s\-()]{7,}").expect("valid regex literal"));

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtsReport {
    pub has_experience_section: bool,
    pub has_education_section: bool,
    pub has_skills_section: bool,
    pub keyword_coverage: bool,
    pub uses_action_verbs: bool,
    pub has_contact_info: bool,
    pub possible_formatting_issues: bool,
    /// Share of passing checks, 0–100. A raised formatting flag counts as a fail.
    pub pass_score: u32,
}

impl AtsReport {
    fn passed_checks(&self) -> u32 {
        [
            self.has_experience_section,
            self.has_education_section,
            self.has_skills_section,
            self.keyword_coverage,
            self.uses_action_verbs,
            self.has_contact_info,
            !self.possible_formatting_issues,
        ]
        .into_iter()
        .filter(|passed| *passed)
        .count() as u32
    }
}

pub fn check_ats_friendly(text: &str) -> AtsReport {
    let text_lower = text.to_lowercase();

    let keyword_hits = ATS_KEYWORDS
        .iter()
        .filter(|kw| text_lower.contains(*kw))
        .count();

    let distinct_verbs: HashSet<String> = ACTION_VERB_RE
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect();

    let mut report = AtsReport {
        has_experience_section: text_lower.contains(REQUIRED_SECTIONS[0]),
        has_education_section: text_lower.contains(REQUIRED_SECTIONS[1]),
        has_skills_section: text_lower.contains(REQUIRED_SECTIONS[2]),
        keyword_coverage: keyword_hits as f64 / ATS_KEYWORDS.len() as f64
            >= MIN_KEYWORD_COVERAGE,
        uses_action_verbs: distinct_verbs.len() >= MIN_ACTION_VERBS,
        has_contact_info: EMAIL_RE.is_match(text) && PHONE_RE.is_match(text),
        possible_formatting_issues: RISKY_FORMATTING
            .iter()
            .any(|term| text_lower.contains(term)),
        pass_score: 0,
    };

    report.pass_score =
        (f64::from(report.passed_checks()) * 100.0 / f64::from(CHECK_COUNT)).round() as u32;
    report
}
