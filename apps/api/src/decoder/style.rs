//! Decode styles — how a matched buzzword is rewritten.
//!
//! Every style is a pure formatting function of the buzzword's surface form
//! and its dictionary explanation. Unknown style names parse to
//! `PlainEnglish`, so the transform table is total.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DecodeStyle {
    #[default]
    PlainEnglish,
    RealTalk,
    GenZ,
    CorporateSatire,
    Spiritual,
    Haiku,
    PassiveAggressive,
}

impl DecodeStyle {
    pub const ALL: [DecodeStyle; 7] = [
        DecodeStyle::PlainEnglish,
        DecodeStyle::RealTalk,
        DecodeStyle::GenZ,
        DecodeStyle::CorporateSatire,
        DecodeStyle::Spiritual,
        DecodeStyle::Haiku,
        DecodeStyle::PassiveAggressive,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DecodeStyle::PlainEnglish => "Plain English",
            DecodeStyle::RealTalk => "Real Talk",
            DecodeStyle::GenZ => "Gen Z",
            DecodeStyle::CorporateSatire => "Corporate Satire",
            DecodeStyle::Spiritual => "Spiritual",
            DecodeStyle::Haiku => "Haiku",
            DecodeStyle::PassiveAggressive => "Passive-Aggressive",
        }
    }

    /// Exact display-name match; anything else is Plain English.
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.name() == name.trim())
            .unwrap_or_default()
    }

    pub fn description(&self) -> &'static str {
        match self {
            DecodeStyle::PlainEnglish => "Clear, professional, and jargon-free.",
            DecodeStyle::RealTalk => "Blunt and brutally honest translation of corporate fluff.",
            DecodeStyle::GenZ => "Slangified, ironic, and loaded with memes and emoji.",
            DecodeStyle::CorporateSatire => "Deadpan sarcasm aimed at exposing buzzword absurdity.",
            DecodeStyle::Spiritual => "Mystical decoding through the lens of cosmic awareness.",
            DecodeStyle::Haiku => {
                "Three-line poetic form to expose the nonsense in minimalist style."
            }
            DecodeStyle::PassiveAggressive => {
                "Polite professionalism barely covering up the shade."
            }
        }
    }

    pub fn note(&self) -> &'static str {
        match self {
            DecodeStyle::PlainEnglish => {
                "Great for real-world use and recruiters. Best choice for resumes."
            }
            DecodeStyle::RealTalk => {
                "Not safe for HR. Use for venting or decoding job posts with friends."
            }
            DecodeStyle::GenZ => "Unhinged. Expect TikTok energy. Not for serious applications.",
            DecodeStyle::CorporateSatire => {
                "Walks the line between clever and chaos. Works well in presentations."
            }
            DecodeStyle::Spiritual => "For those who want to vibe-check the workplace.",
            DecodeStyle::Haiku => "Funny, absurd, and oddly reflective. Best with short inputs.",
            DecodeStyle::PassiveAggressive => "When you want to say it... without *saying* it.",
        }
    }

    /// Rewrites one matched buzzword. `original` keeps the input's casing,
    /// `base` is the dictionary explanation.
    pub fn apply(&self, original: &str, base: &str) -> String {
        match self {
            DecodeStyle::PlainEnglish => base.to_string(),
            DecodeStyle::RealTalk => format!("[💬 Translation: {base}]"),
            DecodeStyle::GenZ => format!("{original} (lol basically: {base})"),
            DecodeStyle::CorporateSatire => format!("{original}™️ ({base})"),
            DecodeStyle::Spiritual => {
                format!("🌕 {original} (rooted in illusion — true meaning: {base}) ✨")
            }
            DecodeStyle::Haiku => haiku(original, base),
            DecodeStyle::PassiveAggressive => {
                format!("{original} (We *trust* you understand this means: {base})")
            }
        }
    }
}

impl From<String> for DecodeStyle {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<DecodeStyle> for String {
    fn from(style: DecodeStyle) -> Self {
        style.name().to_string()
    }
}

impl std::fmt::Display for DecodeStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Word groups of 5, 7 and the rest. Not syllable-accurate.
fn haiku(original: &str, base: &str) -> String {
    let words: Vec<&str> = base.split_whitespace().collect();
    let line = |range: std::ops::Range<usize>| {
        let end = range.end.min(words.len());
        let start = range.start.min(end);
        words[start..end].join(" ")
    };
    format!(
        "{original}:\n{}\n{}\n{}",
        line(0..5),
        line(5..12),
        line(12..words.len())
    )
}
