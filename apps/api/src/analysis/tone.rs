//! Tone analysis: counts words from five fixed tone categories.
//!
//! Counting and highlighting share one matcher: whole-word, case-insensitive
//! keyword patterns resolved into non-overlapping spans. Hyphen is a word
//! boundary here, so "data-driven" counts as `driven`, while a hyphenated
//! keyword such as "self-starter" matches as a whole. Spaces inside a
//! keyword match any run of whitespace.

use std::collections::BTreeMap;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::text::escape_html;

/// Declaration order is the iteration order of `ToneResult` and the
/// highlighting priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneCategory {
    Corporate,
    Action,
    Emotional,
    Creative,
    Fluff,
}

impl ToneCategory {
    pub const ALL: [ToneCategory; 5] = [
        ToneCategory::Corporate,
        ToneCategory::Action,
        ToneCategory::Emotional,
        ToneCategory::Creative,
        ToneCategory::Fluff,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ToneCategory::Corporate => "corporate",
            ToneCategory::Action => "action",
            ToneCategory::Emotional => "emotional",
            ToneCategory::Creative => "creative",
            ToneCategory::Fluff => "fluff",
        }
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            ToneCategory::Corporate => &[
                "synergy",
                "alignment",
                "stakeholders",
                "roadmap",
                "strategic",
                "scalable",
                "initiative",
            ],
            ToneCategory::Action => &[
                "led",
                "built",
                "created",
                "developed",
                "executed",
                "owned",
                "initiated",
            ],
            ToneCategory::Emotional => &[
                "passionate",
                "driven",
                "excited",
                "eager",
                "enthusiastic",
                "empathetic",
            ],
            ToneCategory::Creative => &[
                "designed",
                "crafted",
                "imagined",
                "ideated",
                "visualized",
                "conceptualized",
            ],
            ToneCategory::Fluff => &[
                "dynamic",
                "self-starter",
                "go-getter",
                "team player",
                "detail-oriented",
                "hardworking",
            ],
        }
    }
}

/// Sparse per-category counts. Categories with no hits are absent.
pub type ToneResult = BTreeMap<ToneCategory, usize>;

/// Whole-word, case-insensitive patterns per category, longest keyword first.
static TONE_PATTERNS: LazyLock<Vec<(ToneCategory, Vec<Regex>)>> = LazyLock::new(|| {
    ToneCategory::ALL
        .into_iter()
        .map(|category| {
            let mut keywords = category.keywords().to_vec();
            keywords.sort_by(|a, b| b.len().cmp(&a.len()));
            let patterns = keywords
                .into_iter()
                .map(|kw| {
                    Regex::new(&keyword_pattern(kw)).expect("valid tone keyword pattern")
                })
                .collect();
            (category, patterns)
        })
        .collect()
});

fn keyword_pattern(keyword: &str) -> String {
    let parts: Vec<String> = keyword.split_whitespace().map(regex::escape).collect();
    format!(r"(?i)\b{}\b", parts.join(r"\s+"))
}

/// Non-overlapping keyword spans sorted by start. Shorter keywords never split
/// a longer keyword's match in the same category; a later category takes over
/// any overlap with an earlier one.
fn tone_spans(text: &str) -> Vec<(Range<usize>, ToneCategory)> {
    let mut spans: Vec<(Range<usize>, ToneCategory)> = Vec::new();

    for (category, patterns) in TONE_PATTERNS.iter() {
        let mut claimed: Vec<Range<usize>> = Vec::new();
        for pattern in patterns {
            for m in pattern.find_iter(text) {
                let range = m.range();
                if !claimed.iter().any(|c| overlaps(c, &range)) {
                    claimed.push(range);
                }
            }
        }
        spans.retain(|(existing, _)| !claimed.iter().any(|c| overlaps(c, existing)));
        spans.extend(claimed.into_iter().map(|r| (r, *category)));
    }

    spans.sort_by_key(|(range, _)| range.start);
    spans
}

pub fn analyze_tone(text: &str) -> ToneResult {
    let mut result = ToneResult::new();
    for (_, category) in tone_spans(text) {
        *result.entry(category).or_insert(0) += 1;
    }
    result
}

/// Highest-count category; the earliest declared wins a tie.
pub fn dominant_tone(result: &ToneResult) -> &'static str {
    let mut best: Option<(ToneCategory, usize)> = None;
    for (&category, &count) in result {
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((category, count));
        }
    }
    best.map(|(category, _)| category.name()).unwrap_or("neutral")
}

/// Wraps tone keywords in `<span class='tone-CATEGORY'>`, keeping the input's
/// casing. Every wrapped span is one count in `analyze_tone`.
pub fn highlight_tone_words(text: &str) -> String {
    let spans = tone_spans(text);

    let mut html = String::with_capacity(text.len() + spans.len() * 32);
    let mut cursor = 0;
    for (range, category) in spans {
        html.push_str(&escape_html(&text[cursor..range.start]));
        html.push_str(&format!(
            "<span class='tone-{}'>{}</span>",
            category.name(),
            escape_html(&text[range.clone()])
        ));
        cursor = range.end;
    }
    html.push_str(&escape_html(&text[cursor..]));
    html
}

fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}
