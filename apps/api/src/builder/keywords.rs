//! Keyword gap analysis between a job description and a resume.
//!
//! Extraction is a stopword-filtered term-frequency count: lowercase word
//! tokens of two or more characters, top-N by count, ties broken
//! alphabetically, returned in alphabetical order.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::decoder::engine::round2;
use crate::text::lowercase_words;

pub const DEFAULT_TOP_N: usize = 20;

const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst", "an",
    "and", "another", "any", "anyhow", "anyone", "anything", "anyway", "anywhere", "are",
    "around", "as", "at", "back", "be", "became", "because", "become", "becomes", "been",
    "before", "beforehand", "behind", "being", "below", "beside", "besides", "between", "beyond",
    "both", "but", "by", "can", "cannot", "could", "do", "done", "down", "due", "during", "each",
    "eg", "either", "else", "elsewhere", "enough", "etc", "even", "ever", "every", "everyone",
    "everything", "everywhere", "except", "few", "for", "former", "formerly", "from", "further",
    "get", "give", "go", "had", "has", "have", "he", "hence", "her", "here", "hereafter",
    "hereby", "herein", "hers", "herself", "him", "himself", "his", "how", "however", "i", "ie",
    "if", "in", "inc", "indeed", "into", "is", "it", "its", "itself", "just", "keep", "last",
    "latter", "least", "less", "ltd", "made", "many", "may", "me", "meanwhile", "might", "mine",
    "more", "moreover", "most", "mostly", "much", "must", "my", "myself", "namely", "neither",
    "never", "nevertheless", "next", "no", "nobody", "none", "nor", "not", "nothing", "now",
    "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto", "or", "other",
    "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own", "per", "perhaps",
    "please", "put", "rather", "re", "same", "see", "seem", "seemed", "seeming", "seems",
    "several", "she", "should", "since", "so", "some", "somehow", "someone", "something",
    "sometime", "sometimes", "somewhere", "still", "such", "than", "that", "the", "their",
    "them", "themselves", "then", "thence", "there", "thereafter", "thereby", "therefore",
    "therein", "thereupon", "these", "they", "this", "those", "though", "through", "throughout",
    "thru", "thus", "to", "together", "too", "toward", "towards", "under", "until", "up", "upon",
    "us", "very", "via", "was", "we", "well", "were", "what", "whatever", "when", "whence",
    "whenever", "where", "whereafter", "whereas", "whereby", "wherein", "whereupon", "wherever",
    "whether", "which", "while", "whither", "who", "whoever", "whole", "whom", "whose", "why",
    "will", "with", "within", "without", "would", "yet", "you", "your", "yours", "yourself",
    "yourselves",
];

#[derive(Debug, Clone)]
pub struct Stopwords(HashSet<String>);

impl Default for Stopwords {
    fn default() -> Self {
        Self(ENGLISH_STOPWORDS.iter().map(|w| w.to_string()).collect())
    }
}

impl Stopwords {
    /// One stopword per line; blank lines and `#` comments are ignored.
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(Self::parse(&raw))
    }

    pub fn parse(raw: &str) -> Self {
        Self(
            raw.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#'))
                .map(str::to_lowercase)
                .collect(),
        )
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub match_percent: f64,
}

pub fn extract_keywords(text: &str, top_n: usize, stopwords: &Stopwords) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for word in lowercase_words(text) {
        if word.chars().count() < 2 || stopwords.contains(&word) {
            continue;
        }
        *counts.entry(word).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(top_n);

    let mut keywords: Vec<String> = ranked.into_iter().map(|(word, _)| word).collect();
    keywords.sort();
    keywords
}

/// Set overlap of job keywords with resume keywords. Outputs are sorted.
pub fn match_keywords<J, R>(job_keywords: &[J], resume_keywords: &[R]) -> KeywordMatch
where
    J: AsRef<str>,
    R: AsRef<str>,
{
    let job: BTreeSet<&str> = job_keywords.iter().map(|k| k.as_ref()).collect();
    let resume: HashSet<&str> = resume_keywords.iter().map(|k| k.as_ref()).collect();

    let (matched, missing): (Vec<&str>, Vec<&str>) =
        job.iter().copied().partition(|kw| resume.contains(kw));

    let match_percent = if job.is_empty() {
        0.0
    } else {
        round2(matched.len() as f64 / job.len() as f64 * 100.0)
    };

    KeywordMatch {
        matched: matched.into_iter().map(String::from).collect(),
        missing: missing.into_iter().map(String::from).collect(),
        match_percent,
    }
}

pub fn suggest_rewrites<S: AsRef<str>>(missing_keywords: &[S]) -> Vec<String> {
    missing_keywords
        .iter()
        .map(|kw| {
            format!(
                "Consider adding a bullet or sentence about '{}' to match the job post.",
                kw.as_ref()
            )
        })
        .collect()
}
