//! Decoding engine — buzzword density score, highlighted original, styled rewrite.
//!
//! Flow: tokenize → score over word tokens → highlight (escaped HTML) →
//!       rewrite matched tokens through the style → tone highlighting of the
//!       untouched original.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::tone::highlight_tone_words;
use crate::decoder::dictionary::BuzzwordDictionary;
use crate::decoder::style::DecodeStyle;
use crate::text::{escape_html, lowercase_words, tokenize, Token};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodeResult {
    pub decoded_text: String,
    /// Matched word tokens over all word tokens, percent, 2 decimals.
    pub score: f64,
    pub highlighted_html: String,
    pub tone_highlighted_html: String,
}

#[tracing::instrument(skip_all, fields(style = %style, chars = text.len()))]
pub fn decode(text: &str, dictionary: &BuzzwordDictionary, style: DecodeStyle) -> DecodeResult {
    let score = buzzword_score(text, dictionary);
    let highlighted_html = highlight_buzzwords(text, dictionary);
    let decoded_text = rewrite_text(text, dictionary, style);
    let tone_highlighted_html = highlight_tone_words(text);

    debug!(score, "decoded text");

    DecodeResult {
        decoded_text,
        score,
        highlighted_html,
        tone_highlighted_html,
    }
}

/// Repeats count in both numerator and denominator. No word tokens → 0.
pub fn buzzword_score(text: &str, dictionary: &BuzzwordDictionary) -> f64 {
    let tokens = lowercase_words(text);
    if tokens.is_empty() {
        return 0.0;
    }
    let matched = tokens.iter().filter(|t| dictionary.contains(t)).count();
    round2(matched as f64 / tokens.len() as f64 * 100.0)
}

/// Wraps dictionary hits in `<mark title='EXPLANATION'>`. All text is escaped.
pub fn highlight_buzzwords(text: &str, dictionary: &BuzzwordDictionary) -> String {
    tokenize(text)
        .into_iter()
        .map(|token| match token {
            Token::Word(word) => match dictionary.explain(&word.to_lowercase()) {
                Some(explanation) => format!(
                    "<mark title='{}'>{}</mark>",
                    escape_html(explanation),
                    escape_html(word)
                ),
                None => escape_html(word),
            },
            Token::Separator(sep) => escape_html(sep),
        })
        .collect()
}

/// Replaces dictionary hits with their styled form; everything else verbatim.
pub fn rewrite_text(text: &str, dictionary: &BuzzwordDictionary, style: DecodeStyle) -> String {
    tokenize(text)
        .into_iter()
        .map(|token| match token {
            Token::Word(word) => match dictionary.explain(&word.to_lowercase()) {
                Some(base) => style.apply(word, base),
                None => word.to_string(),
            },
            Token::Separator(sep) => sep.to_string(),
        })
        .collect()
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
