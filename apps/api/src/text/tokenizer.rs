//! Splits text into word tokens and verbatim separators.
//!
//! Joining every token back together yields the input byte-for-byte, so
//! callers can rewrite word tokens without disturbing whitespace, punctuation
//! or emoji.

use std::sync::LazyLock;

use regex::Regex;

/// A word character followed by word characters or hyphens, ending on a word
/// boundary. Trailing hyphens that are not followed by a word character fall
/// into the next separator.
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w[\w-]*\b").expect("valid regex literal"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Word(&'a str),
    Separator(&'a str),
}

/// Splits `text` into alternating word and separator tokens.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    for m in WORD.find_iter(text) {
        if m.start() > cursor {
            tokens.push(Token::Separator(&text[cursor..m.start()]));
        }
        tokens.push(Token::Word(m.as_str()));
        cursor = m.end();
    }

    if cursor < text.len() {
        tokens.push(Token::Separator(&text[cursor..]));
    }

    tokens
}

/// Word tokens only, original casing.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    WORD.find_iter(text).map(|m| m.as_str())
}

/// Word tokens only, lowercased for dictionary and keyword lookups.
pub fn lowercase_words(text: &str) -> Vec<String> {
    words(text).map(str::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rejoin(tokens: &[Token<'_>]) -> String {
        tokens
            .iter()
            .map(|t| match t {
                Token::Word(s) | Token::Separator(s) => *s,
            })
            .collect()
    }

    #[test]
    fn test_simple_sentence_tokens() {
        let tokens = tokenize("We value synergy.");
        assert_eq!(
            tokens,
            vec![
                Token::Word("We"),
                Token::Separator(" "),
                Token::Word("value"),
                Token::Separator(" "),
                Token::Word("synergy"),
                Token::Separator("."),
            ]
        );
    }

    #[test]
    fn test_hyphenated_word_is_one_token() {
        let w: Vec<&str> = words("A self-starter and go-getter").collect();
        assert_eq!(w, vec!["A", "self-starter", "and", "go-getter"]);
    }

    #[test]
    fn test_trailing_hyphen_is_separator() {
        let tokens = tokenize("well- done");
        assert_eq!(tokens[0], Token::Word("well"));
        assert_eq!(tokens[1], Token::Separator("- "));
        assert_eq!(tokens[2], Token::Word("done"));
    }

    #[test]
    fn test_leading_separator_and_emoji_preserved() {
        let text = "  🚀 Ship it!! ";
        let tokens = tokenize(text);
        assert_eq!(tokens[0], Token::Separator("  🚀 "));
        assert_eq!(rejoin(&tokens), text);
    }

    #[test]
    fn test_empty_text_has_no_tokens() {
        assert!(tokenize("").is_empty());
        assert_eq!(words("").count(), 0);
    }

    #[test]
    fn test_unicode_word_characters() {
        let w: Vec<&str> = words("café naïve résumé").collect();
        assert_eq!(w, vec!["café", "naïve", "résumé"]);
    }

    #[test]
    fn test_lowercase_words() {
        assert_eq!(lowercase_words("Led THE Team"), vec!["led", "the", "team"]);
    }

    proptest! {
        #[test]
        fn prop_tokenize_rejoin_is_identity(text in ".{0,200}") {
            let tokens = tokenize(&text);
            prop_assert_eq!(rejoin(&tokens), text);
        }

        #[test]
        fn prop_separators_never_adjacent(text in "[a-zA-Z0-9 ,.!-]{0,120}") {
            let tokens = tokenize(&text);
            for pair in tokens.windows(2) {
                let both_sep = matches!(pair, [Token::Separator(_), Token::Separator(_)]);
                prop_assert!(!both_sep, "adjacent separators in {:?}", tokens);
            }
        }
    }
}
