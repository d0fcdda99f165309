//! Basic tokenizer
//!
//! Splits free text into lowercase alphanumeric tokens. No stemming,
//! no stopwords, no length filtering: a single-letter word is a valid
//! search term.

/// Tokenize text into searchable terms
///
/// - Split on any character that is not a letter or a number
/// - Lowercase each fragment
/// - Drop empty fragments
///
/// Deterministic and infallible; empty or fully non-alphanumeric input
/// produces no tokens.
///
/// # Example
///
/// ```
/// use boundlog_search::tokenizer::analyze;
///
/// let tokens = analyze("Hello, World!");
/// assert_eq!(tokens, vec!["hello", "world"]);
/// ```
pub fn analyze(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_basic() {
        let tokens = analyze("Hello, World!");
        assert_eq!(tokens, vec!["hello", "world"]);
    }

    #[test]
    fn test_analyze_keeps_short_tokens() {
        let tokens = analyze("We need a query");
        assert_eq!(tokens, vec!["we", "need", "a", "query"]);
    }

    #[test]
    fn test_analyze_numbers() {
        let tokens = analyze("test123 foo456bar");
        assert_eq!(tokens, vec!["test123", "foo456bar"]);
    }

    #[test]
    fn test_analyze_splits_on_runs_of_separators() {
        let tokens = analyze("one -- two...three");
        assert_eq!(tokens, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_analyze_empty() {
        assert!(analyze("").is_empty());
    }

    #[test]
    fn test_analyze_only_punctuation() {
        assert!(analyze("...---...").is_empty());
    }

    #[test]
    fn test_analyze_unicode_letters() {
        let tokens = analyze("Grüße, Welt");
        assert_eq!(tokens, vec!["grüße", "welt"]);
    }
}
