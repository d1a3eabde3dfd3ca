//! String classification and formatting helpers
//!
//! The classifiers answer whether a raw string token (typically a CSV cell
//! or a form field) spells out a boolean or a missing value. The formatters
//! cover count-aware pluralization and word capitalization.

/// Tokens recognized as spelling out "true"
const TRUTHY_TOKENS: [&str; 4] = ["yes", "true", "1", "y"];

/// Tokens recognized as spelling out "false"
const FALSY_TOKENS: [&str; 5] = ["no", "false", "0", "n", ""];

/// Tokens recognized as spelling out a missing value
const NULL_TOKENS: [&str; 7] = ["null", "na", "n/a", "no", "n", "-", ""];

/// Check whether a string is a recognized truthy token, case-insensitively
///
/// # Examples
///
/// ```
/// use kitbag::text::is_truthy;
///
/// assert!(is_truthy("TRUE"));
/// assert!(is_truthy("y"));
/// assert!(!is_truthy("maybe"));
/// ```
pub fn is_truthy(value: &str) -> bool {
    TRUTHY_TOKENS.contains(&value.to_lowercase().as_str())
}

/// Check whether a string is a recognized falsy token, case-insensitively
pub fn is_falsy(value: &str) -> bool {
    FALSY_TOKENS.contains(&value.to_lowercase().as_str())
}

/// Check whether a string is a recognized null-like token, case-insensitively
pub fn is_null_like(value: &str) -> bool {
    NULL_TOKENS.contains(&value.to_lowercase().as_str())
}

/// Render a singular word as singular or plural according to `count`
///
/// A count of exactly one leaves the word unchanged. Otherwise a word already
/// ending in "s" gets a trailing apostrophe, a word ending in consonant+"y"
/// swaps the "y" for "ies", and anything else gets an "s".
///
/// # Examples
///
/// ```
/// use kitbag::text::pluralize;
///
/// assert_eq!(pluralize("cat", 1), "cat");
/// assert_eq!(pluralize("cat", 2), "cats");
/// assert_eq!(pluralize("baby", 2), "babies");
/// ```
pub fn pluralize(word: &str, count: u64) -> String {
    if count == 1 {
        return word.to_string();
    }

    if word.ends_with('s') {
        return format!("{word}'");
    }

    if ends_with_consonant_y(word) {
        return format!("{}ies", &word[..word.len() - 1]);
    }

    format!("{word}s")
}

fn ends_with_consonant_y(word: &str) -> bool {
    let mut chars = word.chars().rev();
    if chars.next() != Some('y') {
        return false;
    }
    match chars.next() {
        Some(previous) => !matches!(previous, 'a' | 'e' | 'i' | 'o' | 'u'),
        None => false,
    }
}

/// Uppercase the first letter of every whitespace-delimited word
///
/// Whitespace is preserved exactly; only the first character after each run
/// of whitespace (and the first character of the string) is changed.
pub fn capitalize_words(sentence: &str) -> String {
    let mut result = String::with_capacity(sentence.len());
    let mut at_word_start = true;
    for ch in sentence.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            result.push(ch);
        } else if at_word_start {
            result.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            result.push(ch);
        }
    }
    result
}
