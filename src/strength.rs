//! Ranked strength list extraction
//!
//! A strengths report lists its themes as `1. Achiever 2. Activator ... 34. Woo`.
//! [`StrengthFinder`] matches that shape exactly: every marker from `1.` to
//! `N.` in ascending order, each followed by one whitespace character and a
//! single non-whitespace token, groups separated by exactly one whitespace
//! character, and the list starting at the beginning of a line. Anything
//! looser is not a match.

use crate::error::Result;
use once_cell::sync::Lazy;
use regex::Regex;

/// Number of ranked themes in a full strengths report
pub const STRENGTH_COUNT: usize = 34;

static STRENGTH_FINDER: Lazy<StrengthFinder> = Lazy::new(|| {
    StrengthFinder::new(STRENGTH_COUNT).expect("strength pattern for fixed count compiles")
});

/// Matcher for `count` sequentially numbered, whitespace-delimited tokens
#[derive(Debug, Clone)]
pub struct StrengthFinder {
    regex: Regex,
    count: usize,
}

impl StrengthFinder {
    /// Compile the matcher for `count` tokens.
    ///
    /// Fails only if the generated pattern exceeds the regex size limit.
    pub fn new(count: usize) -> Result<Self> {
        let regex = Regex::new(&build_pattern(count))?;
        Ok(Self { regex, count })
    }

    /// Number of tokens a match yields
    pub fn count(&self) -> usize {
        self.count
    }

    /// The generated regular expression
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Tokens of the first matching list in `text`, or an empty `Vec` if no
    /// line starts a complete list.
    pub fn find(&self, text: &str) -> Vec<String> {
        let Some(caps) = self.regex.captures(text) else {
            return Vec::new();
        };

        (1..=self.count)
            .filter_map(|i| caps.get(i))
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

fn build_pattern(count: usize) -> String {
    let mut pattern = String::from("(?m)^");
    for i in 1..=count {
        if i > 1 {
            pattern.push_str(r"\s");
        }
        pattern.push_str(&format!(r"{}\.\s(\S+)", i));
    }
    // The last token ends at whitespace or at the end of the input
    if count > 0 {
        pattern.push_str(r"(?:\s|\z)");
    }
    pattern
}

/// Extract the 34 ranked strengths from `text`.
///
/// Returns exactly [`STRENGTH_COUNT`] tokens, or an empty `Vec` when the text
/// holds no complete, correctly ordered list. Never fails.
pub fn extract_strengths(text: &str) -> Vec<String> {
    STRENGTH_FINDER.find(text)
}
