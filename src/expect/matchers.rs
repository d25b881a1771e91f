//! String pattern matching for assertions.
//!
//! This module provides the tiered pattern matcher used by the string
//! assertions, supporting glob patterns, regex, and exact matches.

use glob::Pattern;
use regex::Regex;

use crate::expect::subject::Expectation;
use crate::report::ReportEntry;

/// Match a pattern against an actual string value.
///
/// Supports three matching modes (tried in order):
/// 1. **Glob patterns**: e.g., `*.txt`, `**/config.json`
/// 2. **Regex**: e.g., `^/tmp/.*\.log$`
/// 3. **Exact match**: literal string comparison
///
/// # Example
///
/// ```rust
/// use attest::value_match;
///
/// assert!(value_match("*.txt", "notes.txt"));
/// assert!(value_match(r"^v\d+\.\d+$", "v1.2"));
/// assert!(!value_match("*.txt", "notes.rs"));
/// ```
pub fn value_match(pattern: &str, actual: &str) -> bool {
    // Try glob pattern first
    if let Ok(glob) = Pattern::new(pattern) {
        if glob.matches(actual) {
            return true;
        }
    }

    // Try regex
    if let Ok(re) = Regex::new(pattern) {
        if re.is_match(actual) {
            return true;
        }
    }

    // Exact match fallback
    actual == pattern
}

impl<T: AsRef<str>> Expectation<T> {
    /// Assert the subject matches the given pattern (glob, regex, or exact).
    ///
    /// # Example
    ///
    /// ```rust
    /// use attest::expect;
    ///
    /// expect("build/out.log").to_match_pattern("*.log").verify();
    /// ```
    pub fn to_match_pattern(self, pattern: &str) -> Self {
        let description = format!("to match pattern {:?}", pattern);
        let actual = self.subject().as_ref();
        let entry = if value_match(pattern, actual) {
            ReportEntry::pass(description)
        } else {
            ReportEntry::fail(description, format!("was {:?}", actual))
        };
        self.record(entry)
    }

    /// Assert the subject contains the given substring.
    pub fn to_contain_str(self, needle: &str) -> Self {
        let description = format!("to contain {:?}", needle);
        let actual = self.subject().as_ref();
        let entry = if actual.contains(needle) {
            ReportEntry::pass(description)
        } else {
            ReportEntry::fail(description, format!("was {:?}", actual))
        };
        self.record(entry)
    }

    /// Assert the subject does NOT contain the given substring.
    pub fn not_to_contain_str(self, needle: &str) -> Self {
        let description = format!("not to contain {:?}", needle);
        let actual = self.subject().as_ref();
        let entry = if !actual.contains(needle) {
            ReportEntry::pass(description)
        } else {
            ReportEntry::fail(description, format!("was {:?}", actual))
        };
        self.record(entry)
    }
}

/// Build a list of key-value pairs for map assertions.
///
/// # Example
///
/// ```rust
/// use attest::entries;
///
/// let pairs = entries! {
///     "a" => 1,
///     "b" => 2,
/// };
/// assert_eq!(pairs, vec![("a", 1), ("b", 2)]);
/// ```
#[macro_export]
macro_rules! entries {
    ($($key:expr => $value:expr),* $(,)?) => {{
        vec![$(($key, $value)),*]
    }};
}
