//! The assertion tree produced by evaluating an expectation.

use serde::Serialize;

/// Failure reason used when an assertion-creator block records nothing.
pub const EMPTY_CREATOR_REASON: &str =
    "the assertion-creator block did not record a single assertion";

/// A single node in an assertion tree.
///
/// `Check` is a leaf assertion, `Group` a set of assertions evaluated
/// together (failure of one child does not suppress the others), and
/// `InvalidUsage` marks an input-validation failure such as an empty
/// assertion-creator block.
#[derive(Debug, Clone, Serialize)]
pub enum ReportEntry {
    /// A leaf assertion over the subject.
    Check {
        /// What was asserted, e.g. `to contain key "a"`.
        description: String,
        /// Rendered expected value, if one applies.
        expected: Option<String>,
        /// What was actually found, set when the check failed.
        found: Option<String>,
        /// Whether the check held.
        passed: bool,
    },
    /// Assertions evaluated together as a group.
    Group {
        /// Description of the group, e.g. `to contain, in any order, the pairs`.
        description: String,
        /// The grouped assertions; all of them are evaluated.
        entries: Vec<ReportEntry>,
    },
    /// The assertion API was used incorrectly; always counts as failed.
    InvalidUsage {
        /// Description of the offending operation.
        description: String,
        /// Why the usage was invalid.
        reason: String,
    },
}

impl ReportEntry {
    /// Create a passing check.
    pub fn pass(description: impl Into<String>) -> Self {
        ReportEntry::Check {
            description: description.into(),
            expected: None,
            found: None,
            passed: true,
        }
    }

    /// Create a failing check with a description of what was found instead.
    pub fn fail(description: impl Into<String>, found: impl Into<String>) -> Self {
        ReportEntry::Check {
            description: description.into(),
            expected: None,
            found: Some(found.into()),
            passed: false,
        }
    }

    /// Attach a rendered expected value to a check. No-op for other variants.
    pub fn expecting(mut self, value: impl Into<String>) -> Self {
        if let ReportEntry::Check { expected, .. } = &mut self {
            *expected = Some(value.into());
        }
        self
    }

    /// Create a group entry from already-evaluated children.
    pub fn group(description: impl Into<String>, entries: Vec<ReportEntry>) -> Self {
        ReportEntry::Group {
            description: description.into(),
            entries,
        }
    }

    /// Create an input-validation failure.
    pub fn invalid(description: impl Into<String>, reason: impl Into<String>) -> Self {
        ReportEntry::InvalidUsage {
            description: description.into(),
            reason: reason.into(),
        }
    }

    /// Whether this entry (and, for groups, every child) held.
    pub fn passed(&self) -> bool {
        match self {
            ReportEntry::Check { passed, .. } => *passed,
            ReportEntry::Group { entries, .. } => entries.iter().all(ReportEntry::passed),
            ReportEntry::InvalidUsage { .. } => false,
        }
    }

    /// The entry's description.
    pub fn description(&self) -> &str {
        match self {
            ReportEntry::Check { description, .. }
            | ReportEntry::Group { description, .. }
            | ReportEntry::InvalidUsage { description, .. } => description,
        }
    }
}

/// Result of evaluating an expectation: the rendered subject plus the
/// recorded assertion tree.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// `Debug` rendering of the subject.
    pub subject: String,
    /// Optional human label attached via `described_as`.
    pub label: Option<String>,
    /// The recorded assertion tree.
    pub entries: Vec<ReportEntry>,
}

impl Report {
    /// Whether every recorded assertion held.
    pub fn passed(&self) -> bool {
        self.entries.iter().all(ReportEntry::passed)
    }

    /// Flat count of failed leaf entries in the tree.
    pub fn failure_count(&self) -> usize {
        fn count(entry: &ReportEntry) -> usize {
            match entry {
                ReportEntry::Check { passed, .. } => usize::from(!passed),
                ReportEntry::Group { entries, .. } => entries.iter().map(count).sum(),
                ReportEntry::InvalidUsage { .. } => 1,
            }
        }
        self.entries.iter().map(count).sum()
    }

    /// Serialize the report as pretty-printed JSON.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_passed() {
        assert!(ReportEntry::pass("to equal 1").passed());
        assert!(!ReportEntry::fail("to equal 1", "was 2").passed());
    }

    #[test]
    fn test_group_fails_when_any_child_fails() {
        let group = ReportEntry::group(
            "both",
            vec![
                ReportEntry::pass("key equals \"a\""),
                ReportEntry::fail("value equals 1", "was 2"),
            ],
        );
        assert!(!group.passed());
    }

    #[test]
    fn test_empty_group_passes() {
        assert!(ReportEntry::group("nothing", vec![]).passed());
    }

    #[test]
    fn test_invalid_usage_always_fails() {
        let entry = ReportEntry::invalid("key", EMPTY_CREATOR_REASON);
        assert!(!entry.passed());
    }

    #[test]
    fn test_failure_count_walks_groups() {
        let report = Report {
            subject: "{}".to_string(),
            label: None,
            entries: vec![
                ReportEntry::pass("a"),
                ReportEntry::group(
                    "g",
                    vec![
                        ReportEntry::fail("b", "nope"),
                        ReportEntry::fail("c", "nope"),
                    ],
                ),
            ],
        };
        assert!(!report.passed());
        assert_eq!(report.failure_count(), 2);
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_report_serializes() {
        let report = Report {
            subject: "5".to_string(),
            label: Some("answer".to_string()),
            entries: vec![ReportEntry::pass("to equal 5")],
        };
        let json = report.to_json().unwrap();
        assert!(json.contains("\"subject\""));
        assert!(json.contains("to equal 5"));
    }
}
