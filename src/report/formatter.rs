//! Rendering of assertion reports as indented pass/fail listings.

use crate::report::config::{DetailMode, ReportConfig};
use crate::report::tree::{Report, ReportEntry};

// ANSI color codes
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Formatter for assertion reports.
pub struct ReportFormatter {
    config: ReportConfig,
}

impl ReportFormatter {
    /// Create a new formatter with the given configuration.
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Create a formatter with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(ReportConfig::new())
    }

    /// Render a full report as an indented tree.
    ///
    /// The first line names the subject (or its label); each entry follows,
    /// indented by nesting depth, with a `✓`/`✗` mark and an optional
    /// `└─` detail line for failures.
    pub fn render(&self, report: &Report) -> String {
        let title = report
            .label
            .clone()
            .unwrap_or_else(|| self.truncate(&report.subject));
        let mut out = format!("expected {}\n", title);

        if self.config.detail == DetailMode::Never {
            return out;
        }
        for entry in &report.entries {
            self.render_entry(entry, 1, &mut out);
        }
        out
    }

    fn render_entry(&self, entry: &ReportEntry, depth: usize, out: &mut String) {
        if self.config.detail == DetailMode::FailuresOnly && entry.passed() {
            return;
        }

        let indent = "  ".repeat(depth);
        match entry {
            ReportEntry::Check {
                description,
                expected,
                found,
                passed,
            } => {
                out.push_str(&format!("{}{} {}\n", indent, self.mark(*passed), description));
                if !passed {
                    if let Some(detail) = self.detail_line(expected.as_deref(), found.as_deref()) {
                        out.push_str(&format!("{}  └─ {}\n", indent, detail));
                    }
                }
            }
            ReportEntry::Group {
                description,
                entries,
            } => {
                out.push_str(&format!(
                    "{}{} {}\n",
                    indent,
                    self.mark(entry.passed()),
                    description
                ));
                for child in entries {
                    self.render_entry(child, depth + 1, out);
                }
            }
            ReportEntry::InvalidUsage {
                description,
                reason,
            } => {
                out.push_str(&format!("{}{} {}\n", indent, self.mark(false), description));
                out.push_str(&format!("{}  └─ invalid usage: {}\n", indent, reason));
            }
        }
    }

    fn detail_line(&self, expected: Option<&str>, found: Option<&str>) -> Option<String> {
        match (expected, found) {
            (Some(e), Some(f)) => Some(format!(
                "expected {}, found {}",
                self.truncate(e),
                self.truncate(f)
            )),
            (None, Some(f)) => Some(self.truncate(f)),
            (Some(e), None) => Some(format!("expected {}", self.truncate(e))),
            (None, None) => None,
        }
    }

    fn mark(&self, passed: bool) -> String {
        let mark = if passed { "✓" } else { "✗" };
        if self.config.colors_enabled {
            let color = if passed { GREEN } else { RED };
            format!("{}{}{}", color, mark, RESET)
        } else {
            mark.to_string()
        }
    }

    /// Truncate a rendered value to the configured width.
    fn truncate(&self, s: &str) -> String {
        if s.chars().count() > self.config.truncate_at {
            let cut: String = s.chars().take(self.config.truncate_at.saturating_sub(3)).collect();
            format!("{}...", cut)
        } else {
            s.to_string()
        }
    }
}
