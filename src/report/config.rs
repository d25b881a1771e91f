//! Configuration for report rendering.

use std::io::IsTerminal;

/// Which entries of a report to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailMode {
    /// Render every entry, passing or failing.
    Always,
    /// Only render entries that failed (default).
    #[default]
    FailuresOnly,
    /// Render only the summary line.
    Never,
}

/// Configuration for report rendering.
///
/// Use the builder pattern to configure the output:
///
/// ```rust
/// use attest::{DetailMode, ReportConfig};
///
/// let config = ReportConfig::new()
///     .detail(DetailMode::Always)
///     .truncate_at(80)
///     .colors(false);
/// # assert_eq!(config.truncate_at, 80);
/// ```
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Which entries to render.
    pub detail: DetailMode,
    /// Maximum characters before truncating rendered values.
    pub truncate_at: usize,
    /// Whether to use ANSI colors in output.
    pub colors_enabled: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            detail: DetailMode::FailuresOnly,
            truncate_at: 60,
            colors_enabled: std::io::stdout().is_terminal(),
        }
    }
}

impl ReportConfig {
    /// Create a new report configuration with defaults.
    ///
    /// Default: failures only, 60 character truncation, colors auto-detected
    /// from TTY.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure which entries to render.
    pub fn detail(mut self, mode: DetailMode) -> Self {
        self.detail = mode;
        self
    }

    /// Set the maximum characters before truncating rendered values.
    pub fn truncate_at(mut self, chars: usize) -> Self {
        self.truncate_at = chars;
        self
    }

    /// Enable or disable ANSI colors.
    pub fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    /// Create a verbose configuration that renders every entry.
    pub fn verbose() -> Self {
        Self {
            detail: DetailMode::Always,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReportConfig::new();
        assert_eq!(config.detail, DetailMode::FailuresOnly);
        assert_eq!(config.truncate_at, 60);
    }

    #[test]
    fn test_verbose_config() {
        let config = ReportConfig::verbose();
        assert_eq!(config.detail, DetailMode::Always);
    }

    #[test]
    fn test_builder_chain() {
        let config = ReportConfig::new()
            .detail(DetailMode::Never)
            .truncate_at(100)
            .colors(false);

        assert_eq!(config.detail, DetailMode::Never);
        assert_eq!(config.truncate_at, 100);
        assert!(!config.colors_enabled);
    }
}
