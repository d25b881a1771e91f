//! Failure reporting: the assertion tree and its rendering.
//!
//! Assertion methods record [`ReportEntry`] nodes; evaluating an expectation
//! produces a [`Report`] holding the whole tree. [`ReportFormatter`] renders
//! a report as an indented pass/fail listing, controlled by [`ReportConfig`].

mod config;
mod formatter;
mod tree;

pub use config::{DetailMode, ReportConfig};
pub use formatter::ReportFormatter;
pub use tree::{Report, ReportEntry, EMPTY_CREATOR_REASON};
