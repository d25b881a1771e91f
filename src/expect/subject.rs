//! The expectation builder at the heart of the fluent API.
//!
//! This module provides the core types for recording assertions:
//! - `expect()` - Entry point for creating an expectation over a subject
//! - `Expectation` - Holds the subject and the assertions recorded so far

use std::fmt;

use crate::report::{Report, ReportConfig, ReportEntry, ReportFormatter, EMPTY_CREATOR_REASON};

/// Create an expectation over a subject value.
///
/// This is the entry point for the fluent assertion API. Chained assertion
/// methods record entries; nothing fails until [`Expectation::verify`] or
/// [`Expectation::evaluate`] is called.
///
/// # Example
///
/// ```rust
/// use attest::expect;
///
/// expect(2 + 2).to_equal(4).verify();
/// ```
pub fn expect<T: fmt::Debug>(subject: T) -> Expectation<T> {
    Expectation::new(subject)
}

/// Holds a subject and the assertions recorded against it.
///
/// Assertion methods are chainable and never panic themselves; failures
/// surface when the expectation is evaluated. Use [`Expectation::verify`]
/// to panic on failure or [`Expectation::evaluate`] to inspect the report.
#[derive(Debug)]
pub struct Expectation<T> {
    subject: T,
    label: Option<String>,
    entries: Vec<ReportEntry>,
}

impl<T> Expectation<T> {
    /// Attach a human-readable label used instead of the rendered subject
    /// in failure reports.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attest::expect;
    ///
    /// expect(200).described_as("status code").to_equal(200).verify();
    /// ```
    pub fn described_as(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Borrow the subject. Used by generated assertion glue.
    pub(crate) fn subject(&self) -> &T {
        &self.subject
    }

    /// Mutably borrow the subject. Used by generated assertion glue for
    /// assertions that need to probe the subject (e.g. peeking iterators).
    pub(crate) fn subject_mut(&mut self) -> &mut T {
        &mut self.subject
    }

    /// Record an evaluated entry and continue the chain.
    pub(crate) fn record(mut self, entry: ReportEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Consume the expectation, yielding the recorded entries.
    pub(crate) fn into_entries(self) -> Vec<ReportEntry> {
        self.entries
    }
}

impl<T: fmt::Debug> Expectation<T> {
    /// Create a new expectation over a subject.
    pub fn new(subject: T) -> Self {
        Self {
            subject,
            label: None,
            entries: Vec::new(),
        }
    }

    // =========================================================================
    // General assertions (chainable)
    // =========================================================================

    /// Assert the subject equals the expected value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attest::expect;
    ///
    /// expect("hello").to_equal("hello").verify();
    /// ```
    pub fn to_equal(self, expected: T) -> Self
    where
        T: PartialEq,
    {
        let description = format!("to equal {:?}", expected);
        let entry = if self.subject == expected {
            ReportEntry::pass(description)
        } else {
            ReportEntry::fail(description, format!("was {:?}", self.subject))
                .expecting(format!("{:?}", expected))
        };
        self.record(entry)
    }

    /// Assert the subject does NOT equal the given value.
    pub fn not_to_equal(self, unexpected: T) -> Self
    where
        T: PartialEq,
    {
        let description = format!("not to equal {:?}", unexpected);
        let entry = if self.subject != unexpected {
            ReportEntry::pass(description)
        } else {
            ReportEntry::fail(description, format!("was {:?}", self.subject))
        };
        self.record(entry)
    }

    /// Assert the subject satisfies an ad-hoc predicate.
    ///
    /// The description is used verbatim in reports, so phrase it the way
    /// the other assertions read, e.g. `"to be even"`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attest::expect;
    ///
    /// expect(12).to_satisfy("to be even", |n| n % 2 == 0).verify();
    /// ```
    pub fn to_satisfy(self, description: &str, predicate: impl FnOnce(&T) -> bool) -> Self {
        let entry = if predicate(&self.subject) {
            ReportEntry::pass(description)
        } else {
            ReportEntry::fail(description, format!("was {:?}", self.subject))
        };
        self.record(entry)
    }

    /// Evaluate an assertion-creator block as a group.
    ///
    /// The creator receives an expectation over a clone of the subject; every
    /// assertion it records becomes part of one group entry, and all of them
    /// are evaluated even if an earlier one fails. A creator that records no
    /// assertions at all is reported as an input-validation failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attest::expect;
    ///
    /// expect(7)
    ///     .grouped("to be a lucky number", |n| {
    ///         n.to_satisfy("to be odd", |n| n % 2 == 1)
    ///             .to_satisfy("to be single-digit", |n| *n < 10)
    ///     })
    ///     .verify();
    /// ```
    pub fn grouped(
        self,
        description: &str,
        creator: impl FnOnce(Expectation<T>) -> Expectation<T>,
    ) -> Self
    where
        T: Clone,
    {
        let inner = creator(Expectation::new(self.subject.clone()));
        let entries = inner.into_entries();
        let entry = if entries.is_empty() {
            ReportEntry::invalid(description, EMPTY_CREATOR_REASON)
        } else {
            ReportEntry::group(description, entries)
        };
        self.record(entry)
    }

    // =========================================================================
    // Evaluation
    // =========================================================================

    /// Evaluate the expectation without panicking.
    ///
    /// Consumes the expectation and returns the full [`Report`] tree.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attest::expect;
    ///
    /// let report = expect(1).to_equal(2).evaluate();
    /// assert!(!report.passed());
    /// ```
    pub fn evaluate(self) -> Report {
        Report {
            subject: format!("{:?}", self.subject),
            label: self.label,
            entries: self.entries,
        }
    }

    /// Assert that every recorded assertion held.
    ///
    /// # Panics
    ///
    /// Panics with the rendered failure report if any assertion failed.
    pub fn verify(self) {
        let report = self.evaluate();
        if !report.passed() {
            // Panic payloads go through test harnesses verbatim, so render
            // without ANSI colors.
            let formatter = ReportFormatter::new(ReportConfig::new().colors(false));
            panic!("assertion failed: {}", formatter.render(&report));
        }
    }
}
