//! Iterator assertion interface.
//!
//! The fluent glue for this interface is generated into `src/logic/gen/`
//! by the `attest generate` task.

use crate::logic::types::PeekNext;
use crate::report::ReportEntry;

/// Assertions over iterator-like subjects.
pub trait IterAssertions: Send + Sync {
    /// The subject has a next element.
    fn to_have_next<S>(&self, subject: &mut S) -> ReportEntry
    where
        S: PeekNext;

    /// The subject has no next element.
    fn not_to_have_next<S>(&self, subject: &mut S) -> ReportEntry
    where
        S: PeekNext;
}
