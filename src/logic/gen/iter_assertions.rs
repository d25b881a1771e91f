//---------------------------------------------------
//  Generated content, modify:
//  src/codegen/emit.rs
//  if necessary - enjoy the day 🙂
//---------------------------------------------------

use crate::logic::types::PeekNext;
use crate::report::ReportEntry;

use crate::expect::Expectation;
use crate::logic::default::DefaultIterAssertions;
use crate::logic::iter_assertions::IterAssertions;
use crate::logic::registry;

impl<S> Expectation<S> {
    /// The subject has a next element.
    pub fn to_have_next(mut self) -> Self
    where
        S: PeekNext,
    {
        let entry: ReportEntry = registry::get_or_default::<DefaultIterAssertions>()
            .to_have_next(self.subject_mut());
        self.record(entry)
    }

    /// The subject has no next element.
    pub fn not_to_have_next(mut self) -> Self
    where
        S: PeekNext,
    {
        let entry: ReportEntry = registry::get_or_default::<DefaultIterAssertions>()
            .not_to_have_next(self.subject_mut());
        self.record(entry)
    }
}
