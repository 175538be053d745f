//! # Fixtures and result recording
//!
//! A [`Fixture`] is a named group of assertions. Its mutable half, [`FixtureState`], holds
//! the section stack and the counters; the recorder methods on it turn every assertion
//! outcome into counter updates and, depending on verbosity, report events.

use std::fmt;

use crate::check::Checker;
use crate::compare::Relation;
use crate::registry::Verbosity;
use crate::report::{CaseDetail, FixtureResult, ReportEvent, ReportSink};
use crate::section::SectionStack;

/// The executable part of a fixture.
pub type FixtureBody = Box<dyn FnMut(&mut Checker<'_>)>;

/// Position of a fixture in its registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixtureId(pub usize);

// ============================================================================
// OUTCOME
// ============================================================================

/// Everything known about one evaluated assertion. Consumed by
/// [`FixtureState::add_result`] and not retained.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub success: bool,
    pub relation: Relation,
    pub left_expr: String,
    pub right_expr: String,
    pub left_value: String,
    pub right_value: String,
    pub location: String,
}

// ============================================================================
// FIXTURE STATE
// ============================================================================

/// Section stack and counters of one fixture.
#[derive(Debug, Clone, Default)]
pub struct FixtureState {
    sections: SectionStack,
    cases: usize,
    case_index: usize,
    errors: usize,
    printed_something: bool,
}

impl FixtureState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cases(&self) -> usize {
        self.cases
    }

    pub fn errors(&self) -> usize {
        self.errors
    }

    /// Index the next recorded case will be reported under.
    pub fn case_index(&self) -> usize {
        self.case_index
    }

    pub fn printed_something(&self) -> bool {
        self.printed_something
    }

    pub fn sections(&self) -> &SectionStack {
        &self.sections
    }

    pub fn sections_mut(&mut self) -> &mut SectionStack {
        &mut self.sections
    }

    /// Counts one assertion, whatever its outcome.
    pub fn add_case(&mut self) {
        self.cases += 1;
    }

    /// Records an assertion outcome and reports it if `verbosity` asks for it.
    ///
    /// | verbosity    | reported cases | operand detail      |
    /// |--------------|----------------|---------------------|
    /// | `quiet`      | none           | -                   |
    /// | `failures`   | failures       | failures            |
    /// | `passed`     | all            | failures            |
    /// | `everything` | all            | all                 |
    pub fn add_result(
        &mut self,
        outcome: &Outcome,
        verbosity: Verbosity,
        sink: &mut dyn ReportSink,
    ) {
        if !outcome.success {
            self.errors += 1;
        }

        if verbosity > Verbosity::Quiet && (!outcome.success || verbosity >= Verbosity::Passed) {
            if !self.printed_something {
                sink.emit(&ReportEvent::Separator);
                self.printed_something = true;
            }
            if let Some(path) = self.sections.take_changed_path() {
                sink.emit(&ReportEvent::SectionHeader { path });
            }
            sink.emit(&ReportEvent::CaseHeader {
                index: self.case_index,
                success: outcome.success,
                location: outcome.location.clone(),
            });
            if !outcome.success || verbosity >= Verbosity::Everything {
                sink.emit(&ReportEvent::CaseDetail(CaseDetail {
                    success: outcome.success,
                    relation: outcome.relation,
                    left_expr: outcome.left_expr.clone(),
                    right_expr: outcome.right_expr.clone(),
                    left_value: outcome.left_value.clone(),
                    right_value: outcome.right_value.clone(),
                }));
            }
        }

        self.case_index += 1;
    }
}

// ============================================================================
// FIXTURE
// ============================================================================

/// A declared test unit: identity, body and the state the body mutates.
pub struct Fixture {
    group: String,
    name: String,
    body: FixtureBody,
    state: FixtureState,
}

impl Fixture {
    pub fn new<F>(group: impl Into<String>, name: impl Into<String>, body: F) -> Self
    where
        F: FnMut(&mut Checker<'_>) + 'static,
    {
        Self {
            group: group.into(),
            name: name.into(),
            body: Box::new(body),
            state: FixtureState::new(),
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `group.name`, as shown in reports.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.group, self.name)
    }

    pub fn state(&self) -> &FixtureState {
        &self.state
    }

    /// Back to fresh counters and the root section.
    pub(crate) fn reset(&mut self) {
        self.state = FixtureState::new();
    }

    pub(crate) fn parts_mut(&mut self) -> (&mut FixtureBody, &mut FixtureState) {
        (&mut self.body, &mut self.state)
    }

    /// Snapshot of the counters for the teardown report.
    pub fn result(&self) -> FixtureResult {
        FixtureResult {
            group: self.group.clone(),
            name: self.name.clone(),
            cases: self.state.cases,
            errors: self.state.errors,
            printed_something: self.state.printed_something,
        }
    }
}

impl fmt::Debug for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fixture")
            .field("group", &self.group)
            .field("name", &self.name)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::EventBuffer;

    fn outcome(success: bool) -> Outcome {
        Outcome {
            success,
            relation: Relation::Equal,
            left_expr: "a".to_string(),
            right_expr: "b".to_string(),
            left_value: "1".to_string(),
            right_value: "2".to_string(),
            location: "src/lib.rs:1".to_string(),
        }
    }

    #[test]
    fn test_case_index_advances_without_reporting() {
        let mut state = FixtureState::new();
        let mut sink = EventBuffer::new();
        state.add_result(&outcome(true), Verbosity::Quiet, &mut sink);
        state.add_result(&outcome(false), Verbosity::Quiet, &mut sink);
        assert_eq!(state.case_index(), 2);
        assert_eq!(state.errors(), 1);
        assert!(sink.events().is_empty());
        assert!(!state.printed_something());
    }

    #[test]
    fn test_separator_is_emitted_once() {
        let mut state = FixtureState::new();
        let mut sink = EventBuffer::new();
        state.add_result(&outcome(false), Verbosity::Failures, &mut sink);
        state.add_result(&outcome(false), Verbosity::Failures, &mut sink);
        let separators = sink
            .events()
            .iter()
            .filter(|e| matches!(e, ReportEvent::Separator))
            .count();
        assert_eq!(separators, 1);
    }
}
