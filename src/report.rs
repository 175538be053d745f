//! Report events and the sinks that receive them.
//!
//! The harness decides *whether* and *what* to report; a [`ReportSink`] decides how it
//! looks. [`EventBuffer`] keeps events in memory for programmatic inspection, the console
//! renderer lives in [`crate::cli::output`].

use serde::Serialize;

use crate::compare::Relation;

// ============================================================================
// EVENTS
// ============================================================================

/// One ordered report event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ReportEvent {
    /// A fixture is about to run.
    FixtureStart { group: String, name: String },
    /// Emitted once per fixture, before its first case report.
    Separator,
    /// The section path changed since the previous case report.
    SectionHeader { path: String },
    /// One line per reported case.
    CaseHeader {
        index: usize,
        success: bool,
        location: String,
    },
    /// Operands of a reported case.
    CaseDetail(CaseDetail),
    /// A fixture finished.
    FixtureEnd(FixtureResult),
    /// Totals for the whole run.
    Summary(RunSummary),
}

impl ReportEvent {
    /// True for the events produced by recording individual cases.
    pub fn is_case_report(&self) -> bool {
        matches!(
            self,
            ReportEvent::Separator
                | ReportEvent::SectionHeader { .. }
                | ReportEvent::CaseHeader { .. }
                | ReportEvent::CaseDetail(_)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseDetail {
    pub success: bool,
    pub relation: Relation,
    pub left_expr: String,
    pub right_expr: String,
    pub left_value: String,
    pub right_value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixtureResult {
    pub group: String,
    pub name: String,
    pub cases: usize,
    pub errors: usize,
    /// Whether any case of this fixture was reported; changes the result line layout.
    pub printed_something: bool,
}

impl CaseDetail {
    /// Both values joined by the relation that held: the declared one for a pass, its
    /// inverse for a failure, e.g. `(23) <= (29)` for a failed `23 > 29`.
    pub fn evaluated(&self) -> String {
        let relation = if self.success {
            self.relation
        } else {
            self.relation.inverse()
        };
        format!("({}) {} ({})", self.left_value, relation, self.right_value)
    }
}

impl FixtureResult {
    pub fn passed(&self) -> bool {
        self.errors == 0
    }

    pub fn cases_passed(&self) -> usize {
        self.cases - self.errors
    }
}

// ============================================================================
// SUMMARY
// ============================================================================

/// A fixture that finished with at least one failed case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedFixture {
    pub group: String,
    pub name: String,
    pub errors: usize,
}

impl FailedFixture {
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.group, self.name)
    }
}

/// Aggregated totals of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub tests: usize,
    pub tests_passed: usize,
    pub cases: usize,
    pub cases_passed: usize,
    pub errors: usize,
    pub failures: Vec<FailedFixture>,
}

impl RunSummary {
    /// Folds one finished fixture into the totals.
    pub fn record(&mut self, result: &FixtureResult) {
        self.tests += 1;
        self.cases += result.cases;
        self.errors += result.errors;
        self.cases_passed = self.cases - self.errors;
        if result.passed() {
            self.tests_passed += 1;
        } else {
            self.failures.push(FailedFixture {
                group: result.group.clone(),
                name: result.name.clone(),
                errors: result.errors,
            });
        }
    }

    /// Sum of failed cases over all fixtures; zero means the run succeeded.
    pub fn total_errors(&self) -> usize {
        self.errors
    }

    pub fn has_failures(&self) -> bool {
        self.errors > 0
    }
}

// ============================================================================
// SINKS
// ============================================================================

/// Receives report events in order.
pub trait ReportSink {
    fn emit(&mut self, event: &ReportEvent);
}

/// Collects events in memory.
#[derive(Debug, Default)]
pub struct EventBuffer {
    pub events: Vec<ReportEvent>,
}

impl EventBuffer {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn events(&self) -> &[ReportEvent] {
        &self.events
    }

    /// Events produced by case recording (separators, section headers, case lines).
    pub fn case_reports(&self) -> impl Iterator<Item = &ReportEvent> {
        self.events.iter().filter(|e| e.is_case_report())
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl ReportSink for EventBuffer {
    fn emit(&mut self, event: &ReportEvent) {
        self.events.push(event.clone());
    }
}
