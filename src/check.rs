//! The execution context handed to fixture bodies.
//!
//! A [`Checker`] borrows the running fixture's state, the run configuration and the report
//! sink for the duration of one body call. Every assertion goes through
//! [`Checker::check`]: count the case, compare, format both operands, record.

use std::panic::Location;

use crate::compare::{Compare, Relation};
use crate::describe::Describe;
use crate::fixture::{FixtureState, Outcome};
use crate::registry::Config;
use crate::report::ReportSink;
use crate::section::{Section, SectionStack};

pub struct Checker<'a> {
    state: &'a mut FixtureState,
    config: &'a Config,
    sink: &'a mut dyn ReportSink,
}

impl<'a> Checker<'a> {
    pub fn new(state: &'a mut FixtureState, config: &'a Config, sink: &'a mut dyn ReportSink) -> Self {
        Self {
            state,
            config,
            sink,
        }
    }

    // ------------------------------------------------------------------------
    // Assertions
    // ------------------------------------------------------------------------

    /// Evaluates `left relation right` and records the outcome.
    ///
    /// `left_expr` and `right_expr` label the operands in reports; the check macros pass
    /// the operand source text. Returns whether the relation held.
    #[track_caller]
    pub fn check<L, R>(
        &mut self,
        relation: Relation,
        left: &L,
        right: &R,
        left_expr: &str,
        right_expr: &str,
    ) -> bool
    where
        L: Compare<R> + Describe + ?Sized,
        R: Describe + ?Sized,
    {
        let caller = Location::caller();
        self.state.add_case();
        let success = left.compare(right, relation);
        let outcome = Outcome {
            success,
            relation,
            left_expr: left_expr.to_string(),
            right_expr: right_expr.to_string(),
            left_value: left.describe(),
            right_value: right.describe(),
            location: self.config.display_location(caller.file(), caller.line()),
        };
        self.state
            .add_result(&outcome, self.config.verbosity, &mut *self.sink);
        success
    }

    #[track_caller]
    fn check_described<L, R>(&mut self, relation: Relation, left: &L, right: &R) -> bool
    where
        L: Compare<R> + Describe + ?Sized,
        R: Describe + ?Sized,
    {
        let left_expr = left.describe();
        let right_expr = right.describe();
        self.check(relation, left, right, &left_expr, &right_expr)
    }

    /// `left == right`, labelled with the operands' own descriptions.
    #[track_caller]
    pub fn check_eq<L, R>(&mut self, left: &L, right: &R) -> bool
    where
        L: Compare<R> + Describe + ?Sized,
        R: Describe + ?Sized,
    {
        self.check_described(Relation::Equal, left, right)
    }

    #[track_caller]
    pub fn check_ne<L, R>(&mut self, left: &L, right: &R) -> bool
    where
        L: Compare<R> + Describe + ?Sized,
        R: Describe + ?Sized,
    {
        self.check_described(Relation::NotEqual, left, right)
    }

    #[track_caller]
    pub fn check_gt<L, R>(&mut self, left: &L, right: &R) -> bool
    where
        L: Compare<R> + Describe + ?Sized,
        R: Describe + ?Sized,
    {
        self.check_described(Relation::Greater, left, right)
    }

    #[track_caller]
    pub fn check_ge<L, R>(&mut self, left: &L, right: &R) -> bool
    where
        L: Compare<R> + Describe + ?Sized,
        R: Describe + ?Sized,
    {
        self.check_described(Relation::GreaterOrEqual, left, right)
    }

    #[track_caller]
    pub fn check_lt<L, R>(&mut self, left: &L, right: &R) -> bool
    where
        L: Compare<R> + Describe + ?Sized,
        R: Describe + ?Sized,
    {
        self.check_described(Relation::Less, left, right)
    }

    #[track_caller]
    pub fn check_le<L, R>(&mut self, left: &L, right: &R) -> bool
    where
        L: Compare<R> + Describe + ?Sized,
        R: Describe + ?Sized,
    {
        self.check_described(Relation::LessOrEqual, left, right)
    }

    // ------------------------------------------------------------------------
    // Sections
    // ------------------------------------------------------------------------

    /// Enters a section for as long as the returned guard lives.
    ///
    /// ```rust
    /// use utest::{check_eq, Registry};
    ///
    /// let mut registry = Registry::new();
    /// registry.register("docs", "sections", |t| {
    ///     let mut outer = t.section("outer");
    ///     {
    ///         let mut inner = outer.section("inner");
    ///         check_eq!(inner, 1 + 1, 2);
    ///         assert_eq!(inner.path(), "main.outer.inner");
    ///     }
    ///     assert_eq!(outer.depth(), 1);
    /// });
    /// ```
    pub fn section<'c>(&'c mut self, name: &str) -> Section<'c, 'a> {
        Section::enter(self, name)
    }

    /// Runs `body` inside a section.
    pub fn in_section<T>(&mut self, name: &str, body: impl FnOnce(&mut Checker<'a>) -> T) -> T {
        let mut section = self.section(name);
        body(&mut *section)
    }

    /// Current section depth; 0 at the root.
    pub fn depth(&self) -> usize {
        self.state.sections().depth()
    }

    /// Current section path, root included.
    pub fn path(&mut self) -> String {
        self.state.sections_mut().path().to_string()
    }

    pub(crate) fn sections_mut(&mut self) -> &mut SectionStack {
        self.state.sections_mut()
    }

    // ------------------------------------------------------------------------
    // Counters
    // ------------------------------------------------------------------------

    /// Cases recorded so far by the running fixture.
    pub fn cases(&self) -> usize {
        self.state.cases()
    }

    /// Failed cases recorded so far by the running fixture.
    pub fn errors(&self) -> usize {
        self.state.errors()
    }

    pub fn config(&self) -> &Config {
        self.config
    }
}
