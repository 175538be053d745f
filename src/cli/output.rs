//! Handles all user-facing report output for test programs.
//!
//! [`ConsoleSink`] renders report events with `termcolor`. A failed write never changes
//! the outcome of the run: the first failure is logged and kept for the caller to inspect.

use std::io::{self, Write};

use log::warn;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::error::HarnessError;
use crate::report::{CaseDetail, FixtureResult, ReportEvent, ReportSink, RunSummary};

const HLINE_BOLD: &str = "////////////////////////////////////";
const HLINE: &str = "------------------------------------";

/// Writes report events to a color-capable stream, stdout by default.
pub struct ConsoleSink<W = StandardStream> {
    stdout: W,
    announced: bool,
    error: Option<HarnessError>,
}

impl ConsoleSink {
    pub fn new(choice: ColorChoice) -> Self {
        Self::with_writer(StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> ConsoleSink<W> {
    pub fn with_writer(stdout: W) -> Self {
        Self {
            stdout,
            announced: false,
            error: None,
        }
    }

    /// The first write failure, if any occurred.
    pub fn take_error(&mut self) -> Option<HarnessError> {
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.stdout
    }

    fn render(&mut self, event: &ReportEvent) -> io::Result<()> {
        match event {
            ReportEvent::FixtureStart { group, name } => {
                self.announced = true;
                self.stdout.set_color(ColorSpec::new().set_bold(true))?;
                write!(self.stdout, "{} Running '{}.{}' test cases", HLINE_BOLD, group, name)?;
                self.stdout.reset()?;
                self.stdout.flush()
            }
            ReportEvent::Separator => writeln!(self.stdout),
            ReportEvent::SectionHeader { path } => {
                writeln!(self.stdout, "\n> Section {}", path)?;
                writeln!(self.stdout, "{}", HLINE)
            }
            ReportEvent::CaseHeader {
                index,
                success,
                location,
            } => {
                if !success {
                    writeln!(self.stdout)?;
                    self.stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
                }
                let verdict = if *success { "Success" } else { "Failure" };
                writeln!(self.stdout, "[{}] -> {} {}", index, verdict, location)?;
                self.stdout.reset()
            }
            ReportEvent::CaseDetail(detail) => self.render_detail(detail),
            ReportEvent::FixtureEnd(result) => {
                let outcome = self.render_fixture_end(result);
                self.announced = false;
                outcome
            }
            ReportEvent::Summary(summary) => self.render_summary(summary),
        }
    }

    fn render_detail(&mut self, detail: &CaseDetail) -> io::Result<()> {
        writeln!(self.stdout, "\t~~ While evaluating:")?;
        writeln!(self.stdout, "\t\t\"{}\"", detail.left_expr)?;
        writeln!(self.stdout, "\t\t\t{}", detail.relation)?;
        writeln!(self.stdout, "\t\t\"{}\"", detail.right_expr)?;
        writeln!(self.stdout)?;
        writeln!(self.stdout, "\t~~ Left: {}", detail.left_value)?;
        writeln!(self.stdout, "\t~~ Right: {}", detail.right_value)?;
        writeln!(self.stdout, "\t~~ Evaluated: {}", detail.evaluated())?;
        writeln!(self.stdout)
    }

    fn render_fixture_end(&mut self, result: &FixtureResult) -> io::Result<()> {
        let color = if result.passed() { Color::Green } else { Color::Red };
        self.stdout.set_color(ColorSpec::new().set_fg(Some(color)))?;
        if result.printed_something || !self.announced {
            if self.announced {
                writeln!(self.stdout)?;
            }
            if result.passed() {
                writeln!(
                    self.stdout,
                    "{} '{}.{}' tests passed [{}/{}]",
                    HLINE_BOLD,
                    result.group,
                    result.name,
                    result.cases_passed(),
                    result.cases
                )?;
            } else {
                writeln!(
                    self.stdout,
                    "{} '{}.{}' tests failed [{}/{}] {} cases didn't pass",
                    HLINE_BOLD,
                    result.group,
                    result.name,
                    result.cases_passed(),
                    result.cases,
                    result.errors
                )?;
            }
        } else {
            let verdict = if result.passed() { "passed" } else { "failed" };
            writeln!(
                self.stdout,
                " -> {} [{}/{}]",
                verdict,
                result.cases_passed(),
                result.cases
            )?;
        }
        self.stdout.reset()
    }

    fn render_summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        self.stdout.set_color(ColorSpec::new().set_bold(true))?;
        writeln!(
            self.stdout,
            "{} {} tests ({} passed), {} cases ({} passed)",
            HLINE_BOLD, summary.tests, summary.tests_passed, summary.cases, summary.cases_passed
        )?;
        self.stdout.reset()?;
        if summary.failures.is_empty() {
            return Ok(());
        }
        self.stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
        writeln!(self.stdout, "Failed fixtures:")?;
        for failure in &summary.failures {
            writeln!(
                self.stdout,
                "  - {} ({})",
                failure.qualified_name(),
                failure.errors
            )?;
        }
        self.stdout.reset()
    }
}

impl<W: WriteColor> ReportSink for ConsoleSink<W> {
    fn emit(&mut self, event: &ReportEvent) {
        if let Err(e) = self.render(event) {
            if self.error.is_none() {
                let error = HarnessError::from(e);
                warn!("{}", error);
                self.error = Some(error);
            }
        }
    }
}
