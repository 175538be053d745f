//! # Runner
//!
//! Drives a [`Registry`]: every selected fixture goes through setup, execute and teardown
//! in registration order, then the run is summarized.
//!
//! ```text
//! Idle -> { Setup -> Execute -> Teardown } per fixture -> Summarize -> Done
//! ```
//!
//! Execution is sequential and synchronous. A body that never returns stalls the run.

use log::debug;

use crate::check::Checker;
use crate::fixture::FixtureId;
use crate::registry::{Registry, Verbosity};
use crate::report::{FixtureResult, ReportEvent, ReportSink, RunSummary};

/// Runs every selected fixture of `registry` and reports to `sink`.
///
/// The returned summary's [`RunSummary::total_errors`] is zero when every case passed.
pub fn run_all(registry: &mut Registry, sink: &mut dyn ReportSink) -> RunSummary {
    let mut summary = RunSummary::default();

    for index in 0..registry.len() {
        let id = FixtureId(index);
        let qualified_name = registry.fixtures()[index].qualified_name();
        if !registry.config().selects(&qualified_name) {
            debug!("skipping fixture '{}': filtered out", qualified_name);
            continue;
        }

        setup(registry, id, sink);
        execute(registry, id, sink);
        if let Some(result) = teardown(registry, id, sink) {
            summary.record(&result);
        }
    }

    debug!(
        "run finished: {} fixtures, {} cases, {} errors",
        summary.tests, summary.cases, summary.errors
    );
    sink.emit(&ReportEvent::Summary(summary.clone()));
    summary
}

/// Clears counters left by an earlier run and announces the fixture unless the run is quiet.
fn setup(registry: &mut Registry, id: FixtureId, sink: &mut dyn ReportSink) {
    let (config, fixtures) = registry.parts_mut();
    let Some(fixture) = fixtures.get_mut(id.0) else {
        return;
    };
    fixture.reset();
    debug!("running fixture '{}'", fixture.qualified_name());
    if config.verbosity > Verbosity::Quiet {
        sink.emit(&ReportEvent::FixtureStart {
            group: fixture.group().to_string(),
            name: fixture.name().to_string(),
        });
    }
}

/// Marks the fixture current for the duration of its body.
fn execute(registry: &mut Registry, id: FixtureId, sink: &mut dyn ReportSink) {
    registry.set_current(Some(id));
    {
        let (config, fixtures) = registry.parts_mut();
        if let Some(fixture) = fixtures.get_mut(id.0) {
            let (body, state) = fixture.parts_mut();
            let mut checker = Checker::new(state, config, sink);
            body(&mut checker);
        }
    }
    registry.set_current(None);
}

/// Reports the fixture's pass/fail line and hands back its counters.
fn teardown(
    registry: &Registry,
    id: FixtureId,
    sink: &mut dyn ReportSink,
) -> Option<FixtureResult> {
    let result = registry.fixture(id)?.result();
    debug!(
        "fixture '{}.{}' done: {}/{} cases passed",
        result.group,
        result.name,
        result.cases_passed(),
        result.cases
    );
    sink.emit(&ReportEvent::FixtureEnd(result.clone()));
    Some(result)
}
