//! # utest
//!
//! An in-process unit-testing harness. Fixtures are registered into a [`Registry`] and run
//! sequentially; their bodies issue assertions through a [`Checker`], grouped into nested
//! sections, and every outcome is counted and reported according to the run's
//! [`Verbosity`].
//!
//! ```rust,no_run
//! use utest::prelude::*;
//!
//! fn main() {
//!     let mut registry = Registry::new();
//!     registry.register("basic", "containers", |t| {
//!         let mut s = t.section("vectors");
//!         check_eq!(s, vec![1, 2, 3], [1, 2, 3]);
//!     });
//!     utest::cli::main(registry);
//! }
//! ```

pub mod check;
pub mod cli;
pub mod compare;
pub mod describe;
pub mod error;
pub mod fixture;
pub mod macros;
pub mod registry;
pub mod report;
pub mod runner;
pub mod section;

pub use check::Checker;
pub use compare::{compare, compare_sequences, Compare, Relation};
pub use describe::{describe_sequence, Describe};
pub use error::{HarnessError, HarnessResult};
pub use fixture::{Fixture, FixtureId, FixtureState, Outcome};
pub use registry::{Config, Registry, Verbosity};
pub use report::{EventBuffer, FailedFixture, ReportEvent, ReportSink, RunSummary};
pub use section::{Section, SectionStack};

/// Everything a test program needs.
pub mod prelude {
    pub use crate::{
        check_eq, check_ge, check_gt, check_le, check_lt, check_ne, Checker, Compare, Config,
        Describe, Registry, Relation, Verbosity,
    };
}
