//! # Registry and run configuration
//!
//! The registry is the ordered collection of declared fixtures plus the configuration of
//! the run. It is an ordinary value: build one, register fixtures into it, hand it to the
//! runner. Fixtures run in registration order.
//!
//! ## Single-writer invariant
//! Only the runner marks a fixture as current, and it does so through `&mut Registry`,
//! so at most one fixture can be executing and only it can touch its sections and
//! counters.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::check::Checker;
use crate::fixture::{Fixture, FixtureId};
use crate::report::{ReportSink, RunSummary};
use crate::runner;

// ============================================================================
// VERBOSITY
// ============================================================================

/// Report volume, in increasing order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verbosity {
    /// Report no cases.
    Quiet,
    /// Report failed cases with their operands.
    #[default]
    Failures,
    /// Report every case; operands only for failures.
    Passed,
    /// Report every case with its operands.
    Everything,
}

impl Verbosity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Failures => "failures",
            Verbosity::Passed => "passed",
            Verbosity::Everything => "everything",
        }
    }

    /// Recognizes the four selector names; anything else is `None`.
    pub fn parse_lenient(value: &str) -> Option<Verbosity> {
        match value {
            "quiet" => Some(Verbosity::Quiet),
            "failures" => Some(Verbosity::Failures),
            "passed" => Some(Verbosity::Passed),
            "everything" => Some(Verbosity::Everything),
            _ => None,
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Verbosity::parse_lenient(s).ok_or_else(|| format!("unknown verbosity '{}'", s))
    }
}

// ============================================================================
// CONFIG
// ============================================================================

/// Global configuration, set before the run and read-only during it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub verbosity: Verbosity,
    /// Reported file locations are shown relative to this directory.
    pub source_root: Option<PathBuf>,
    /// Only fixtures whose `group.name` contains this substring run.
    pub filter: Option<String>,
}

impl Config {
    /// `file:line`, with `file` relative to the source root when it lies beneath it.
    ///
    /// Caller locations are usually relative to the build's working directory while the
    /// root is often absolute, so both sides are resolved against the current directory
    /// before comparing.
    pub fn display_location(&self, file: &str, line: u32) -> String {
        let path = Path::new(file);
        let shown = match self.source_root.as_deref() {
            Some(root) => match path.strip_prefix(root) {
                Ok(rest) => rest.to_path_buf(),
                Err(_) => absolute(path)
                    .strip_prefix(absolute(root))
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|_| path.to_path_buf()),
            },
            None => path.to_path_buf(),
        };
        format!("{}:{}", shown.display(), line)
    }

    pub fn selects(&self, qualified_name: &str) -> bool {
        self.filter
            .as_deref()
            .map_or(true, |filter| qualified_name.contains(filter))
    }
}

/// `path` joined onto the current directory when relative, canonicalized if it exists.
fn absolute(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match env::current_dir() {
            Ok(dir) => dir.join(path),
            Err(_) => path.to_path_buf(),
        }
    };
    joined.canonicalize().unwrap_or(joined)
}

// ============================================================================
// REGISTRY
// ============================================================================

/// Ordered fixtures plus run configuration.
#[derive(Debug, Default)]
pub struct Registry {
    config: Config,
    fixtures: Vec<Fixture>,
    current: Option<FixtureId>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Declares a fixture. Registration order is execution order.
    pub fn register<F>(
        &mut self,
        group: impl Into<String>,
        name: impl Into<String>,
        body: F,
    ) -> FixtureId
    where
        F: FnMut(&mut Checker<'_>) + 'static,
    {
        self.add(Fixture::new(group, name, body))
    }

    pub fn add(&mut self, fixture: Fixture) -> FixtureId {
        let id = FixtureId(self.fixtures.len());
        self.fixtures.push(fixture);
        id
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    pub fn fixture(&self, id: FixtureId) -> Option<&Fixture> {
        self.fixtures.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    /// The fixture currently executing, if a run is in progress.
    pub fn current(&self) -> Option<FixtureId> {
        self.current
    }

    /// Runs every selected fixture in registration order. See [`runner::run_all`].
    pub fn run_all(&mut self, sink: &mut dyn ReportSink) -> RunSummary {
        runner::run_all(self, sink)
    }

    pub(crate) fn set_current(&mut self, id: Option<FixtureId>) {
        self.current = id;
    }

    pub(crate) fn parts_mut(&mut self) -> (&Config, &mut [Fixture]) {
        (&self.config, &mut self.fixtures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_order() {
        assert!(Verbosity::Quiet < Verbosity::Failures);
        assert!(Verbosity::Failures < Verbosity::Passed);
        assert!(Verbosity::Passed < Verbosity::Everything);
        assert_eq!(Verbosity::default(), Verbosity::Failures);
    }

    #[test]
    fn test_location_is_shortened_under_source_root() {
        let config = Config {
            source_root: Some(PathBuf::from("/work/project")),
            ..Config::default()
        };
        assert_eq!(
            config.display_location("/work/project/src/main.rs", 12),
            "src/main.rs:12"
        );
        assert_eq!(config.display_location("/elsewhere/a.rs", 3), "/elsewhere/a.rs:3");
    }

    #[test]
    fn test_relative_location_is_shortened_under_absolute_root() {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
        let config = Config {
            source_root: Some(root),
            ..Config::default()
        };
        assert_eq!(config.display_location("src/registry.rs", 7), "registry.rs:7");
        assert_eq!(config.display_location(file!(), 9), "registry.rs:9");
    }

    #[test]
    fn test_relative_root_matches_absolute_location() {
        let file = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/registry.rs");
        let config = Config {
            source_root: Some(PathBuf::from("src")),
            ..Config::default()
        };
        assert_eq!(
            config.display_location(&file.to_string_lossy(), 4),
            "registry.rs:4"
        );
    }
}
