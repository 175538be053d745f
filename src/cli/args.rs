//! Defines the command-line arguments of a test program.
//!
//! This module uses the `clap` crate with its "derive" feature. Parsing is lenient:
//! unknown flags are ignored, an unrecognized verbosity keeps the default, and if parsing
//! fails outright the defaults apply.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use log::{debug, warn};
use termcolor::ColorChoice;

use crate::registry::{Config, Verbosity};

/// Arguments accepted by every test program.
#[derive(Debug, Default, Parser)]
#[command(
    name = "utest",
    version,
    about = "Runs the fixtures compiled into this program.",
    ignore_errors = true
)]
pub struct HarnessArgs {
    /// Report volume: quiet, failures, passed or everything.
    #[arg(short = 'v', long = "verbosity", value_name = "LEVEL", allow_hyphen_values = true)]
    pub verbosity: Option<String>,

    /// Show reported file locations relative to this directory.
    #[arg(
        short = 's',
        long = "source-root",
        alias = "source_root",
        value_name = "PATH",
        allow_hyphen_values = true
    )]
    pub source_root: Option<PathBuf>,

    /// Only run fixtures whose `group.name` contains this substring.
    #[arg(short = 'f', long = "filter", value_name = "SUBSTRING", allow_hyphen_values = true)]
    pub filter: Option<String>,

    /// When to color the report.
    #[arg(long = "color", value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// List the registered fixtures instead of running them.
    #[arg(long = "list")]
    pub list: bool,

    /// Print the run summary as JSON after the report.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolves `Auto` against whether stdout is a terminal.
    pub fn choice(self) -> ColorChoice {
        match self {
            ColorMode::Auto if atty::is(atty::Stream::Stdout) => ColorChoice::Auto,
            ColorMode::Auto => ColorChoice::Never,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

impl HarnessArgs {
    /// Parses `args` (program name first). Unrecognized arguments are dropped wherever
    /// they appear. Help and version requests print and exit; every other parse failure
    /// falls back to the defaults.
    pub fn parse_lenient<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(retain_known(args)) {
            Ok(args) => args,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                e.exit()
            }
            Err(e) => {
                warn!("ignoring unparseable arguments: {:?}", e.kind());
                Self::default()
            }
        }
    }

    /// Writes the recognized settings into `config`, leaving the rest untouched.
    pub fn apply(&self, config: &mut Config) {
        if let Some(value) = &self.verbosity {
            match Verbosity::parse_lenient(value) {
                Some(verbosity) => config.verbosity = verbosity,
                None => warn!(
                    "ignoring unknown verbosity '{}', keeping '{}'",
                    value, config.verbosity
                ),
            }
        }
        if let Some(root) = &self.source_root {
            config.source_root = Some(root.clone());
        }
        if let Some(filter) = &self.filter {
            config.filter = Some(filter.clone());
        }
        debug!("run configuration: {:?}", config);
    }
}

/// Flags that consume the following argument as their value.
const VALUE_FLAGS: &[&str] = &[
    "-v",
    "--verbosity",
    "-s",
    "--source-root",
    "--source_root",
    "-f",
    "--filter",
    "--color",
];

/// Flags that stand alone.
const SWITCHES: &[&str] = &["--list", "--json", "-h", "--help", "-V", "--version"];

/// Keeps the program name plus every recognized flag and its value, in order.
///
/// clap stops at the first argument it cannot place, which would discard every valid flag
/// after it. A value flag at the very end has no value and is dropped.
fn retain_known<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let is_value_flag = |flag: &str| VALUE_FLAGS.iter().any(|known| *known == flag);
    let is_switch = |flag: &str| SWITCHES.iter().any(|known| *known == flag);

    let mut args = args.into_iter().map(|arg| -> OsString { arg.into() });
    let mut kept: Vec<OsString> = args.next().into_iter().collect();
    while let Some(arg) = args.next() {
        let Some(text) = arg.to_str() else {
            debug!("ignoring argument {:?}", arg);
            continue;
        };
        if is_value_flag(text) {
            if let Some(value) = args.next() {
                kept.push(arg);
                kept.push(value);
            }
            continue;
        }
        let inline = match text.split_once('=') {
            Some((flag, _)) => flag.starts_with("--") && is_value_flag(flag),
            None => false,
        };
        if inline || is_switch(text) {
            kept.push(arg);
        } else {
            debug!("ignoring argument '{}'", text);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from(args: &[&str]) -> Config {
        let mut config = Config::default();
        HarnessArgs::parse_lenient(args.iter().copied()).apply(&mut config);
        config
    }

    #[test]
    fn test_short_and_long_flags() {
        let config = config_from(&["prog", "-v", "everything", "--source-root", "/src"]);
        assert_eq!(config.verbosity, Verbosity::Everything);
        assert_eq!(config.source_root, Some(PathBuf::from("/src")));
    }

    #[test]
    fn test_unknown_verbosity_keeps_default() {
        let config = config_from(&["prog", "--verbosity", "loud"]);
        assert_eq!(config.verbosity, Verbosity::Failures);
    }

    #[test]
    fn test_unknown_flag_is_ignored() {
        let config = config_from(&["prog", "--bogus"]);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_flags_after_unknown_arguments_still_apply() {
        let config = config_from(&["prog", "--bogus", "-v", "quiet"]);
        assert_eq!(config.verbosity, Verbosity::Quiet);

        let config = config_from(&["prog", "stray", "-v", "quiet"]);
        assert_eq!(config.verbosity, Verbosity::Quiet);

        let config = config_from(&["prog", "-x", "-s", "/tmp"]);
        assert_eq!(config.source_root, Some(PathBuf::from("/tmp")));
    }

    #[test]
    fn test_long_flags_with_inline_values() {
        let config = config_from(&["prog", "--other=1", "--verbosity=passed", "--filter=basic"]);
        assert_eq!(config.verbosity, Verbosity::Passed);
        assert_eq!(config.filter.as_deref(), Some("basic"));
    }

    #[test]
    fn test_trailing_value_flag_is_dropped() {
        let config = config_from(&["prog", "-v", "everything", "-s"]);
        assert_eq!(config.verbosity, Verbosity::Everything);
        assert_eq!(config.source_root, None);
    }
}
