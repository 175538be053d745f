//! The test-program entry point.
//!
//! A test program builds a [`Registry`], registers its fixtures and hands it to [`main`]
//! (or [`run`] when it wants the error count instead of exiting).

use std::ffi::OsString;
use std::process;

use log::warn;

use crate::error::HarnessError;
use crate::registry::Registry;

pub mod args;
pub mod output;

use args::HarnessArgs;
use output::ConsoleSink;

/// Applies `args` to the registry's configuration, runs it against the console and
/// returns the number of failed cases.
pub fn run<I, T>(registry: &mut Registry, args: I) -> usize
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    init_logging();
    let args = HarnessArgs::parse_lenient(args);
    args.apply(registry.config_mut());

    if args.list {
        for fixture in registry.fixtures() {
            println!("{}", fixture.qualified_name());
        }
        return 0;
    }

    let mut sink = ConsoleSink::new(args.color.choice());
    let summary = registry.run_all(&mut sink);

    if args.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => warn!("{}", HarnessError::from(e)),
        }
    }

    summary.total_errors()
}

/// Runs with the process arguments and exits with [`exit_code`] of the failure count.
pub fn main(mut registry: Registry) -> ! {
    let errors = run(&mut registry, std::env::args_os());
    process::exit(exit_code(errors))
}

/// The process status for `errors` failed cases, saturated so it never wraps to zero.
pub fn exit_code(errors: usize) -> i32 {
    errors.min(u8::MAX as usize) as i32
}

/// Installs the `env_logger` backend once; `RUST_LOG` overrides the `warn` default.
fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("warn");
    let _ = env_logger::Builder::from_env(env).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_saturates() {
        assert_eq!(exit_code(0), 0);
        assert_eq!(exit_code(3), 3);
        assert_eq!(exit_code(256), 255);
    }
}
