//! Diagnostic logging setup.
//!
//! Library code emits `tracing` events; the binary installs a stderr `fmt`
//! subscriber. `KEYMINT_LOG` takes an `EnvFilter` directive and wins over the
//! `-v` count.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

use crate::constants::ENV_LOG;
use crate::env::Env;

/// Default filter directive for a given `-v` count.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the filter from `KEYMINT_LOG`, falling back to the verbosity level.
///
/// An unparseable directive is reported on stderr and ignored.
pub fn filter(env: &Env, verbose: u8) -> EnvFilter {
    if let Some(directive) = env.var(ENV_LOG) {
        match EnvFilter::try_new(&directive) {
            Ok(filter) => return filter,
            Err(e) => eprintln!("{}", invalid_directive_warning(&directive, &e)),
        }
    }
    EnvFilter::new(level_for_verbosity(verbose))
}

fn invalid_directive_warning(directive: &str, err: &ParseError) -> String {
    format!("Warning: ignoring invalid {ENV_LOG} value: {directive} ({err})")
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(env: &Env, verbose: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(env, verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for_verbosity(0), "warn");
        assert_eq!(level_for_verbosity(1), "info");
        assert_eq!(level_for_verbosity(2), "debug");
        assert_eq!(level_for_verbosity(7), "trace");
    }

    #[test]
    fn env_directive_wins() {
        let env = Env::mock([("KEYMINT_LOG", "keymint=trace")]);
        assert_eq!(filter(&env, 0).to_string(), "keymint=trace");
    }

    #[test]
    fn falls_back_to_verbosity() {
        let env = Env::mock(Vec::<(&str, &str)>::new());
        assert_eq!(filter(&env, 2).to_string(), "debug");
    }

    #[test]
    fn invalid_directive_falls_back_with_warning() {
        let env = Env::mock([("KEYMINT_LOG", "keymint=loudest")]);
        assert_eq!(filter(&env, 1).to_string(), "info");

        let err = EnvFilter::try_new("keymint=loudest").unwrap_err();
        let warning = invalid_directive_warning("keymint=loudest", &err);
        assert!(warning.starts_with("Warning: ignoring invalid KEYMINT_LOG value: keymint=loudest"));
    }

    #[test]
    fn init_twice_does_not_panic() {
        let env = Env::mock(Vec::<(&str, &str)>::new());
        init(&env, 0);
        init(&env, 3);
    }
}
