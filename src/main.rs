//! keymint — unique, human-friendly, cryptographically random unlock keys.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use std::ffi::OsString;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::Cli;
use keymint::config::Config;
use keymint::env::Env;
use keymint::logging;

fn main() {
    if let Err(err) = run(std::env::args_os()) {
        eprintln!("{}", error_message(&err));
        process::exit(1);
    }
}

/// User-facing error line with the full context chain.
fn error_message(err: &anyhow::Error) -> String {
    format!("Error: {err:#}")
}

fn run<I, T>(argv: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(argv);
    let env = Env::real();
    logging::init(&env, cli.verbose);

    let working_dir = std::env::current_dir().context("failed to determine working directory")?;
    let mut config = Config::load(cli.config.as_deref(), Some(working_dir.as_path()), &env)
        .context("failed to load configuration")?;
    config.apply_overrides(cli.overrides());

    let path = config.output.file.clone();
    let report = config
        .batch_request()
        .run(&path)
        .context("key generation failed")?;

    if !cli.quiet {
        cli::print_summary(&report, &path);
    }
    Ok(())
}
