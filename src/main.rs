//! closing-refs CLI entrypoint.
//!
//! Usage: `closing-refs <stale-prs|multiple-prs> --owner <OWNER> --name <NAME>
//! [--max <N>] [--token <TOKEN>] [--api-base <URL>]`.

use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use closing_refs::{AuditError, ClosingRefsConfig, Subcommand};
use ortho_config::OrthoConfig;
use tracing_subscriber::EnvFilter;

mod cli;

/// Flags whose value is a separate argument and must not be mistaken for the
/// subcommand.
const VALUE_FLAGS: [&str; 10] = [
    "--token",
    "-t",
    "--owner",
    "-o",
    "--name",
    "-n",
    "--max",
    "-m",
    "--api-base",
    "--page-size",
];

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

async fn run() -> Result<(), AuditError> {
    let (positional, filtered) = extract_subcommand(env::args_os().collect());
    let subcommand = parse_subcommand(positional)?;
    let config = load_config(filtered)?;

    cli::run(subcommand, &config).await
}

/// Loads configuration from the filtered CLI arguments, environment, and
/// files.
///
/// # Errors
///
/// Returns [`AuditError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config(args: Vec<OsString>) -> Result<ClosingRefsConfig, AuditError> {
    ClosingRefsConfig::load_from_iter(args).map_err(|error| AuditError::Configuration {
        message: error.to_string(),
    })
}

fn parse_subcommand(value: Option<String>) -> Result<Subcommand, AuditError> {
    value
        .ok_or(AuditError::MissingSubcommand)?
        .parse::<Subcommand>()
}

/// Splits the first positional argument off the argument vector.
///
/// The program name is kept in the remaining arguments so ortho-config can
/// parse them unchanged. Values following a known value flag are skipped,
/// and `--` ends flag processing.
fn extract_subcommand(args: Vec<OsString>) -> (Option<String>, Vec<OsString>) {
    let mut remaining = Vec::with_capacity(args.len());
    let mut subcommand = None;
    let mut iter = args.into_iter();

    if let Some(program) = iter.next() {
        remaining.push(program);
    }

    let mut expects_value = false;
    while let Some(arg) = iter.next() {
        if expects_value {
            expects_value = false;
            remaining.push(arg);
            continue;
        }

        let text = arg.to_string_lossy();
        if text == "--" {
            if subcommand.is_none() {
                subcommand = iter.next().map(|value| value.to_string_lossy().into_owned());
            }
            remaining.extend(iter);
            break;
        }

        if text.starts_with('-') {
            expects_value = VALUE_FLAGS.contains(&&*text);
            remaining.push(arg);
            continue;
        }

        if subcommand.is_none() {
            subcommand = Some(text.into_owned());
        } else {
            remaining.push(arg);
        }
    }

    (subcommand, remaining)
}
