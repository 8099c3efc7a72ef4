//! # nullref
//!
//! Raises a `NullReferenceError`, reports it as unhandled and terminates
//! with a non-zero exit status, the way a runtime surfaces an uncaught
//! null-reference failure.
//!
//! Report layout comes from an optional TOML file (`--config`); see
//! `nullref_common::config::ReportConfig`.
//!
//! The report and all log output go to stderr. With `--json`, stdout
//! carries exactly one JSON document: the error snapshot.

use clap::Parser;
use nullref_common::prelude::*;
use std::io;
use std::path::PathBuf;
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Exit status for a reported null-reference error.
const EXIT_UNHANDLED: i32 = 1;
/// Exit status for configuration failures.
const EXIT_CONFIG: i32 = 2;

/// nullref — raise and report a null-reference error
#[derive(Parser, Debug)]
#[command(name = "nullref")]
#[command(author = "RTS007")]
#[command(version)]
#[command(about = "Raise a null-reference error and report it as unhandled")]
struct Args {
    /// Path to report configuration TOML.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Custom message. The default diagnostic literal is used when omitted.
    #[arg(short, long, conflicts_with = "synthesized")]
    message: Option<String>,

    /// Attach a cause with this text.
    #[arg(long, value_name = "TEXT")]
    cause: Option<String>,

    /// Raise as the runtime would: default message, no capture site.
    #[arg(long)]
    synthesized: bool,

    /// Enable verbose logging (DEBUG level).
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format.
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(c) => c,
        Err(e) => {
            setup_tracing(&args, LogLevel::default());
            error!("FATAL: {e}");
            process::exit(EXIT_CONFIG);
        }
    };

    setup_tracing(&args, config.shared.log_level);
    info!(
        service = %config.shared.service_name,
        "nullref v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let err = raise(&args);
    let options = &config.report;

    eprintln!("{}", Report::new(&err, options));
    if args.json {
        match ErrorSnapshot::capture(&err, options).to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => error!("failed to serialize error snapshot: {e}"),
        }
    }
    log_unhandled(&err, options);

    process::exit(EXIT_UNHANDLED);
}

fn load_config(args: &Args) -> Result<ReportConfig, ConfigError> {
    match args.config {
        Some(ref path) => load_report_config(path),
        None => Ok(ReportConfig::with_service_name(env!("CARGO_PKG_NAME"))),
    }
}

fn raise(args: &Args) -> NullReferenceError {
    let err = if args.synthesized {
        NullReferenceError::synthesized()
    } else {
        match args.message {
            Some(ref m) => NullReferenceError::with_message(m.clone()),
            None => NullReferenceError::new(),
        }
    };

    match args.cause {
        Some(ref c) => err.with_cause(io::Error::other(c.clone())),
        None => err,
    }
}

/// Setup tracing subscriber from CLI arguments and the configured level.
///
/// Logs are written to stderr so stdout stays free for `--json` output.
fn setup_tracing(args: &Args, configured: LogLevel) {
    let level = if args.verbose {
        LogLevel::Debug
    } else {
        configured
    };

    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::from(level).into());

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .compact()
            .init();
    }
}
