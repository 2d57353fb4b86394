//! `json-edit` - converge a JSON file to a list of changes.
//!
//! Usage:
//!   json-edit [--strict] [--dry-run] <FILE> '<changes-array-json>'
//!
//! When the change list is omitted it is read from stdin. Prints
//! `{"changed": <bool>, "paths": [...]}` on success.

use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use json_edit::json_cli::{converge_json, expand_home, ConvergeOptions};
use json_edit::store::ParseStrategy;

#[derive(Debug, Parser)]
#[command(name = "json-edit", version, about = "Apply declarative changes to a JSON file")]
struct Args {
    /// Target JSON file; created (with its directory) if missing.
    file: String,

    /// JSON array of change requests. Read from stdin when omitted.
    changes: Option<String>,

    /// Parse the target as plain JSON, rejecting comments.
    #[arg(long, env = "JSON_EDIT_STRICT")]
    strict: bool,

    /// Report what would change without writing anything.
    #[arg(long)]
    dry_run: bool,

    /// Log level when RUST_LOG is unset.
    #[arg(long, env = "JSON_EDIT_LOG", default_value = "warn")]
    log_level: String,
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);

    let changes = match args.changes {
        Some(c) => c,
        None => {
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
            buf
        }
    };

    let options = ConvergeOptions {
        parse: if args.strict {
            ParseStrategy::Strict
        } else {
            ParseStrategy::default()
        },
        dry_run: args.dry_run,
    };
    let path = expand_home(&args.file);

    match converge_json(&path, changes.trim(), &options) {
        Ok(outcome) => {
            let mut stdout = io::stdout().lock();
            if writeln!(stdout, "{}", outcome.to_json()).is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
