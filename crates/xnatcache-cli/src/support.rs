use crate::cli::SnapshotArgs;
use serde::Serialize;
use std::fs;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use xnatcache_kernel::{CachedSession, InfoRecord};

/// Log to stderr so JSON on stdout stays machine-readable. `RUST_LOG`
/// overrides the default `warn` level.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(Level::WARN.as_str())),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub fn load_session_or_exit(args: &SnapshotArgs) -> CachedSession {
    let xml = fs::read_to_string(&args.xml).unwrap_or_else(|e| {
        eprintln!("error: failed to read {}: {e}", args.xml);
        std::process::exit(1);
    });
    CachedSession::parse(&xml, args.project.as_str(), args.subject.as_str()).unwrap_or_else(|e| {
        eprintln!("error: failed to parse {}: {e}", args.xml);
        std::process::exit(1);
    })
}

pub fn print_json_or_exit<T: Serialize + ?Sized>(what: &str, payload: &T) {
    let rendered = serde_json::to_string_pretty(payload).unwrap_or_else(|err| {
        eprintln!("error: failed to render {what} payload: {err}");
        std::process::exit(2);
    });
    println!("{rendered}");
}

/// Diagnostics never reach stdout.
pub fn report_diagnostics(records: &[InfoRecord]) {
    for diagnostic in records.iter().flat_map(InfoRecord::diagnostics) {
        eprintln!("warning: {diagnostic}");
    }
}

/// `  key: value` lines, skipping empty values.
pub fn print_fields(record: &InfoRecord, indent: &str) {
    for (key, value) in record.fields() {
        if !value.is_empty() {
            println!("{indent}{key}: {value}");
        }
    }
}

pub fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
