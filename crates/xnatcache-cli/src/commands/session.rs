use crate::cli::SnapshotArgs;
use crate::support::{load_session_or_exit, print_fields, print_json_or_exit};
use xnatcache_kernel::{CachedSession, DocumentNode};

pub fn run(snapshot: SnapshotArgs, json: bool) {
    let session = load_session_or_exit(&snapshot);
    render(&session, "session", json);
}

/// Shared with `fetch`, which prints the same view of a client-loaded session.
pub fn render(session: &CachedSession, command: &str, json: bool) {
    let info = session.info();
    if json {
        print_json_or_exit(command, &info);
        return;
    }

    println!("xnatcache {command}");
    println!("  Scans: {}", session.scans().len());
    println!("  Assessors: {}", session.assessors().len());
    print_fields(&info, "  ");
}
