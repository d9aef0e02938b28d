use crate::cli::SnapshotArgs;
use crate::support::{load_session_or_exit, or_dash, print_json_or_exit};
use serde::Serialize;
use xnatcache_kernel::{DocumentNode, InfoRecord, ResourceRole};

#[derive(Serialize)]
struct ResourceRow {
    owner: String,
    role: ResourceRole,
    #[serde(flatten)]
    info: InfoRecord,
}

pub fn run(snapshot: SnapshotArgs, json: bool) {
    let session = load_session_or_exit(&snapshot);
    let rows: Vec<ResourceRow> = session
        .resources()
        .iter()
        .map(|resource| ResourceRow {
            owner: resource.parent().label().unwrap_or("").to_string(),
            role: resource.role(),
            info: resource.info(),
        })
        .collect();

    if json {
        print_json_or_exit("resources", &rows);
        return;
    }

    println!("xnatcache resources");
    println!("  Source: {}", snapshot.xml);
    println!("  Resources: {}", rows.len());
    for row in &rows {
        println!(
            "  - {}/{} role={} format={} files={}",
            row.owner,
            row.info.value("label"),
            role_name(row.role),
            or_dash(row.info.value("format")),
            or_dash(row.info.value("file_count"))
        );
    }
}

fn role_name(role: ResourceRole) -> &'static str {
    match role {
        ResourceRole::Scan => "scan",
        ResourceRole::AssessorInput => "in",
        ResourceRole::AssessorOutput => "out",
    }
}
