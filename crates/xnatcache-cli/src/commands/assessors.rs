use crate::cli::SnapshotArgs;
use crate::support::{load_session_or_exit, or_dash, print_json_or_exit, report_diagnostics};
use xnatcache_kernel::{DocumentNode, InfoRecord};

pub fn run(snapshot: SnapshotArgs, proctypes: Vec<String>, json: bool) {
    let session = load_session_or_exit(&snapshot);
    let assessors = if proctypes.is_empty() {
        session.assessors()
    } else {
        let wanted: Vec<&str> = proctypes.iter().map(String::as_str).collect();
        session.assessors_of_proctype(&wanted)
    };
    let records: Vec<InfoRecord> = assessors.iter().map(DocumentNode::info).collect();
    report_diagnostics(&records);

    if json {
        print_json_or_exit("assessors", &records);
        return;
    }

    println!("xnatcache assessors");
    println!("  Source: {}", snapshot.xml);
    println!("  Assessors: {}", records.len());
    for record in &records {
        println!(
            "  - {} proctype={} status={} qc={}",
            record.value("label"),
            or_dash(record.value("proctype")),
            or_dash(record.value("procstatus")),
            or_dash(record.value("qcstatus"))
        );
    }
}
