use crate::cli::SnapshotArgs;
use crate::support::{load_session_or_exit, or_dash, print_json_or_exit};
use xnatcache_kernel::{DocumentNode, InfoRecord};

pub fn run(snapshot: SnapshotArgs, types: Vec<String>, json: bool) {
    let session = load_session_or_exit(&snapshot);
    let scans = if types.is_empty() {
        session.scans()
    } else {
        let wanted: Vec<&str> = types.iter().map(String::as_str).collect();
        session.scans_of_type(&wanted)
    };
    let records: Vec<InfoRecord> = scans.iter().map(DocumentNode::info).collect();

    if json {
        print_json_or_exit("scans", &records);
        return;
    }

    println!("xnatcache scans");
    println!("  Source: {}", snapshot.xml);
    println!("  Scans: {}", records.len());
    for (scan, record) in scans.iter().zip(&records) {
        println!(
            "  - {} type={} quality={} resources={}",
            record.value("ID"),
            or_dash(record.value("type")),
            or_dash(record.value("quality")),
            scan.resources().len()
        );
    }
}
