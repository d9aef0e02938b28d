use crate::support::{or_dash, print_json_or_exit};
use serde::Serialize;
use xnatcache_kernel::{AssessorLabel, LabelParts};

#[derive(Serialize)]
struct LabelReport {
    label: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    parts: Option<LabelParts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    session_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scan_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    address_path: Option<String>,
}

impl LabelReport {
    fn new(label: &AssessorLabel) -> Self {
        let parts = label.parts();
        Self {
            label: label.raw(),
            valid: label.is_valid(),
            parts: parts.cloned(),
            session_path: parts.map(LabelParts::session_path),
            scan_path: parts.and_then(LabelParts::scan_path),
            address_path: parts.map(LabelParts::address_path),
        }
    }
}

pub fn run(label: String, json: bool) {
    let parsed = AssessorLabel::parse(&label);
    let report = LabelReport::new(&parsed);

    if json {
        print_json_or_exit("label", &report);
    } else {
        println!("xnatcache label");
        println!("  Label: {}", report.label);
        println!("  Valid: {}", report.valid);
        if let Some(parts) = &report.parts {
            println!("  Project: {}", parts.project);
            println!("  Subject: {}", parts.subject);
            println!("  Session: {}", parts.session);
            println!("  Scan: {}", or_dash(parts.scan.as_deref().unwrap_or("")));
            println!("  Proctype: {}", parts.proctype);
        }
        if let Some(path) = &report.address_path {
            println!("  Address: {path}");
        }
    }

    if let Err(err) = parsed.require_parts() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
