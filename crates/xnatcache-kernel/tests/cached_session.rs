//! Integration tests over a realistic session snapshot.
//!
//! tests/fixtures/session.xml holds one MR session with two scans and three
//! assessors: a legacy FreeSurfer assessor, a generic processing assessor,
//! and one whose schema is unknown.

use serde_json::json;
use std::collections::BTreeSet;
use std::path::PathBuf;
use xnatcache_kernel::{
    AssessorLabel, AssessorSchema, CachedSession, DiagnosticKind, DocumentError, DocumentNode,
    ResourceOwner, ResourceRole,
};

fn fixture_session() -> CachedSession {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/session.xml");
    let xml = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    CachedSession::parse(&xml, "P1", "S1").expect("fixture should parse")
}

fn key_set(record: &xnatcache_kernel::InfoRecord) -> BTreeSet<String> {
    record.keys().map(str::to_string).collect()
}

#[test]
fn session_info_mixes_document_fields_and_caller_context() {
    let session = fixture_session();
    assert_eq!(session.label(), Some("SE1"));

    let info = serde_json::to_value(session.info()).expect("record should serialize");
    assert_eq!(
        info,
        json!({
            "ID": "XNAT_E00001",
            "label": "SE1",
            "note": "baseline visit",
            "session_type": "MR_Brain",
            "project_id": "P1",
            "original": "XNAT_E00001",
            "modality": "MR",
            "UID": "1.2.840.113619.2.1",
            "subject_id": "XNAT_S00001",
            "subject_label": "S1",
            "project_label": "P1",
            "project": "P1",
            "subject_ID": "XNAT_S00001",
            "URI": "/data/experiments/XNAT_E00001",
            "session_id": "XNAT_E00001",
            "session_label": "SE1",
            "last_updated": "XNAT_E00001",
            "type": "MR",
        })
    );
}

#[test]
fn scans_follow_document_order_and_fill_context_from_session() {
    let session = fixture_session();
    let scans = session.scans();
    let ids: Vec<_> = scans.iter().map(|scan| scan.label()).collect();
    assert_eq!(ids, vec![Some("1"), Some("2")]);

    let info = serde_json::to_value(scans[0].info()).expect("record should serialize");
    assert_eq!(
        info,
        json!({
            "ID": "1",
            "label": "1",
            "quality": "usable",
            "frames": "176",
            "note": "",
            "type": "T1",
            "series_description": "MPRAGE",
            "project_id": "P1",
            "project_label": "P1",
            "subject_id": "XNAT_S00001",
            "subject_label": "S1",
            "session_id": "XNAT_E00001",
            "session_label": "SE1",
            "scan_id": "1",
            "scan_label": "1",
            "scan_quality": "usable",
            "scan_note": "",
            "scan_type": "T1",
            "scan_frames": "176",
            "scan_description": "MPRAGE",
        })
    );
}

#[test]
fn scan_resources_keep_only_catalogs() {
    let session = fixture_session();
    let scan = session.scan("1").expect("scan 1 exists");
    let labels: Vec<String> = scan
        .resources()
        .iter()
        .filter_map(|r| r.label().map(str::to_string))
        .collect();
    assert_eq!(labels, vec!["NIFTI", "DICOM"]);

    let nifti = scan.resource("NIFTI").expect("NIFTI catalog exists");
    assert_eq!(nifti.role(), ResourceRole::Scan);
    assert!(matches!(nifti.parent(), ResourceOwner::Scan(_)));
    assert_eq!(nifti.parent().label(), Some("1"));
    let info = nifti.info();
    assert_eq!(info.value("file_size"), "8388608");
    assert_eq!(info.value("content"), "T1_RAW");

    let dicom = scan.resource("DICOM").expect("DICOM catalog exists");
    assert_eq!(dicom.info().get("file_size"), Some(""));
    assert!(scan.resource("SNAPSHOTS").is_none());
}

#[test]
fn scan_without_files_has_no_resources() {
    let session = fixture_session();
    let scan = session.scan("2").expect("scan 2 exists");
    assert!(scan.resources().is_empty());
    assert_eq!(scan.info().value("scan_note"), "subject moved");
}

#[test]
fn legacy_assessor_takes_proctype_from_label_suffix() {
    let session = fixture_session();
    let assessor = session
        .assessor("P1-x-S1-x-SE1-x-FS_v6")
        .expect("legacy assessor exists");
    assert_eq!(assessor.schema(), &AssessorSchema::Legacy);

    let info = assessor.info();
    assert!(info.diagnostics().is_empty());
    assert_eq!(info.value("xsiType"), "fs:fsdata");
    assert_eq!(info.value("proctype"), "FreeSurfer_v6");
    assert_eq!(info.value("procstatus"), "COMPLETE");
    assert_eq!(info.value("qcstatus"), "Passed");
    assert_eq!(info.value("version"), "6.0.0");
    assert_eq!(info.value("jobnode"), "vmp101");
    assert_eq!(info.value("session_label"), "SE1");
    assert_eq!(info.value("subject_label"), "S1");
}

#[test]
fn legacy_proctype_suffix_follows_the_fs_marker() {
    let xml = r#"<xnat:MRSession xmlns:xnat="http://nrg.wustl.edu/xnat"
        xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" label="SE1">
      <xnat:assessors>
        <xnat:assessor label="P1-x-S1-x-SE1-x-FS" xsi:type="fs:fsData"/>
        <xnat:assessor label="P1-x-S1-x-SE1-x-FS_v5-x-FS_old" xsi:type="fs:fsData"/>
        <xnat:assessor label="P1-x-S1-x-SE1-x-recon" xsi:type="fs:fsData"/>
      </xnat:assessors>
    </xnat:MRSession>"#;
    let session = CachedSession::parse(xml, "P1", "S1").expect("document should parse");
    let proctypes: Vec<String> = session
        .assessors()
        .iter()
        .map(|assessor| assessor.info().value("proctype").to_string())
        .collect();
    assert_eq!(proctypes, ["FreeSurfer", "FreeSurfer_v5", "FreeSurfer"]);
}

#[test]
fn generic_assessor_reads_proc_namespace() {
    let session = fixture_session();
    let assessor = session
        .assessor("P1-x-S1-x-SE1-x-2-x-fMRIQA_v2")
        .expect("generic assessor exists");
    assert_eq!(assessor.schema(), &AssessorSchema::Generic);

    let info = assessor.info();
    assert_eq!(info.value("xsiType"), "proc:genprocdata");
    assert_eq!(info.value("proctype"), "fMRIQA_v2");
    assert_eq!(info.value("qcstatus"), "Needs QA");
    assert_eq!(info.value("version"), "2.0.1");
    assert_eq!(info.get("walltimeused"), Some(""));
    assert_eq!(info.value("assessor_id"), "XNAT_E00003");

    let label = AssessorLabel::parse(info.value("label"));
    assert_eq!(label.parts().and_then(|p| p.scan.as_deref()), Some("2"));
}

#[test]
fn both_schemas_produce_the_same_key_set() {
    let session = fixture_session();
    let assessors = session.assessors();
    let legacy = assessors[0].info();
    let generic = assessors[1].info();
    assert_eq!(key_set(&legacy), key_set(&generic));
    assert_eq!(legacy.len(), 20);
}

#[test]
fn unknown_schema_yields_partial_record_and_diagnostic() {
    let session = fixture_session();
    let assessor = session.assessor("P1-x-S1-x-SE1-x-QC").expect("qc assessor exists");
    assert_eq!(
        assessor.schema(),
        &AssessorSchema::Unknown("xnat:qcassessmentdata".into())
    );

    let info = assessor.info();
    assert!(!info.contains_key("procstatus"));
    assert!(!info.contains_key("proctype"));
    assert_eq!(info.value("ID"), "XNAT_E00004");
    assert_eq!(info.value("xsiType"), "xnat:qcassessmentdata");
    assert_eq!(info.value("session_id"), "XNAT_E00001");

    let diagnostics = info.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::UnknownAssessorSchema);
    assert_eq!(diagnostics[0].subject, "P1-x-S1-x-SE1-x-QC");
}

#[test]
fn assessor_inputs_and_outputs_are_separate_sets() {
    let session = fixture_session();
    let assessor = session
        .assessor("P1-x-S1-x-SE1-x-2-x-fMRIQA_v2")
        .expect("generic assessor exists");

    let inputs: Vec<String> = assessor
        .in_resources()
        .iter()
        .map(|r| r.info().value("label").to_string())
        .collect();
    let outputs: Vec<String> = assessor
        .out_resources()
        .iter()
        .map(|r| r.info().value("label").to_string())
        .collect();
    assert_eq!(inputs, vec!["BOLD"]);
    assert_eq!(outputs, vec!["PDF", "STATS"]);

    let pdf = assessor.out_resource("PDF").expect("PDF output exists");
    assert_eq!(pdf.role(), ResourceRole::AssessorOutput);
    assert_eq!(pdf.session().label(), Some("SE1"));
    assert!(assessor.out_resource("BOLD").is_none());
    assert!(assessor.in_resource("BOLD").is_some());

    let legacy = session.assessors().remove(0);
    assert!(legacy.in_resources().is_empty());
}

#[test]
fn filters_select_by_normalized_values() {
    let session = fixture_session();

    let t1: Vec<_> = session
        .scans_of_type(&["T1"])
        .iter()
        .map(|s| s.label().map(str::to_string))
        .collect();
    assert_eq!(t1, vec![Some("1".to_string())]);
    assert_eq!(session.scans_with_series_description(&["REST_BOLD"]).len(), 1);
    assert!(session.scans_of_type(&[]).is_empty());

    let selected = session.assessors_of_proctype(&["FreeSurfer_v6", "fMRIQA_v2"]);
    assert_eq!(selected.len(), 2);
    assert!(session.assessors_of_proctype(&["FreeSurfer"]).is_empty());

    let roles: Vec<ResourceRole> = session.resources().iter().map(|r| r.role()).collect();
    assert_eq!(
        roles,
        vec![
            ResourceRole::Scan,
            ResourceRole::Scan,
            ResourceRole::AssessorOutput,
            ResourceRole::AssessorOutput,
            ResourceRole::AssessorInput,
            ResourceRole::AssessorOutput,
            ResourceRole::AssessorOutput,
        ]
    );
}

#[test]
fn session_without_containers_is_empty_not_an_error() {
    let xml = r#"<xnat:MRSession xmlns:xnat="http://nrg.wustl.edu/xnat" ID="E9"/>"#;
    let session = CachedSession::parse(xml, "P9", "S9").expect("minimal session parses");
    assert!(session.scans().is_empty());
    assert!(session.assessors().is_empty());
    assert!(session.resources().is_empty());

    let info = session.info();
    assert_eq!(info.value("label"), "");
    assert_eq!(info.value("project_id"), "P9");
    assert_eq!(info.value("subject_label"), "S9");
    assert_eq!(info.value("URI"), "/data/experiments/E9");
}

#[test]
fn truncated_document_fails_to_parse() {
    let result = CachedSession::parse(
        r#"<xnat:MRSession xmlns:xnat="http://nrg.wustl.edu/xnat">"#,
        "P1",
        "S1",
    );
    assert!(matches!(result, Err(DocumentError::Malformed { .. })));
}
