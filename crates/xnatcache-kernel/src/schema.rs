//! Field tables that flatten nodes into canonical records.
//!
//! Every node kind has one table of `key → source` rows. Assessors have two,
//! one per analysis schema, and pick between them with the classification
//! taken from their `xsi:type`:
//!
//! | key        | legacy (`fs:fsData`)          | generic (`proc:genProcData`) |
//! |------------|-------------------------------|------------------------------|
//! | procstatus | `fs:procstatus`               | `proc:procstatus`            |
//! | proctype   | `FreeSurfer` + label suffix   | `proc:proctype`              |
//! | qcstatus   | `xnat:validation/status`      | `xnat:validation/status`     |
//! | version    | `fs:procversion`              | `proc:procversion`           |
//! | job fields | `fs:*`                        | `proc:*`                     |
//!
//! Both assessor tables must yield the same key set.

use crate::node::DocumentNode;
use crate::record::InfoRecord;
use crate::session::CachedSession;

/// Canonical (lowercase) `xsi:type` of the legacy FreeSurfer schema.
pub const LEGACY_XSI_TYPE: &str = "fs:fsdata";
/// Canonical (lowercase) `xsi:type` of the generic processing schema.
pub const GENERIC_XSI_TYPE: &str = "proc:genprocdata";

/// Which assessor schema an element follows.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AssessorSchema {
    Legacy,
    Generic,
    /// Carries the lowercased `xsi:type` that matched neither schema.
    Unknown(String),
}

impl AssessorSchema {
    /// Classify by `xsi:type`. Matching is case-insensitive: the archive
    /// writes `fs:fsData` but query filters use `fs:fsdata`.
    pub fn classify(xsi_type: &str) -> Self {
        let canonical = xsi_type.to_ascii_lowercase();
        match canonical.as_str() {
            LEGACY_XSI_TYPE => Self::Legacy,
            GENERIC_XSI_TYPE => Self::Generic,
            _ => Self::Unknown(canonical),
        }
    }

    pub fn xsi_type(&self) -> &str {
        match self {
            Self::Legacy => LEGACY_XSI_TYPE,
            Self::Generic => GENERIC_XSI_TYPE,
            Self::Unknown(xsi_type) => xsi_type,
        }
    }

    /// The schema-specific table, `None` for unknown schemas.
    pub fn fields(&self) -> Option<&'static [FieldMapping]> {
        match self {
            Self::Legacy => Some(LEGACY_ASSESSOR_FIELDS),
            Self::Generic => Some(GENERIC_ASSESSOR_FIELDS),
            Self::Unknown(_) => None,
        }
    }
}

/// Where a record field gets its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    /// Resolver lookup on the node's own element.
    Path(&'static str),
    /// Copy of a key filled earlier in the same record.
    Alias(&'static str),
    /// Value taken from the owning session.
    Context(ContextField),
    /// `prefix` followed by the value of an earlier key.
    Prefixed {
        prefix: &'static str,
        key: &'static str,
    },
    /// `base` plus the label text after the first `marker`, up to any
    /// further `marker`.
    LabelSuffix {
        base: &'static str,
        marker: &'static str,
    },
}

/// Session-level values every node can reach through its back-reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextField {
    ProjectId,
    SubjectId,
    SubjectLabel,
    SessionId,
    SessionLabel,
}

impl ContextField {
    pub fn resolve(self, session: &CachedSession) -> String {
        match self {
            Self::ProjectId => session
                .get("project")
                .filter(|project| !project.is_empty())
                .unwrap_or(session.project())
                .to_string(),
            Self::SubjectId => session.get("xnat:subject_ID").unwrap_or("").to_string(),
            Self::SubjectLabel => session.subject().to_string(),
            Self::SessionId => session.get("ID").unwrap_or("").to_string(),
            Self::SessionLabel => session.get("label").unwrap_or("").to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMapping {
    pub key: &'static str,
    pub source: FieldSource,
}

const fn path(key: &'static str, path: &'static str) -> FieldMapping {
    FieldMapping {
        key,
        source: FieldSource::Path(path),
    }
}

const fn alias(key: &'static str, of: &'static str) -> FieldMapping {
    FieldMapping {
        key,
        source: FieldSource::Alias(of),
    }
}

const fn context(key: &'static str, field: ContextField) -> FieldMapping {
    FieldMapping {
        key,
        source: FieldSource::Context(field),
    }
}

pub static SESSION_FIELDS: &[FieldMapping] = &[
    path("ID", "ID"),
    path("label", "label"),
    path("note", "xnat:note"),
    path("session_type", "session_type"),
    context("project_id", ContextField::ProjectId),
    path("original", "original"),
    path("modality", "modality"),
    path("UID", "UID"),
    context("subject_id", ContextField::SubjectId),
    context("subject_label", ContextField::SubjectLabel),
    alias("project_label", "project_id"),
    alias("project", "project_id"),
    alias("subject_ID", "subject_id"),
    FieldMapping {
        key: "URI",
        source: FieldSource::Prefixed {
            prefix: "/data/experiments/",
            key: "ID",
        },
    },
    alias("session_id", "ID"),
    alias("session_label", "label"),
    alias("last_updated", "original"),
    alias("type", "modality"),
];

pub static SCAN_FIELDS: &[FieldMapping] = &[
    path("ID", "ID"),
    path("label", "ID"),
    path("quality", "xnat:quality"),
    path("frames", "xnat:frames"),
    path("note", "xnat:note"),
    path("type", "type"),
    path("series_description", "xnat:series_description"),
    context("project_id", ContextField::ProjectId),
    context("subject_id", ContextField::SubjectId),
    context("subject_label", ContextField::SubjectLabel),
    alias("scan_id", "ID"),
    alias("scan_label", "label"),
    alias("scan_quality", "quality"),
    alias("scan_note", "note"),
    alias("scan_type", "type"),
    alias("scan_frames", "frames"),
    alias("scan_description", "series_description"),
    context("session_id", ContextField::SessionId),
    context("session_label", ContextField::SessionLabel),
    alias("project_label", "project_id"),
];

pub static RESOURCE_FIELDS: &[FieldMapping] = &[
    path("URI", "URI"),
    path("label", "label"),
    path("file_size", "file_size"),
    path("file_count", "file_count"),
    path("format", "format"),
    path("content", "content"),
];

/// Assessor keys that do not depend on the schema. `xsiType` is filled by
/// the assessor itself from its classification.
pub static ASSESSOR_COMMON_FIELDS: &[FieldMapping] = &[
    path("ID", "ID"),
    path("label", "label"),
    alias("assessor_id", "ID"),
    alias("assessor_label", "label"),
    context("project_id", ContextField::ProjectId),
    alias("project_label", "project_id"),
    context("subject_id", ContextField::SubjectId),
    context("subject_label", ContextField::SubjectLabel),
    context("session_id", ContextField::SessionId),
    context("session_label", ContextField::SessionLabel),
];

pub static LEGACY_ASSESSOR_FIELDS: &[FieldMapping] = &[
    path("procstatus", "fs:procstatus"),
    path("qcstatus", "xnat:validation/status"),
    path("version", "fs:procversion"),
    path("jobid", "fs:jobid"),
    path("jobstartdate", "fs:jobstartdate"),
    path("memused", "fs:memused"),
    path("walltimeused", "fs:walltimeused"),
    path("jobnode", "fs:jobnode"),
    FieldMapping {
        key: "proctype",
        source: FieldSource::LabelSuffix {
            base: "FreeSurfer",
            marker: "-x-FS",
        },
    },
];

pub static GENERIC_ASSESSOR_FIELDS: &[FieldMapping] = &[
    path("procstatus", "proc:procstatus"),
    path("proctype", "proc:proctype"),
    path("qcstatus", "xnat:validation/status"),
    path("version", "proc:procversion"),
    path("jobid", "proc:jobid"),
    path("jobstartdate", "proc:jobstartdate"),
    path("memused", "proc:memused"),
    path("walltimeused", "proc:walltimeused"),
    path("jobnode", "proc:jobnode"),
];

/// Fill `record` from `table`, row by row.
pub fn apply_fields<N>(node: &N, table: &[FieldMapping], record: &mut InfoRecord)
where
    N: DocumentNode + ?Sized,
{
    for mapping in table {
        let value = match mapping.source {
            FieldSource::Path(path) => node.get(path).unwrap_or("").to_string(),
            FieldSource::Alias(key) => record.value(key).to_string(),
            FieldSource::Context(field) => field.resolve(node.session()),
            FieldSource::Prefixed { prefix, key } => format!("{prefix}{}", record.value(key)),
            FieldSource::LabelSuffix { base, marker } => {
                let suffix = node
                    .label()
                    .and_then(|label| label.split(marker).nth(1))
                    .unwrap_or("");
                format!("{base}{suffix}")
            }
        };
        record.insert(mapping.key, value);
    }
}
