//! Assessor label codec.
//!
//! An assessor label packs its whole address into one string:
//!
//! ```text
//! PROJECT-x-SUBJECT-x-SESSION-x-PROCTYPE           (session-level assessor)
//! PROJECT-x-SUBJECT-x-SESSION-x-SCAN-x-PROCTYPE    (scan-level assessor)
//! ```
//!
//! Any other delimiter count is an invalid label. Invalid labels are values,
//! not errors; only formatting or addressing one is.

use crate::error::LabelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const LABEL_DELIMITER: &str = "-x-";

/// Archive address of a session: the location its XML snapshot is fetched from.
pub fn session_path(project: &str, subject: &str, session: &str) -> String {
    format!("/project/{project}/subject/{subject}/experiment/{session}")
}

/// The populated segments of a valid label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabelParts {
    pub project: String,
    pub subject: String,
    pub session: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan: Option<String>,
    pub proctype: String,
}

impl LabelParts {
    /// Build parts from components, rejecting any component that would not
    /// survive a format and re-parse: one containing the delimiter, or one
    /// ending in `-x` that is followed by another component.
    pub fn new(
        project: impl Into<String>,
        subject: impl Into<String>,
        session: impl Into<String>,
        scan: Option<String>,
        proctype: impl Into<String>,
    ) -> Result<Self, LabelError> {
        let parts = Self {
            project: project.into(),
            subject: subject.into(),
            session: session.into(),
            scan,
            proctype: proctype.into(),
        };
        let mut components = vec![
            ("project", &parts.project),
            ("subject", &parts.subject),
            ("session", &parts.session),
        ];
        if let Some(scan) = &parts.scan {
            components.push(("scan", scan));
        }
        components.push(("proctype", &parts.proctype));

        let last = components.len() - 1;
        if let Some((_, (component, value))) =
            components.into_iter().enumerate().find(|(index, (_, value))| {
                // A trailing `-x` fuses with the next delimiter's `-`.
                value.contains(LABEL_DELIMITER) || (*index < last && value.ends_with("-x"))
            })
        {
            return Err(LabelError::DelimiterInComponent {
                component,
                value: value.clone(),
            });
        }
        Ok(parts)
    }

    pub fn session_path(&self) -> String {
        session_path(&self.project, &self.subject, &self.session)
    }

    /// Address of the scan a scan-level assessor was computed from.
    pub fn scan_path(&self) -> Option<String> {
        self.scan
            .as_ref()
            .map(|scan| format!("{}/scan/{scan}", self.session_path()))
    }

    /// Address of the assessor itself.
    pub fn address_path(&self) -> String {
        format!("{}/assessor/{self}", self.session_path())
    }
}

impl fmt::Display for LabelParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{LABEL_DELIMITER}{}{LABEL_DELIMITER}{}",
            self.project, self.subject, self.session
        )?;
        if let Some(scan) = &self.scan {
            write!(f, "{LABEL_DELIMITER}{scan}")?;
        }
        write!(f, "{LABEL_DELIMITER}{}", self.proctype)
    }
}

/// A parsed assessor label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AssessorLabel {
    Valid(LabelParts),
    /// Wrong delimiter count. Only the raw text is kept.
    Invalid { raw: String },
}

impl AssessorLabel {
    pub fn parse(label: &str) -> Self {
        let segments: Vec<&str> = label.split(LABEL_DELIMITER).collect();
        let parts = match segments.as_slice() {
            [project, subject, session, proctype] => LabelParts {
                project: project.to_string(),
                subject: subject.to_string(),
                session: session.to_string(),
                scan: None,
                proctype: proctype.to_string(),
            },
            [project, subject, session, scan, proctype] => LabelParts {
                project: project.to_string(),
                subject: subject.to_string(),
                session: session.to_string(),
                scan: Some(scan.to_string()),
                proctype: proctype.to_string(),
            },
            _ => {
                return Self::Invalid {
                    raw: label.to_string(),
                };
            }
        };
        Self::Valid(parts)
    }

    /// Build a label from components. A component containing the delimiter
    /// yields an invalid label.
    pub fn from_parts(
        project: &str,
        subject: &str,
        session: &str,
        scan: Option<&str>,
        proctype: &str,
    ) -> Self {
        match LabelParts::new(project, subject, session, scan.map(str::to_string), proctype) {
            Ok(parts) => Self::Valid(parts),
            Err(_) => {
                let mut raw = vec![project, subject, session];
                raw.extend(scan);
                raw.push(proctype);
                Self::Invalid {
                    raw: raw.join(LABEL_DELIMITER),
                }
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn parts(&self) -> Option<&LabelParts> {
        match self {
            Self::Valid(parts) => Some(parts),
            Self::Invalid { .. } => None,
        }
    }

    pub fn into_parts(self) -> Result<LabelParts, LabelError> {
        match self {
            Self::Valid(parts) => Ok(parts),
            Self::Invalid { raw } => Err(invalid(&raw)),
        }
    }

    pub fn require_parts(&self) -> Result<&LabelParts, LabelError> {
        match self {
            Self::Valid(parts) => Ok(parts),
            Self::Invalid { raw } => Err(invalid(raw)),
        }
    }

    /// The original text for invalid labels, the canonical form otherwise.
    pub fn raw(&self) -> String {
        self.to_string()
    }

    pub fn format(&self) -> Result<String, LabelError> {
        self.require_parts().map(LabelParts::to_string)
    }

    pub fn address_path(&self) -> Result<String, LabelError> {
        self.require_parts().map(LabelParts::address_path)
    }

    pub fn session_path(&self) -> Result<String, LabelError> {
        self.require_parts().map(LabelParts::session_path)
    }
}

impl FromStr for AssessorLabel {
    type Err = LabelError;

    /// Strict parse: invalid labels are rejected instead of carried.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = Self::parse(s);
        label.require_parts()?;
        Ok(label)
    }
}

impl fmt::Display for AssessorLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid(parts) => fmt::Display::fmt(parts, f),
            Self::Invalid { raw } => f.write_str(raw),
        }
    }
}

fn invalid(raw: &str) -> LabelError {
    LabelError::Invalid {
        label: raw.to_string(),
        delimiters: raw.matches(LABEL_DELIMITER).count(),
    }
}
