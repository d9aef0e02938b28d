//! Root of the cached hierarchy: one parsed session snapshot.

use crate::assessor::CachedAssessor;
use crate::element::Element;
use crate::error::DocumentError;
use crate::namespace::NAMESPACES;
use crate::node::{DocumentNode, NodeKind};
use crate::record::InfoRecord;
use crate::scan::CachedScan;
use crate::schema::{SESSION_FIELDS, apply_fields};

/// A session document parsed once and queried many times.
///
/// The session owns the element tree. Scans, assessors and resources are
/// borrowed views into it, so none of them can outlive the session.
/// `project` and `subject` are supplied by the caller because the document
/// alone does not carry the subject label.
#[derive(Debug, Clone)]
pub struct CachedSession {
    root: Element,
    project: String,
    subject: String,
}

impl CachedSession {
    pub fn parse(
        xml: &str,
        project: impl Into<String>,
        subject: impl Into<String>,
    ) -> Result<Self, DocumentError> {
        let root = Element::parse(xml)?;
        let session = Self::from_element(root, project, subject);
        tracing::debug!(
            project = %session.project,
            subject = %session.subject,
            label = session.label().unwrap_or(""),
            scans = session.scans().len(),
            assessors = session.assessors().len(),
            "parsed session snapshot"
        );
        Ok(session)
    }

    pub fn from_element(
        root: Element,
        project: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            root,
            project: project.into(),
            subject: subject.into(),
        }
    }

    /// Project as supplied by the caller.
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Subject label as supplied by the caller.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Scans in document order.
    pub fn scans(&self) -> Vec<CachedScan<'_>> {
        self.root
            .find_all("xnat:scans/*", &NAMESPACES)
            .into_iter()
            .map(|element| CachedScan::new(element, self))
            .collect()
    }

    /// Assessors in document order.
    pub fn assessors(&self) -> Vec<CachedAssessor<'_>> {
        self.root
            .find_all("xnat:assessors/*", &NAMESPACES)
            .into_iter()
            .map(|element| CachedAssessor::new(element, self))
            .collect()
    }
}

impl DocumentNode for CachedSession {
    fn kind(&self) -> NodeKind {
        NodeKind::Session
    }

    fn element(&self) -> &Element {
        &self.root
    }

    fn session(&self) -> &CachedSession {
        self
    }

    fn info(&self) -> InfoRecord {
        let mut record = InfoRecord::new();
        apply_fields(self, SESSION_FIELDS, &mut record);
        record
    }
}
