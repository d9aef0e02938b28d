use crate::element::Element;
use crate::namespace::NAMESPACES;
use crate::node::{DocumentNode, NodeKind};
use crate::record::{Diagnostic, DiagnosticKind, InfoRecord};
use crate::resolve::resolve;
use crate::resource::{CachedResource, ResourceOwner, ResourceRole, catalog_files};
use crate::schema::{ASSESSOR_COMMON_FIELDS, AssessorSchema, apply_fields};
use crate::session::CachedSession;

/// A derived analysis result attached to a session.
///
/// The schema is classified once, from `xsi:type`, when the view is created.
#[derive(Debug, Clone)]
pub struct CachedAssessor<'s> {
    element: &'s Element,
    session: &'s CachedSession,
    schema: AssessorSchema,
}

impl<'s> CachedAssessor<'s> {
    pub(crate) fn new(element: &'s Element, session: &'s CachedSession) -> Self {
        let xsi_type = resolve(element, "xsi:type", &NAMESPACES).unwrap_or("");
        Self {
            element,
            session,
            schema: AssessorSchema::classify(xsi_type),
        }
    }

    pub fn parent(&self) -> &'s CachedSession {
        self.session
    }

    pub fn schema(&self) -> &AssessorSchema {
        &self.schema
    }

    /// Catalogs the assessor consumed.
    pub fn in_resources(&self) -> Vec<CachedResource<'s>> {
        self.resources_under("xnat:in/xnat:file", ResourceRole::AssessorInput)
    }

    /// Catalogs the assessor produced.
    pub fn out_resources(&self) -> Vec<CachedResource<'s>> {
        self.resources_under("xnat:out/xnat:file", ResourceRole::AssessorOutput)
    }

    fn resources_under(&self, path: &str, role: ResourceRole) -> Vec<CachedResource<'s>> {
        catalog_files(self.element, path)
            .into_iter()
            .map(|element| {
                CachedResource::new(element, ResourceOwner::Assessor(self.clone()), role)
            })
            .collect()
    }
}

impl DocumentNode for CachedAssessor<'_> {
    fn kind(&self) -> NodeKind {
        NodeKind::Assessor
    }

    fn element(&self) -> &Element {
        self.element
    }

    fn session(&self) -> &CachedSession {
        self.session
    }

    fn info(&self) -> InfoRecord {
        let mut record = InfoRecord::new();
        apply_fields(self, ASSESSOR_COMMON_FIELDS, &mut record);
        record.insert("xsiType", self.schema.xsi_type());

        match self.schema.fields() {
            Some(table) => apply_fields(self, table, &mut record),
            None => {
                let label = self.label().unwrap_or("").to_string();
                tracing::warn!(
                    assessor = %label,
                    xsi_type = self.schema.xsi_type(),
                    "unknown xsiType for assessor"
                );
                record.push_diagnostic(Diagnostic {
                    kind: DiagnosticKind::UnknownAssessorSchema,
                    message: format!("unknown xsiType for assessor: {}", self.schema.xsi_type()),
                    subject: label,
                });
            }
        }
        record
    }
}
