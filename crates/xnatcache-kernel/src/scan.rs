use crate::element::Element;
use crate::node::{DocumentNode, NodeKind};
use crate::record::InfoRecord;
use crate::resource::{CachedResource, ResourceOwner, ResourceRole, catalog_files};
use crate::schema::{SCAN_FIELDS, apply_fields};
use crate::session::CachedSession;

/// One acquisition inside a session.
#[derive(Debug, Clone, Copy)]
pub struct CachedScan<'s> {
    element: &'s Element,
    session: &'s CachedSession,
}

impl<'s> CachedScan<'s> {
    pub(crate) fn new(element: &'s Element, session: &'s CachedSession) -> Self {
        Self { element, session }
    }

    pub fn parent(&self) -> &'s CachedSession {
        self.session
    }

    /// Resource catalogs attached to the scan, in document order.
    pub fn resources(&self) -> Vec<CachedResource<'s>> {
        catalog_files(self.element, "xnat:file")
            .into_iter()
            .map(|element| {
                CachedResource::new(element, ResourceOwner::Scan(*self), ResourceRole::Scan)
            })
            .collect()
    }
}

impl DocumentNode for CachedScan<'_> {
    fn kind(&self) -> NodeKind {
        NodeKind::Scan
    }

    fn element(&self) -> &Element {
        self.element
    }

    fn session(&self) -> &CachedSession {
        self.session
    }

    fn info(&self) -> InfoRecord {
        let mut record = InfoRecord::new();
        apply_fields(self, SCAN_FIELDS, &mut record);
        record
    }
}
