use crate::assessor::CachedAssessor;
use crate::element::Element;
use crate::namespace::NAMESPACES;
use crate::node::{DocumentNode, NodeKind};
use crate::record::InfoRecord;
use crate::resolve::resolve;
use crate::scan::CachedScan;
use crate::schema::{RESOURCE_FIELDS, apply_fields};
use crate::session::CachedSession;
use serde::Serialize;

/// `xsi:type` marking a file element as a resource catalog.
pub const RESOURCE_CATALOG_TYPE: &str = "xnat:resourceCatalog";

/// The scan or assessor a resource hangs off.
#[derive(Debug, Clone)]
pub enum ResourceOwner<'s> {
    Scan(CachedScan<'s>),
    Assessor(CachedAssessor<'s>),
}

impl<'s> ResourceOwner<'s> {
    pub fn session(&self) -> &'s CachedSession {
        match self {
            Self::Scan(scan) => scan.parent(),
            Self::Assessor(assessor) => assessor.parent(),
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Scan(scan) => scan.label(),
            Self::Assessor(assessor) => assessor.label(),
        }
    }
}

/// Where in its owner the resource was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceRole {
    Scan,
    AssessorInput,
    AssessorOutput,
}

/// A named file catalog. Leaf of the hierarchy.
#[derive(Debug, Clone)]
pub struct CachedResource<'s> {
    element: &'s Element,
    owner: ResourceOwner<'s>,
    role: ResourceRole,
}

impl<'s> CachedResource<'s> {
    pub(crate) fn new(element: &'s Element, owner: ResourceOwner<'s>, role: ResourceRole) -> Self {
        Self {
            element,
            owner,
            role,
        }
    }

    pub fn parent(&self) -> &ResourceOwner<'s> {
        &self.owner
    }

    pub fn role(&self) -> ResourceRole {
        self.role
    }
}

impl DocumentNode for CachedResource<'_> {
    fn kind(&self) -> NodeKind {
        NodeKind::Resource
    }

    fn element(&self) -> &Element {
        self.element
    }

    fn session(&self) -> &CachedSession {
        self.owner.session()
    }

    fn info(&self) -> InfoRecord {
        let mut record = InfoRecord::new();
        apply_fields(self, RESOURCE_FIELDS, &mut record);
        record
    }
}

/// File elements under `path` that are resource catalogs.
pub(crate) fn catalog_files<'s>(element: &'s Element, path: &str) -> Vec<&'s Element> {
    element
        .find_all(path, &NAMESPACES)
        .into_iter()
        .filter(|file| {
            resolve(file, "xsi:type", &NAMESPACES)
                .is_some_and(|xsi_type| xsi_type.eq_ignore_ascii_case(RESOURCE_CATALOG_TYPE))
        })
        .collect()
}
