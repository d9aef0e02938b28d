//! The capability set shared by every node in the hierarchy.

use crate::element::Element;
use crate::namespace::{ExpandedName, NAMESPACES};
use crate::record::InfoRecord;
use crate::resolve::resolve;
use crate::session::CachedSession;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Session,
    Scan,
    Assessor,
    Resource,
}

impl NodeKind {
    /// Attribute holding the node's human-readable identifier.
    pub fn label_attribute(self) -> &'static str {
        match self {
            Self::Scan => "ID",
            Self::Session | Self::Assessor | Self::Resource => "label",
        }
    }
}

/// A view over one element of a cached session document.
///
/// Nodes are thin wrappers: `get` is the shared resolver run against the
/// node's own element, and `session` walks the back-reference to the root
/// for contextual fields.
pub trait DocumentNode {
    fn kind(&self) -> NodeKind;

    fn element(&self) -> &Element;

    /// The session this node belongs to (itself for the root).
    fn session(&self) -> &CachedSession;

    fn label(&self) -> Option<&str> {
        self.element().attribute(ExpandedName {
            namespace: None,
            local: self.kind().label_attribute(),
        })
    }

    /// Resolve a field. Never fails; `None` means absent.
    fn get(&self, path: &str) -> Option<&str> {
        resolve(self.element(), path, &NAMESPACES)
    }

    fn info(&self) -> InfoRecord;
}
