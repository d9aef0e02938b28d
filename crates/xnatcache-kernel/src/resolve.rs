//! Three-tier field resolution shared by every node kind.
//!
//! A field named by a path may live in three places in an XNAT document:
//!
//! ```text
//! <xnat:MRScan ID="1">                    ← 1. attribute on the element   ("ID")
//!   <xnat:quality>usable</xnat:quality>   ← 2. text of a child element    ("xnat:quality")
//!   <xnat:validation status="passed"/>    ← 3. attribute on a named child ("xnat:validation/status")
//! </xnat:MRScan>
//! ```
//!
//! Tiers are tried in that order and the first hit wins, so an attribute
//! shadows a child element with the same name. A miss on all three tiers is
//! `None`, never an error.

use crate::element::Element;
use crate::namespace::{NamespaceTable, split_last_step, split_steps};

/// Resolve `path` against `element`.
///
/// `Some("")` means the field exists but is empty, which is distinct from
/// `None` (the field is absent).
pub fn resolve<'a>(element: &'a Element, path: &str, namespaces: &NamespaceTable) -> Option<&'a str> {
    if split_steps(path).len() == 1
        && let Some(name) = namespaces.expand(path)
        && let Some(value) = element.attribute(name)
    {
        return Some(value);
    }

    if let Some(child) = element.find(path, namespaces) {
        return Some(child.text().unwrap_or(""));
    }

    let (tag, attr) = split_last_step(path)?;
    let target = element.find(tag, namespaces)?;
    target.attribute(namespaces.expand(attr)?)
}
