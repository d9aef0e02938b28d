//! Owned, immutable XML element tree.
//!
//! A session snapshot is parsed once with `roxmltree` and converted into this
//! tree so the session can own its document without borrowing the source
//! text. Only what field lookups need is kept: names, attributes, the leading
//! text of each element, and element children in document order.

use crate::error::DocumentError;
use crate::namespace::{ExpandedName, NamespaceTable, split_steps};

/// One attribute with its namespace already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    namespace: Option<String>,
    name: String,
    value: String,
}

impl Attribute {
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    namespace: Option<String>,
    name: String,
    attributes: Vec<Attribute>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    /// Parse a document and return its root element.
    pub fn parse(xml: &str) -> Result<Self, DocumentError> {
        let doc = roxmltree::Document::parse(xml).map_err(|e| DocumentError::Malformed {
            line: e.pos().row,
            column: e.pos().col,
            message: e.to_string(),
        })?;
        Ok(Self::from_node(doc.root_element()))
    }

    fn from_node(node: roxmltree::Node<'_, '_>) -> Self {
        let tag = node.tag_name();
        Self {
            namespace: tag.namespace().map(str::to_string),
            name: tag.name().to_string(),
            attributes: node
                .attributes()
                .map(|attr| Attribute {
                    namespace: attr.namespace().map(str::to_string),
                    name: attr.name().to_string(),
                    value: attr.value().to_string(),
                })
                .collect(),
            text: node.text().map(str::to_string),
            children: node
                .children()
                .filter(|child| child.is_element())
                .map(Self::from_node)
                .collect(),
        }
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text preceding the first child element, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn attribute(&self, name: ExpandedName<'_>) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.namespace() == name.namespace && attr.name == name.local)
            .map(|attr| attr.value.as_str())
    }

    pub fn matches(&self, name: ExpandedName<'_>) -> bool {
        self.namespace() == name.namespace && self.name == name.local
    }

    /// First element reached by walking `path` step by step from this
    /// element's children, in document order.
    pub fn find(&self, path: &str, namespaces: &NamespaceTable) -> Option<&Element> {
        self.find_all(path, namespaces).into_iter().next()
    }

    /// Every element reached by walking `path`, in document order.
    ///
    /// A `*` step matches any element. A step with an unknown prefix matches
    /// nothing, so the whole walk comes back empty.
    pub fn find_all(&self, path: &str, namespaces: &NamespaceTable) -> Vec<&Element> {
        let mut current: Vec<&Element> = vec![self];
        for step in split_steps(path) {
            let matcher = if step == "*" {
                None
            } else {
                match namespaces.expand(step) {
                    Some(name) => Some(name),
                    None => return Vec::new(),
                }
            };
            current = current
                .into_iter()
                .flat_map(|element| element.children.iter())
                .filter(|child| matcher.is_none_or(|name| child.matches(name)))
                .collect();
            if current.is_empty() {
                break;
            }
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::{NAMESPACES, XNAT_NS, XSI_NS};

    const DOC: &str = r#"<xnat:MRSession xmlns:xnat="http://nrg.wustl.edu/xnat"
        xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" ID="E1" label="SE1">
      <xnat:note>first visit</xnat:note>
      <!-- ignored -->
      <xnat:scans>
        <xnat:scan ID="1" xsi:type="xnat:mrScanData"/>
        <xnat:scan ID="2" xsi:type="xnat:mrScanData"/>
      </xnat:scans>
      <xnat:empty/>
    </xnat:MRSession>"#;

    #[test]
    fn parse_keeps_names_attributes_and_text() {
        let root = Element::parse(DOC).expect("fixture should parse");
        assert_eq!(root.name(), "MRSession");
        assert_eq!(root.namespace(), Some(XNAT_NS));
        assert_eq!(
            root.attribute(NAMESPACES.expand("label").unwrap()),
            Some("SE1")
        );
        assert_eq!(root.children().len(), 3);
        let note = root.find("xnat:note", &NAMESPACES).unwrap();
        assert_eq!(note.text(), Some("first visit"));
        assert_eq!(root.find("xnat:empty", &NAMESPACES).unwrap().text(), None);
    }

    #[test]
    fn find_all_walks_paths_in_document_order() {
        let root = Element::parse(DOC).unwrap();
        let ids: Vec<&str> = root
            .find_all("xnat:scans/xnat:scan", &NAMESPACES)
            .into_iter()
            .filter_map(|scan| scan.attribute(NAMESPACES.expand("ID").unwrap()))
            .collect();
        assert_eq!(ids, vec!["1", "2"]);

        let wildcard = root.find_all("xnat:scans/*", &NAMESPACES);
        assert_eq!(wildcard.len(), 2);
        assert_eq!(
            wildcard[0].attribute(NAMESPACES.expand("xsi:type").unwrap()),
            Some("xnat:mrScanData")
        );
        assert!(wildcard[0].attributes().iter().any(|a| a.namespace() == Some(XSI_NS)));
    }

    #[test]
    fn unknown_prefix_or_missing_step_finds_nothing() {
        let root = Element::parse(DOC).unwrap();
        assert!(root.find_all("bogus:scans/xnat:scan", &NAMESPACES).is_empty());
        assert!(root.find("xnat:assessors/*", &NAMESPACES).is_none());
        assert!(root.find("note", &NAMESPACES).is_none());
    }

    #[test]
    fn malformed_document_reports_position() {
        let err = Element::parse("<xnat:MRSession><unclosed></xnat:MRSession>")
            .expect_err("truncated markup must fail");
        match err {
            DocumentError::Malformed { line, .. } => assert_eq!(line, 1),
        }
    }
}
