//! Where session documents come from.
//!
//! The network layer that talks to a live archive is a collaborator outside
//! this workspace; it plugs in by implementing [`DocumentSource`]. Two
//! sources ship here: an in-memory map and a directory of saved snapshots.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Hands out the XML text stored at an archive address such as
/// `/project/P1/subject/S1/experiment/SE1`.
pub trait DocumentSource {
    fn fetch(&self, address: &str) -> Result<String, SourceError>;
}

impl<S: DocumentSource + ?Sized> DocumentSource for &S {
    fn fetch(&self, address: &str) -> Result<String, SourceError> {
        (**self).fetch(address)
    }
}

impl<S: DocumentSource + ?Sized> DocumentSource for Box<S> {
    fn fetch(&self, address: &str) -> Result<String, SourceError> {
        (**self).fetch(address)
    }
}

/// Documents held in memory, keyed by address.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: BTreeMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, address: impl Into<String>, xml: impl Into<String>) {
        self.documents.insert(address.into(), xml.into());
    }

    pub fn with_document(mut self, address: impl Into<String>, xml: impl Into<String>) -> Self {
        self.insert(address, xml);
        self
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentSource for MemorySource {
    fn fetch(&self, address: &str) -> Result<String, SourceError> {
        self.documents
            .get(address)
            .cloned()
            .ok_or_else(|| SourceError::NotFound {
                address: address.to_string(),
            })
    }
}

/// Saved snapshots laid out by address:
/// `/project/P1/subject/S1/experiment/SE1` lives at
/// `<root>/project/P1/subject/S1/experiment/SE1.xml`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, address: &str) -> Result<PathBuf, SourceError> {
        Ok(self.root.join(snapshot_relative_path(address)?))
    }
}

impl DocumentSource for DirectorySource {
    fn fetch(&self, address: &str) -> Result<String, SourceError> {
        let path = self.path_for(address)?;
        if !path.is_file() {
            return Err(SourceError::NotFound {
                address: address.to_string(),
            });
        }
        fs::read_to_string(&path).map_err(|source| SourceError::Read {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Relative file path a snapshot for `address` is stored under.
///
/// Only plain segments are accepted; `..`, `.` and empty segments would let
/// an address escape or alias the snapshot root.
pub fn snapshot_relative_path(address: &str) -> Result<PathBuf, SourceError> {
    let trimmed = address.trim_matches('/');
    let invalid = || SourceError::InvalidAddress(address.to_string());
    if trimmed.is_empty() {
        return Err(invalid());
    }
    let mut path = PathBuf::new();
    for segment in trimmed.split('/') {
        let mut components = Path::new(segment).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => path.push(segment),
            _ => return Err(invalid()),
        }
    }
    let mut file_name = path.into_os_string();
    file_name.push(".xml");
    Ok(PathBuf::from(file_name))
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("no document at {address}")]
    NotFound { address: String },

    #[error("failed to read snapshot {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid archive address `{0}`")]
    InvalidAddress(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_source_serves_inserted_documents() {
        let source = MemorySource::new().with_document("/project/P/subject/S/experiment/E", "<x/>");
        assert_eq!(
            source.fetch("/project/P/subject/S/experiment/E").unwrap(),
            "<x/>"
        );
        assert!(matches!(
            source.fetch("/project/P/subject/S/experiment/F"),
            Err(SourceError::NotFound { .. })
        ));
    }

    #[test]
    fn snapshot_paths_mirror_addresses() {
        assert_eq!(
            snapshot_relative_path("/project/P1/subject/S1/experiment/SE1.v2").unwrap(),
            PathBuf::from("project/P1/subject/S1/experiment/SE1.v2.xml")
        );
    }

    #[test]
    fn traversal_and_empty_segments_are_rejected() {
        for address in [
            "",
            "/",
            "/project/../../etc/passwd",
            "/project/./P1",
            "/project//P1",
        ] {
            assert!(
                matches!(
                    snapshot_relative_path(address),
                    Err(SourceError::InvalidAddress(_))
                ),
                "`{address}` should be rejected"
            );
        }
    }
}
