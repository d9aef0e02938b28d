//! Client handle: configuration, a document source, and scratch storage.
//!
//! ```text
//! open(config, source)  → creates a private scratch directory
//! load_session(...)     → scratch snapshot if present, else source.fetch + parse + save
//! close()               → removes the scratch directory
//! ```
//!
//! Domain nodes never hold the client; callers pass it by reference to
//! whatever needs to fetch a document.

use crate::config::ClientConfig;
use crate::source::{DocumentSource, SourceError, snapshot_relative_path};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use xnatcache_kernel::{
    AssessorLabel, CachedSession, DocumentError, Element, LabelError, session_path,
};

#[derive(Debug)]
pub struct ArchiveClient<S> {
    config: ClientConfig,
    source: S,
    scratch: Option<PathBuf>,
}

impl<S: DocumentSource> ArchiveClient<S> {
    /// Open a client. Scratch storage is a new directory inside
    /// `config.scratch_dir` (or the system temp dir), owned by this client.
    pub fn open(config: ClientConfig, source: S) -> Result<Self, ClientError> {
        let base = config
            .scratch_dir
            .clone()
            .unwrap_or_else(std::env::temp_dir);
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let scratch = base.join(format!("xnatcache-{}-{unique}", std::process::id()));
        fs::create_dir_all(&scratch).map_err(|source| ClientError::Scratch {
            path: scratch.display().to_string(),
            source,
        })?;
        tracing::debug!(
            host = %config.host,
            user = %config.user,
            scratch = %scratch.display(),
            "opened archive client"
        );

        Ok(Self {
            config,
            source,
            scratch: Some(scratch),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn scratch_dir(&self) -> &Path {
        // Only `close` and `drop` clear the slot, and both consume the client.
        self.scratch.as_deref().unwrap_or(Path::new(""))
    }

    /// Fetch (or reuse) the snapshot of one session and parse it.
    pub fn load_session(
        &self,
        project: &str,
        subject: &str,
        session: &str,
    ) -> Result<CachedSession, ClientError> {
        let address = session_path(project, subject, session);
        self.load_with(&address, |xml| CachedSession::parse(xml, project, subject))
    }

    /// Load the session an assessor label points into.
    pub fn load_for_label(&self, label: &AssessorLabel) -> Result<CachedSession, ClientError> {
        let parts = label.require_parts()?;
        self.load_session(&parts.project, &parts.subject, &parts.session)
    }

    /// XML text at `address`, served from scratch storage when an earlier
    /// call already saved it. Text that is not well-formed XML is rejected.
    pub fn snapshot(&self, address: &str) -> Result<String, ClientError> {
        self.load_with(address, |xml| Element::parse(xml).map(|_| xml.to_string()))
    }

    /// Build a value from the document at `address`. Only documents `build`
    /// accepts are saved to scratch storage.
    fn load_with<T>(
        &self,
        address: &str,
        build: impl FnOnce(&str) -> Result<T, DocumentError>,
    ) -> Result<T, ClientError> {
        let path = self.scratch_dir().join(snapshot_relative_path(address)?);
        if path.is_file() {
            tracing::debug!(%address, "snapshot cache hit");
            let xml = fs::read_to_string(&path).map_err(|source| ClientError::Scratch {
                path: path.display().to_string(),
                source,
            })?;
            return Ok(build(&xml)?);
        }

        tracing::debug!(%address, "fetching snapshot");
        let xml = self.source.fetch(address)?;
        let value = build(&xml)?;
        let write = || -> std::io::Result<()> {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, &xml)
        };
        write().map_err(|source| ClientError::Scratch {
            path: path.display().to_string(),
            source,
        })?;
        Ok(value)
    }

    /// Close the client and remove its scratch storage.
    pub fn close(mut self) -> Result<(), ClientError> {
        match self.scratch.take() {
            Some(scratch) => remove_scratch(&scratch),
            None => Ok(()),
        }
    }
}

impl<S> Drop for ArchiveClient<S> {
    fn drop(&mut self) {
        if let Some(scratch) = self.scratch.take()
            && let Err(err) = remove_scratch(&scratch)
        {
            tracing::warn!(error = %err, "failed to clean up scratch storage");
        }
    }
}

fn remove_scratch(scratch: &Path) -> Result<(), ClientError> {
    match fs::remove_dir_all(scratch) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(ClientError::Scratch {
            path: scratch.display().to_string(),
            source,
        }),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Label(#[from] LabelError),

    #[error("scratch storage error at {path}: {source}")]
    Scratch {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
