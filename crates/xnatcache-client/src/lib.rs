//! # xnatcache client
//!
//! The seam between the cached document model and whatever fetches session
//! snapshots from an archive. This crate does no network I/O itself: a
//! transport implements [`DocumentSource`], and [`ArchiveClient`] adds
//! explicit configuration and scratch-storage lifecycle around it.

pub mod client;
pub mod config;
pub mod source;

pub use client::{ArchiveClient, ClientError};
pub use config::{ClientConfig, ConfigError};
pub use source::{DirectorySource, DocumentSource, MemorySource, SourceError, snapshot_relative_path};
