//! # xnatcache kernel
//!
//! A read-only document model over one XNAT session snapshot. The snapshot
//! is downloaded once (by a collaborator outside this crate), parsed here,
//! and then queried without touching the network again.
//!
//! ## Architecture
//!
//! ```text
//! CachedSession          ← owns the parsed element tree + project/subject context
//!     │
//! ├── CachedScan<'s>     ← borrowed views; back-reference to the session
//! │     └── CachedResource<'s>
//! └── CachedAssessor<'s> ← schema classified once from xsi:type
//!       └── CachedResource<'s> (in / out)
//!
//! resolve()              ← attribute → child text → child attribute
//! schema                 ← field tables → InfoRecord
//! AssessorLabel          ← PROJECT-x-SUBJECT-x-SESSION[-x-SCAN]-x-PROCTYPE
//! ```

pub mod assessor;
pub mod element;
pub mod error;
pub mod label;
pub mod namespace;
pub mod node;
pub mod record;
pub mod resolve;
pub mod resource;
pub mod scan;
pub mod schema;
pub mod select;
pub mod session;

pub use assessor::CachedAssessor;
pub use element::{Attribute, Element};
pub use error::{DocumentError, LabelError};
pub use label::{AssessorLabel, LABEL_DELIMITER, LabelParts, session_path};
pub use namespace::{NAMESPACES, NamespaceTable};
pub use node::{DocumentNode, NodeKind};
pub use record::{Diagnostic, DiagnosticKind, InfoRecord};
pub use resolve::resolve;
pub use resource::{CachedResource, RESOURCE_CATALOG_TYPE, ResourceOwner, ResourceRole};
pub use scan::CachedScan;
pub use schema::{AssessorSchema, GENERIC_XSI_TYPE, LEGACY_XSI_TYPE};
pub use session::CachedSession;
