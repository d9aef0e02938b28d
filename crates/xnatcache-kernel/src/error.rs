//! Error types for the cached document model.
//!
//! Field lookups never fail: a missing field is `None`. Only two things can
//! fail a caller's operation: an unparseable document and using an invalid
//! assessor label where a valid one is required.

/// The session snapshot could not be turned into a document tree.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("malformed session document at {line}:{column}: {message}")]
    Malformed {
        line: u32,
        column: u32,
        message: String,
    },
}

/// Misuse of the assessor label codec.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LabelError {
    /// The label does not split into 4 or 5 segments.
    #[error("invalid assessor label `{label}`: expected 3 or 4 `-x-` delimiters, found {delimiters}")]
    Invalid { label: String, delimiters: usize },

    /// A component would corrupt the label when joined.
    #[error("assessor label component {component} `{value}` would not survive joining with `-x-`")]
    DelimiterInComponent {
        component: &'static str,
        value: String,
    },
}
