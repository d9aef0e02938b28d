use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "xnatcache",
    about = "xnatcache: inspect cached XNAT session snapshots and assessor labels",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// A session snapshot on disk plus the context the document does not carry.
#[derive(Args)]
pub struct SnapshotArgs {
    /// Path to the session XML snapshot
    pub xml: String,

    /// Project ID (defaults to the session's `project` attribute)
    #[arg(long, default_value = "")]
    pub project: String,

    /// Subject label
    #[arg(long, default_value = "")]
    pub subject: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the normalized session record
    Session {
        #[command(flatten)]
        snapshot: SnapshotArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List scans, optionally filtered by scan type
    Scans {
        #[command(flatten)]
        snapshot: SnapshotArgs,

        /// Scan type to keep (repeatable)
        #[arg(long = "type")]
        types: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List assessors, optionally filtered by proctype
    Assessors {
        #[command(flatten)]
        snapshot: SnapshotArgs,

        /// Proctype to keep (repeatable)
        #[arg(long = "proctype")]
        proctypes: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every resource catalog in the session
    Resources {
        #[command(flatten)]
        snapshot: SnapshotArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse an assessor label and show its archive addresses
    Label {
        /// Assessor label, e.g. PROJ-x-SUBJ-x-SESS-x-SCAN-x-proctype
        label: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Load a session through a configured client
    Fetch {
        /// Path to the client config TOML
        #[arg(long)]
        config: String,

        /// Project ID
        #[arg(long)]
        project: String,

        /// Subject label
        #[arg(long)]
        subject: String,

        /// Session label
        #[arg(long)]
        session: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
