use xnatcache_client::{ArchiveClient, ClientConfig, DirectorySource};

pub struct Args {
    pub config: String,
    pub project: String,
    pub subject: String,
    pub session: String,
    pub json: bool,
}

pub fn run(args: Args) {
    let config = ClientConfig::load(&args.config).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });
    // No network transport ships with the binary; snapshots come from disk.
    let Some(snapshot_dir) = config.snapshot_dir.clone() else {
        eprintln!(
            "error: {} has no snapshot_dir; fetch reads saved session snapshots",
            args.config
        );
        std::process::exit(1);
    };

    let client = ArchiveClient::open(config, DirectorySource::new(snapshot_dir))
        .unwrap_or_else(|e| {
            eprintln!("error: {e}");
            std::process::exit(1);
        });
    let session = match client.load_session(&args.project, &args.subject, &args.session) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("error: {e}");
            // `exit` skips destructors.
            drop(client);
            std::process::exit(1);
        }
    };

    if let Err(e) = client.close() {
        tracing::warn!(error = %e, "failed to close archive client");
    }
    super::session::render(&session, "fetch", args.json);
}
