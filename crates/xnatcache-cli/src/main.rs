//! xnatcache CLI: the `xnatcache` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    support::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Session { snapshot, json } => commands::session::run(snapshot, json),

        Commands::Scans {
            snapshot,
            types,
            json,
        } => commands::scans::run(snapshot, types, json),

        Commands::Assessors {
            snapshot,
            proctypes,
            json,
        } => commands::assessors::run(snapshot, proctypes, json),

        Commands::Resources { snapshot, json } => commands::resources::run(snapshot, json),

        Commands::Label { label, json } => commands::label::run(label, json),

        Commands::Fetch {
            config,
            project,
            subject,
            session,
            json,
        } => commands::fetch::run(commands::fetch::Args {
            config,
            project,
            subject,
            session,
            json,
        }),
    }
}
