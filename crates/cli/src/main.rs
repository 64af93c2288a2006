// Path: crates/cli/src/main.rs
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # Quill CLI
//!
//! Creates and queries posts on a local ledger persisted as a JSON file.
//! The CLI signs on behalf of whichever identities it is given.

use anyhow::Result;
use clap::{Parser, Subcommand};
use quill_telemetry::LogFormat;
use std::path::PathBuf;

mod commands;
mod util;

use commands::*;

#[derive(Parser, Debug)]
#[clap(
    name = "quill",
    version,
    about = "Create and query Quill posts on a local ledger."
)]
struct Cli {
    /// Ledger snapshot file. Created on first write.
    #[clap(long, global = true, default_value = ".quill/ledger.json")]
    state: PathBuf,

    /// Optional TOML configuration (program id, rent parameters).
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// Log line format: json or pretty.
    #[clap(long, global = true, default_value = "json")]
    log_format: LogFormat,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage identities.
    Identity(identity::IdentityArgs),

    /// Credit lamports to an identity.
    Airdrop(airdrop::AirdropArgs),

    /// Create a post.
    Post(post::PostArgs),

    /// Show one post.
    Show(show::ShowArgs),

    /// List posts, optionally filtered.
    List(list::ListArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    quill_telemetry::init_tracing_with(cli.log_format, "warn")?;

    let opts = util::GlobalOpts {
        state: cli.state,
        config: cli.config,
    };

    match cli.command {
        Commands::Identity(args) => identity::run(args),
        Commands::Airdrop(args) => airdrop::run(&opts, args).await,
        Commands::Post(args) => post::run(&opts, args).await,
        Commands::Show(args) => show::run(&opts, args),
        Commands::List(args) => list::run(&opts, args),
    }
}
