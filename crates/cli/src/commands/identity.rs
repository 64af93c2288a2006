// Path: crates/cli/src/commands/identity.rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use quill_types::app::AccountId;

#[derive(Parser, Debug)]
pub struct IdentityArgs {
    #[clap(subcommand)]
    pub command: IdentityCommands,
}

#[derive(Subcommand, Debug)]
pub enum IdentityCommands {
    /// Generate a fresh random identity.
    New,
}

pub fn run(args: IdentityArgs) -> Result<()> {
    match args.command {
        IdentityCommands::New => {
            let id = AccountId::new_unique(&mut rand::thread_rng());
            tracing::debug!(target: "cli", event = "identity_generated", %id);
            println!("{}", id);
        }
    }
    Ok(())
}
