// Path: crates/cli/src/commands/show.rs

use crate::util::{parse_id, post_json, print_post, GlobalOpts, Session};
use anyhow::Result;
use clap::Parser;
use quill_types::app::AccountId;

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Base58 address of the post slot.
    pub address: String,
    /// Print as JSON.
    #[clap(long)]
    pub json: bool,
}

pub fn run(opts: &GlobalOpts, args: ShowArgs) -> Result<()> {
    let address = parse_id(&args.address)?;
    let session = Session::open(opts)?;
    // Reads never sign, so any wallet will do.
    let record = session.workspace(AccountId::default()).fetch_post(&address)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&post_json(&record))?);
    } else {
        print_post(&record);
    }
    Ok(())
}
