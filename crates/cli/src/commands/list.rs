// Path: crates/cli/src/commands/list.rs

use crate::util::{parse_id, post_json, print_post, GlobalOpts, Session};
use anyhow::{bail, Context, Result};
use clap::Parser;
use quill_client::filters::{author_filter, topic_filter};
use quill_types::app::{AccountFilter, AccountId};

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only posts by this base58 identity.
    #[clap(long)]
    pub author: Option<String>,
    /// Only posts whose topic starts with this text.
    #[clap(long)]
    pub topic: Option<String>,
    /// Raw filter: byte offset into the post slot. Requires --bytes.
    #[clap(long, requires = "bytes")]
    pub offset: Option<usize>,
    /// Raw filter: hex-encoded bytes expected at --offset.
    #[clap(long, requires = "offset")]
    pub bytes: Option<String>,
    /// Print as JSON.
    #[clap(long)]
    pub json: bool,
}

pub fn run(opts: &GlobalOpts, args: ListArgs) -> Result<()> {
    let mut filters: Vec<AccountFilter> = Vec::new();
    if let Some(author) = args.author.as_deref() {
        filters.push(author_filter(&parse_id(author)?));
    }
    if let Some(topic) = args.topic.as_deref() {
        filters.push(topic_filter(topic));
    }
    match (args.offset, args.bytes.as_deref()) {
        (Some(offset), Some(hex_bytes)) => {
            let bytes = hex::decode(hex_bytes).context("--bytes must be hex")?;
            filters.push(AccountFilter::memcmp(offset, bytes));
        }
        (None, None) => {}
        _ => bail!("--offset and --bytes must be given together"),
    }

    let session = Session::open(opts)?;
    let listing = session
        .workspace(AccountId::default())
        .list_matching(filters)?;

    for (address, error) in &listing.corrupt {
        eprintln!("skipped corrupt post {}: {}", address, error);
    }
    if args.json {
        let posts: Vec<_> = listing.posts.iter().map(post_json).collect();
        println!("{}", serde_json::to_string_pretty(&posts)?);
    } else {
        for record in &listing.posts {
            print_post(record);
        }
        println!("{} post(s)", listing.posts.len());
    }
    Ok(())
}
