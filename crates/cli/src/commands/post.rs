// Path: crates/cli/src/commands/post.rs

use crate::util::{parse_id, post_json, print_post, GlobalOpts, Session};
use anyhow::Result;
use clap::Parser;
use quill_types::app::AccountId;

#[derive(Parser, Debug)]
pub struct PostArgs {
    /// Base58 identity of the author.
    #[clap(long)]
    pub author: String,
    /// Base58 identity paying for the slot. Defaults to the author.
    #[clap(long)]
    pub payer: Option<String>,
    /// Address of the new slot. Defaults to a fresh random identity.
    #[clap(long)]
    pub address: Option<String>,
    /// Optional topic, at most 50 characters.
    #[clap(long, default_value = "")]
    pub topic: String,
    /// Post body, 1 to 280 characters.
    #[clap(long)]
    pub content: String,
    /// Print the created post as JSON.
    #[clap(long)]
    pub json: bool,
}

pub async fn run(opts: &GlobalOpts, args: PostArgs) -> Result<()> {
    let author = parse_id(&args.author)?;
    let payer = args.payer.as_deref().map(parse_id).transpose()?.unwrap_or(author);
    let address = match args.address.as_deref() {
        Some(s) => parse_id(s)?,
        None => AccountId::new_unique(&mut rand::thread_rng()),
    };

    let session = Session::open(opts)?;
    let record = session
        .workspace(author)
        .send_post_as(author, payer, address, &args.topic, &args.content)
        .await?;
    session.save()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&post_json(&record))?);
    } else {
        print_post(&record);
    }
    Ok(())
}
