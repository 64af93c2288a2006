// Path: crates/cli/src/commands/airdrop.rs

use crate::util::{parse_id, GlobalOpts, Session};
use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
pub struct AirdropArgs {
    /// Base58 identity to credit.
    pub to: String,
    /// Lamports to credit.
    pub lamports: u64,
}

pub async fn run(opts: &GlobalOpts, args: AirdropArgs) -> Result<()> {
    let to = parse_id(&args.to)?;
    let session = Session::open(opts)?;
    let receipt = session.ledger.request_airdrop(&to, args.lamports).await?;
    session.save()?;

    let balance = session
        .ledger
        .get_account(&to)?
        .map(|a| a.lamports)
        .unwrap_or_default();
    println!("Airdropped {} lamports to {} (slot {}). Balance: {}", args.lamports, to, receipt.slot, balance);
    Ok(())
}
