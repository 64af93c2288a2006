// Path: crates/cli/src/commands/mod.rs

pub mod airdrop;
pub mod identity;
pub mod list;
pub mod post;
pub mod show;
