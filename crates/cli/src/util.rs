// Path: crates/cli/src/util.rs

use anyhow::{Context, Result};
use quill_client::{PostRecord, Workspace};
use quill_execution::util::{load_snapshot, save_snapshot};
use quill_execution::{Clock, Ledger, SystemClock};
use quill_services::posts::PostService;
use quill_types::app::AccountId;
use quill_types::config::WorkspaceConfig;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Options shared by every subcommand.
#[derive(Debug, Clone)]
pub struct GlobalOpts {
    pub state: PathBuf,
    pub config: Option<PathBuf>,
}

/// A ledger loaded from disk, with the post program registered.
pub struct Session {
    pub ledger: Arc<Ledger>,
    pub config: WorkspaceConfig,
    state_path: PathBuf,
}

impl Session {
    pub fn open(opts: &GlobalOpts) -> Result<Self> {
        let config = match &opts.config {
            Some(path) => WorkspaceConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => WorkspaceConfig::default(),
        };
        Self::open_with(&opts.state, config, Arc::new(SystemClock))
    }

    pub fn open_with(state: &Path, config: WorkspaceConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        let ledger = match load_snapshot(state)? {
            Some(snapshot) => Ledger::from_snapshot(config.ledger.clone(), &snapshot, clock)?,
            None => Ledger::with_clock(config.ledger.clone(), clock),
        };
        ledger.register_service(Arc::new(PostService::new(config.program_id)));
        Ok(Self {
            ledger: Arc::new(ledger),
            config,
            state_path: state.to_path_buf(),
        })
    }

    pub fn workspace(&self, wallet: AccountId) -> Workspace {
        Workspace::from_config(self.ledger.clone(), wallet, &self.config)
    }

    pub fn save(&self) -> Result<()> {
        save_snapshot(&self.state_path, &self.ledger.snapshot()?)
    }
}

pub fn parse_id(s: &str) -> Result<AccountId> {
    s.parse::<AccountId>()
        .with_context(|| format!("'{}' is not a base58 identity", s))
}

pub fn post_json(record: &PostRecord) -> serde_json::Value {
    serde_json::json!({
        "address": record.address.to_string(),
        "author": record.post.author.to_string(),
        "timestamp": record.post.timestamp,
        "topic": record.post.topic,
        "content": record.post.content,
    })
}

pub fn print_post(record: &PostRecord) {
    let topic = if record.post.topic.is_empty() {
        String::new()
    } else {
        format!(" #{}", record.post.topic)
    };
    println!(
        "{}  {} @ {}{}\n    {}",
        record.address, record.post.author, record.post.timestamp, topic, record.post.content
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_execution::FixedClock;

    #[tokio::test]
    async fn session_persists_across_reopen() {
        let dir = std::env::temp_dir().join(format!("quill-cli-{}", std::process::id()));
        let path = dir.join("ledger.json");
        let clock: Arc<dyn Clock> = Arc::new(FixedClock::new(1_000));
        let author = AccountId([5; 32]);

        let session = Session::open_with(&path, WorkspaceConfig::default(), clock.clone()).unwrap();
        session.ledger.request_airdrop(&author, 1_000_000_000).await.unwrap();
        let record = session.workspace(author).send_post("cli", "persisted").await.unwrap();
        session.save().unwrap();

        let reopened = Session::open_with(&path, WorkspaceConfig::default(), clock).unwrap();
        let fetched = reopened.workspace(author).fetch_post(&record.address).unwrap();
        assert_eq!(fetched, record);
        assert_eq!(post_json(&fetched)["topic"], "cli");

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn parse_id_rejects_garbage() {
        assert!(parse_id("not an id").is_err());
        let id = AccountId([8; 32]);
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
    }
}
