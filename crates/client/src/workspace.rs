// Path: crates/client/src/workspace.rs

//! The client context object: one per wallet, passed to every call.

use crate::connection::LedgerConnection;
use crate::error::ClientError;
use crate::filters::{author_filter, topic_filter};
use quill_services::posts::{SendPostAccounts, SendPostParams, SEND_POST_METHOD};
use quill_types::app::{Account, AccountFilter, AccountId, Post, Transaction, TxReceipt};
use quill_types::codec;
use quill_types::config::WorkspaceConfig;
use quill_types::error::{CorruptRecord, TransactionError};
use quill_types::prelude::OptionExt;
use std::fmt;
use std::sync::Arc;

/// A decoded post together with the address of its slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRecord {
    /// Address of the slot holding the post.
    pub address: AccountId,
    /// The decoded record.
    pub post: Post,
}

/// The result of a batch read.
///
/// A corrupt slot never fails the whole read: it is skipped and reported here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostListing {
    /// Healthy records, in ascending address order.
    pub posts: Vec<PostRecord>,
    /// Slots that matched the query but could not be decoded.
    pub corrupt: Vec<(AccountId, CorruptRecord)>,
}

/// Carries the connection, the signing wallet and the post program id.
#[derive(Clone)]
pub struct Workspace {
    connection: Arc<dyn LedgerConnection>,
    wallet: AccountId,
    program_id: AccountId,
}

impl fmt::Debug for Workspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Workspace")
            .field("wallet", &self.wallet)
            .field("program_id", &self.program_id)
            .finish_non_exhaustive()
    }
}

impl Workspace {
    /// Creates a workspace for `wallet` talking to the post program at `program_id`.
    pub fn new(
        connection: Arc<dyn LedgerConnection>,
        wallet: AccountId,
        program_id: AccountId,
    ) -> Self {
        Self {
            connection,
            wallet,
            program_id,
        }
    }

    /// Creates a workspace using the program id from `config`.
    pub fn from_config(
        connection: Arc<dyn LedgerConnection>,
        wallet: AccountId,
        config: &WorkspaceConfig,
    ) -> Self {
        Self::new(connection, wallet, config.program_id)
    }

    /// The identity that authors and pays for posts sent through this workspace.
    pub fn wallet(&self) -> AccountId {
        self.wallet
    }

    /// The post program this workspace talks to.
    pub fn program_id(&self) -> AccountId {
        self.program_id
    }

    /// Returns a workspace for another wallet over the same connection.
    pub fn with_wallet(&self, wallet: AccountId) -> Self {
        Self {
            wallet,
            ..self.clone()
        }
    }

    /// Creates a post authored and paid for by the wallet, at a fresh random address.
    pub async fn send_post(&self, topic: &str, content: &str) -> Result<PostRecord, ClientError> {
        let address = AccountId::new_unique(&mut rand::thread_rng());
        self.send_post_at(address, topic, content).await
    }

    /// Creates a post authored and paid for by the wallet, at `address`.
    pub async fn send_post_at(
        &self,
        address: AccountId,
        topic: &str,
        content: &str,
    ) -> Result<PostRecord, ClientError> {
        self.send_post_as(self.wallet, self.wallet, address, topic, content)
            .await
    }

    /// Creates a post with explicit author and payer.
    ///
    /// The workspace acts as the signer for all three accounts.
    pub async fn send_post_as(
        &self,
        author: AccountId,
        payer: AccountId,
        address: AccountId,
        topic: &str,
        content: &str,
    ) -> Result<PostRecord, ClientError> {
        let params = SendPostParams {
            accounts: SendPostAccounts {
                post: address,
                author,
                payer,
            },
            topic: topic.to_string(),
            content: content.to_string(),
        };
        let bytes = codec::to_bytes_canonical(&params).map_err(TransactionError::Serialization)?;
        let tx = Transaction::new(self.program_id, SEND_POST_METHOD, bytes)
            .with_signer(author)
            .with_signer(payer)
            .with_signer(address);

        let receipt: TxReceipt = self.connection.send_transaction(&tx).await?;
        tracing::info!(
            target: "client",
            event = "post_sent",
            %address,
            %author,
            slot = receipt.slot
        );
        self.fetch_post(&address)
    }

    /// Reads and decodes the post at `address`.
    pub fn fetch_post(&self, address: &AccountId) -> Result<PostRecord, ClientError> {
        let account = self
            .connection
            .get_account(address)?
            .required(ClientError::NotFound(*address))?;
        if account.owner != self.program_id {
            return Err(ClientError::NotAPost(*address));
        }
        let post = Post::decode(&account.data).map_err(|source| ClientError::Corrupt {
            address: *address,
            source,
        })?;
        Ok(PostRecord {
            address: *address,
            post,
        })
    }

    /// Every committed post.
    pub fn list_all(&self) -> Result<PostListing, ClientError> {
        self.list_matching(Vec::new())
    }

    /// Every committed post whose slot holds `bytes` at `offset`.
    pub fn list_filtered(&self, offset: usize, bytes: &[u8]) -> Result<PostListing, ClientError> {
        self.list_matching(vec![AccountFilter::memcmp(offset, bytes.to_vec())])
    }

    /// Every committed post written by `author`.
    pub fn list_by_author(&self, author: &AccountId) -> Result<PostListing, ClientError> {
        self.list_matching(vec![author_filter(author)])
    }

    /// Every committed post whose topic starts with `topic`.
    pub fn list_by_topic(&self, topic: &str) -> Result<PostListing, ClientError> {
        self.list_matching(vec![topic_filter(topic)])
    }

    /// Runs a program-account query and decodes every matching slot.
    ///
    /// Every slot the program owns is a post slot, so a slot that fails to
    /// decode, including one with a foreign discriminator, is reported in
    /// [`PostListing::corrupt`] rather than filtered out.
    pub fn list_matching(&self, filters: Vec<AccountFilter>) -> Result<PostListing, ClientError> {
        let accounts = self
            .connection
            .get_program_accounts(&self.program_id, &filters)?;
        Ok(self.decode_listing(accounts))
    }

    fn decode_listing(&self, accounts: Vec<(AccountId, Account)>) -> PostListing {
        let mut listing = PostListing::default();
        for (address, account) in accounts {
            match Post::decode(&account.data) {
                Ok(post) => listing.posts.push(PostRecord { address, post }),
                Err(e) => {
                    tracing::warn!(
                        target: "client",
                        event = "corrupt_post_skipped",
                        %address,
                        error = %e
                    );
                    listing.corrupt.push((address, e));
                }
            }
        }
        listing
    }
}
