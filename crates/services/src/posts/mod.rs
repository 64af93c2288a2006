// Path: crates/services/src/posts/mod.rs
//! The post program: creates immutable post records in freshly allocated slots.

use async_trait::async_trait;
use parity_scale_codec::{Decode, Encode};
use quill_api::accounts::{create_account, store_account};
use quill_api::services::BlockchainService;
use quill_api::state::StateAccess;
use quill_api::transaction::context::TxContext;
use quill_types::app::post::{MAX_CONTENT_CHARS, MAX_TOPIC_CHARS};
use quill_types::app::{AccountId, Post};
use quill_types::codec;
use quill_types::error::{PostError, TransactionError};
use quill_types::keys::POST_PROGRAM_ID;

/// Versioned name of the create-record method.
pub const SEND_POST_METHOD: &str = "send_post@v1";

// --- Service Method Parameter Structs (The Service's Public ABI) ---

/// The accounts a `send_post@v1` call touches. All three must sign.
#[derive(Encode, Decode, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendPostAccounts {
    /// Fresh address of the new post slot.
    pub post: AccountId,
    /// The post's author.
    pub author: AccountId,
    /// Funds the slot's rent-exempt minimum. Usually the author.
    pub payer: AccountId,
}

/// Parameters of `send_post@v1`.
#[derive(Encode, Decode, Debug, Clone, PartialEq, Eq)]
pub struct SendPostParams {
    /// Accounts involved in the call.
    pub accounts: SendPostAccounts,
    /// Topic, possibly empty.
    pub topic: String,
    /// Post body.
    pub content: String,
}

/// Checks a creation request against the field limits. The first failure wins.
pub fn validate(topic: &str, content: &str) -> Result<(), PostError> {
    if topic.chars().count() > MAX_TOPIC_CHARS {
        return Err(PostError::TopicTooLong);
    }
    if content.chars().count() > MAX_CONTENT_CHARS {
        return Err(PostError::ContentTooLong);
    }
    if content.is_empty() {
        return Err(PostError::ContentEmpty);
    }
    Ok(())
}

/// The post program.
#[derive(Debug, Clone)]
pub struct PostService {
    program_id: AccountId,
}

impl Default for PostService {
    fn default() -> Self {
        Self::new(POST_PROGRAM_ID)
    }
}

impl PostService {
    /// Creates the program at `program_id`.
    pub fn new(program_id: AccountId) -> Self {
        Self { program_id }
    }

    fn send_post(
        &self,
        state: &mut dyn StateAccess,
        p: SendPostParams,
        ctx: &TxContext<'_>,
    ) -> Result<(), TransactionError> {
        let SendPostAccounts {
            post: address,
            author,
            payer,
        } = p.accounts;
        ctx.require_signer(&author)?;
        ctx.require_signer(&payer)?;
        ctx.require_signer(&address)?;

        validate(&p.topic, &p.content)?;

        let mut account = create_account(
            state,
            ctx,
            &payer,
            &address,
            Post::max_size(),
            &self.program_id,
        )?;

        let post = Post {
            author,
            timestamp: ctx.unix_timestamp,
            topic: p.topic,
            content: p.content,
        };
        account.data = post
            .encode_to_slot(Post::max_size())
            .map_err(|e| TransactionError::Serialization(e.to_string()))?;
        store_account(state, &address, &account)?;

        tracing::info!(
            target: "posts",
            event = "post_created",
            slot = ctx.slot,
            %address,
            %author,
            %payer,
            topic = %post.topic,
            content_chars = post.content.chars().count(),
            timestamp = post.timestamp
        );
        Ok(())
    }
}

#[async_trait]
impl BlockchainService for PostService {
    fn id(&self) -> &str {
        "posts"
    }

    fn program_id(&self) -> AccountId {
        self.program_id
    }

    async fn handle_service_call(
        &self,
        state: &mut dyn StateAccess,
        method: &str,
        params: &[u8],
        ctx: &TxContext<'_>,
    ) -> Result<(), TransactionError> {
        match method {
            SEND_POST_METHOD => {
                let p: SendPostParams = codec::from_bytes_canonical(params)
                    .map_err(TransactionError::Deserialization)?;
                self.send_post(state, p, ctx)
            }
            _ => Err(TransactionError::Unsupported(format!(
                "Service 'posts' does not implement '{}'",
                method
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_order_and_limits() {
        let fifty = "a".repeat(50);
        let max = "b".repeat(280);
        assert_eq!(validate(&fifty, &max), Ok(()));
        assert_eq!(validate("", "x"), Ok(()));
        assert_eq!(validate(&"a".repeat(51), "x"), Err(PostError::TopicTooLong));
        assert_eq!(validate("t", &"b".repeat(281)), Err(PostError::ContentTooLong));
        assert_eq!(validate("t", ""), Err(PostError::ContentEmpty));
        // Topic is checked before content.
        assert_eq!(validate(&"a".repeat(51), ""), Err(PostError::TopicTooLong));
    }

    #[test]
    fn limits_count_characters_not_bytes() {
        let topic = "é".repeat(50);
        let content = "🦀".repeat(280);
        assert!(topic.len() > 50 && content.len() > 280);
        assert_eq!(validate(&topic, &content), Ok(()));
        assert_eq!(validate(&"é".repeat(51), "x"), Err(PostError::TopicTooLong));
    }

    #[test]
    fn params_are_scale_encoded() {
        let p = SendPostParams {
            accounts: SendPostAccounts {
                post: AccountId([1; 32]),
                author: AccountId([2; 32]),
                payer: AccountId([2; 32]),
            },
            topic: "veganism".into(),
            content: "Yay Tofu!".into(),
        };
        let bytes = codec::to_bytes_canonical(&p).unwrap();
        let back: SendPostParams = codec::from_bytes_canonical(&bytes).unwrap();
        assert_eq!(back, p);
    }
}
