// Path: crates/client/src/filters.rs

//! Standard byte-offset filters over post slots.
//!
//! These offsets are the post layout's wire contract; see
//! [`quill_types::app::post`].

use quill_types::app::post::{AUTHOR_OFFSET, TOPIC_OFFSET};
use quill_types::app::{AccountFilter, AccountId};

/// Matches posts written by `author`.
pub fn author_filter(author: &AccountId) -> AccountFilter {
    AccountFilter::memcmp(AUTHOR_OFFSET, author.to_bytes().to_vec())
}

/// Matches posts whose topic starts with the UTF-8 bytes of `topic`.
///
/// The comparison starts after the topic's length prefix, so a topic of
/// `"veganism"` also matches `"veganism-recipes"`.
pub fn topic_filter(topic: &str) -> AccountFilter {
    AccountFilter::memcmp(TOPIC_OFFSET, topic.as_bytes().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_types::app::Post;

    fn slot(author: AccountId, topic: &str) -> Vec<u8> {
        Post {
            author,
            timestamp: 1,
            topic: topic.into(),
            content: "body".into(),
        }
        .encode_to_slot(Post::max_size())
        .unwrap()
    }

    #[test]
    fn author_filter_reads_offset_8() {
        let a = AccountId([4; 32]);
        assert!(author_filter(&a).matches(&slot(a, "x")));
        assert!(!author_filter(&AccountId([5; 32])).matches(&slot(a, "x")));
    }

    #[test]
    fn topic_filter_reads_offset_52() {
        let a = AccountId([4; 32]);
        assert!(topic_filter("veganism").matches(&slot(a, "veganism")));
        assert!(!topic_filter("veganism").matches(&slot(a, "vegan")));
        assert!(!topic_filter("veganism").matches(&slot(a, "")));
        assert!(topic_filter("").matches(&slot(a, "anything")));
    }
}
