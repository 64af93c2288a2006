// Path: crates/types/src/app/post.rs

//! The on-ledger layout of a post record.
//!
//! A post slot is laid out as:
//!
//! ```text
//! offset  width  field
//! 0       8      discriminator
//! 8       32     author
//! 40      8      timestamp (i64, little-endian)
//! 48      4      topic length in bytes (u32, little-endian)
//! 52      n      topic (UTF-8)
//! 52+n    4      content length in bytes (u32, little-endian)
//! 56+n    m      content (UTF-8)
//! ```
//!
//! This layout is a frozen wire contract. Deployed clients filter slots by
//! comparing raw bytes at [`AUTHOR_OFFSET`] and [`TOPIC_OFFSET`], so the field
//! order and the width of every prefix must never change.

use crate::app::identity::{AccountId, ACCOUNT_ID_LENGTH};
use crate::error::CorruptRecord;
use serde::{Deserialize, Serialize};

/// Width of the type discriminator written at the start of every post slot.
pub const DISCRIMINATOR_LENGTH: usize = 8;
/// Width of the author identity.
pub const PUBLIC_KEY_LENGTH: usize = ACCOUNT_ID_LENGTH;
/// Width of the commit timestamp.
pub const TIMESTAMP_LENGTH: usize = 8;
/// Width of the byte-length prefix in front of each string field.
pub const STRING_LENGTH_PREFIX: usize = 4;

/// Maximum topic length, in characters.
pub const MAX_TOPIC_CHARS: usize = 50;
/// Maximum content length, in characters.
pub const MAX_CONTENT_CHARS: usize = 280;

// A UTF-8 scalar value occupies at most four bytes.
const MAX_UTF8_CHAR_BYTES: usize = 4;
/// Bytes reserved for the topic body.
pub const MAX_TOPIC_LENGTH: usize = MAX_TOPIC_CHARS * MAX_UTF8_CHAR_BYTES;
/// Bytes reserved for the content body.
pub const MAX_CONTENT_LENGTH: usize = MAX_CONTENT_CHARS * MAX_UTF8_CHAR_BYTES;

/// The post discriminator: the first eight bytes of `sha256("account:Post")`.
pub const POST_DISCRIMINATOR: [u8; DISCRIMINATOR_LENGTH] = [8, 147, 90, 186, 185, 56, 192, 150];

/// Offset of the author identity.
pub const AUTHOR_OFFSET: usize = DISCRIMINATOR_LENGTH;
/// Offset of the timestamp.
pub const TIMESTAMP_OFFSET: usize = AUTHOR_OFFSET + PUBLIC_KEY_LENGTH;
/// Offset of the topic's length prefix.
pub const TOPIC_LENGTH_OFFSET: usize = TIMESTAMP_OFFSET + TIMESTAMP_LENGTH;
/// Offset of the first topic byte.
pub const TOPIC_OFFSET: usize = TOPIC_LENGTH_OFFSET + STRING_LENGTH_PREFIX;

/// Size of a post slot. Every post within the character limits fits.
pub const POST_ACCOUNT_SPACE: usize = DISCRIMINATOR_LENGTH
    + PUBLIC_KEY_LENGTH
    + TIMESTAMP_LENGTH
    + STRING_LENGTH_PREFIX
    + MAX_TOPIC_LENGTH
    + STRING_LENGTH_PREFIX
    + MAX_CONTENT_LENGTH;

/// An immutable post record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// The identity that signed the creation.
    pub author: AccountId,
    /// Host clock at commit time, in seconds since the Unix epoch.
    pub timestamp: i64,
    /// Optional topic, at most 50 characters.
    pub topic: String,
    /// Body of the post, 1 to 280 characters.
    pub content: String,
}

impl Post {
    /// The worst-case encoded size, used to size new slots.
    pub const fn max_size() -> usize {
        POST_ACCOUNT_SPACE
    }

    /// The exact number of bytes [`Post::encode`] produces for this record.
    pub fn encoded_len(&self) -> usize {
        DISCRIMINATOR_LENGTH
            + PUBLIC_KEY_LENGTH
            + TIMESTAMP_LENGTH
            + STRING_LENGTH_PREFIX
            + self.topic.len()
            + STRING_LENGTH_PREFIX
            + self.content.len()
    }

    /// Encodes the record into its canonical layout, without padding.
    ///
    /// Fails with [`CorruptRecord::FieldTooLong`] if a string does not fit its
    /// 4-byte length prefix.
    pub fn encode(&self) -> Result<Vec<u8>, CorruptRecord> {
        let mut out = Vec::with_capacity(self.encoded_len());
        out.extend_from_slice(&POST_DISCRIMINATOR);
        out.extend_from_slice(self.author.as_ref());
        out.extend_from_slice(&self.timestamp.to_le_bytes());
        put_str(&mut out, &self.topic, "topic")?;
        put_str(&mut out, &self.content, "content")?;
        Ok(out)
    }

    /// Encodes the record and zero-pads it to a slot of `space` bytes.
    pub fn encode_to_slot(&self, space: usize) -> Result<Vec<u8>, CorruptRecord> {
        let mut out = self.encode()?;
        if out.len() > space {
            return Err(CorruptRecord::Overflow {
                encoded: out.len(),
                space,
            });
        }
        out.resize(space, 0);
        Ok(out)
    }

    /// Decodes a record from a slot.
    ///
    /// Bytes past the end of the content field are the slot's unused reservation
    /// and are ignored.
    pub fn decode(bytes: &[u8]) -> Result<Self, CorruptRecord> {
        let mut reader = Reader::new(bytes);

        let discriminator = reader.take(DISCRIMINATOR_LENGTH, "discriminator")?;
        if discriminator != POST_DISCRIMINATOR {
            let mut found = [0u8; DISCRIMINATOR_LENGTH];
            found.copy_from_slice(discriminator);
            return Err(CorruptRecord::DiscriminatorMismatch {
                expected: POST_DISCRIMINATOR,
                found,
            });
        }

        let mut author = [0u8; PUBLIC_KEY_LENGTH];
        author.copy_from_slice(reader.take(PUBLIC_KEY_LENGTH, "author")?);

        let mut timestamp = [0u8; TIMESTAMP_LENGTH];
        timestamp.copy_from_slice(reader.take(TIMESTAMP_LENGTH, "timestamp")?);

        let topic = reader.string("topic")?;
        let content = reader.string("content")?;

        Ok(Self {
            author: AccountId(author),
            timestamp: i64::from_le_bytes(timestamp),
            topic,
            content,
        })
    }
}

fn put_str(out: &mut Vec<u8>, s: &str, field: &'static str) -> Result<(), CorruptRecord> {
    out.extend_from_slice(&length_prefix(s.len(), field)?);
    out.extend_from_slice(s.as_bytes());
    Ok(())
}

fn length_prefix(
    len: usize,
    field: &'static str,
) -> Result<[u8; STRING_LENGTH_PREFIX], CorruptRecord> {
    u32::try_from(len)
        .map(u32::to_le_bytes)
        .map_err(|_| CorruptRecord::FieldTooLong { field, len })
}

struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn take(&mut self, len: usize, field: &'static str) -> Result<&'a [u8], CorruptRecord> {
        let available = self.buf.len().saturating_sub(self.pos);
        let slice = self
            .pos
            .checked_add(len)
            .and_then(|end| self.buf.get(self.pos..end))
            .ok_or(CorruptRecord::Truncated {
                field,
                needed: len,
                available,
            })?;
        self.pos += len;
        Ok(slice)
    }

    fn string(&mut self, field: &'static str) -> Result<String, CorruptRecord> {
        let mut prefix = [0u8; STRING_LENGTH_PREFIX];
        prefix.copy_from_slice(self.take(STRING_LENGTH_PREFIX, field)?);
        let len = u32::from_le_bytes(prefix) as usize;
        let body = self.take(len, field)?;
        std::str::from_utf8(body)
            .map(str::to_owned)
            .map_err(|_| CorruptRecord::InvalidUtf8 { field })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(topic: &str, content: &str) -> Post {
        Post {
            author: AccountId([7u8; 32]),
            timestamp: 1_650_000_000,
            topic: topic.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn layout_offsets_are_frozen() {
        assert_eq!(AUTHOR_OFFSET, 8);
        assert_eq!(TIMESTAMP_OFFSET, 40);
        assert_eq!(TOPIC_LENGTH_OFFSET, 48);
        assert_eq!(TOPIC_OFFSET, 52);
        assert_eq!(Post::max_size(), 8 + 32 + 8 + 4 + 200 + 4 + 1120);
    }

    #[test]
    fn encode_writes_fields_in_order() {
        let post = sample("veganism", "Hummus is good");
        let bytes = post.encode().unwrap();

        assert_eq!(bytes.len(), post.encoded_len());
        assert_eq!(&bytes[..8], &POST_DISCRIMINATOR);
        assert_eq!(&bytes[AUTHOR_OFFSET..AUTHOR_OFFSET + 32], &[7u8; 32]);
        assert_eq!(
            &bytes[TIMESTAMP_OFFSET..TIMESTAMP_OFFSET + 8],
            &1_650_000_000i64.to_le_bytes()
        );
        assert_eq!(&bytes[TOPIC_LENGTH_OFFSET..TOPIC_OFFSET], &8u32.to_le_bytes());
        assert_eq!(&bytes[TOPIC_OFFSET..TOPIC_OFFSET + 8], b"veganism");
        assert_eq!(&bytes[TOPIC_OFFSET + 8..TOPIC_OFFSET + 12], &14u32.to_le_bytes());
        assert_eq!(&bytes[TOPIC_OFFSET + 12..], b"Hummus is good");
    }

    #[test]
    fn decode_inverts_encode() {
        for post in [
            sample("", "Good morning"),
            sample("veganism", "Tofu is good"),
            sample(&"x".repeat(MAX_TOPIC_CHARS), &"y".repeat(MAX_CONTENT_CHARS)),
            sample("café", "naïve résumé ✓ 🦀"),
            Post {
                timestamp: -1,
                ..sample("past", "before the epoch")
            },
        ] {
            assert_eq!(Post::decode(&post.encode().unwrap()).unwrap(), post);
        }
    }

    #[test]
    fn worst_case_multibyte_post_fits_the_slot() {
        let post = sample(&"🦀".repeat(MAX_TOPIC_CHARS), &"🦀".repeat(MAX_CONTENT_CHARS));
        assert_eq!(post.encoded_len(), Post::max_size());

        let slot = post.encode_to_slot(Post::max_size()).unwrap();
        assert_eq!(slot.len(), Post::max_size());
        assert_eq!(Post::decode(&slot).unwrap(), post);
    }

    #[test]
    fn decode_ignores_slot_padding() {
        let post = sample("rust", "zero padding follows");
        let slot = post.encode_to_slot(Post::max_size()).unwrap();
        assert!(slot[post.encoded_len()..].iter().all(|b| *b == 0));
        assert_eq!(Post::decode(&slot).unwrap(), post);
    }

    #[test]
    fn encode_to_slot_rejects_overflow() {
        let post = sample("topic", "content");
        let err = post.encode_to_slot(10).unwrap_err();
        assert_eq!(
            err,
            CorruptRecord::Overflow {
                encoded: post.encoded_len(),
                space: 10
            }
        );
    }

    #[test]
    fn length_prefix_refuses_to_truncate() {
        assert_eq!(length_prefix(5, "topic").unwrap(), 5u32.to_le_bytes());
        assert_eq!(
            length_prefix(u32::MAX as usize, "content").unwrap(),
            u32::MAX.to_le_bytes()
        );
        let oversized = u32::MAX as usize + 1;
        assert_eq!(
            length_prefix(oversized, "content"),
            Err(CorruptRecord::FieldTooLong {
                field: "content",
                len: oversized
            })
        );
    }

    #[test]
    fn decode_rejects_foreign_discriminator() {
        let mut bytes = sample("a", "b").encode().unwrap();
        bytes[0] ^= 0xFF;
        assert!(matches!(
            Post::decode(&bytes),
            Err(CorruptRecord::DiscriminatorMismatch { .. })
        ));
    }

    #[test]
    fn decode_rejects_length_past_buffer_end() {
        let mut bytes = sample("topic", "content").encode().unwrap();
        bytes[TOPIC_LENGTH_OFFSET..TOPIC_OFFSET].copy_from_slice(&10_000u32.to_le_bytes());
        assert_eq!(
            Post::decode(&bytes),
            Err(CorruptRecord::Truncated {
                field: "topic",
                needed: 10_000,
                available: bytes.len() - TOPIC_OFFSET,
            })
        );

        let full = sample("t", "c").encode().unwrap();
        let fixed_only = &full[..20];
        assert!(matches!(
            Post::decode(fixed_only),
            Err(CorruptRecord::Truncated { field: "author", .. })
        ));
    }

    #[test]
    fn decode_rejects_invalid_utf8() {
        let mut bytes = sample("ab", "content").encode().unwrap();
        bytes[TOPIC_OFFSET] = 0xC3;
        bytes[TOPIC_OFFSET + 1] = 0x28;
        assert_eq!(
            Post::decode(&bytes),
            Err(CorruptRecord::InvalidUtf8 { field: "topic" })
        );
    }

    #[test]
    fn discriminator_is_derived_from_the_account_name() {
        use sha2::{Digest, Sha256};
        let digest = Sha256::digest(b"account:Post");
        assert_eq!(&digest[..DISCRIMINATOR_LENGTH], &POST_DISCRIMINATOR);
    }
}
