// Path: crates/types/src/error/mod.rs
//! Core error types for Quill.

use crate::app::AccountId;
use thiserror::Error;

/// A trait for assigning a stable, machine-readable string code to an error.
pub trait ErrorCode {
    /// Returns the unique, stable string identifier for this error variant.
    fn code(&self) -> &'static str;
}

/// Validation failures of a post creation request.
///
/// The display text of each variant is part of the client compatibility contract:
/// callers assert on it verbatim.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostError {
    /// The topic is longer than 50 characters.
    #[error("The provided topic should be 50 characters long maximum.")]
    TopicTooLong,
    /// The content is longer than 280 characters.
    #[error("The provided content should be 280 characters long maximum.")]
    ContentTooLong,
    /// The content is empty.
    #[error("The provided content should not be empty.")]
    ContentEmpty,
}

impl PostError {
    /// First numeric code of the program's error range.
    pub const ERROR_CODE_OFFSET: u32 = 6000;

    /// The literal, human-readable message for this failure.
    pub fn msg(&self) -> &'static str {
        match self {
            Self::TopicTooLong => "The provided topic should be 50 characters long maximum.",
            Self::ContentTooLong => "The provided content should be 280 characters long maximum.",
            Self::ContentEmpty => "The provided content should not be empty.",
        }
    }

    /// The stable numeric code, starting at [`PostError::ERROR_CODE_OFFSET`].
    pub fn number(&self) -> u32 {
        Self::ERROR_CODE_OFFSET
            + match self {
                Self::TopicTooLong => 0,
                Self::ContentTooLong => 1,
                Self::ContentEmpty => 2,
            }
    }
}

impl ErrorCode for PostError {
    fn code(&self) -> &'static str {
        match self {
            Self::TopicTooLong => "POST_TOPIC_TOO_LONG",
            Self::ContentTooLong => "POST_CONTENT_TOO_LONG",
            Self::ContentEmpty => "POST_CONTENT_EMPTY",
        }
    }
}

/// Failures to allocate a new slot at the host-runtime level.
///
/// These are not reproducible with a fresh address or a funded payer, so callers
/// may regenerate an address and retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AllocationError {
    /// A slot already exists at the requested address.
    #[error("Allocate: account {0} already in use")]
    AccountAlreadyInUse(AccountId),
    /// The payer cannot cover the rent-exempt minimum of the new slot.
    #[error("Transfer: insufficient lamports in {payer}: have {available}, need {required}")]
    InsufficientFunds {
        /// The paying identity.
        payer: AccountId,
        /// Lamports required for the allocation.
        required: u64,
        /// Lamports the payer holds.
        available: u64,
    },
}

impl ErrorCode for AllocationError {
    fn code(&self) -> &'static str {
        match self {
            Self::AccountAlreadyInUse(_) => "ALLOC_ACCOUNT_ALREADY_IN_USE",
            Self::InsufficientFunds { .. } => "ALLOC_INSUFFICIENT_FUNDS",
        }
    }
}

/// Decode-time failures of a stored post record.
///
/// A corrupt record indicates a storage or protocol mismatch. It is fatal to the
/// single read, never to the system.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CorruptRecord {
    /// The slot does not start with the post discriminator.
    #[error("Discriminator mismatch: expected {expected:?}, found {found:?}")]
    DiscriminatorMismatch {
        /// The post discriminator.
        expected: [u8; 8],
        /// The first eight bytes of the slot.
        found: [u8; 8],
    },
    /// A field, or a declared string length, runs past the end of the buffer.
    #[error("Record truncated in field '{field}': need {needed} bytes, {available} available")]
    Truncated {
        /// The field being read.
        field: &'static str,
        /// Bytes the field requires.
        needed: usize,
        /// Bytes left in the buffer.
        available: usize,
    },
    /// A string field is not valid UTF-8.
    #[error("Field '{field}' is not valid UTF-8")]
    InvalidUtf8 {
        /// The offending field.
        field: &'static str,
    },
    /// A string field is too long for its 4-byte length prefix.
    #[error("Field '{field}' of {len} bytes does not fit a 4-byte length prefix")]
    FieldTooLong {
        /// The offending field.
        field: &'static str,
        /// Its length in bytes.
        len: usize,
    },
    /// The encoded record does not fit the slot it is written to.
    #[error("Encoded record of {encoded} bytes exceeds slot of {space} bytes")]
    Overflow {
        /// Length of the encoding.
        encoded: usize,
        /// Size of the slot.
        space: usize,
    },
}

impl ErrorCode for CorruptRecord {
    fn code(&self) -> &'static str {
        match self {
            Self::DiscriminatorMismatch { .. } => "RECORD_DISCRIMINATOR_MISMATCH",
            Self::Truncated { .. } => "RECORD_TRUNCATED",
            Self::InvalidUtf8 { .. } => "RECORD_INVALID_UTF8",
            Self::FieldTooLong { .. } => "RECORD_FIELD_TOO_LONG",
            Self::Overflow { .. } => "RECORD_OVERFLOW",
        }
    }
}

/// Errors related to the state store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// The provided value was invalid.
    #[error("Invalid value: {0}")]
    InvalidValue(String),
    /// An error occurred during state deserialization.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ErrorCode for StateError {
    fn code(&self) -> &'static str {
        match self {
            Self::InvalidValue(_) => "STATE_INVALID_VALUE",
            Self::Decode(_) => "STATE_DECODE_ERROR",
        }
    }
}

/// Errors surfaced by a submitted transaction.
///
/// Post and allocation failures are transparent: their display text is the
/// inner error's, so the literal validation message survives unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransactionError {
    /// An error occurred during serialization.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// An error occurred during deserialization of the parameters.
    #[error("Deserialization error: {0}")]
    Deserialization(String),
    /// The request failed post validation.
    #[error(transparent)]
    Post(#[from] PostError),
    /// The host could not allocate the requested slot.
    #[error(transparent)]
    Allocation(#[from] AllocationError),
    /// An error originating from the state store.
    #[error("State error: {0}")]
    State(#[from] StateError),
    /// An account that must sign the transaction did not.
    #[error("Missing required signature for account {0}")]
    MissingRequiredSignature(AccountId),
    /// No program is registered under the transaction's program id.
    #[error("Unknown program: {0}")]
    UnknownProgram(AccountId),
    /// The program does not implement the requested method.
    #[error("Unsupported transaction type: {0}")]
    Unsupported(String),
}

impl TransactionError {
    /// The human-readable message of this failure.
    pub fn msg(&self) -> String {
        match self {
            Self::Post(e) => e.msg().to_string(),
            other => other.to_string(),
        }
    }
}

impl ErrorCode for TransactionError {
    fn code(&self) -> &'static str {
        match self {
            Self::Serialization(_) => "TX_SERIALIZATION_ERROR",
            Self::Deserialization(_) => "TX_DESERIALIZATION_ERROR",
            Self::Post(e) => e.code(),
            Self::Allocation(e) => e.code(),
            Self::State(_) => "TX_STATE_ERROR",
            Self::MissingRequiredSignature(_) => "TX_MISSING_SIGNATURE",
            Self::UnknownProgram(_) => "TX_UNKNOWN_PROGRAM",
            Self::Unsupported(_) => "TX_UNSUPPORTED",
        }
    }
}

/// General errors for configuration and identity parsing.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),
    /// An identity string or byte slice is malformed.
    #[error("Invalid identity: {0}")]
    InvalidIdentity(String),
}

impl ErrorCode for CoreError {
    fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CORE_CONFIG_ERROR",
            Self::InvalidIdentity(_) => "CORE_INVALID_IDENTITY",
        }
    }
}
