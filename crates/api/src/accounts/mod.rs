// Path: crates/api/src/accounts/mod.rs
//! Slot allocation performed on behalf of programs.
//!
//! Programs never write raw account keys themselves; they go through these
//! helpers so that the layout under `account::{address}` stays uniform.

use crate::state::StateAccess;
use crate::transaction::context::TxContext;
use quill_types::app::{Account, AccountId};
use quill_types::codec;
use quill_types::error::{AllocationError, StateError, TransactionError};
use quill_types::keys::account_key;

/// Reads and decodes the account at `address`, if any.
pub fn load_account(
    state: &dyn StateAccess,
    address: &AccountId,
) -> Result<Option<Account>, StateError> {
    match state.get(&account_key(address))? {
        Some(bytes) => codec::from_bytes_canonical(&bytes)
            .map(Some)
            .map_err(StateError::Decode),
        None => Ok(None),
    }
}

/// Encodes and writes `account` at `address`, replacing any previous value.
pub fn store_account(
    state: &mut dyn StateAccess,
    address: &AccountId,
    account: &Account,
) -> Result<(), StateError> {
    let bytes = codec::to_bytes_canonical(account).map_err(StateError::InvalidValue)?;
    state.insert(&account_key(address), &bytes)
}

/// Allocates a zero-filled slot of `space` bytes at `address`, owned by `owner`.
///
/// The payer is debited the rent-exempt minimum, which becomes the slot's balance.
/// Both `payer` and `address` must have signed the transaction.
pub fn create_account(
    state: &mut dyn StateAccess,
    ctx: &TxContext<'_>,
    payer: &AccountId,
    address: &AccountId,
    space: usize,
    owner: &AccountId,
) -> Result<Account, TransactionError> {
    ctx.require_signer(payer)?;
    ctx.require_signer(address)?;

    if load_account(state, address)?.is_some() {
        return Err(AllocationError::AccountAlreadyInUse(*address).into());
    }

    let required = ctx.rent.minimum_balance(space);
    let mut funder = load_account(state, payer)?.unwrap_or_default();
    if funder.lamports < required {
        return Err(AllocationError::InsufficientFunds {
            payer: *payer,
            required,
            available: funder.lamports,
        }
        .into());
    }
    funder.lamports -= required;
    store_account(state, payer, &funder)?;

    let account = Account {
        lamports: required,
        owner: *owner,
        data: vec![0u8; space],
    };
    store_account(state, address, &account)?;

    tracing::debug!(
        target: "accounts",
        event = "account_created",
        %address,
        %owner,
        space,
        lamports = required
    );
    Ok(account)
}
