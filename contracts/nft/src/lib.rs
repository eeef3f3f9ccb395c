#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, contracttype, Address, Env};

/// Error codes for the NFT collateral contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum NftError {
    /// A token already exists under this identifier
    TokenAlreadyMinted = 1,
    /// No token exists under this identifier
    TokenNotFound = 2,
    /// Caller is not the token owner
    NotOwner = 3,
    /// Caller is neither the owner nor the approved account
    NotAuthorized = 4,
}

#[contracttype]
#[derive(Clone)]
enum DataKey {
    Token(u32),
}

/// Ownership record for a single token.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenRecord {
    pub owner: Address,
    pub approved: Option<Address>,
}

/// Minimal NFT contract the auction engines sell from.
///
/// Implements the adapter interface the engines consume (owner lookup,
/// single-account approval, approved transfer) plus an open mint for
/// seeding assets.
#[contract]
pub struct NftContract;

#[contractimpl]
impl NftContract {
    /// Mint `token_id` to `to`. Token identifiers are caller-chosen.
    pub fn mint(e: &Env, to: Address, token_id: u32) -> Result<(), NftError> {
        if e.storage().persistent().has(&DataKey::Token(token_id)) {
            return Err(NftError::TokenAlreadyMinted);
        }

        let record = TokenRecord {
            owner: to,
            approved: None,
        };
        e.storage().persistent().set(&DataKey::Token(token_id), &record);

        Ok(())
    }

    /// Current owner of `token_id`.
    pub fn owner_of(e: &Env, token_id: u32) -> Result<Address, NftError> {
        Ok(get_token(e, token_id)?.owner)
    }

    /// Approve `spender` to transfer `token_id` on the owner's behalf.
    /// Replaces any previous approval.
    pub fn approve(
        e: &Env,
        owner: Address,
        spender: Address,
        token_id: u32,
    ) -> Result<(), NftError> {
        owner.require_auth();

        let mut record = get_token(e, token_id)?;
        if record.owner != owner {
            return Err(NftError::NotOwner);
        }

        record.approved = Some(spender);
        e.storage().persistent().set(&DataKey::Token(token_id), &record);

        Ok(())
    }

    /// Account approved to move `token_id`, if any.
    pub fn get_approved(e: &Env, token_id: u32) -> Result<Option<Address>, NftError> {
        Ok(get_token(e, token_id)?.approved)
    }

    /// Move `token_id` from `from` to `to`. `spender` must be the owner or
    /// the approved account; the transfer clears any approval.
    pub fn transfer_from(
        e: &Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u32,
    ) -> Result<(), NftError> {
        spender.require_auth();

        let mut record = get_token(e, token_id)?;
        if record.owner != from {
            return Err(NftError::NotOwner);
        }
        if spender != record.owner && record.approved.as_ref() != Some(&spender) {
            return Err(NftError::NotAuthorized);
        }

        record.owner = to;
        record.approved = None;
        e.storage().persistent().set(&DataKey::Token(token_id), &record);

        Ok(())
    }
}

fn get_token(e: &Env, token_id: u32) -> Result<TokenRecord, NftError> {
    e.storage()
        .persistent()
        .get(&DataKey::Token(token_id))
        .ok_or(NftError::TokenNotFound)
}
