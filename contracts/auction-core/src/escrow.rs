use soroban_sdk::{token, Address, Env};

use crate::errors::Error;
use crate::storage;

/// Pull `amount` of `payment_token` from `from` into the engine.
pub fn deposit(e: &Env, payment_token: &Address, from: &Address, amount: i128) -> Result<(), Error> {
    if amount > 0 {
        let client = token::TokenClient::new(e, payment_token);
        if client
            .try_transfer(from, &e.current_contract_address(), &amount)
            .is_err()
        {
            return Err(Error::TransferFailed);
        }
    }
    Ok(())
}

/// Pay `amount` straight out of the engine to `to`.
pub fn disburse(e: &Env, payment_token: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    if amount > 0 {
        let client = token::TokenClient::new(e, payment_token);
        if client
            .try_transfer(&e.current_contract_address(), to, &amount)
            .is_err()
        {
            return Err(Error::TransferFailed);
        }
    }
    Ok(())
}

/// Record `amount` as refundable to `party` for `auction_id`.
pub fn credit(e: &Env, auction_id: u64, party: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }
    let balance = storage::get_pending_return(e, auction_id, party);
    storage::set_pending_return(e, auction_id, party, balance + amount);
}

/// Zero `party`'s refundable balance and return what it held.
///
/// The slot is cleared before any transfer runs, so a reentrant call
/// during the payout observes an empty balance.
pub fn debit_all(e: &Env, auction_id: u64, party: &Address) -> i128 {
    let balance = storage::get_pending_return(e, auction_id, party);
    if balance > 0 {
        storage::remove_pending_return(e, auction_id, party);
    }
    balance
}

/// Debit `party`'s full balance and pay it out in `payment_token`.
///
/// A failed transfer surfaces as `TransferFailed`, which aborts (and rolls
/// back) the operation that triggered the payout.
pub fn pay_out(
    e: &Env,
    payment_token: &Address,
    auction_id: u64,
    party: &Address,
) -> Result<i128, Error> {
    let amount = debit_all(e, auction_id, party);
    disburse(e, payment_token, party, amount)?;
    Ok(amount)
}

/// Refundable balance currently held for `party`.
pub fn balance(e: &Env, auction_id: u64, party: &Address) -> i128 {
    storage::get_pending_return(e, auction_id, party)
}
