use soroban_sdk::{contractclient, Address, Env};

use crate::errors::Error;

/// Interface of the external contract holding the auctioned assets.
///
/// The engines only ever read ownership, check their own approval and move
/// a token at settlement; everything else about the asset contract is its
/// own business.
#[contractclient(name = "NftClient")]
pub trait NftInterface {
    /// Current owner of `token_id`.
    fn owner_of(token_id: u32) -> Address;

    /// Account approved to move `token_id`, if any.
    fn get_approved(token_id: u32) -> Option<Address>;

    /// Move `token_id` from `from` to `to`. `spender` must be the owner or
    /// the approved account.
    fn transfer_from(spender: Address, from: Address, to: Address, token_id: u32);
}

/// Move the auctioned token between accounts.
///
/// Any failure in the external contract is fatal to the calling operation.
pub fn transfer_asset(
    e: &Env,
    nft_contract: &Address,
    from: &Address,
    to: &Address,
    token_id: u32,
) -> Result<(), Error> {
    let client = NftClient::new(e, nft_contract);
    if client
        .try_transfer_from(&e.current_contract_address(), from, to, &token_id)
        .is_err()
    {
        return Err(Error::TransferFailed);
    }
    Ok(())
}
