use soroban_sdk::{Address, Env};

use crate::errors::Error;
use crate::events::AuctionCreatedEventData;
use crate::nft::NftClient;
use crate::storage;
use crate::time;
use crate::types::Auction;

/// Validate and store a new auction record.
///
/// Shared by both engine variants; the engine has already authenticated
/// `creator`. No funds move here; bids carry the value later.
pub fn create_auction(
    e: &Env,
    auction_id: u64,
    creator: Address,
    nft_contract: Address,
    token_id: u32,
    payment_token: Address,
    duration: u64,
    min_bid_increment: i128,
    starting_price: i128,
) -> Result<Auction, Error> {
    let config = storage::get_config(e).ok_or(Error::NotInitialized)?;

    if storage::has_auction(e, auction_id) {
        return Err(Error::DuplicateAuction);
    }

    if duration == 0 || min_bid_increment < 0 || starting_price < 0 {
        return Err(Error::InvalidParameters);
    }

    verify_nft_authorization(e, &nft_contract, token_id, &creator)?;

    let end_time = time::now(e, config.time_basis) + duration;

    let auction = Auction {
        auction_id,
        creator: creator.clone(),
        nft_contract,
        token_id,
        payment_token,
        starting_price,
        min_bid_increment,
        end_time,
        highest_bid: starting_price,
        highest_bidder: None,
        second_highest_bid: starting_price,
        ended: false,
        withdrawn: false,
    };

    storage::save_auction(e, &auction);

    AuctionCreatedEventData {
        auction_id,
        creator,
        min_bid_increment,
        starting_price,
        end_time,
    }
    .publish(e);

    Ok(auction)
}

/// Check that `creator` owns the token and has approved this engine to
/// transfer it at settlement.
fn verify_nft_authorization(
    e: &Env,
    nft_contract: &Address,
    token_id: u32,
    creator: &Address,
) -> Result<(), Error> {
    let client = NftClient::new(e, nft_contract);

    let owner = match client.try_owner_of(&token_id) {
        Ok(Ok(owner)) => owner,
        _ => return Err(Error::TransferFailed),
    };
    if owner != *creator {
        return Err(Error::NotTokenOwner);
    }

    let approved = match client.try_get_approved(&token_id) {
        Ok(Ok(approved)) => approved,
        _ => return Err(Error::TransferFailed),
    };
    if approved != Some(e.current_contract_address()) {
        return Err(Error::NotApproved);
    }

    Ok(())
}
