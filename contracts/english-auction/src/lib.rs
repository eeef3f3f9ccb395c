#![no_std]

use soroban_sdk::{contract, contractimpl, Address, Env};

use auction_core::errors::Error;
use auction_core::events::{AuctionEndedEventData, FundsWithdrawnEventData, NewBidPlacedEventData};
use auction_core::types::{Auction, Config, TimeBasis};
use auction_core::{escrow, nft, registry, storage, time};

/// First-price ascending auction engine.
///
/// Tracks a single highest bid per auction and refunds the outbid party
/// synchronously on every superseding bid. Settlement pays the creator the
/// highest bid and hands the NFT to the winner.
#[contract]
pub struct EnglishAuctionContract;

#[contractimpl]
impl EnglishAuctionContract {
    /// Initialize the engine with the time basis deadlines are measured in.
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the engine was initialized before
    pub fn initialize(e: &Env, time_basis: TimeBasis) -> Result<(), Error> {
        if storage::is_initialized(e) {
            return Err(Error::AlreadyInitialized);
        }

        storage::set_config(e, &Config { time_basis });
        Ok(())
    }

    /// Register a new auction for an NFT the creator owns and has approved
    /// this engine to transfer.
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
    ) -> Result<(), Error> {
        creator.require_auth();

        registry::create_auction(
            e,
            auction_id,
            creator,
            nft_contract,
            token_id,
            payment_token,
            duration,
            min_bid_increment,
            starting_price,
        )?;

        Ok(())
    }

    /// Place a bid. The previous highest bidder is refunded in full before
    /// the ranking moves; a failed refund rejects the new bid as well.
    pub fn place_bid(
        e: &Env,
        auction_id: u64,
        bidder: Address,
        amount: i128,
    ) -> Result<(), Error> {
        bidder.require_auth();

        let config = storage::get_config(e).ok_or(Error::NotInitialized)?;
        let mut auction = storage::get_auction(e, auction_id).ok_or(Error::AuctionNotFound)?;

        // The deadline is re-checked on every bid rather than relying on
        // the ended flag alone.
        if auction.ended || time::now(e, config.time_basis) >= auction.end_time {
            return Err(Error::AuctionExpired);
        }
        if bidder == auction.creator {
            return Err(Error::SelfBid);
        }
        if auction.highest_bidder.as_ref() == Some(&bidder) {
            return Err(Error::AlreadyHighestBidder);
        }
        if amount < auction.highest_bid + auction.min_bid_increment {
            return Err(Error::BidTooLow);
        }

        escrow::deposit(e, &auction.payment_token, &bidder, amount)?;

        // Refund the outbid party through their ledger slot before the
        // ranking is replaced.
        if let Some(previous_bidder) = auction.highest_bidder.clone() {
            escrow::credit(e, auction_id, &previous_bidder, auction.highest_bid);
            escrow::pay_out(e, &auction.payment_token, auction_id, &previous_bidder)?;
        }

        auction.highest_bid = amount;
        auction.highest_bidder = Some(bidder.clone());
        storage::save_auction(e, &auction);

        NewBidPlacedEventData {
            auction_id,
            bidder,
            amount,
        }
        .publish(e);

        Ok(())
    }

    /// End the auction after its deadline: pay the creator the winning bid
    /// and transfer the NFT to the winner. With no bids the auction just
    /// closes and the NFT stays with the creator.
    pub fn end_auction(e: &Env, auction_id: u64, caller: Address) -> Result<(), Error> {
        caller.require_auth();

        let config = storage::get_config(e).ok_or(Error::NotInitialized)?;
        let mut auction = storage::get_auction(e, auction_id).ok_or(Error::AuctionNotFound)?;

        if caller != auction.creator {
            return Err(Error::NotCreator);
        }
        if time::now(e, config.time_basis) < auction.end_time {
            return Err(Error::AuctionStillActive);
        }
        if auction.ended {
            return Err(Error::AlreadyEnded);
        }

        auction.ended = true;

        let mut amount = 0;
        if let Some(winner) = auction.highest_bidder.clone() {
            amount = auction.highest_bid;
            escrow::disburse(e, &auction.payment_token, &auction.creator, amount)?;
            nft::transfer_asset(
                e,
                &auction.nft_contract,
                &auction.creator,
                &winner,
                auction.token_id,
            )?;
        }

        storage::save_auction(e, &auction);

        AuctionEndedEventData {
            auction_id,
            winner: auction.highest_bidder,
            amount,
        }
        .publish(e);

        Ok(())
    }

    /// Seller-side sweep of any proceeds still held by the engine after
    /// settlement. Callable exactly once per auction.
    pub fn withdraw(e: &Env, auction_id: u64, caller: Address) -> Result<i128, Error> {
        caller.require_auth();

        let mut auction = storage::get_auction(e, auction_id).ok_or(Error::AuctionNotFound)?;

        if caller != auction.creator {
            return Err(Error::NotCreator);
        }
        if !auction.ended {
            return Err(Error::AuctionNotEnded);
        }
        if auction.withdrawn {
            return Err(Error::AlreadyWithdrawn);
        }

        let amount = escrow::pay_out(e, &auction.payment_token, auction_id, &caller)?;

        auction.withdrawn = true;
        storage::save_auction(e, &auction);

        FundsWithdrawnEventData {
            auction_id,
            recipient: caller,
            amount,
        }
        .publish(e);

        Ok(amount)
    }

    pub fn get_auction(e: &Env, auction_id: u64) -> Result<Auction, Error> {
        storage::get_auction(e, auction_id).ok_or(Error::AuctionNotFound)
    }

    pub fn get_highest_bid(e: &Env, auction_id: u64) -> Result<(Option<Address>, i128), Error> {
        let auction = storage::get_auction(e, auction_id).ok_or(Error::AuctionNotFound)?;
        Ok((auction.highest_bidder, auction.highest_bid))
    }

    pub fn pending_return(e: &Env, auction_id: u64, party: Address) -> i128 {
        escrow::balance(e, auction_id, &party)
    }
}

#[cfg(test)]
mod test;
