#![no_std]

use soroban_sdk::{contract, contractimpl, Address, Env};

use auction_core::errors::Error;
use auction_core::events::{AuctionEndedEventData, FundsWithdrawnEventData, NewBidPlacedEventData};
use auction_core::types::{Auction, Config, TimeBasis};
use auction_core::{escrow, nft, registry, storage, time};

/// Second-price (Vickrey) auction engine.
///
/// Every bid is escrowed in full and nothing is refunded while the auction
/// runs. The engine tracks the highest and second-highest bids; at
/// settlement the winner pays the second-highest amount, their overpayment
/// becomes withdrawable, and every losing bid stays withdrawable in the
/// pending-returns ledger.
#[contract]
pub struct SecondPriceAuctionContract;

#[contractimpl]
impl SecondPriceAuctionContract {
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

    /// Submit a bid. The full amount stays escrowed until settlement or
    /// withdrawal.
    ///
    /// A bid that beats the current highest promotes exactly the previous
    /// highest bid to second place (single-slot promotion, not a sorted
    /// list) and parks the previous leader's funds in their pending
    /// returns. A tie, possible only with a zero increment, leaves the
    /// earlier bidder on top.
    pub fn submit_bid(
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
        if amount < auction.highest_bid + auction.min_bid_increment {
            return Err(Error::BidIncrementTooLow);
        }

        escrow::deposit(e, &auction.payment_token, &bidder, amount)?;

        match auction.highest_bidder.clone() {
            Some(_) if amount == auction.highest_bid => {
                // Tie: the earlier bidder keeps precedence, the newcomer's
                // funds wait in their pending returns.
                auction.second_highest_bid = amount;
                escrow::credit(e, auction_id, &bidder, amount);
            }
            previous => {
                if let Some(previous_bidder) = previous {
                    escrow::credit(e, auction_id, &previous_bidder, auction.highest_bid);
                }
                auction.second_highest_bid = auction.highest_bid;
                auction.highest_bid = amount;
                auction.highest_bidder = Some(bidder.clone());
            }
        }

        storage::save_auction(e, &auction);

        NewBidPlacedEventData {
            auction_id,
            bidder,
            amount,
        }
        .publish(e);

        Ok(())
    }

    /// End the auction after its deadline. The creator is paid the
    /// second-highest bid, the winner's overpayment becomes withdrawable
    /// and the NFT moves to the winner. With no bids the auction just
    /// closes.
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
            amount = auction.second_highest_bid;
            escrow::disburse(e, &auction.payment_token, &auction.creator, amount)?;
            escrow::credit(e, auction_id, &winner, auction.highest_bid - amount);
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

    /// Pay out the caller's pending returns in full. A zero balance is a
    /// no-op success, so repeated calls are harmless and pay at most once.
    pub fn withdraw(e: &Env, auction_id: u64, caller: Address) -> Result<i128, Error> {
        caller.require_auth();

        let auction = storage::get_auction(e, auction_id).ok_or(Error::AuctionNotFound)?;

        let amount = escrow::pay_out(e, &auction.payment_token, auction_id, &caller)?;

        if amount > 0 {
            FundsWithdrawnEventData {
                auction_id,
                recipient: caller,
                amount,
            }
            .publish(e);
        }

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
