use soroban_sdk::{contracttype, Address};

/// Storage keys shared by both auction engines.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Engine configuration, written once at initialization
    Config,
    /// Auction record by caller-chosen identifier
    Auction(u64),
    /// Escrowed refundable balance by auction and party
    PendingReturn(u64, Address),
}

/// Notion of time a deployment measures deadlines in.
///
/// Fixed once per engine instance; deadlines created under one basis are
/// never compared against the other.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimeBasis {
    /// Ledger timestamp, in seconds
    Timestamp,
    /// Ledger sequence number
    LedgerSequence,
}

/// Engine configuration recorded at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub time_basis: TimeBasis,
}

/// A timed sale of one external NFT.
///
/// `highest_bid` is seeded with the starting price, so the floor and the
/// increment rule are enforced by the same comparison. `second_highest_bid`
/// is only meaningful to the second-price engine and keeps its seed value
/// in the English variant.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub auction_id: u64,
    pub creator: Address,
    pub nft_contract: Address,
    pub token_id: u32,
    pub payment_token: Address,
    pub starting_price: i128,
    pub min_bid_increment: i128,
    pub end_time: u64,
    pub highest_bid: i128,
    pub highest_bidder: Option<Address>,
    pub second_highest_bid: i128,
    pub ended: bool,
    pub withdrawn: bool,
}
