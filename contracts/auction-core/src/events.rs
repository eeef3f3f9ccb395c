use soroban_sdk::{contractevent, Address};

/// Event published when a new auction is registered.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreatedEventData {
    #[topic]
    pub auction_id: u64,
    pub creator: Address,
    pub min_bid_increment: i128,
    pub starting_price: i128,
    pub end_time: u64,
}

/// Event published when a bid is accepted.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NewBidPlacedEventData {
    #[topic]
    pub auction_id: u64,
    pub bidder: Address,
    pub amount: i128,
}

/// Event published when an auction is settled. `amount` is what the
/// creator was paid: the highest bid in the English variant, the
/// second-highest in the second-price variant, zero when nobody bid.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionEndedEventData {
    #[topic]
    pub auction_id: u64,
    pub winner: Option<Address>,
    pub amount: i128,
}

/// Event published when escrowed funds leave the engine.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsWithdrawnEventData {
    #[topic]
    pub auction_id: u64,
    pub recipient: Address,
    pub amount: i128,
}
