use soroban_sdk::contracterror;

/// Error codes shared by both auction engine contracts.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Engine has not been initialized
    NotInitialized = 1,
    /// Engine has already been initialized
    AlreadyInitialized = 2,
    /// No auction registered under this identifier
    AuctionNotFound = 3,
    /// An auction already exists under this identifier
    DuplicateAuction = 4,
    /// Duration, increment or starting price out of range
    InvalidParameters = 5,
    /// Creator does not own the listed NFT
    NotTokenOwner = 6,
    /// Engine is not approved to transfer the listed NFT
    NotApproved = 7,
    /// Deadline has passed or the auction was already ended
    AuctionExpired = 8,
    /// Deadline has not been reached yet
    AuctionStillActive = 9,
    /// Auction was already ended
    AlreadyEnded = 10,
    /// Creators cannot bid on their own auctions
    SelfBid = 11,
    /// Caller already holds the highest bid
    AlreadyHighestBidder = 12,
    /// Bid does not clear the current bid plus the minimum increment
    BidTooLow = 13,
    /// Bid does not clear the highest bid by the minimum increment
    BidIncrementTooLow = 14,
    /// Only the auction creator can perform this action
    NotCreator = 15,
    /// Auction has not been ended yet
    AuctionNotEnded = 16,
    /// Settlement proceeds were already withdrawn
    AlreadyWithdrawn = 17,
    /// A payment or NFT transfer failed
    TransferFailed = 18,
}
