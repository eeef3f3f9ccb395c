use soroban_sdk::{Address, Env};

use crate::types::{Auction, Config, DataKey};

pub fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Config)
}

pub fn get_config(e: &Env) -> Option<Config> {
    e.storage().instance().get(&DataKey::Config)
}

pub fn set_config(e: &Env, config: &Config) {
    e.storage().instance().set(&DataKey::Config, config);
}

pub fn has_auction(e: &Env, auction_id: u64) -> bool {
    e.storage().persistent().has(&DataKey::Auction(auction_id))
}

pub fn get_auction(e: &Env, auction_id: u64) -> Option<Auction> {
    e.storage().persistent().get(&DataKey::Auction(auction_id))
}

pub fn save_auction(e: &Env, auction: &Auction) {
    e.storage()
        .persistent()
        .set(&DataKey::Auction(auction.auction_id), auction);
}

pub fn get_pending_return(e: &Env, auction_id: u64, party: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&DataKey::PendingReturn(auction_id, party.clone()))
        .unwrap_or(0)
}

pub fn set_pending_return(e: &Env, auction_id: u64, party: &Address, amount: i128) {
    e.storage()
        .persistent()
        .set(&DataKey::PendingReturn(auction_id, party.clone()), &amount);
}

pub fn remove_pending_return(e: &Env, auction_id: u64, party: &Address) {
    e.storage()
        .persistent()
        .remove(&DataKey::PendingReturn(auction_id, party.clone()));
}
