
use crate::{EnglishAuctionContract, EnglishAuctionContractClient};
use auction_core::types::TimeBasis;
use auction_nft::{NftContract, NftContractClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env,
};

pub const TOKEN_ID: u32 = 1;
pub const DURATION: u64 = 3600;

pub struct AuctionTest {
    pub env: Env,
    pub client: EnglishAuctionContractClient<'static>,
    pub nft: NftContractClient<'static>,
    pub token: token::TokenClient<'static>,
    pub token_admin: token::StellarAssetClient<'static>,
    pub seller: Address,
    pub bidder1: Address,
    pub bidder2: Address,
}

impl AuctionTest {
    pub fn setup() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();

        let contract_id = env.register(EnglishAuctionContract, ());
        let client = EnglishAuctionContractClient::new(&env, &contract_id);
        client.initialize(&TimeBasis::Timestamp);

        let nft_id = env.register(NftContract, ());
        let nft = NftContractClient::new(&env, &nft_id);

        let seller = Address::generate(&env);
        let bidder1 = Address::generate(&env);
        let bidder2 = Address::generate(&env);

        let token_issuer = Address::generate(&env);
        let sac = env.register_stellar_asset_contract_v2(token_issuer);
        let token = token::TokenClient::new(&env, &sac.address());
        let token_admin = token::StellarAssetClient::new(&env, &sac.address());

        token_admin.mint(&bidder1, &10_000_000);
        token_admin.mint(&bidder2, &10_000_000);

        nft.mint(&seller, &TOKEN_ID);
        nft.approve(&seller, &client.address, &TOKEN_ID);

        AuctionTest {
            env,
            client,
            nft,
            token,
            token_admin,
            seller,
            bidder1,
            bidder2,
        }
    }

    /// Register auction 1 over the minted NFT with the given economics.
    pub fn create_auction(&self, min_bid_increment: i128, starting_price: i128) {
        self.client.create_auction(
            &1,
            &self.seller,
            &self.nft.address,
            &TOKEN_ID,
            &self.token.address,
            &DURATION,
            &min_bid_increment,
            &starting_price,
        );
    }

    pub fn advance_time(&self, delta: u64) {
        self.env
            .ledger()
            .set_timestamp(self.env.ledger().timestamp() + delta);
    }
}
