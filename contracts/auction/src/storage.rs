use gavel::{
    constants::{
        INSTANCE_BUMP_AMOUNT,
        INSTANCE_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
        PERSISTENT_LIFETIME_THRESHOLD,
    },
    error::{ ErrorCode, GavelResult },
    guards::{ Ownership, PauseSwitch, Quorum, Timelock },
};
use soroban_sdk::{
    contracttype,
    log,
    panic_with_error,
    Address,
    BytesN,
    Env,
    IntoVal,
    String,
    TryFromVal,
    Val,
};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Ownership,
    Quorum,
    Timelock,
    Pause,
    Auction(BytesN<32>),
    Bid(BytesN<32>, Address),
    Policy(BytesN<32>),
    Whitelisted(BytesN<32>, Address),
    Blacklisted(BytesN<32>, Address),
    EntryFee(BytesN<32>, Address),
    Escrowed(Address, u128),
}

fn read_instance<T: TryFromVal<Env, Val>>(env: &Env, key: &DataKey) -> T {
    let value = env
        .storage()
        .instance()
        .get(key)
        .unwrap_or_else(|| {
            log!(env, "Auction House: instance storage is not initialized");
            panic_with_error!(env, ErrorCode::NotInitialized)
        });

    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

    value
}

fn write_instance<T: IntoVal<Env, Val>>(env: &Env, key: &DataKey, value: &T) {
    env.storage().instance().set(key, value);
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn read_persistent<T: TryFromVal<Env, Val>>(env: &Env, key: &DataKey) -> Option<T> {
    let value = env.storage().persistent().get::<_, T>(key);
    if value.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }

    value
}

fn write_persistent<T: IntoVal<Env, Val>>(env: &Env, key: &DataKey, value: &T) {
    env.storage().persistent().set(key, value);
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ################################################################
//                             Config
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Token every bid and entry fee is paid in
    pub payment_token: Address,
}

pub fn get_config(env: &Env) -> Config {
    read_instance(env, &DataKey::Config)
}

pub fn save_config(env: &Env, config: &Config) {
    write_instance(env, &DataKey::Config, config);
}

// ################################################################
//                             Guards
// ################################################################

pub fn get_ownership(env: &Env) -> Ownership {
    read_instance(env, &DataKey::Ownership)
}

pub fn save_ownership(env: &Env, ownership: &Ownership) {
    write_instance(env, &DataKey::Ownership, ownership);
}

pub fn get_quorum(env: &Env) -> Quorum {
    read_instance(env, &DataKey::Quorum)
}

pub fn save_quorum(env: &Env, quorum: &Quorum) {
    write_instance(env, &DataKey::Quorum, quorum);
}

pub fn get_timelock(env: &Env) -> Timelock {
    read_instance(env, &DataKey::Timelock)
}

pub fn save_timelock(env: &Env, timelock: &Timelock) {
    write_instance(env, &DataKey::Timelock, timelock);
}

pub fn get_pause(env: &Env) -> PauseSwitch {
    read_instance(env, &DataKey::Pause)
}

pub fn save_pause(env: &Env, pause: &PauseSwitch) {
    write_instance(env, &DataKey::Pause, pause);
}

// ################################################################
//                             Auction
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionParams {
    /// First ledger sequence accepting bids
    pub start_block: u32,
    /// Last ledger sequence accepting bids
    pub end_block: u32,
    pub starting_price: i128,
    /// Margin a challenger must clear over the highest bid. At zero, matching
    /// the highest bid is enough to take the lead
    pub bid_increment: i128,
    /// Below this highest bid the item is not sold
    pub reserve_price: i128,
    /// A bid placed this many blocks or fewer before the end extends the auction
    pub snipe_interval: u32,
    /// Blocks added to the end by each late bid
    pub snipe_extension: u32,
    /// Collectible contract custodying the item
    pub collectible: Address,
    pub item_id: u128,
    /// Off-ledger description of the item
    pub metadata_uri: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    /// Terms set at creation. Only `end_block` changes afterwards, through
    /// anti-snipe extensions
    pub terms: AuctionParams,
    pub highest_bid: i128,
    pub highest_bidder: Option<Address>,
    /// Currency currently held for this auction's bids
    pub escrowed: i128,
    pub proceeds_withdrawn: bool,
    /// The item left escrow, to the winner or back to the owner
    pub item_settled: bool,
}

impl Auction {
    pub fn new(terms: AuctionParams) -> Self {
        Auction {
            terms,
            highest_bid: 0,
            highest_bidder: None,
            escrowed: 0,
            proceeds_withdrawn: false,
            item_settled: false,
        }
    }

    pub fn has_started(&self, block: u32) -> bool {
        block >= self.terms.start_block
    }

    pub fn has_ended(&self, block: u32) -> bool {
        block > self.terms.end_block
    }

    pub fn has_bids(&self) -> bool {
        self.highest_bidder.is_some()
    }

    pub fn reserve_met(&self) -> bool {
        self.has_bids() && self.highest_bid >= self.terms.reserve_price
    }

    /// Bidder entitled to the item once the auction is over
    pub fn winner(&self) -> Option<Address> {
        if self.reserve_met() { self.highest_bidder.clone() } else { None }
    }

    /// Smallest cumulative commitment the next bid must reach
    pub fn minimum_total(&self) -> GavelResult<i128> {
        if !self.has_bids() {
            return Ok(self.terms.starting_price);
        }
        let outbid = self.highest_bid
            .checked_add(self.terms.bid_increment)
            .ok_or(ErrorCode::MathOverflow)?;

        Ok(outbid.max(self.terms.starting_price))
    }
}

pub fn has_auction(env: &Env, id: &BytesN<32>) -> bool {
    env.storage().persistent().has(&DataKey::Auction(id.clone()))
}

pub fn get_auction(env: &Env, id: &BytesN<32>) -> Option<Auction> {
    read_persistent(env, &DataKey::Auction(id.clone()))
}

pub fn save_auction(env: &Env, id: &BytesN<32>, auction: &Auction) {
    write_persistent(env, &DataKey::Auction(id.clone()), auction);
}

// ################################################################
//                             Escrow
// ################################################################

/// Auction currently backed by `item_id` of `collectible`, if any
pub fn get_item_reservation(env: &Env, collectible: &Address, item_id: u128) -> Option<BytesN<32>> {
    read_persistent(env, &DataKey::Escrowed(collectible.clone(), item_id))
}

pub fn reserve_item(env: &Env, collectible: &Address, item_id: u128, auction_id: &BytesN<32>) {
    write_persistent(env, &DataKey::Escrowed(collectible.clone(), item_id), auction_id);
}

pub fn release_item_reservation(env: &Env, collectible: &Address, item_id: u128) {
    env.storage().persistent().remove(&DataKey::Escrowed(collectible.clone(), item_id));
}

// ################################################################
//                             Bids
// ################################################################

/// Cumulative amount `bidder` has committed to auction `id`
pub fn get_bid(env: &Env, id: &BytesN<32>, bidder: &Address) -> i128 {
    read_persistent(env, &DataKey::Bid(id.clone(), bidder.clone())).unwrap_or(0)
}

pub fn save_bid(env: &Env, id: &BytesN<32>, bidder: &Address, amount: i128) {
    write_persistent(env, &DataKey::Bid(id.clone(), bidder.clone()), &amount);
}

// ################################################################
//                             Policy
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AuctionPolicy {
    pub cancellable: bool,
    pub cancelled: bool,
    /// Only whitelisted addresses may bid
    pub closed: bool,
    /// Blacklisted addresses may not bid
    pub blacklisting: bool,
    /// Zero when no entry fee is charged
    pub entry_fee: i128,
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EntryFeeReceipt {
    pub paid: bool,
    pub withdrawn: bool,
}

pub fn get_policy(env: &Env, id: &BytesN<32>) -> AuctionPolicy {
    read_persistent(env, &DataKey::Policy(id.clone())).unwrap_or_default()
}

pub fn save_policy(env: &Env, id: &BytesN<32>, policy: &AuctionPolicy) {
    write_persistent(env, &DataKey::Policy(id.clone()), policy);
}

pub fn is_whitelisted(env: &Env, id: &BytesN<32>, address: &Address) -> bool {
    read_persistent(env, &DataKey::Whitelisted(id.clone(), address.clone())).unwrap_or(false)
}

pub fn save_whitelisted(env: &Env, id: &BytesN<32>, address: &Address) {
    write_persistent(env, &DataKey::Whitelisted(id.clone(), address.clone()), &true);
}

pub fn is_blacklisted(env: &Env, id: &BytesN<32>, address: &Address) -> bool {
    read_persistent(env, &DataKey::Blacklisted(id.clone(), address.clone())).unwrap_or(false)
}

pub fn save_blacklisted(env: &Env, id: &BytesN<32>, address: &Address) {
    write_persistent(env, &DataKey::Blacklisted(id.clone(), address.clone()), &true);
}

pub fn get_entry_fee_receipt(env: &Env, id: &BytesN<32>, payer: &Address) -> EntryFeeReceipt {
    read_persistent(env, &DataKey::EntryFee(id.clone(), payer.clone())).unwrap_or_default()
}

pub fn save_entry_fee_receipt(
    env: &Env,
    id: &BytesN<32>,
    payer: &Address,
    receipt: &EntryFeeReceipt
) {
    write_persistent(env, &DataKey::EntryFee(id.clone(), payer.clone()), receipt);
}
