use soroban_sdk::{ Address, BytesN, Env, Symbol, Vec };

use crate::storage::AuctionParams;

pub struct AuctionHouseEvents {}

impl AuctionHouseEvents {
    /// Emitted once when the auction house is deployed
    ///
    /// - topics - `["initialize", owner: Address]`
    /// - data - `[payment_token: Address, signer_count: u32, required_signatures: u32]`
    pub fn initialize(
        env: &Env,
        owner: Address,
        payment_token: Address,
        signer_count: u32,
        required_signatures: u32
    ) {
        let topics = (Symbol::new(env, "initialize"), owner);
        env.events().publish(topics, (payment_token, signer_count, required_signatures));
    }

    /// Emitted when an auction is created
    ///
    /// - topics - `["auction_created", auction_id: BytesN<32>]`
    /// - data - `params: AuctionParams`
    pub fn auction_created(env: &Env, auction_id: BytesN<32>, params: AuctionParams) {
        let topics = (Symbol::new(env, "auction_created"), auction_id);
        env.events().publish(topics, params);
    }

    /// Emitted when a bid raises the bidder's commitment
    ///
    /// - topics - `["bid_placed", auction_id: BytesN<32>, bidder: Address]`
    /// - data - `[amount: i128, total: i128]`
    pub fn bid_placed(
        env: &Env,
        auction_id: BytesN<32>,
        bidder: Address,
        amount: i128,
        total: i128
    ) {
        let topics = (Symbol::new(env, "bid_placed"), auction_id, bidder);
        env.events().publish(topics, (amount, total));
    }

    /// Emitted when a late bid pushes the end of the auction
    ///
    /// - topics - `["snipe_prevented", auction_id: BytesN<32>]`
    /// - data - `[bidder: Address, new_end_block: u32]`
    pub fn snipe_prevented(env: &Env, auction_id: BytesN<32>, bidder: Address, new_end_block: u32) {
        let topics = (Symbol::new(env, "snipe_prevented"), auction_id);
        env.events().publish(topics, (bidder, new_end_block));
    }

    /// - topics - `["auction_cancelled", auction_id: BytesN<32>]`
    /// - data - `item_id: u128`
    pub fn auction_cancelled(env: &Env, auction_id: BytesN<32>, item_id: u128) {
        let topics = (Symbol::new(env, "auction_cancelled"), auction_id);
        env.events().publish(topics, item_id);
    }

    /// Emitted when one of the auction policies is switched on
    ///
    /// - topics - `["auction_configured", auction_id: BytesN<32>]`
    /// - data - `policy: Symbol`
    pub fn auction_configured(env: &Env, auction_id: BytesN<32>, policy: Symbol) {
        let topics = (Symbol::new(env, "auction_configured"), auction_id);
        env.events().publish(topics, policy);
    }

    /// - topics - `["participants_whitelisted", auction_id: BytesN<32>]`
    /// - data - `participants: Vec<Address>`
    pub fn participants_whitelisted(env: &Env, auction_id: BytesN<32>, participants: Vec<Address>) {
        let topics = (Symbol::new(env, "participants_whitelisted"), auction_id);
        env.events().publish(topics, participants);
    }

    /// - topics - `["participants_blacklisted", auction_id: BytesN<32>]`
    /// - data - `participants: Vec<Address>`
    pub fn participants_blacklisted(env: &Env, auction_id: BytesN<32>, participants: Vec<Address>) {
        let topics = (Symbol::new(env, "participants_blacklisted"), auction_id);
        env.events().publish(topics, participants);
    }

    /// - topics - `["entry_fee_set", auction_id: BytesN<32>]`
    /// - data - `fee: i128`
    pub fn entry_fee_set(env: &Env, auction_id: BytesN<32>, fee: i128) {
        let topics = (Symbol::new(env, "entry_fee_set"), auction_id);
        env.events().publish(topics, fee);
    }

    /// - topics - `["entry_fee_paid", auction_id: BytesN<32>, payer: Address]`
    /// - data - `amount: i128`
    pub fn entry_fee_paid(env: &Env, auction_id: BytesN<32>, payer: Address, amount: i128) {
        let topics = (Symbol::new(env, "entry_fee_paid"), auction_id, payer);
        env.events().publish(topics, amount);
    }

    /// - topics - `["entry_fee_withdrawn", auction_id: BytesN<32>, payer: Address]`
    /// - data - `amount: i128`
    pub fn entry_fee_withdrawn(env: &Env, auction_id: BytesN<32>, payer: Address, amount: i128) {
        let topics = (Symbol::new(env, "entry_fee_withdrawn"), auction_id, payer);
        env.events().publish(topics, amount);
    }

    /// Emitted when a bidder takes back a losing or unsold commitment
    ///
    /// - topics - `["bid_withdrawn", auction_id: BytesN<32>, bidder: Address]`
    /// - data - `amount: i128`
    pub fn bid_withdrawn(env: &Env, auction_id: BytesN<32>, bidder: Address, amount: i128) {
        let topics = (Symbol::new(env, "bid_withdrawn"), auction_id, bidder);
        env.events().publish(topics, amount);
    }

    /// - topics - `["proceeds_withdrawn", auction_id: BytesN<32>, owner: Address]`
    /// - data - `[winner: Address, amount: i128]`
    pub fn proceeds_withdrawn(
        env: &Env,
        auction_id: BytesN<32>,
        owner: Address,
        winner: Address,
        amount: i128
    ) {
        let topics = (Symbol::new(env, "proceeds_withdrawn"), auction_id, owner);
        env.events().publish(topics, (winner, amount));
    }

    /// - topics - `["item_claimed", auction_id: BytesN<32>, winner: Address]`
    /// - data - `item_id: u128`
    pub fn item_claimed(env: &Env, auction_id: BytesN<32>, winner: Address, item_id: u128) {
        let topics = (Symbol::new(env, "item_claimed"), auction_id, winner);
        env.events().publish(topics, item_id);
    }

    /// Emitted when the owner takes back an item that did not sell
    ///
    /// - topics - `["item_reclaimed", auction_id: BytesN<32>, owner: Address]`
    /// - data - `item_id: u128`
    pub fn item_reclaimed(env: &Env, auction_id: BytesN<32>, owner: Address, item_id: u128) {
        let topics = (Symbol::new(env, "item_reclaimed"), auction_id, owner);
        env.events().publish(topics, item_id);
    }
}

pub struct GuardEvents {}

impl GuardEvents {
    // Ownership

    /// - topics - `["ownership_transfer_initiated", owner: Address]`
    /// - data - `pending_owner: Address`
    pub fn ownership_transfer_initiated(env: &Env, owner: Address, pending_owner: Address) {
        let topics = (Symbol::new(env, "ownership_transfer_initiated"), owner);
        env.events().publish(topics, pending_owner);
    }

    /// - topics - `["ownership_transfer_completed", new_owner: Address]`
    /// - data - `previous_owner: Option<Address>`
    pub fn ownership_transfer_completed(
        env: &Env,
        new_owner: Address,
        previous_owner: Option<Address>
    ) {
        let topics = (Symbol::new(env, "ownership_transfer_completed"), new_owner);
        env.events().publish(topics, previous_owner);
    }

    /// - topics - `["pending_owner_reset", owner: Address]`
    /// - data - `dropped: Address`
    pub fn pending_owner_reset(env: &Env, owner: Address, dropped: Address) {
        let topics = (Symbol::new(env, "pending_owner_reset"), owner);
        env.events().publish(topics, dropped);
    }

    /// - topics - `["renounce_started", owner: Address]`
    /// - data - `timestamp: u64`
    pub fn renounce_started(env: &Env, owner: Address, timestamp: u64) {
        let topics = (Symbol::new(env, "renounce_started"), owner);
        env.events().publish(topics, timestamp);
    }

    /// - topics - `["renounce_terminated", owner: Address]`
    /// - data - `timestamp: u64`
    pub fn renounce_terminated(env: &Env, owner: Address, timestamp: u64) {
        let topics = (Symbol::new(env, "renounce_terminated"), owner);
        env.events().publish(topics, timestamp);
    }

    /// - topics - `["ownership_renounced", previous_owner: Address]`
    /// - data - `timestamp: u64`
    pub fn ownership_renounced(env: &Env, previous_owner: Address, timestamp: u64) {
        let topics = (Symbol::new(env, "ownership_renounced"), previous_owner);
        env.events().publish(topics, timestamp);
    }

    /// Emitted when the signers hand ownership to a new address
    ///
    /// - topics - `["guardian_recovery", signer: Address]`
    /// - data - `[previous_owner: Address, new_owner: Address]`
    pub fn guardian_recovery(
        env: &Env,
        signer: Address,
        previous_owner: Address,
        new_owner: Address
    ) {
        let topics = (Symbol::new(env, "guardian_recovery"), signer);
        env.events().publish(topics, (previous_owner, new_owner));
    }

    // Timelock

    /// - topics - `["queue_started", sender: Address]`
    /// - data - `[opens: u64, closes: u64]`
    pub fn queue_started(env: &Env, sender: Address, opens: u64, closes: u64) {
        let topics = (Symbol::new(env, "queue_started"), sender);
        env.events().publish(topics, (opens, closes));
    }

    // Quorum

    /// - topics - `["signatures_expired", signer: Address]`
    /// - data - `timestamp: u64`
    pub fn signatures_expired(env: &Env, signer: Address, timestamp: u64) {
        let topics = (Symbol::new(env, "signatures_expired"), signer);
        env.events().publish(topics, timestamp);
    }

    /// - topics - `["signature_round_started", signer: Address]`
    /// - data - `expires_at: u64`
    pub fn signature_round_started(env: &Env, signer: Address, expires_at: u64) {
        let topics = (Symbol::new(env, "signature_round_started"), signer);
        env.events().publish(topics, expires_at);
    }

    /// - topics - `["signature_registered", signer: Address]`
    /// - data - `[count: u32, required: u32]`
    pub fn signature_registered(env: &Env, signer: Address, count: u32, required: u32) {
        let topics = (Symbol::new(env, "signature_registered"), signer);
        env.events().publish(topics, (count, required));
    }

    // Pause

    /// - topics - `["emergency_pause", owner: Address]`
    /// - data - `paused: bool`
    pub fn emergency_pause(env: &Env, owner: Address, paused: bool) {
        let topics = (Symbol::new(env, "emergency_pause"), owner);
        env.events().publish(topics, paused);
    }
}
