use gavel::{ error::ErrorCode, guards::Timelock };
use soroban_sdk::{ Address, BytesN, Env, Vec };

use crate::{
    controller::settlement::Settlement,
    storage::{ Auction, AuctionParams, AuctionPolicy, Config, EntryFeeReceipt },
};

pub trait OwnershipTrait {
    // ################################################################
    //                             OWNER
    // ################################################################

    /// Nominates `new_owner`. Needs an open timelock window and the quorum.
    fn transfer_ownership(env: Env, sender: Address, new_owner: Address) -> Result<(), ErrorCode>;

    fn reset_pending_owner(env: Env, sender: Address) -> Result<(), ErrorCode>;

    /// Unlocks renunciation. Needs an open timelock window and the quorum.
    fn start_renounce_process(env: Env, sender: Address) -> Result<(), ErrorCode>;

    fn terminate_renounce_process(env: Env, sender: Address) -> Result<(), ErrorCode>;

    fn renounce_ownership(env: Env, sender: Address) -> Result<(), ErrorCode>;

    // ################################################################
    //                          PENDING OWNER
    // ################################################################

    fn accept_ownership(env: Env, sender: Address) -> Result<(), ErrorCode>;

    // ################################################################
    //                             SIGNERS
    // ################################################################

    /// Hands ownership to `new_owner` without the handshake. Needs an open
    /// timelock window and the quorum.
    fn social_guardian_recovery(
        env: Env,
        signer: Address,
        new_owner: Address
    ) -> Result<(), ErrorCode>;

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn query_owner(env: Env) -> Option<Address>;

    fn query_pending_owner(env: Env) -> Option<Address>;

    fn query_renounce_unlocked(env: Env) -> bool;
}

pub trait GuardTrait {
    // ################################################################
    //                             SIGNERS
    // ################################################################

    /// Returns the number of signatures in the current round
    fn register_signature(env: Env, signer: Address) -> Result<u32, ErrorCode>;

    /// Opens a timelock queue. Callable by the owner or a signer once the
    /// quorum is reached.
    fn start_queue(env: Env, sender: Address) -> Result<(), ErrorCode>;

    // ################################################################
    //                             OWNER
    // ################################################################

    fn turn_emergency_pause_on(env: Env, sender: Address) -> Result<(), ErrorCode>;

    fn turn_emergency_pause_off(env: Env, sender: Address) -> Result<(), ErrorCode>;

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn query_signers(env: Env) -> Vec<Address>;

    fn query_required_signatures(env: Env) -> u32;

    /// Signatures still valid at the current timestamp
    fn query_signature_count(env: Env) -> u32;

    fn query_has_signed(env: Env, signer: Address) -> bool;

    fn query_signatures_expire_at(env: Env) -> u64;

    fn query_timelock(env: Env) -> Timelock;

    fn query_paused(env: Env) -> bool;
}

pub trait AuctionHouseTrait {
    // ################################################################
    //                             OWNER
    // ################################################################

    fn create_auction(
        env: Env,
        sender: Address,
        auction_id: BytesN<32>,
        params: AuctionParams
    ) -> Result<(), ErrorCode>;

    fn configure_as_cancellable_auction(
        env: Env,
        sender: Address,
        auction_id: BytesN<32>
    ) -> Result<(), ErrorCode>;

    fn cancel_auction(env: Env, sender: Address, auction_id: BytesN<32>) -> Result<(), ErrorCode>;

    fn configure_as_closed_auction(
        env: Env,
        sender: Address,
        auction_id: BytesN<32>
    ) -> Result<(), ErrorCode>;

    fn whitelist_participants(
        env: Env,
        sender: Address,
        auction_id: BytesN<32>,
        participants: Vec<Address>
    ) -> Result<(), ErrorCode>;

    fn configure_as_blacklisted_auction(
        env: Env,
        sender: Address,
        auction_id: BytesN<32>
    ) -> Result<(), ErrorCode>;

    fn blacklist_participants(
        env: Env,
        sender: Address,
        auction_id: BytesN<32>,
        participants: Vec<Address>
    ) -> Result<(), ErrorCode>;

    fn set_entry_fee(
        env: Env,
        sender: Address,
        auction_id: BytesN<32>,
        fee: i128
    ) -> Result<(), ErrorCode>;

    // ################################################################
    //                             USER
    // ################################################################

    /// Adds `amount` to the bidder's commitment and returns the new total
    fn bid(env: Env, bidder: Address, auction_id: BytesN<32>, amount: i128) -> Result<i128, ErrorCode>;

    fn withdraw(env: Env, sender: Address, auction_id: BytesN<32>) -> Result<Settlement, ErrorCode>;

    fn pay_entry_fee(
        env: Env,
        payer: Address,
        auction_id: BytesN<32>,
        amount: i128
    ) -> Result<(), ErrorCode>;

    fn withdraw_entry_fee(env: Env, payer: Address, auction_id: BytesN<32>) -> Result<i128, ErrorCode>;

    /// Acknowledges items delivered through a collectible's safe transfer.
    /// Writes no state and publishes no event.
    fn on_collectible_received(env: Env, operator: Address, from: Address, item_id: u128) -> u32;

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn query_config(env: Env) -> Config;

    fn query_auction(env: Env, auction_id: BytesN<32>) -> Result<Auction, ErrorCode>;

    fn query_bid(env: Env, auction_id: BytesN<32>, bidder: Address) -> i128;

    fn query_policy(env: Env, auction_id: BytesN<32>) -> AuctionPolicy;

    fn query_is_whitelisted(env: Env, auction_id: BytesN<32>, address: Address) -> bool;

    fn query_is_blacklisted(env: Env, auction_id: BytesN<32>, address: Address) -> bool;

    fn query_entry_fee_receipt(env: Env, auction_id: BytesN<32>, payer: Address) -> EntryFeeReceipt;
}
