//! Per-auction policies: cancellation, closed (whitelist) mode, blacklist mode
//! and entry fees. Modes are switched on before the auction starts, once.

use gavel::{ error::{ ErrorCode, GavelResult }, validate };
use soroban_sdk::{ Address, BytesN, Env, Symbol, Vec };

use crate::{
    collectible::burn_item,
    controller::{ current_block, load_auction, receive_payment, send_payment },
    events::AuctionHouseEvents,
    storage::{
        get_entry_fee_receipt,
        get_policy,
        is_blacklisted,
        is_whitelisted,
        save_auction,
        save_blacklisted,
        save_entry_fee_receipt,
        save_policy,
        save_whitelisted,
        AuctionPolicy,
    },
};

fn ensure_not_started(env: &Env, auction_id: &BytesN<32>) -> GavelResult {
    let auction = load_auction(env, auction_id)?;
    validate!(
        env,
        !auction.has_started(current_block(env)),
        ErrorCode::AuctionAlreadyStarted,
        "Auction House: Policy: auction has already started"
    )
}

fn ensure_not_ended(env: &Env, auction_id: &BytesN<32>) -> GavelResult {
    let auction = load_auction(env, auction_id)?;
    validate!(
        env,
        !auction.has_ended(current_block(env)),
        ErrorCode::AuctionEnded,
        "Auction House: Policy: auction has ended"
    )
}

/// Applies a one-shot mode switch to the auction's policy
fn configure(
    env: &Env,
    auction_id: &BytesN<32>,
    name: &str,
    switch: impl FnOnce(&mut AuctionPolicy) -> bool
) -> GavelResult {
    ensure_not_started(env, auction_id)?;

    let mut policy = get_policy(env, auction_id);
    let already_on = switch(&mut policy);
    validate!(
        env,
        !already_on,
        ErrorCode::AlreadyConfigured,
        "Auction House: Policy: mode was already configured"
    )?;

    save_policy(env, auction_id, &policy);
    AuctionHouseEvents::auction_configured(env, auction_id.clone(), Symbol::new(env, name));
    Ok(())
}

/// Raises `flag`, reporting whether it was already up
fn raise(flag: &mut bool) -> bool {
    core::mem::replace(flag, true)
}

// ################################################################
//                           Cancellation
// ################################################################

pub fn configure_as_cancellable(env: &Env, auction_id: &BytesN<32>) -> GavelResult {
    configure(env, auction_id, "cancellable", |policy| raise(&mut policy.cancellable))
}

/// Cancels the auction and burns its escrowed item. Bidders then withdraw
/// their commitments through the regular withdrawal.
pub fn cancel(env: &Env, auction_id: &BytesN<32>) -> GavelResult {
    let mut auction = load_auction(env, auction_id)?;
    let mut policy = get_policy(env, auction_id);

    validate!(
        env,
        !auction.has_ended(current_block(env)),
        ErrorCode::AuctionEnded,
        "Auction House: Cancel: auction has ended"
    )?;
    validate!(
        env,
        policy.cancellable,
        ErrorCode::NotCancellable,
        "Auction House: Cancel: auction is not cancellable"
    )?;
    validate!(
        env,
        !policy.cancelled,
        ErrorCode::AuctionCancelled,
        "Auction House: Cancel: auction was already cancelled"
    )?;

    policy.cancelled = true;
    auction.item_settled = true;
    save_policy(env, auction_id, &policy);
    save_auction(env, auction_id, &auction);

    burn_item(env, &auction.terms.collectible, auction.terms.item_id);

    AuctionHouseEvents::auction_cancelled(env, auction_id.clone(), auction.terms.item_id);
    Ok(())
}

// ################################################################
//                         Closed / Blacklist
// ################################################################

pub fn configure_as_closed(env: &Env, auction_id: &BytesN<32>) -> GavelResult {
    configure(env, auction_id, "closed", |policy| raise(&mut policy.closed))
}

pub fn configure_as_blacklisted(env: &Env, auction_id: &BytesN<32>) -> GavelResult {
    configure(env, auction_id, "blacklisted", |policy| raise(&mut policy.blacklisting))
}

pub fn whitelist(env: &Env, auction_id: &BytesN<32>, participants: Vec<Address>) -> GavelResult {
    ensure_not_ended(env, auction_id)?;
    validate!(
        env,
        get_policy(env, auction_id).closed,
        ErrorCode::NotClosedAuction,
        "Auction House: Whitelist: auction is not closed"
    )?;

    for participant in participants.iter() {
        save_whitelisted(env, auction_id, &participant);
    }

    AuctionHouseEvents::participants_whitelisted(env, auction_id.clone(), participants);
    Ok(())
}

pub fn blacklist(env: &Env, auction_id: &BytesN<32>, participants: Vec<Address>) -> GavelResult {
    ensure_not_ended(env, auction_id)?;
    validate!(
        env,
        get_policy(env, auction_id).blacklisting,
        ErrorCode::NotBlacklistedAuction,
        "Auction House: Blacklist: auction does not use a blacklist"
    )?;

    for participant in participants.iter() {
        save_blacklisted(env, auction_id, &participant);
    }

    AuctionHouseEvents::participants_blacklisted(env, auction_id.clone(), participants);
    Ok(())
}

// ################################################################
//                             Entry fee
// ################################################################

pub fn set_entry_fee(env: &Env, auction_id: &BytesN<32>, fee: i128) -> GavelResult {
    ensure_not_started(env, auction_id)?;
    validate!(
        env,
        fee > 0,
        ErrorCode::InvalidAmount,
        "Auction House: Entry Fee: fee must be positive"
    )?;

    let mut policy = get_policy(env, auction_id);
    validate!(
        env,
        policy.entry_fee == 0,
        ErrorCode::AlreadyConfigured,
        "Auction House: Entry Fee: fee was already set"
    )?;

    policy.entry_fee = fee;
    save_policy(env, auction_id, &policy);

    AuctionHouseEvents::entry_fee_set(env, auction_id.clone(), fee);
    Ok(())
}

pub fn pay_entry_fee(
    env: &Env,
    payer: &Address,
    auction_id: &BytesN<32>,
    amount: i128
) -> GavelResult {
    ensure_not_started(env, auction_id)?;

    let policy = get_policy(env, auction_id);
    validate!(
        env,
        !policy.cancelled,
        ErrorCode::AuctionCancelled,
        "Auction House: Entry Fee: auction was cancelled"
    )?;
    validate!(
        env,
        policy.entry_fee > 0,
        ErrorCode::EntryFeeNotSet,
        "Auction House: Entry Fee: auction charges no entry fee"
    )?;
    validate!(
        env,
        amount == policy.entry_fee,
        ErrorCode::EntryFeeMismatch,
        "Auction House: Entry Fee: amount does not match the fee"
    )?;

    let mut receipt = get_entry_fee_receipt(env, auction_id, payer);
    validate!(
        env,
        !receipt.paid,
        ErrorCode::EntryFeeAlreadyPaid,
        "Auction House: Entry Fee: fee was already paid"
    )?;

    receipt.paid = true;
    save_entry_fee_receipt(env, auction_id, payer, &receipt);

    receive_payment(env, payer, amount);

    AuctionHouseEvents::entry_fee_paid(env, auction_id.clone(), payer.clone(), amount);
    Ok(())
}

/// Returns a paid entry fee once the auction is over or cancelled
pub fn withdraw_entry_fee(
    env: &Env,
    payer: &Address,
    auction_id: &BytesN<32>
) -> GavelResult<i128> {
    let auction = load_auction(env, auction_id)?;
    let policy = get_policy(env, auction_id);

    validate!(
        env,
        policy.cancelled || auction.has_ended(current_block(env)),
        ErrorCode::AuctionNotOver,
        "Auction House: Entry Fee: auction is still running"
    )?;

    let mut receipt = get_entry_fee_receipt(env, auction_id, payer);
    validate!(
        env,
        receipt.paid,
        ErrorCode::EntryFeeNotPaid,
        "Auction House: Entry Fee: no fee was paid"
    )?;
    validate!(
        env,
        !receipt.withdrawn,
        ErrorCode::AlreadyWithdrawn,
        "Auction House: Entry Fee: fee was already withdrawn"
    )?;

    receipt.withdrawn = true;
    save_entry_fee_receipt(env, auction_id, payer, &receipt);

    send_payment(env, payer, policy.entry_fee);

    AuctionHouseEvents::entry_fee_withdrawn(
        env,
        auction_id.clone(),
        payer.clone(),
        policy.entry_fee
    );
    Ok(policy.entry_fee)
}

// ################################################################
//                             Bidding
// ################################################################

/// Checks `bidder` against the entry fee, the blacklist and the whitelist
pub fn ensure_bidder_admitted(
    env: &Env,
    auction_id: &BytesN<32>,
    policy: &AuctionPolicy,
    bidder: &Address
) -> GavelResult {
    if policy.entry_fee > 0 {
        validate!(
            env,
            get_entry_fee_receipt(env, auction_id, bidder).paid,
            ErrorCode::EntryFeeNotPaid,
            "Auction House: Bid: entry fee was not paid"
        )?;
    }
    if policy.blacklisting {
        validate!(
            env,
            !is_blacklisted(env, auction_id, bidder),
            ErrorCode::Blacklisted,
            "Auction House: Bid: bidder is blacklisted"
        )?;
    }
    if policy.closed {
        validate!(
            env,
            is_whitelisted(env, auction_id, bidder),
            ErrorCode::NotWhitelisted,
            "Auction House: Bid: bidder is not whitelisted"
        )?;
    }
    Ok(())
}
