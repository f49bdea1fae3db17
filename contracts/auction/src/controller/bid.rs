use gavel::{ error::{ ErrorCode, GavelResult }, safe_increment, validate };
use soroban_sdk::{ Address, BytesN, Env };

use crate::{
    controller::{ current_block, load_auction, receive_payment },
    events::AuctionHouseEvents,
    policy::ensure_bidder_admitted,
    storage::{ get_bid, get_policy, save_auction, save_bid },
};

/// Tops up `bidder`'s commitment by `amount`, making them the leader.
///
/// The new cumulative commitment must reach the starting price and, once
/// someone has bid, outbid the leader by at least the increment. A bid landing
/// within `snipe_interval` blocks of the end pushes the end back by
/// `snipe_extension` blocks.
///
/// Returns the bidder's cumulative commitment.
pub fn place_bid(
    env: &Env,
    bidder: &Address,
    auction_id: &BytesN<32>,
    amount: i128
) -> GavelResult<i128> {
    let mut auction = load_auction(env, auction_id)?;
    let policy = get_policy(env, auction_id);

    validate!(
        env,
        !policy.cancelled,
        ErrorCode::AuctionCancelled,
        "Auction House: Bid: auction was cancelled"
    )?;

    let block = current_block(env);
    validate!(
        env,
        auction.has_started(block),
        ErrorCode::AuctionNotStarted,
        "Auction House: Bid: auction has not started"
    )?;
    validate!(
        env,
        !auction.has_ended(block),
        ErrorCode::AuctionEnded,
        "Auction House: Bid: auction has ended"
    )?;
    validate!(env, amount > 0, ErrorCode::InvalidAmount, "Auction House: Bid: amount must be positive")?;

    ensure_bidder_admitted(env, auction_id, &policy, bidder)?;

    let mut total = get_bid(env, auction_id, bidder);
    safe_increment!(total, amount);
    validate!(
        env,
        total >= auction.minimum_total()?,
        ErrorCode::BidTooLow,
        "Auction House: Bid: commitment does not outbid the leader"
    )?;

    save_bid(env, auction_id, bidder, total);
    auction.highest_bid = total;
    auction.highest_bidder = Some(bidder.clone());
    safe_increment!(auction.escrowed, amount);

    AuctionHouseEvents::bid_placed(env, auction_id.clone(), bidder.clone(), amount, total);

    let remaining = auction.terms.end_block - block;
    if auction.terms.snipe_extension > 0 && remaining <= auction.terms.snipe_interval {
        safe_increment!(auction.terms.end_block, auction.terms.snipe_extension);
        AuctionHouseEvents::snipe_prevented(
            env,
            auction_id.clone(),
            bidder.clone(),
            auction.terms.end_block
        );
    }

    save_auction(env, auction_id, &auction);

    receive_payment(env, bidder, amount);

    Ok(total)
}
