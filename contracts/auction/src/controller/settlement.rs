use gavel::{ error::{ ErrorCode, GavelResult }, safe_decrement, validate };
use soroban_sdk::{ contracttype, Address, BytesN, Env };

use crate::{
    collectible::release_item,
    controller::{ current_block, load_auction, send_payment },
    events::AuctionHouseEvents,
    storage::{ get_bid, get_ownership, get_policy, save_auction, save_bid, Auction },
};

/// What a withdrawal moved out of escrow
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Settlement {
    /// Nothing was owed to the caller
    Nothing,
    /// A bidder took back their commitment
    Refund(i128),
    /// The owner collected the winning bid
    Proceeds(i128),
    /// The winner received the item
    ItemClaimed,
    /// The owner took back an item that did not sell
    ItemReclaimed,
}

/// Settles `sender`'s share of a finished or cancelled auction.
///
/// Ledger entries are always written before the outbound transfer.
pub fn withdraw(env: &Env, sender: &Address, auction_id: &BytesN<32>) -> GavelResult<Settlement> {
    let mut auction = load_auction(env, auction_id)?;
    let policy = get_policy(env, auction_id);

    validate!(
        env,
        policy.cancelled || auction.has_ended(current_block(env)),
        ErrorCode::AuctionNotOver,
        "Auction House: Withdraw: auction is still running"
    )?;

    let is_owner = get_ownership(env).is_owner(sender);

    let winner = match auction.winner() {
        Some(winner) if !policy.cancelled => winner,
        _ if is_owner && !policy.cancelled => {
            return reclaim_item(env, sender, auction_id, &mut auction);
        }
        _ => {
            return refund(env, sender, auction_id, &mut auction);
        }
    };

    if is_owner {
        return collect_proceeds(env, sender, &winner, auction_id, &mut auction);
    }

    if winner == *sender {
        return claim_item(env, sender, auction_id, &mut auction);
    }

    refund(env, sender, auction_id, &mut auction)
}

fn refund(
    env: &Env,
    bidder: &Address,
    auction_id: &BytesN<32>,
    auction: &mut Auction
) -> GavelResult<Settlement> {
    let committed = get_bid(env, auction_id, bidder);
    if committed == 0 {
        return Ok(Settlement::Nothing);
    }

    save_bid(env, auction_id, bidder, 0);
    safe_decrement!(auction.escrowed, committed);
    save_auction(env, auction_id, auction);

    send_payment(env, bidder, committed);

    AuctionHouseEvents::bid_withdrawn(env, auction_id.clone(), bidder.clone(), committed);
    Ok(Settlement::Refund(committed))
}

fn collect_proceeds(
    env: &Env,
    owner: &Address,
    winner: &Address,
    auction_id: &BytesN<32>,
    auction: &mut Auction
) -> GavelResult<Settlement> {
    validate!(
        env,
        !auction.proceeds_withdrawn,
        ErrorCode::AlreadyWithdrawn,
        "Auction House: Withdraw: proceeds were already collected"
    )?;

    let amount = auction.highest_bid;

    auction.proceeds_withdrawn = true;
    save_bid(env, auction_id, winner, 0);
    safe_decrement!(auction.escrowed, amount);
    save_auction(env, auction_id, auction);

    send_payment(env, owner, amount);

    AuctionHouseEvents::proceeds_withdrawn(
        env,
        auction_id.clone(),
        owner.clone(),
        winner.clone(),
        amount
    );
    Ok(Settlement::Proceeds(amount))
}

fn claim_item(
    env: &Env,
    winner: &Address,
    auction_id: &BytesN<32>,
    auction: &mut Auction
) -> GavelResult<Settlement> {
    validate!(
        env,
        !auction.item_settled,
        ErrorCode::ItemAlreadyClaimed,
        "Auction House: Withdraw: item was already claimed"
    )?;

    auction.item_settled = true;
    save_auction(env, auction_id, auction);

    release_item(env, &auction.terms.collectible, winner, auction.terms.item_id);

    AuctionHouseEvents::item_claimed(env, auction_id.clone(), winner.clone(), auction.terms.item_id);
    Ok(Settlement::ItemClaimed)
}

fn reclaim_item(
    env: &Env,
    owner: &Address,
    auction_id: &BytesN<32>,
    auction: &mut Auction
) -> GavelResult<Settlement> {
    validate!(
        env,
        !auction.item_settled,
        ErrorCode::ItemAlreadyClaimed,
        "Auction House: Withdraw: unsold item was already reclaimed"
    )?;

    auction.item_settled = true;
    save_auction(env, auction_id, auction);

    release_item(env, &auction.terms.collectible, owner, auction.terms.item_id);

    AuctionHouseEvents::item_reclaimed(env, auction_id.clone(), owner.clone(), auction.terms.item_id);
    Ok(Settlement::ItemReclaimed)
}
