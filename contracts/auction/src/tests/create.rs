extern crate std;

use gavel::error::ErrorCode;
use pretty_assertions::assert_eq;
use gavel::constants::COLLECTIBLE_RECEIVED;
use soroban_sdk::{ contract, contractimpl, testutils::{ Address as _, Events }, Address, Env };

use super::setup::{
    auction_id,
    auction_params,
    create_auction,
    funded_bidder,
    open_bidding,
    set_block,
    setup,
};
use crate::{ storage::Auction, Settlement };

/// Contract answering `supports_interface` without being a collectible
#[contract]
pub struct Impostor;

#[contractimpl]
impl Impostor {
    pub fn supports_interface(_env: Env, _interface_id: u32) -> bool {
        false
    }
}

#[test]
fn create_auction_records_terms() {
    let s = setup();
    let (id, params) = create_auction(&s, 1, 42);

    let auction = s.auction_house.query_auction(&id);

    assert_eq!(auction, Auction::new(params));
    assert_eq!(auction.highest_bidder, None);
    assert_eq!(auction.escrowed, 0);
}

#[test]
fn create_auction_accepts_items_sent_through_safe_transfer() {
    let s = setup();
    s.collectible.mint(&s.owner, &9);
    s.collectible.safe_transfer(&s.owner, &s.auction_house.address, &9);
    assert_eq!(s.collectible.owner_of(&9), s.auction_house.address);

    let id = auction_id(&s.env, 9);
    s.auction_house.create_auction(&s.owner, &id, &auction_params(&s, 9));

    assert_eq!(s.auction_house.query_auction(&id).terms.item_id, 9);
}

#[test]
fn create_auction_rejects_taken_id() {
    let s = setup();
    let (id, _) = create_auction(&s, 1, 1);
    s.collectible.mint(&s.auction_house.address, &2);

    assert_eq!(
        s.auction_house.try_create_auction(&s.owner, &id, &auction_params(&s, 2)),
        Err(Ok(ErrorCode::AuctionAlreadyExists))
    );
}

#[test]
fn create_auction_is_owner_only() {
    let s = setup();
    s.collectible.mint(&s.auction_house.address, &1);

    assert_eq!(
        s.auction_house.try_create_auction(
            &Address::generate(&s.env),
            &auction_id(&s.env, 1),
            &auction_params(&s, 1)
        ),
        Err(Ok(ErrorCode::NotOwner))
    );
}

#[test]
fn create_auction_validates_schedule_and_prices() {
    let s = setup();
    s.collectible.mint(&s.auction_house.address, &1);
    let id = auction_id(&s.env, 1);
    let valid = auction_params(&s, 1);

    let mut empty_range = valid.clone();
    empty_range.end_block = empty_range.start_block;
    assert_eq!(
        s.auction_house.try_create_auction(&s.owner, &id, &empty_range),
        Err(Ok(ErrorCode::InvalidTimeRange))
    );

    let mut past = valid.clone();
    past.start_block = s.env.ledger().sequence() - 1;
    assert_eq!(
        s.auction_house.try_create_auction(&s.owner, &id, &past),
        Err(Ok(ErrorCode::StartInPast))
    );

    let mut negative = valid.clone();
    negative.reserve_price = -1;
    assert_eq!(
        s.auction_house.try_create_auction(&s.owner, &id, &negative),
        Err(Ok(ErrorCode::InvalidAmount))
    );

    let mut long_snipe = valid.clone();
    long_snipe.snipe_interval = long_snipe.end_block - long_snipe.start_block;
    assert_eq!(
        s.auction_house.try_create_auction(&s.owner, &id, &long_snipe),
        Err(Ok(ErrorCode::SnipeIntervalTooLong))
    );

    // starting right now is allowed
    let mut immediate = valid.clone();
    immediate.start_block = s.env.ledger().sequence();
    s.auction_house.create_auction(&s.owner, &id, &immediate);
}

#[test]
fn create_auction_checks_the_collectible() {
    let s = setup();
    let id = auction_id(&s.env, 1);

    let mut impostor = auction_params(&s, 1);
    impostor.collectible = s.env.register(Impostor, ());
    assert_eq!(
        s.auction_house.try_create_auction(&s.owner, &id, &impostor),
        Err(Ok(ErrorCode::InvalidCollectible))
    );

    // minted but never escrowed
    s.collectible.mint(&s.owner, &1);
    assert_eq!(
        s.auction_house.try_create_auction(&s.owner, &id, &auction_params(&s, 1)),
        Err(Ok(ErrorCode::ItemNotHeld))
    );

    // never minted
    assert_eq!(
        s.auction_house.try_create_auction(&s.owner, &id, &auction_params(&s, 2)),
        Err(Ok(ErrorCode::ItemNotHeld))
    );
}

#[test]
fn receiver_hook_acknowledges_without_publishing() {
    let s = setup();
    let stranger = Address::generate(&s.env);

    assert_eq!(
        s.auction_house.on_collectible_received(&stranger, &stranger, &77),
        COLLECTIBLE_RECEIVED
    );
    let published = s.env.events().all();
    assert!(published.iter().all(|(contract, _, _)| contract != s.auction_house.address));
}

#[test]
fn escrowed_item_backs_a_single_auction() {
    let s = setup();
    let (id, params) = create_auction(&s, 1, 4);

    assert_eq!(
        s.auction_house.try_create_auction(&s.owner, &auction_id(&s.env, 2), &auction_params(&s, 4)),
        Err(Ok(ErrorCode::ItemNotHeld))
    );

    let winner = funded_bidder(&s, 1_000);
    open_bidding(&s, &params);
    s.auction_house.bid(&winner, &id, &200);
    set_block(&s.env, params.end_block + 1);
    assert_eq!(s.auction_house.withdraw(&winner, &id), Settlement::ItemClaimed);

    // a new owner may put the item up again once it is back in escrow
    s.collectible.transfer(&winner, &s.auction_house.address, &4);
    let relisted = auction_id(&s.env, 3);
    s.auction_house.create_auction(&s.owner, &relisted, &auction_params(&s, 4));
    assert_eq!(s.auction_house.query_auction(&relisted).terms.item_id, 4);
}

#[test]
fn reclaimed_or_burned_items_can_be_listed_again() {
    let s = setup();
    let (unsold, params) = create_auction(&s, 1, 5);
    set_block(&s.env, params.end_block + 1);
    assert_eq!(s.auction_house.withdraw(&s.owner, &unsold), Settlement::ItemReclaimed);

    s.collectible.transfer(&s.owner, &s.auction_house.address, &5);
    let relisted = auction_id(&s.env, 2);
    s.auction_house.create_auction(&s.owner, &relisted, &auction_params(&s, 5));
    s.auction_house.configure_as_cancellable_auction(&s.owner, &relisted);
    s.auction_house.cancel_auction(&s.owner, &relisted);

    // burned: a freshly minted item under the same id is free to list
    s.collectible.mint(&s.auction_house.address, &5);
    s.auction_house.create_auction(&s.owner, &auction_id(&s.env, 3), &auction_params(&s, 5));
}

#[test]
fn query_auction_reports_unknown_id() {
    let s = setup();

    assert_eq!(
        s.auction_house.try_query_auction(&auction_id(&s.env, 7)),
        Err(Ok(ErrorCode::AuctionNotFound))
    );
}
