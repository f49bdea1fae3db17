extern crate std;

use gavel::error::ErrorCode;
use pretty_assertions::assert_eq;
use soroban_sdk::{ testutils::Address as _, Address };

use super::setup::{
    advance_blocks,
    advance_time,
    auction_id,
    auction_params,
    create_auction,
    escrow_balance,
    funded_bidder,
    open_bidding,
    setup,
    sign,
    REQUIRED_SIGNATURES,
    START_SEQUENCE,
    TIMELOCK_DELAY,
};
use crate::Settlement;

#[test]
fn auction_runs_from_creation_to_settlement() {
    let s = setup();
    let (id, params) = create_auction(&s, 1, 7);
    let alice = funded_bidder(&s, 1_000);
    let bob = funded_bidder(&s, 1_000);

    open_bidding(&s, &params);
    s.auction_house.bid(&alice, &id, &100);
    advance_blocks(&s.env, 20);
    s.auction_house.bid(&bob, &id, &180);
    advance_blocks(&s.env, 20);
    assert_eq!(s.auction_house.bid(&alice, &id, &100), 200);
    assert_eq!(escrow_balance(&s), 380);

    advance_blocks(&s.env, params.end_block - params.start_block);

    assert_eq!(s.auction_house.withdraw(&alice, &id), Settlement::ItemClaimed);
    assert_eq!(s.auction_house.withdraw(&s.owner, &id), Settlement::Proceeds(200));
    assert_eq!(s.auction_house.try_withdraw(&s.owner, &id), Err(Ok(ErrorCode::AlreadyWithdrawn)));
    assert_eq!(s.auction_house.withdraw(&bob, &id), Settlement::Refund(180));

    assert_eq!(s.collectible.owner_of(&7), alice);
    assert_eq!(s.token.balance(&alice), 800);
    assert_eq!(s.token.balance(&bob), 1_000);
    assert_eq!(s.token.balance(&s.owner), 200);
    assert_eq!(escrow_balance(&s), 0);
    assert_eq!(s.auction_house.query_auction(&id).escrowed, 0);
}

#[test]
fn two_bidders_with_minimal_terms() {
    let s = setup();
    let id = auction_id(&s.env, 5);
    let mut params = auction_params(&s, 5);
    params.start_block = START_SEQUENCE;
    params.end_block = START_SEQUENCE + 100;
    params.starting_price = 0;
    params.bid_increment = 1;
    params.reserve_price = 0;
    s.collectible.mint(&s.auction_house.address, &5);
    s.auction_house.create_auction(&s.owner, &id, &params);

    let b = funded_bidder(&s, 100);
    let c = funded_bidder(&s, 100);
    assert_eq!(s.auction_house.bid(&b, &id, &5), 5);
    assert_eq!(s.auction_house.try_bid(&c, &id, &5), Err(Ok(ErrorCode::BidTooLow)));
    assert_eq!(s.auction_house.bid(&c, &id, &6), 6);

    advance_blocks(&s.env, 101);

    assert_eq!(s.auction_house.withdraw(&c, &id), Settlement::ItemClaimed);
    assert_eq!(s.collectible.owner_of(&5), c);
    assert_eq!(s.auction_house.withdraw(&s.owner, &id), Settlement::Proceeds(6));
    assert_eq!(s.auction_house.try_withdraw(&s.owner, &id), Err(Ok(ErrorCode::AlreadyWithdrawn)));
    assert_eq!(s.auction_house.withdraw(&b, &id), Settlement::Refund(5));

    assert_eq!(s.token.balance(&s.owner), 6);
    assert_eq!(s.token.balance(&b), 100);
    assert_eq!(s.token.balance(&c), 94);
    assert_eq!(escrow_balance(&s), 0);
}

#[test]
fn queue_start_drains_the_round_for_the_next_signer() {
    let s = setup();
    sign(&s, REQUIRED_SIGNATURES);
    s.auction_house.start_queue(&s.owner);

    let sixth = s.signers.get(REQUIRED_SIGNATURES).unwrap();
    assert_eq!(s.auction_house.register_signature(&sixth), 1);
    assert_eq!(s.auction_house.query_signature_count(), 1);
    assert!(s.auction_house.query_has_signed(&sixth));
    assert!(!s.auction_house.query_has_signed(&s.signers.get(0).unwrap()));

    // signers of the drained round may sign again
    assert_eq!(s.auction_house.register_signature(&s.signers.get(0).unwrap()), 2);
}

#[test]
fn ownership_moves_under_quorum_and_timelock() {
    let s = setup();
    let candidate = Address::generate(&s.env);

    sign(&s, REQUIRED_SIGNATURES - 1);
    assert_eq!(
        s.auction_house.try_start_queue(&s.owner),
        Err(Ok(ErrorCode::InsufficientSignatures))
    );

    s.auction_house.register_signature(&s.signers.get(REQUIRED_SIGNATURES - 1).unwrap());
    s.auction_house.start_queue(&s.owner);
    assert_eq!(s.auction_house.query_signature_count(), 0);
    for signer in s.signers.iter() {
        assert!(!s.auction_house.query_has_signed(&signer));
    }

    advance_time(&s.env, TIMELOCK_DELAY);
    assert_eq!(
        s.auction_house.try_transfer_ownership(&s.owner, &candidate),
        Err(Ok(ErrorCode::InsufficientSignatures))
    );

    sign(&s, REQUIRED_SIGNATURES);
    s.auction_house.transfer_ownership(&s.owner, &candidate);
    s.auction_house.accept_ownership(&candidate);

    assert_eq!(s.auction_house.query_owner(), Some(candidate.clone()));

    // the new owner runs the auction business
    let id = auction_id(&s.env, 3);
    let params = auction_params(&s, 3);
    s.collectible.mint(&s.auction_house.address, &3);
    assert_eq!(
        s.auction_house.try_create_auction(&s.owner, &id, &params),
        Err(Ok(ErrorCode::NotOwner))
    );
    s.auction_house.create_auction(&candidate, &id, &params);
    assert_eq!(s.auction_house.query_auction(&id).terms.item_id, 3);
}
