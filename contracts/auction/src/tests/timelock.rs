extern crate std;

use gavel::error::ErrorCode;
use pretty_assertions::assert_eq;
use soroban_sdk::{ testutils::Address as _, Address };

use super::setup::{
    advance_time,
    prepare_guarded_call,
    setup,
    sign,
    REQUIRED_SIGNATURES,
    START_TIMESTAMP,
    TIMELOCK_DELAY,
    TIMELOCK_GRACE,
};

#[test]
fn timelock_parameters_come_from_construction() {
    let s = setup();
    let timelock = s.auction_house.query_timelock();

    assert_eq!(timelock.delay, TIMELOCK_DELAY);
    assert_eq!(timelock.grace, TIMELOCK_GRACE);
    assert_eq!(timelock.queued_at, None);
}

#[test]
fn window_stays_open_through_grace() {
    let s = setup();
    let candidate = Address::generate(&s.env);
    prepare_guarded_call(&s);

    advance_time(&s.env, TIMELOCK_GRACE);
    s.auction_house.transfer_ownership(&s.owner, &candidate);

    assert_eq!(s.auction_house.query_pending_owner(), Some(candidate));
}

#[test]
fn window_closes_after_grace() {
    let s = setup();
    let candidate = Address::generate(&s.env);
    prepare_guarded_call(&s);

    advance_time(&s.env, TIMELOCK_GRACE + 1);

    assert_eq!(
        s.auction_house.try_transfer_ownership(&s.owner, &candidate),
        Err(Ok(ErrorCode::TimelockExpired))
    );
}

#[test]
fn queue_authorizes_a_single_call() {
    let s = setup();
    prepare_guarded_call(&s);
    s.auction_house.transfer_ownership(&s.owner, &Address::generate(&s.env));

    sign(&s, REQUIRED_SIGNATURES);
    assert_eq!(
        s.auction_house.try_transfer_ownership(&s.owner, &Address::generate(&s.env)),
        Err(Ok(ErrorCode::TimelockNotQueued))
    );
}

#[test]
fn restarting_queue_moves_window() {
    let s = setup();
    sign(&s, REQUIRED_SIGNATURES);
    s.auction_house.start_queue(&s.owner);

    advance_time(&s.env, 5);
    sign(&s, REQUIRED_SIGNATURES);
    s.auction_house.start_queue(&s.owner);
    assert_eq!(s.auction_house.query_timelock().queued_at, Some(START_TIMESTAMP + 5));

    advance_time(&s.env, TIMELOCK_DELAY - 5);
    sign(&s, REQUIRED_SIGNATURES);
    assert_eq!(
        s.auction_house.try_start_renounce_process(&s.owner),
        Err(Ok(ErrorCode::TimelockNotReady))
    );

    advance_time(&s.env, 5);
    s.auction_house.start_renounce_process(&s.owner);
    assert!(s.auction_house.query_renounce_unlocked());
}
