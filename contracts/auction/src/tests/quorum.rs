extern crate std;

use gavel::{ error::ErrorCode, guards::GuardParams };
use pretty_assertions::assert_eq;
use soroban_sdk::{ testutils::Address as _, Address, Env };

use super::setup::{
    advance_time,
    deploy_auction_house_contract,
    generate_signers,
    guard_params,
    setup,
    sign,
    REQUIRED_SIGNATURES,
    SIGNATURE_VALIDITY,
    START_TIMESTAMP,
};

#[test]
fn roster_is_stored_at_construction() {
    let s = setup();

    assert_eq!(s.auction_house.query_signers(), s.signers);
    assert_eq!(s.auction_house.query_required_signatures(), REQUIRED_SIGNATURES);
    assert_eq!(s.auction_house.query_signature_count(), 0);
}

#[test]
fn register_signature_tracks_round() {
    let s = setup();
    let first = s.signers.get(0).unwrap();
    let second = s.signers.get(1).unwrap();

    assert_eq!(s.auction_house.register_signature(&first), 1);
    assert_eq!(s.auction_house.register_signature(&second), 2);

    assert!(s.auction_house.query_has_signed(&first));
    assert!(!s.auction_house.query_has_signed(&s.signers.get(2).unwrap()));
    assert_eq!(
        s.auction_house.query_signatures_expire_at(),
        START_TIMESTAMP + SIGNATURE_VALIDITY
    );
}

#[test]
fn register_signature_rejects_outsiders_and_repeats() {
    let s = setup();
    let signer = s.signers.get(3).unwrap();

    assert_eq!(
        s.auction_house.try_register_signature(&Address::generate(&s.env)),
        Err(Ok(ErrorCode::NotSigner))
    );

    s.auction_house.register_signature(&signer);
    assert_eq!(
        s.auction_house.try_register_signature(&signer),
        Err(Ok(ErrorCode::AlreadySigned))
    );
    assert_eq!(s.auction_house.query_signature_count(), 1);
}

#[test]
fn expired_round_is_reset_by_next_signature() {
    let s = setup();
    let first = s.signers.get(0).unwrap();
    sign(&s, 3);

    advance_time(&s.env, SIGNATURE_VALIDITY + 1);

    assert_eq!(s.auction_house.query_signature_count(), 0);
    assert!(!s.auction_house.query_has_signed(&first));

    assert_eq!(s.auction_house.register_signature(&first), 1);
    assert!(s.auction_house.query_has_signed(&first));
    assert!(!s.auction_house.query_has_signed(&s.signers.get(1).unwrap()));
    assert_eq!(
        s.auction_house.query_signatures_expire_at(),
        START_TIMESTAMP + 2 * SIGNATURE_VALIDITY + 1
    );
}

#[test]
fn start_queue_waits_for_quorum() {
    let s = setup();
    sign(&s, REQUIRED_SIGNATURES - 1);

    assert_eq!(
        s.auction_house.try_start_queue(&s.owner),
        Err(Ok(ErrorCode::InsufficientSignatures))
    );

    s.auction_house.register_signature(&s.signers.get(REQUIRED_SIGNATURES - 1).unwrap());
    s.auction_house.start_queue(&s.owner);

    assert_eq!(s.auction_house.query_timelock().queued_at, Some(START_TIMESTAMP));
    assert_eq!(s.auction_house.query_signature_count(), 0);
}

#[test]
fn start_queue_rejects_expired_round() {
    let s = setup();
    sign(&s, REQUIRED_SIGNATURES);
    advance_time(&s.env, SIGNATURE_VALIDITY + 1);

    assert_eq!(s.auction_house.try_start_queue(&s.owner), Err(Ok(ErrorCode::QuorumExpired)));
}

#[test]
fn start_queue_rejects_outsiders() {
    let s = setup();
    sign(&s, REQUIRED_SIGNATURES);

    assert_eq!(
        s.auction_house.try_start_queue(&Address::generate(&s.env)),
        Err(Ok(ErrorCode::NotOwnerOrSigner))
    );
    s.auction_house.start_queue(&s.signers.get(6).unwrap());
}

fn deploy_with(env: &Env, params: GuardParams) {
    env.mock_all_auths();
    let owner = Address::generate(env);
    let token = Address::generate(env);
    deploy_auction_house_contract(env, &owner, &token, params);
}

#[test]
#[should_panic(expected = "Error(Contract, #75)")]
fn constructor_rejects_duplicate_signers() {
    let env = Env::default();
    let mut signers = generate_signers(&env, 7);
    signers.set(6, signers.get(0).unwrap());

    deploy_with(&env, guard_params(&signers));
}

#[test]
#[should_panic(expected = "Error(Contract, #76)")]
fn constructor_rejects_roster_size_mismatch() {
    let env = Env::default();
    let signers = generate_signers(&env, 7);
    let mut params = guard_params(&signers);
    params.signer_count = 6;

    deploy_with(&env, params);
}

#[test]
#[should_panic(expected = "Error(Contract, #76)")]
fn constructor_rejects_unreachable_threshold() {
    let env = Env::default();
    let signers = generate_signers(&env, 3);
    let params = guard_params(&signers);

    deploy_with(&env, params);
}
