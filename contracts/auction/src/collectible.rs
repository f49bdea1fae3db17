use gavel::{ constants::COLLECTIBLE_INTERFACE_ID, error::{ ErrorCode, GavelResult }, validate };
use soroban_sdk::{ contractclient, Address, Env };

use crate::storage::{ get_item_reservation, release_item_reservation };

/// Calls the auction house makes into the contract custodying an item
#[allow(dead_code)]
#[contractclient(name = "CollectibleClient")]
pub trait CollectibleInterface {
    fn owner_of(env: Env, item_id: u128) -> Address;

    fn transfer(env: Env, from: Address, to: Address, item_id: u128);

    fn burn(env: Env, from: Address, item_id: u128);

    fn supports_interface(env: Env, interface_id: u32) -> bool;
}

/// Checks `collectible` speaks the collectible interface and that this
/// contract currently holds `item_id` without another auction backed by it
pub fn ensure_item_in_escrow(env: &Env, collectible: &Address, item_id: u128) -> GavelResult {
    let client = CollectibleClient::new(env, collectible);

    let supported = matches!(client.try_supports_interface(&COLLECTIBLE_INTERFACE_ID), Ok(Ok(true)));
    validate!(
        env,
        supported,
        ErrorCode::InvalidCollectible,
        "Auction House: address does not implement the collectible interface"
    )?;

    let held = match client.try_owner_of(&item_id) {
        Ok(Ok(owner)) => owner == env.current_contract_address(),
        _ => false,
    };
    validate!(env, held, ErrorCode::ItemNotHeld, "Auction House: item is not held in escrow")?;

    validate!(
        env,
        get_item_reservation(env, collectible, item_id).is_none(),
        ErrorCode::ItemNotHeld,
        "Auction House: item already backs another auction"
    )
}

/// Moves the escrowed item out to `to`
pub fn release_item(env: &Env, collectible: &Address, to: &Address, item_id: u128) {
    release_item_reservation(env, collectible, item_id);
    CollectibleClient::new(env, collectible).transfer(
        &env.current_contract_address(),
        to,
        &item_id
    );
}

pub fn burn_item(env: &Env, collectible: &Address, item_id: u128) {
    release_item_reservation(env, collectible, item_id);
    CollectibleClient::new(env, collectible).burn(&env.current_contract_address(), &item_id);
}
