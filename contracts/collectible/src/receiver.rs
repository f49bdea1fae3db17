use soroban_sdk::{ contractclient, Address, Env };

/// Hook a contract exposes to accept items sent with `safe_transfer`. It must
/// return `COLLECTIBLE_RECEIVED`.
#[allow(dead_code)]
#[contractclient(name = "ReceiverClient")]
pub trait CollectibleReceiver {
    fn on_collectible_received(env: Env, operator: Address, from: Address, item_id: u128) -> u32;
}
