use gavel::constants::{
    INSTANCE_BUMP_AMOUNT,
    INSTANCE_LIFETIME_THRESHOLD,
    PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};
use soroban_sdk::{ contracttype, log, panic_with_error, Address, Env };

use crate::errors::CollectibleError;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Owner(u128),
}

pub fn read_administrator(env: &Env) -> Address {
    let admin = env
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .unwrap_or_else(|| {
            log!(env, "Collectible: admin was never set");
            panic_with_error!(env, CollectibleError::NotInitialized)
        });
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    admin
}

pub fn write_administrator(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn read_owner(env: &Env, item_id: u128) -> Option<Address> {
    let key = DataKey::Owner(item_id);
    let owner = env.storage().persistent().get::<_, Address>(&key);
    if owner.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }
    owner
}

pub fn write_owner(env: &Env, item_id: u128, owner: &Address) {
    let key = DataKey::Owner(item_id);
    env.storage().persistent().set(&key, owner);
    env.storage().persistent().extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn remove_owner(env: &Env, item_id: u128) {
    env.storage().persistent().remove(&DataKey::Owner(item_id));
}
