use gavel::constants::{ COLLECTIBLE_INTERFACE_ID, COLLECTIBLE_RECEIVED };
use soroban_sdk::{ contract, contractimpl, contractmeta, log, Address, Env, String };
use soroban_token_sdk::{ metadata::TokenMetadata, TokenUtils };

use crate::{
    errors::CollectibleError,
    events::CollectibleEvents,
    receiver::ReceiverClient,
    storage::{ read_administrator, read_owner, remove_owner, write_administrator, write_owner },
};

contractmeta!(key = "Description", val = "Non-fungible collectible items put up for auction");

#[contract]
pub struct Collectible;

fn ensure_item_owner(env: &Env, from: &Address, item_id: u128) -> Result<(), CollectibleError> {
    match read_owner(env, item_id) {
        Some(owner) if owner == *from => Ok(()),
        Some(_) => {
            log!(env, "Collectible: sender does not own item {}", item_id);
            Err(CollectibleError::NotItemOwner)
        }
        None => {
            log!(env, "Collectible: item {} does not exist", item_id);
            Err(CollectibleError::ItemNotFound)
        }
    }
}

#[contractimpl]
impl Collectible {
    pub fn __constructor(env: Env, admin: Address, name: String, symbol: String) {
        write_administrator(&env, &admin);
        TokenUtils::new(&env).metadata().set_metadata(&TokenMetadata {
            decimal: 0,
            name: name.clone(),
            symbol: symbol.clone(),
        });

        CollectibleEvents::initialize(&env, admin, name, symbol);
    }

    pub fn mint(env: Env, to: Address, item_id: u128) -> Result<(), CollectibleError> {
        let admin = read_administrator(&env);
        admin.require_auth();

        if read_owner(&env, item_id).is_some() {
            log!(&env, "Collectible: Mint: item {} already exists", item_id);
            return Err(CollectibleError::ItemAlreadyExists);
        }

        write_owner(&env, item_id, &to);
        CollectibleEvents::mint(&env, admin, to, item_id);
        Ok(())
    }

    pub fn owner_of(env: Env, item_id: u128) -> Result<Address, CollectibleError> {
        read_owner(&env, item_id).ok_or(CollectibleError::ItemNotFound)
    }

    pub fn transfer(env: Env, from: Address, to: Address, item_id: u128) -> Result<(), CollectibleError> {
        from.require_auth();
        ensure_item_owner(&env, &from, item_id)?;

        write_owner(&env, item_id, &to);
        CollectibleEvents::transfer(&env, from, to, item_id);
        Ok(())
    }

    /// Transfers to a contract that must acknowledge the item through its
    /// `on_collectible_received` hook
    pub fn safe_transfer(
        env: Env,
        from: Address,
        to: Address,
        item_id: u128
    ) -> Result<(), CollectibleError> {
        Self::transfer(env.clone(), from.clone(), to.clone(), item_id)?;

        let acknowledged = ReceiverClient::new(&env, &to).try_on_collectible_received(
            &from,
            &from,
            &item_id
        );
        match acknowledged {
            Ok(Ok(COLLECTIBLE_RECEIVED)) => Ok(()),
            _ => {
                log!(&env, "Collectible: Safe Transfer: receiver did not acknowledge item {}", item_id);
                Err(CollectibleError::ReceiverRejected)
            }
        }
    }

    pub fn burn(env: Env, from: Address, item_id: u128) -> Result<(), CollectibleError> {
        from.require_auth();
        ensure_item_owner(&env, &from, item_id)?;

        remove_owner(&env, item_id);
        CollectibleEvents::burn(&env, from, item_id);
        Ok(())
    }

    pub fn supports_interface(_env: Env, interface_id: u32) -> bool {
        interface_id == COLLECTIBLE_INTERFACE_ID
    }

    pub fn admin(env: Env) -> Address {
        read_administrator(&env)
    }

    pub fn name(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().name
    }

    pub fn symbol(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().symbol
    }
}
