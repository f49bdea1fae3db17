use soroban_sdk::{ Address, Env, String };

use crate::contract::{ Collectible, CollectibleClient };

pub fn deploy_collectible_contract<'a>(env: &Env, admin: &Address) -> CollectibleClient<'a> {
    let address = env.register(Collectible, (
        admin.clone(),
        String::from_str(env, "Gavel Relics"),
        String::from_str(env, "RELIC"),
    ));
    CollectibleClient::new(env, &address)
}

pub use blackhole::Blackhole;
pub use vault::Vault;

mod vault {
    use gavel::constants::COLLECTIBLE_RECEIVED;
    use soroban_sdk::{ contract, contractimpl, Address, Env };

    /// Receiver that acknowledges every item
    #[contract]
    pub struct Vault;

    #[contractimpl]
    impl Vault {
        pub fn on_collectible_received(
            _env: Env,
            _operator: Address,
            _from: Address,
            _item_id: u128
        ) -> u32 {
            COLLECTIBLE_RECEIVED
        }
    }
}

mod blackhole {
    use soroban_sdk::{ contract, contractimpl, Address, Env };

    /// Receiver answering with the wrong acknowledgement
    #[contract]
    pub struct Blackhole;

    #[contractimpl]
    impl Blackhole {
        pub fn on_collectible_received(
            _env: Env,
            _operator: Address,
            _from: Address,
            _item_id: u128
        ) -> u32 {
            0
        }
    }
}
