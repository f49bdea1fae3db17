use soroban_sdk::{ Address, Env, String, Symbol };

pub struct CollectibleEvents {}

impl CollectibleEvents {
    /// - topics - `["initialize", admin: Address]`
    /// - data - `[name: String, symbol: String]`
    pub fn initialize(env: &Env, admin: Address, name: String, symbol: String) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, (name, symbol));
    }

    /// - topics - `["mint", admin: Address, to: Address]`
    /// - data - `item_id: u128`
    pub fn mint(env: &Env, admin: Address, to: Address, item_id: u128) {
        let topics = (Symbol::new(env, "mint"), admin, to);
        env.events().publish(topics, item_id);
    }

    /// - topics - `["transfer", from: Address, to: Address]`
    /// - data - `item_id: u128`
    pub fn transfer(env: &Env, from: Address, to: Address, item_id: u128) {
        let topics = (Symbol::new(env, "transfer"), from, to);
        env.events().publish(topics, item_id);
    }

    /// - topics - `["burn", from: Address]`
    /// - data - `item_id: u128`
    pub fn burn(env: &Env, from: Address, item_id: u128) {
        let topics = (Symbol::new(env, "burn"), from);
        env.events().publish(topics, item_id);
    }
}
