use gavel::error::{ ErrorCode, GavelResult };
use soroban_sdk::{ log, token, Address, BytesN, Env };

use crate::storage::{ get_auction, get_config, Auction };

pub mod bid;
pub mod settlement;

pub fn current_block(env: &Env) -> u32 {
    env.ledger().sequence()
}

pub fn load_auction(env: &Env, auction_id: &BytesN<32>) -> GavelResult<Auction> {
    get_auction(env, auction_id).ok_or_else(|| {
        log!(env, "Auction House: auction does not exist");
        ErrorCode::AuctionNotFound
    })
}

/// Moves `amount` of the payment token from `from` into escrow
pub fn receive_payment(env: &Env, from: &Address, amount: i128) {
    let payment_token = get_config(env).payment_token;
    token::Client::new(env, &payment_token).transfer(from, &env.current_contract_address(), &amount);
}

/// Pays `amount` of the payment token out of escrow to `to`
pub fn send_payment(env: &Env, to: &Address, amount: i128) {
    let payment_token = get_config(env).payment_token;
    token::Client::new(env, &payment_token).transfer(&env.current_contract_address(), to, &amount);
}
