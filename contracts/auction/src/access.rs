use gavel::{ error::{ ErrorCode, GavelResult }, guards::Guard, validate };
use soroban_sdk::{ log, Address, Env };

use crate::storage::{ get_ownership, get_pause, get_quorum, get_timelock, save_quorum, save_timelock };

/// Address standing in for the zero address. The contract can never sign nor
/// own itself, so no caller can supply it meaningfully.
pub fn null_address(env: &Env) -> Address {
    env.current_contract_address()
}

pub fn require_owner(env: &Env, sender: &Address) -> GavelResult {
    sender.require_auth();

    get_ownership(env).ensure_owner(sender).map_err(|error| {
        log!(env, "Auction House: caller is not the owner");
        error
    })
}

pub fn require_signer(env: &Env, sender: &Address) -> GavelResult {
    sender.require_auth();

    validate!(
        env,
        get_quorum(env).is_signer(sender),
        ErrorCode::NotSigner,
        "Auction House: caller is not on the signer roster"
    )
}

pub fn require_owner_or_signer(env: &Env, sender: &Address) -> GavelResult {
    sender.require_auth();

    let allowed = get_ownership(env).is_owner(sender) || get_quorum(env).is_signer(sender);
    validate!(
        env,
        allowed,
        ErrorCode::NotOwnerOrSigner,
        "Auction House: caller is neither the owner nor a signer"
    )
}

pub fn require_not_paused(env: &Env) -> GavelResult {
    get_pause(env).ensure_not_paused().map_err(|error| {
        log!(env, "Auction House: emergency pause is on");
        error
    })
}

fn check_guard(env: &Env, guard: &impl Guard, now: u64) -> GavelResult {
    guard.check(now).map_err(|error| {
        log!(env, "Auction House: guard rejected the call with error {}", error as u32);
        error
    })
}

/// Runs `operation` once the signature quorum is reached, then drains the round
pub fn quorum_guarded<T>(env: &Env, operation: impl FnOnce() -> GavelResult<T>) -> GavelResult<T> {
    let now = env.ledger().timestamp();
    check_guard(env, &get_quorum(env), now)?;

    let result = operation()?;

    let mut quorum = get_quorum(env);
    quorum.consume();
    save_quorum(env, &quorum);

    Ok(result)
}

/// Runs `operation` inside an open timelock window with the quorum reached,
/// then consumes both the queue and the round
pub fn timelocked_quorum<T>(
    env: &Env,
    operation: impl FnOnce() -> GavelResult<T>
) -> GavelResult<T> {
    let now = env.ledger().timestamp();
    check_guard(env, &get_timelock(env), now)?;

    let result = quorum_guarded(env, operation)?;

    let mut timelock = get_timelock(env);
    timelock.consume();
    save_timelock(env, &timelock);

    Ok(result)
}
