use gavel::{
    constants::COLLECTIBLE_RECEIVED,
    error::{ ErrorCode, GavelResult },
    guards::{ GuardParams, Ownership, PauseSwitch, Quorum, Timelock },
    validate,
};
use soroban_sdk::{
    contract,
    contractimpl,
    contractmeta,
    log,
    panic_with_error,
    Address,
    BytesN,
    Env,
    Vec,
};

use crate::{
    access::{
        null_address,
        quorum_guarded,
        require_not_paused,
        require_owner,
        require_owner_or_signer,
        require_signer,
        timelocked_quorum,
    },
    auction_house::{ AuctionHouseTrait, GuardTrait, OwnershipTrait },
    collectible::ensure_item_in_escrow,
    controller::{ bid::place_bid, current_block, load_auction, settlement::{ self, Settlement } },
    events::{ AuctionHouseEvents, GuardEvents },
    policy,
    storage::{
        get_bid,
        get_config,
        get_entry_fee_receipt,
        get_ownership,
        get_pause,
        get_policy,
        get_quorum,
        get_timelock,
        has_auction,
        reserve_item,
        is_blacklisted,
        is_whitelisted,
        save_auction,
        save_config,
        save_ownership,
        save_pause,
        save_quorum,
        save_timelock,
        Auction,
        AuctionParams,
        AuctionPolicy,
        Config,
        EntryFeeReceipt,
    },
};

contractmeta!(
    key = "Description",
    val = "Escrowed auctions of collectible items behind quorum, timelock and pause guards"
);

#[contract]
pub struct AuctionHouse;

#[contractimpl]
impl AuctionHouse {
    pub fn __constructor(env: Env, owner: Address, payment_token: Address, params: GuardParams) {
        let quorum = Quorum::new(
            &env,
            params.signers.clone(),
            params.signer_count,
            params.required_signatures,
            params.signature_validity,
            &env.current_contract_address()
        ).unwrap_or_else(|error| {
            log!(&env, "Auction House: Initialize: invalid signer roster");
            panic_with_error!(&env, error)
        });

        save_config(&env, &Config { payment_token: payment_token.clone() });
        save_ownership(&env, &Ownership::new(owner.clone()));
        save_quorum(&env, &quorum);
        save_timelock(&env, &Timelock::new(params.timelock_delay, params.timelock_grace));
        save_pause(&env, &PauseSwitch::default());

        AuctionHouseEvents::initialize(
            &env,
            owner,
            payment_token,
            params.signer_count,
            params.required_signatures
        );
    }
}

#[contractimpl]
impl OwnershipTrait for AuctionHouse {
    fn transfer_ownership(env: Env, sender: Address, new_owner: Address) -> Result<(), ErrorCode> {
        require_owner(&env, &sender)?;

        timelocked_quorum(&env, || {
            let mut ownership = get_ownership(&env);
            ownership.nominate(new_owner.clone(), &null_address(&env))?;
            save_ownership(&env, &ownership);

            GuardEvents::ownership_transfer_initiated(&env, sender.clone(), new_owner.clone());
            Ok(())
        })
    }

    fn reset_pending_owner(env: Env, sender: Address) -> Result<(), ErrorCode> {
        require_owner(&env, &sender)?;

        let mut ownership = get_ownership(&env);
        let dropped = ownership.reset_pending()?;
        save_ownership(&env, &ownership);

        GuardEvents::pending_owner_reset(&env, sender, dropped);
        Ok(())
    }

    fn start_renounce_process(env: Env, sender: Address) -> Result<(), ErrorCode> {
        require_owner(&env, &sender)?;

        timelocked_quorum(&env, || {
            let mut ownership = get_ownership(&env);
            ownership.unlock_renounce()?;
            save_ownership(&env, &ownership);

            GuardEvents::renounce_started(&env, sender.clone(), env.ledger().timestamp());
            Ok(())
        })
    }

    fn terminate_renounce_process(env: Env, sender: Address) -> Result<(), ErrorCode> {
        require_owner(&env, &sender)?;

        let mut ownership = get_ownership(&env);
        ownership.lock_renounce()?;
        save_ownership(&env, &ownership);

        GuardEvents::renounce_terminated(&env, sender, env.ledger().timestamp());
        Ok(())
    }

    fn renounce_ownership(env: Env, sender: Address) -> Result<(), ErrorCode> {
        require_owner(&env, &sender)?;

        let mut ownership = get_ownership(&env);
        ownership.renounce()?;
        save_ownership(&env, &ownership);

        GuardEvents::ownership_renounced(&env, sender, env.ledger().timestamp());
        Ok(())
    }

    fn accept_ownership(env: Env, sender: Address) -> Result<(), ErrorCode> {
        sender.require_auth();

        let mut ownership = get_ownership(&env);
        let previous = ownership.accept(&sender)?;
        save_ownership(&env, &ownership);

        GuardEvents::ownership_transfer_completed(&env, sender, previous);
        Ok(())
    }

    fn social_guardian_recovery(
        env: Env,
        signer: Address,
        new_owner: Address
    ) -> Result<(), ErrorCode> {
        require_signer(&env, &signer)?;

        timelocked_quorum(&env, || {
            let mut ownership = get_ownership(&env);
            let previous = ownership.recover(new_owner.clone(), &null_address(&env))?;
            save_ownership(&env, &ownership);

            GuardEvents::guardian_recovery(&env, signer.clone(), previous, new_owner.clone());
            Ok(())
        })
    }

    fn query_owner(env: Env) -> Option<Address> {
        get_ownership(&env).owner
    }

    fn query_pending_owner(env: Env) -> Option<Address> {
        get_ownership(&env).pending_owner
    }

    fn query_renounce_unlocked(env: Env) -> bool {
        get_ownership(&env).renounce_unlocked
    }
}

#[contractimpl]
impl GuardTrait for AuctionHouse {
    fn register_signature(env: Env, signer: Address) -> Result<u32, ErrorCode> {
        signer.require_auth();
        let now = env.ledger().timestamp();

        let mut quorum = get_quorum(&env);
        let receipt = quorum.register(&signer, now)?;
        save_quorum(&env, &quorum);

        if receipt.round_reset {
            GuardEvents::signatures_expired(&env, signer.clone(), now);
        }
        if receipt.round_started {
            GuardEvents::signature_round_started(&env, signer.clone(), receipt.expires_at);
        }
        GuardEvents::signature_registered(&env, signer, receipt.count, quorum.required);

        Ok(receipt.count)
    }

    fn start_queue(env: Env, sender: Address) -> Result<(), ErrorCode> {
        require_owner_or_signer(&env, &sender)?;

        quorum_guarded(&env, || {
            let mut timelock = get_timelock(&env);
            timelock.start_queue(env.ledger().timestamp());
            save_timelock(&env, &timelock);

            if let Some((opens, closes)) = timelock.window() {
                GuardEvents::queue_started(&env, sender.clone(), opens, closes);
            }
            Ok(())
        })
    }

    fn turn_emergency_pause_on(env: Env, sender: Address) -> Result<(), ErrorCode> {
        require_owner(&env, &sender)?;

        let mut pause = get_pause(&env);
        pause.turn_on()?;
        save_pause(&env, &pause);

        GuardEvents::emergency_pause(&env, sender, true);
        Ok(())
    }

    fn turn_emergency_pause_off(env: Env, sender: Address) -> Result<(), ErrorCode> {
        require_owner(&env, &sender)?;

        let mut pause = get_pause(&env);
        pause.turn_off()?;
        save_pause(&env, &pause);

        GuardEvents::emergency_pause(&env, sender, false);
        Ok(())
    }

    fn query_signers(env: Env) -> Vec<Address> {
        get_quorum(&env).signers
    }

    fn query_required_signatures(env: Env) -> u32 {
        get_quorum(&env).required
    }

    fn query_signature_count(env: Env) -> u32 {
        get_quorum(&env).active_count(env.ledger().timestamp())
    }

    fn query_has_signed(env: Env, signer: Address) -> bool {
        get_quorum(&env).has_signed(&signer, env.ledger().timestamp())
    }

    fn query_signatures_expire_at(env: Env) -> u64 {
        get_quorum(&env).expires_at
    }

    fn query_timelock(env: Env) -> Timelock {
        get_timelock(&env)
    }

    fn query_paused(env: Env) -> bool {
        get_pause(&env).paused
    }
}

/// Owner-only auction maintenance, refused while paused
fn require_owner_unpaused(env: &Env, sender: &Address) -> GavelResult {
    require_owner(env, sender)?;
    require_not_paused(env)
}

#[contractimpl]
impl AuctionHouseTrait for AuctionHouse {
    fn create_auction(
        env: Env,
        sender: Address,
        auction_id: BytesN<32>,
        params: AuctionParams
    ) -> Result<(), ErrorCode> {
        require_owner_unpaused(&env, &sender)?;

        validate!(
            &env,
            !has_auction(&env, &auction_id),
            ErrorCode::AuctionAlreadyExists,
            "Auction House: Create Auction: id is already taken"
        )?;
        validate!(
            &env,
            params.start_block < params.end_block,
            ErrorCode::InvalidTimeRange,
            "Auction House: Create Auction: start block must precede end block"
        )?;
        validate!(
            &env,
            params.start_block >= current_block(&env),
            ErrorCode::StartInPast,
            "Auction House: Create Auction: start block is in the past"
        )?;
        validate!(
            &env,
            params.starting_price >= 0 && params.bid_increment >= 0 && params.reserve_price >= 0,
            ErrorCode::InvalidAmount,
            "Auction House: Create Auction: prices must not be negative"
        )?;
        validate!(
            &env,
            params.snipe_interval < params.end_block - params.start_block,
            ErrorCode::SnipeIntervalTooLong,
            "Auction House: Create Auction: snipe interval exceeds the auction length"
        )?;

        ensure_item_in_escrow(&env, &params.collectible, params.item_id)?;

        reserve_item(&env, &params.collectible, params.item_id, &auction_id);
        save_auction(&env, &auction_id, &Auction::new(params.clone()));

        AuctionHouseEvents::auction_created(&env, auction_id, params);
        Ok(())
    }

    fn configure_as_cancellable_auction(
        env: Env,
        sender: Address,
        auction_id: BytesN<32>
    ) -> Result<(), ErrorCode> {
        require_owner_unpaused(&env, &sender)?;
        policy::configure_as_cancellable(&env, &auction_id)
    }

    fn cancel_auction(env: Env, sender: Address, auction_id: BytesN<32>) -> Result<(), ErrorCode> {
        require_owner_unpaused(&env, &sender)?;
        policy::cancel(&env, &auction_id)
    }

    fn configure_as_closed_auction(
        env: Env,
        sender: Address,
        auction_id: BytesN<32>
    ) -> Result<(), ErrorCode> {
        require_owner_unpaused(&env, &sender)?;
        policy::configure_as_closed(&env, &auction_id)
    }

    fn whitelist_participants(
        env: Env,
        sender: Address,
        auction_id: BytesN<32>,
        participants: Vec<Address>
    ) -> Result<(), ErrorCode> {
        require_owner_unpaused(&env, &sender)?;
        policy::whitelist(&env, &auction_id, participants)
    }

    fn configure_as_blacklisted_auction(
        env: Env,
        sender: Address,
        auction_id: BytesN<32>
    ) -> Result<(), ErrorCode> {
        require_owner_unpaused(&env, &sender)?;
        policy::configure_as_blacklisted(&env, &auction_id)
    }

    fn blacklist_participants(
        env: Env,
        sender: Address,
        auction_id: BytesN<32>,
        participants: Vec<Address>
    ) -> Result<(), ErrorCode> {
        require_owner_unpaused(&env, &sender)?;
        policy::blacklist(&env, &auction_id, participants)
    }

    fn set_entry_fee(
        env: Env,
        sender: Address,
        auction_id: BytesN<32>,
        fee: i128
    ) -> Result<(), ErrorCode> {
        require_owner_unpaused(&env, &sender)?;
        policy::set_entry_fee(&env, &auction_id, fee)
    }

    fn bid(env: Env, bidder: Address, auction_id: BytesN<32>, amount: i128) -> Result<i128, ErrorCode> {
        bidder.require_auth();

        validate!(
            &env,
            !get_ownership(&env).is_owner(&bidder),
            ErrorCode::OwnerCannotBid,
            "Auction House: Bid: the owner cannot bid"
        )?;
        require_not_paused(&env)?;

        place_bid(&env, &bidder, &auction_id, amount)
    }

    fn withdraw(env: Env, sender: Address, auction_id: BytesN<32>) -> Result<Settlement, ErrorCode> {
        sender.require_auth();
        require_not_paused(&env)?;

        settlement::withdraw(&env, &sender, &auction_id)
    }

    fn pay_entry_fee(
        env: Env,
        payer: Address,
        auction_id: BytesN<32>,
        amount: i128
    ) -> Result<(), ErrorCode> {
        payer.require_auth();
        require_not_paused(&env)?;

        policy::pay_entry_fee(&env, &payer, &auction_id, amount)
    }

    fn withdraw_entry_fee(env: Env, payer: Address, auction_id: BytesN<32>) -> Result<i128, ErrorCode> {
        payer.require_auth();
        require_not_paused(&env)?;

        policy::withdraw_entry_fee(&env, &payer, &auction_id)
    }

    fn on_collectible_received(_env: Env, _operator: Address, _from: Address, _item_id: u128) -> u32 {
        COLLECTIBLE_RECEIVED
    }

    fn query_config(env: Env) -> Config {
        get_config(&env)
    }

    fn query_auction(env: Env, auction_id: BytesN<32>) -> Result<Auction, ErrorCode> {
        load_auction(&env, &auction_id)
    }

    fn query_bid(env: Env, auction_id: BytesN<32>, bidder: Address) -> i128 {
        get_bid(&env, &auction_id, &bidder)
    }

    fn query_policy(env: Env, auction_id: BytesN<32>) -> AuctionPolicy {
        get_policy(&env, &auction_id)
    }

    fn query_is_whitelisted(env: Env, auction_id: BytesN<32>, address: Address) -> bool {
        is_whitelisted(&env, &auction_id, &address)
    }

    fn query_is_blacklisted(env: Env, auction_id: BytesN<32>, address: Address) -> bool {
        is_blacklisted(&env, &auction_id, &address)
    }

    fn query_entry_fee_receipt(env: Env, auction_id: BytesN<32>, payer: Address) -> EntryFeeReceipt {
        get_entry_fee_receipt(&env, &auction_id, &payer)
    }
}
