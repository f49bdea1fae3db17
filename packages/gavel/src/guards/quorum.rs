use soroban_sdk::{ contracttype, Address, Env, Vec };

use crate::error::{ ErrorCode, GavelResult };

use super::Guard;

/// Fixed-roster multi-signer gate.
///
/// A round starts with its first signature and stays valid for `validity`
/// seconds. Expiry is lazy: it is only observed by the next signature or guard
/// check, which is when a stale round gets reset.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Quorum {
    pub signers: Vec<Address>,
    /// `signed[i]` is set once `signers[i]` signed in the current round
    pub signed: Vec<bool>,
    pub count: u32,
    pub required: u32,
    pub validity: u64,
    pub expires_at: u64,
}

/// What happened to the round while registering a signature
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SignatureReceipt {
    /// The previous round had expired and was wiped
    pub round_reset: bool,
    /// This signature opened a new round
    pub round_started: bool,
    pub count: u32,
    pub expires_at: u64,
}

impl Quorum {
    /// Validates the roster. `excluded` is an address that can never sign,
    /// usually the contract holding the quorum.
    pub fn new(
        env: &Env,
        signers: Vec<Address>,
        signer_count: u32,
        required: u32,
        validity: u64,
        excluded: &Address
    ) -> GavelResult<Self> {
        let consistent = signer_count > 0 &&
            signers.len() == signer_count &&
            (1..=signer_count).contains(&required) &&
            validity > 0;
        if !consistent {
            return Err(ErrorCode::InvalidRoster);
        }

        let mut signed = Vec::new(env);
        for (index, signer) in signers.iter().enumerate() {
            if signer == *excluded {
                return Err(ErrorCode::InvalidAddress);
            }
            if signers.first_index_of(&signer) != Some(index as u32) {
                return Err(ErrorCode::DuplicateSigner);
            }
            signed.push_back(false);
        }

        Ok(Quorum {
            signers,
            signed,
            count: 0,
            required,
            validity,
            expires_at: 0,
        })
    }

    pub fn is_signer(&self, address: &Address) -> bool {
        self.signers.contains(address)
    }

    pub fn is_expired(&self, now: u64) -> bool {
        now > self.expires_at
    }

    /// Signatures that still count at `now`
    pub fn active_count(&self, now: u64) -> u32 {
        if self.is_expired(now) { 0 } else { self.count }
    }

    pub fn has_signed(&self, signer: &Address, now: u64) -> bool {
        if self.is_expired(now) {
            return false;
        }
        self.signers
            .first_index_of(signer)
            .and_then(|index| self.signed.get(index))
            .unwrap_or(false)
    }

    pub fn register(&mut self, signer: &Address, now: u64) -> GavelResult<SignatureReceipt> {
        let index = self.signers.first_index_of(signer).ok_or(ErrorCode::NotSigner)?;

        let mut receipt = SignatureReceipt::default();

        if self.count > 0 && self.is_expired(now) {
            self.clear();
            receipt.round_reset = true;
        }

        if self.count == 0 {
            self.expires_at = now.checked_add(self.validity).ok_or(ErrorCode::MathOverflow)?;
            receipt.round_started = true;
        }

        if self.signed.get(index).unwrap_or(false) {
            return Err(ErrorCode::AlreadySigned);
        }

        self.signed.set(index, true);
        self.count += 1;

        receipt.count = self.count;
        receipt.expires_at = self.expires_at;
        Ok(receipt)
    }

    fn clear(&mut self) {
        for index in 0..self.signed.len() {
            self.signed.set(index, false);
        }
        self.count = 0;
    }
}

impl Guard for Quorum {
    fn check(&self, now: u64) -> GavelResult {
        if self.count < self.required {
            return Err(ErrorCode::InsufficientSignatures);
        }
        if self.is_expired(now) {
            return Err(ErrorCode::QuorumExpired);
        }
        Ok(())
    }

    fn consume(&mut self) {
        self.clear();
    }
}
