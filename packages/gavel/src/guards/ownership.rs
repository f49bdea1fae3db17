use soroban_sdk::{ contracttype, Address };

use crate::error::{ ErrorCode, GavelResult };

/// Owner, pending owner and the renounce latch.
///
/// These are the guard-free transitions; callers decide which of them need the
/// owner's authorization, a quorum or a timelock before applying them.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Ownership {
    /// `None` once ownership has been renounced
    pub owner: Option<Address>,
    pub pending_owner: Option<Address>,
    pub renounce_unlocked: bool,
}

impl Ownership {
    pub fn new(owner: Address) -> Self {
        Ownership {
            owner: Some(owner),
            pending_owner: None,
            renounce_unlocked: false,
        }
    }

    pub fn is_owner(&self, address: &Address) -> bool {
        self.owner.as_ref() == Some(address)
    }

    pub fn ensure_owner(&self, address: &Address) -> GavelResult {
        if self.is_owner(address) { Ok(()) } else { Err(ErrorCode::NotOwner) }
    }

    /// Nominates `candidate` as pending owner. `null` stands in for the zero
    /// address and is never accepted.
    pub fn nominate(&mut self, candidate: Address, null: &Address) -> GavelResult {
        if candidate == *null {
            return Err(ErrorCode::InvalidAddress);
        }
        if self.is_owner(&candidate) {
            return Err(ErrorCode::AlreadyOwner);
        }
        if self.pending_owner.as_ref() == Some(&candidate) {
            return Err(ErrorCode::AlreadyPending);
        }
        self.pending_owner = Some(candidate);
        Ok(())
    }

    /// Completes the handshake, returning the previous owner
    pub fn accept(&mut self, caller: &Address) -> GavelResult<Option<Address>> {
        if self.pending_owner.as_ref() != Some(caller) {
            return Err(ErrorCode::NotPendingOwner);
        }
        self.pending_owner = None;
        Ok(self.owner.replace(caller.clone()))
    }

    /// Drops the pending nomination, returning it
    pub fn reset_pending(&mut self) -> GavelResult<Address> {
        self.pending_owner.take().ok_or(ErrorCode::NoPendingOwner)
    }

    pub fn unlock_renounce(&mut self) -> GavelResult {
        if self.renounce_unlocked {
            return Err(ErrorCode::InvalidRenounceState);
        }
        self.renounce_unlocked = true;
        Ok(())
    }

    pub fn lock_renounce(&mut self) -> GavelResult {
        if !self.renounce_unlocked {
            return Err(ErrorCode::InvalidRenounceState);
        }
        self.renounce_unlocked = false;
        Ok(())
    }

    /// Burns ownership for good, returning the last owner
    pub fn renounce(&mut self) -> GavelResult<Option<Address>> {
        if !self.renounce_unlocked {
            return Err(ErrorCode::InvalidRenounceState);
        }
        self.renounce_unlocked = false;
        self.pending_owner = None;
        Ok(self.owner.take())
    }

    /// Hands ownership straight to `new_owner`, skipping the handshake
    pub fn recover(&mut self, new_owner: Address, null: &Address) -> GavelResult<Address> {
        if new_owner == *null {
            return Err(ErrorCode::InvalidAddress);
        }
        let previous = self.owner.take().ok_or(ErrorCode::OwnershipRenounced)?;
        self.owner = Some(new_owner);
        self.pending_owner = None;
        Ok(previous)
    }
}
