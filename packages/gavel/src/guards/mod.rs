//! Access-control and timing primitives composed by the auction house.
//!
//! Each guard is a plain `#[contracttype]` state struct. Contracts load it from
//! storage, check or mutate it through the methods below and save it back; the
//! guards themselves never touch storage or publish events.

mod ownership;
mod pause;
mod quorum;
mod timelock;

pub use ownership::Ownership;
pub use pause::PauseSwitch;
pub use quorum::{ Quorum, SignatureReceipt };
pub use timelock::Timelock;

use soroban_sdk::{ contracttype, Address, Vec };

use crate::error::GavelResult;

/// A gate placed in front of a privileged operation.
///
/// `check` must pass before the operation runs and `consume` is called once it
/// succeeded, so a single authorization can never back two operations.
pub trait Guard {
    fn check(&self, now: u64) -> GavelResult;

    fn consume(&mut self);
}

/// Construction parameters for the quorum and timelock guards
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GuardParams {
    /// Addresses allowed to register signatures
    pub signers: Vec<Address>,
    /// Expected roster size, checked against `signers`
    pub signer_count: u32,
    /// Signatures needed to pass the quorum guard
    pub required_signatures: u32,
    /// Seconds a signature round stays valid after its first signature
    pub signature_validity: u64,
    pub timelock_delay: u64,
    pub timelock_grace: u64,
}
