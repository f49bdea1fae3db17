use soroban_sdk::contracttype;

use crate::error::{ ErrorCode, GavelResult };

use super::Guard;

/// Single-slot timelock.
///
/// A queue started at `t` authorizes exactly one call made within
/// `[t + delay, t + delay + grace]`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Timelock {
    pub delay: u64,
    pub grace: u64,
    /// Timestamp of the active queue, if any
    pub queued_at: Option<u64>,
}

impl Timelock {
    pub fn new(delay: u64, grace: u64) -> Self {
        Timelock {
            delay,
            grace,
            queued_at: None,
        }
    }

    pub fn start_queue(&mut self, now: u64) {
        self.queued_at = Some(now);
    }

    pub fn is_queued(&self) -> bool {
        self.queued_at.is_some()
    }

    /// Returns the inclusive `(opens, closes)` window of the active queue
    pub fn window(&self) -> Option<(u64, u64)> {
        self.queued_at.map(|queued_at| {
            let opens = queued_at.saturating_add(self.delay);
            (opens, opens.saturating_add(self.grace))
        })
    }
}

impl Guard for Timelock {
    fn check(&self, now: u64) -> GavelResult {
        let (opens, closes) = self.window().ok_or(ErrorCode::TimelockNotQueued)?;

        if now < opens {
            return Err(ErrorCode::TimelockNotReady);
        }
        if now > closes {
            return Err(ErrorCode::TimelockExpired);
        }

        Ok(())
    }

    fn consume(&mut self) {
        self.queued_at = None;
    }
}
