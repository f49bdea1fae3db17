// ################################################################
//                             TTL
// ################################################################

pub const DAY_IN_LEDGERS: u32 = 17280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

// ################################################################
//                             GUARDS
// ################################################################

/// Seconds between `start_queue` and the opening of the timelock window
pub const DEFAULT_TIMELOCK_DELAY: u64 = 10;
/// Seconds the timelock window stays open once it opens
pub const DEFAULT_TIMELOCK_GRACE: u64 = 1;

// ################################################################
//                           COLLECTIBLES
// ################################################################

/// Identifier a collectible contract must acknowledge in `supports_interface`
pub const COLLECTIBLE_INTERFACE_ID: u32 = 0x80ac_58cd;

/// Value a receiving contract returns from `on_collectible_received` to accept an item
pub const COLLECTIBLE_RECEIVED: u32 = 0x150b_7a02;
