use soroban_sdk::contracterror;

pub type GavelResult<T = ()> = core::result::Result<T, ErrorCode>;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    // Authorization
    #[doc = "Caller is not the owner"]
    NotOwner = 1,
    #[doc = "Caller is not on the signer roster"]
    NotSigner = 2,
    #[doc = "Caller is not the pending owner"]
    NotPendingOwner = 3,
    #[doc = "The owner cannot bid on its own auctions"]
    OwnerCannotBid = 4,
    #[doc = "Caller is not the owner nor a signer"]
    NotOwnerOrSigner = 5,

    // State
    AuctionAlreadyExists = 10,
    AuctionNotFound = 11,
    AuctionCancelled = 12,
    #[doc = "Auction was not configured as cancellable"]
    NotCancellable = 13,
    #[doc = "Policy was already configured for this auction"]
    AlreadyConfigured = 14,
    NotClosedAuction = 15,
    NotBlacklistedAuction = 16,
    EntryFeeNotSet = 17,
    EntryFeeAlreadyPaid = 18,
    EntryFeeNotPaid = 19,
    AlreadyWithdrawn = 20,
    #[doc = "Emergency pause is on"]
    Paused = 21,
    #[doc = "Emergency pause is already off"]
    NotPaused = 22,
    AlreadyPaused = 23,
    #[doc = "Renounce latch is not in the state the call needs"]
    InvalidRenounceState = 24,
    NoPendingOwner = 26,
    #[doc = "Signer already signed in the current round"]
    AlreadySigned = 27,
    #[doc = "Ownership was renounced and cannot be recovered"]
    OwnershipRenounced = 28,
    ItemAlreadyClaimed = 29,
    #[doc = "Auction contract does not hold the collectible item"]
    ItemNotHeld = 30,
    #[doc = "Address does not implement the collectible interface"]
    InvalidCollectible = 31,
    Blacklisted = 32,
    NotWhitelisted = 33,
    #[doc = "Contract state was never initialized"]
    NotInitialized = 35,

    // Timing
    AuctionNotStarted = 40,
    AuctionEnded = 41,
    AuctionAlreadyStarted = 42,
    AuctionNotOver = 43,
    TimelockNotQueued = 44,
    TimelockNotReady = 45,
    TimelockExpired = 46,
    QuorumExpired = 47,
    InvalidTimeRange = 48,
    StartInPast = 49,
    SnipeIntervalTooLong = 50,

    // Threshold
    InsufficientSignatures = 60,
    BidTooLow = 61,

    // Value
    InvalidAmount = 70,
    EntryFeeMismatch = 71,
    InvalidAddress = 72,
    AlreadyOwner = 73,
    AlreadyPending = 74,
    DuplicateSigner = 75,
    #[doc = "Signer roster, threshold or signature validity is inconsistent"]
    InvalidRoster = 76,
    MathOverflow = 79,
}

/// Broad failure category of an [`ErrorCode`]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Authorization,
    State,
    Timing,
    Threshold,
    Value,
}

impl ErrorCode {
    pub fn kind(&self) -> ErrorKind {
        match *self as u32 {
            0..=9 => ErrorKind::Authorization,
            10..=39 => ErrorKind::State,
            40..=59 => ErrorKind::Timing,
            60..=69 => ErrorKind::Threshold,
            _ => ErrorKind::Value,
        }
    }
}
