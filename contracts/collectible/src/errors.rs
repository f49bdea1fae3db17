use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CollectibleError {
    ItemAlreadyExists = 1,
    ItemNotFound = 2,
    #[doc = "Sender does not own the item"]
    NotItemOwner = 3,
    #[doc = "Receiving contract did not acknowledge a safe transfer"]
    ReceiverRejected = 4,
    NotInitialized = 5,
}
