#![no_std]

mod contract;
pub mod errors;
mod events;
mod receiver;
mod storage;

pub use crate::contract::{ Collectible, CollectibleClient };

#[cfg(test)]
mod tests;
