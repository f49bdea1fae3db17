#![no_std]

mod access;
mod auction_house;
pub mod collectible;
mod contract;
mod controller;
mod events;
mod policy;
pub mod storage;

pub use crate::contract::{ AuctionHouse, AuctionHouseClient };
pub use crate::controller::settlement::Settlement;
