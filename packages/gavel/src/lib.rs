#![no_std]

pub mod macros;

pub mod constants;
pub mod error;
pub mod guards;
