//! Chain Access
//!
//! Wallet session management and the contract gateway, layered over
//! the EIP-1193 provider bridge.

pub mod abi;
pub mod contract;
pub mod provider;
pub mod session;
