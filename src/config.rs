//! Deployment Constants
//!
//! Network and contract descriptor for the deployed Todo contract.

use alloy_primitives::{address, Address};

/// Chain id the contract is deployed on (Sepolia).
pub const CHAIN_ID: u64 = 11155111;

/// Human-readable name for the expected network, used in wallet prompts.
pub const NETWORK_NAME: &str = "Sepolia";

/// Address of the deployed Todo contract.
pub const CONTRACT_ADDRESS: Address = address!("E6FE5890155cD85Fe793df52293c5e653cab285b");
