//! Wallet and Chain Errors
//!
//! Error kinds for the wallet session and contract call path. Everything
//! here is logged to the browser console and swallowed by the caller;
//! only the wrong-network case raises a user-visible prompt.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// No EIP-1193 provider is injected into the page.
    #[error("no wallet extension found in this browser")]
    ProviderUnavailable,

    /// The user dismissed the wallet prompt (EIP-1193 code 4001).
    #[error("the user rejected the wallet request")]
    UserRejected,

    /// The wallet is connected to a different chain than the contract.
    #[error("wrong network: expected chain {expected}, wallet is on chain {actual}")]
    WrongNetwork { expected: u64, actual: u64 },

    /// Any other provider/RPC failure.
    #[error("provider request failed: {0}")]
    Rpc(String),

    /// A submitted transaction was mined but reverted.
    #[error("transaction {0} reverted")]
    TransactionFailed(String),

    /// The contract returned bytes we could not decode.
    #[error("could not decode contract response: {0}")]
    Decode(String),
}
