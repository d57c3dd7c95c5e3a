//! Wallet Session Manager
//!
//! Establishes a chain-verified connection to the injected wallet. The
//! read-only connect and the per-write signer acquisition share one
//! guard: prompt for accounts, then verify the active network.

use alloy_primitives::Address;

use crate::chain::provider;
use crate::config;
use crate::error::WalletError;
use crate::models::Session;

/// Write-capable handle: an account the wallet agreed to sign for on
/// the expected network. Acquired fresh before every mutating call, so
/// every write re-validates the network.
#[derive(Debug, Clone, Copy)]
pub struct Signer {
    address: Address,
}

impl Signer {
    pub fn address(&self) -> Address {
        self.address
    }
}

/// Connect the wallet and establish a session.
///
/// Suspends on the wallet's connection prompt. Fails without
/// establishing anything when no provider is injected, the user
/// rejects, or the wallet is on the wrong chain.
pub async fn connect() -> Result<Session, WalletError> {
    let (address, chain_id) = verified_account().await?;
    Ok(Session { address, chain_id })
}

/// Acquire a signing handle, re-running the full network guard.
pub async fn signer() -> Result<Signer, WalletError> {
    let (address, _) = verified_account().await?;
    Ok(Signer { address })
}

/// Prompt for accounts and verify the active network. The session is
/// never considered established while the wallet is on another chain.
async fn verified_account() -> Result<(Address, u64), WalletError> {
    let accounts = provider::request_accounts().await?;

    let chain_id = provider::chain_id().await?;
    if chain_id != config::CHAIN_ID {
        alert_switch_network();
        return Err(WalletError::WrongNetwork {
            expected: config::CHAIN_ID,
            actual: chain_id,
        });
    }

    let first = accounts
        .first()
        .ok_or_else(|| WalletError::Rpc("wallet returned no accounts".into()))?;
    let address = first
        .parse::<Address>()
        .map_err(|err| WalletError::Rpc(format!("unparseable account {first:?}: {err}")))?;
    Ok((address, chain_id))
}

/// Blocking prompt telling the user to switch networks.
fn alert_switch_network() {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(&format!(
            "Please switch to the {} network!",
            config::NETWORK_NAME
        ));
    }
}
