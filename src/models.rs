//! Frontend Models
//!
//! Data structures for the wallet session and the contract's todo list.

use alloy_primitives::Address;

/// One todo entry as read from the contract.
///
/// The contract owns these entirely; the client only renders snapshots.
/// Identity is the position within the most recent fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// An established, chain-verified wallet session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    /// Address of the connected account.
    pub address: Address,
    /// Chain id the wallet reported at connect time.
    pub chain_id: u64,
}

/// Wallet connection state machine.
///
/// `Disconnected -> Connecting -> Connected`; a failed connect falls
/// back to `Disconnected`. Nothing ever transitions out of `Connected`
/// short of a page reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalletState {
    #[default]
    Disconnected,
    Connecting,
    Connected(Session),
}

impl WalletState {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletState::Connected(_))
    }

    pub fn session(&self) -> Option<Session> {
        match self {
            WalletState::Connected(session) => Some(*session),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn default_state_is_disconnected() {
        assert_eq!(WalletState::default(), WalletState::Disconnected);
        assert!(!WalletState::default().is_connected());
    }

    #[test]
    fn only_connected_exposes_a_session() {
        let session = Session {
            address: address!("E6FE5890155cD85Fe793df52293c5e653cab285b"),
            chain_id: 11155111,
        };
        assert_eq!(WalletState::Disconnected.session(), None);
        assert_eq!(WalletState::Connecting.session(), None);
        assert_eq!(WalletState::Connected(session).session(), Some(session));
    }
}
