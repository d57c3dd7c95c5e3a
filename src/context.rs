//! Application Context
//!
//! Shared state provided via Leptos Context API: the wallet state
//! machine and the single-flight submission lock.

use leptos::prelude::*;

use crate::models::{Session, WalletState};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Wallet connection state - read
    pub wallet: ReadSignal<WalletState>,
    set_wallet: WriteSignal<WalletState>,
    /// Whether a mutating call is in flight - read
    pub submitting: ReadSignal<bool>,
    set_submitting: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(
        wallet: (ReadSignal<WalletState>, WriteSignal<WalletState>),
        submitting: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            wallet: wallet.0,
            set_wallet: wallet.1,
            submitting: submitting.0,
            set_submitting: submitting.1,
        }
    }

    /// The established session, if any.
    pub fn session(&self) -> Option<Session> {
        self.wallet.get().session()
    }

    /// Disconnected -> Connecting. Returns false when a connect is
    /// already in flight or the session is established.
    pub fn begin_connect(&self) -> bool {
        if self.wallet.get_untracked() != WalletState::Disconnected {
            return false;
        }
        self.set_wallet.set(WalletState::Connecting);
        true
    }

    /// Connecting -> Connected.
    pub fn finish_connect(&self, session: Session) {
        self.set_wallet.set(WalletState::Connected(session));
    }

    /// Connecting -> Disconnected. No retry is scheduled; the navbar
    /// button is the manual way back in.
    pub fn fail_connect(&self) {
        self.set_wallet.set(WalletState::Disconnected);
    }

    /// Take the single-flight submission lock. Returns false when a
    /// mutation is already in flight; the caller must then do nothing.
    pub fn begin_submit(&self) -> bool {
        if self.submitting.get_untracked() {
            return false;
        }
        self.set_submitting.set(true);
        true
    }

    /// Release the submission lock. Every flow exit path ends here.
    pub fn end_submit(&self) {
        self.set_submitting.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    fn test_ctx() -> AppContext {
        AppContext::new(signal(WalletState::default()), signal(false))
    }

    fn test_session() -> Session {
        Session {
            address: address!("E6FE5890155cD85Fe793df52293c5e653cab285b"),
            chain_id: 11155111,
        }
    }

    #[test]
    fn connect_walks_the_state_machine() {
        let ctx = test_ctx();
        assert_eq!(ctx.wallet.get_untracked(), WalletState::Disconnected);

        assert!(ctx.begin_connect());
        assert_eq!(ctx.wallet.get_untracked(), WalletState::Connecting);

        ctx.finish_connect(test_session());
        assert!(ctx.wallet.get_untracked().is_connected());
        assert_eq!(ctx.session(), Some(test_session()));
    }

    #[test]
    fn failed_connect_falls_back_to_disconnected() {
        let ctx = test_ctx();
        assert!(ctx.begin_connect());
        ctx.fail_connect();
        assert_eq!(ctx.wallet.get_untracked(), WalletState::Disconnected);
        assert_eq!(ctx.session(), None);
    }

    #[test]
    fn connect_is_single_flight() {
        let ctx = test_ctx();
        assert!(ctx.begin_connect());
        // A second trigger while Connecting is a no-op.
        assert!(!ctx.begin_connect());

        ctx.finish_connect(test_session());
        // And so is one after the session is established.
        assert!(!ctx.begin_connect());
    }

    #[test]
    fn submit_lock_is_single_flight() {
        let ctx = test_ctx();
        assert!(ctx.begin_submit());
        assert!(!ctx.begin_submit());
        ctx.end_submit();
        assert!(ctx.begin_submit());
    }
}
