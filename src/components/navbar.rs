//! Navbar Component
//!
//! Brand bar with the connect control and connected-account display.

use leptos::prelude::*;

use crate::app::spawn_connect;
use crate::context::AppContext;
use crate::models::WalletState;

/// Shorten an address for display: `0x1234...abcd`.
fn short_address(address: &str) -> String {
    if address.len() > 10 {
        format!("{}...{}", &address[..6], &address[address.len() - 4..])
    } else {
        address.to_string()
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <nav class="navbar navbar-expand-lg navbar-light bg-primary">
            <a class="navbar-brand text-white" href="#">
                "WID Todo Application"
            </a>
            <span class="navbar-text ml-auto">
                {move || match ctx.wallet.get() {
                    WalletState::Connected(session) => view! {
                        <button class="btn btn-dark" disabled=true>
                            {short_address(&format!("{}", session.address))}
                        </button>
                    }
                    .into_any(),
                    WalletState::Connecting => view! {
                        <button class="btn btn-danger" disabled=true>
                            "Connecting..."
                        </button>
                    }
                    .into_any(),
                    WalletState::Disconnected => view! {
                        <button class="btn btn-danger" on:click=move |_| spawn_connect(ctx)>
                            "Connect Wallet"
                        </button>
                    }
                    .into_any(),
                }}
            </span>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::short_address;

    #[test]
    fn long_addresses_are_truncated() {
        assert_eq!(
            short_address("0xE6FE5890155cD85Fe793df52293c5e653cab285b"),
            "0xE6FE...285b"
        );
    }

    #[test]
    fn short_strings_pass_through() {
        assert_eq!(short_address("0xabc"), "0xabc");
    }
}
