//! Chain Todo Frontend App
//!
//! Application controller: wires the wallet session, the contract
//! gateway and the view together.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::chain::contract::TodoContract;
use crate::chain::session;
use crate::components::{Navbar, TodoForm, TodoList};
use crate::context::AppContext;
use crate::models::WalletState;
use crate::store::{self, AppState, AppStore};

/// Kick off a wallet connect unless one is already in flight.
///
/// Runs automatically on first load and again from the navbar button
/// after a failure. Failures are logged and swallowed; the state falls
/// back to Disconnected and nothing retries on its own.
pub fn spawn_connect(ctx: AppContext) {
    if !ctx.begin_connect() {
        return;
    }
    spawn_local(async move {
        match session::connect().await {
            Ok(session) => ctx.finish_connect(session),
            Err(error) => {
                web_sys::console::error_1(&format!("wallet connect failed: {error}").into());
                ctx.fail_connect();
            }
        }
    });
}

#[component]
pub fn App() -> impl IntoView {
    let wallet = signal(WalletState::default());
    let submitting = signal(false);

    let ctx = AppContext::new(wallet, submitting);
    provide_context(ctx);

    let app_store = AppStore::new(AppState::default());
    provide_context(app_store);

    // Connect automatically on first load; no user gesture needed.
    Effect::new(move |_| {
        if ctx.wallet.get_untracked() == WalletState::Disconnected {
            spawn_connect(ctx);
        }
    });

    // One read-only fetch when the session comes up. The only other
    // refresh path is the tail of a confirmed mutation.
    Effect::new(move |_| {
        let Some(session) = ctx.wallet.get().session() else {
            return;
        };
        spawn_local(async move {
            let contract = TodoContract::read_only(&session);
            if let Err(error) = store::refresh_todos(&app_store, &contract).await {
                web_sys::console::error_1(&format!("todo fetch failed: {error}").into());
            }
        });
    });

    view! {
        <div class="container">
            <Navbar />
            {move || if ctx.wallet.get().is_connected() {
                view! {
                    <div>
                        <TodoForm />
                        <TodoList />
                    </div>
                }
                .into_any()
            } else {
                view! {
                    <h3 class="text-center mt-5">"Please connect your wallet to proceed."</h3>
                }
                .into_any()
            }}
        </div>
    }
}
