//! Global Application State Store
//!
//! Uses Leptos reactive_stores for the contract-owned todo list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::chain::contract::{Connection, TodoContract};
use crate::error::WalletError;
use crate::models::Todo;

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Latest `showTodos` snapshot. Replaced wholesale on every fetch;
    /// no item is ever appended locally.
    pub todos: Vec<Todo>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Replace the whole list with the latest fetch result.
pub fn store_replace_todos(store: &AppStore, todos: Vec<Todo>) {
    *store.todos().write() = todos;
}

/// Re-fetch the full list from chain and replace the store.
///
/// Every mutating flow calls this before releasing its pending flag,
/// so the rendered list never diverges from chain state after a write
/// we issued ourselves.
pub async fn refresh_todos<C: Connection>(
    store: &AppStore,
    contract: &TodoContract<C>,
) -> Result<(), WalletError> {
    let todos = contract.show_todos().await?;
    store_replace_todos(store, todos);
    Ok(())
}
