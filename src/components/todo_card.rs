//! Todo Card Component
//!
//! One contract todo: title, description, completion badge, and the
//! toggle/delete controls. Each control runs the same flow as submit:
//! take the lock, sign, await confirmation, re-fetch.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::chain::contract::TodoContract;
use crate::chain::session;
use crate::context::AppContext;
use crate::error::WalletError;
use crate::models::Todo;
use crate::store::{self, use_app_store, AppStore};

/// Which mutation a card control fires.
#[derive(Clone, Copy)]
enum CardAction {
    Toggle,
    Delete,
}

fn spawn_card_action(ctx: AppContext, app_store: AppStore, action: CardAction, index: usize) {
    if !ctx.begin_submit() {
        return;
    }
    spawn_local(async move {
        let result: Result<(), WalletError> = async {
            let signer = session::signer().await?;
            let contract = TodoContract::signing(signer);
            let pending = match action {
                CardAction::Toggle => contract.update_todo_status(index).await?,
                CardAction::Delete => contract.delete_todo(index).await?,
            };
            pending.confirmed().await?;
            store::refresh_todos(&app_store, &contract).await
        }
        .await;
        if let Err(error) = result {
            web_sys::console::error_1(&format!("todo update failed: {error}").into());
        }
        ctx.end_submit();
    });
}

#[component]
pub fn TodoCard(index: usize, todo: Todo) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let app_store = use_app_store();

    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <div class="col-md-4">
            <div class="card">
                <div class="card-body">
                    <h4>{todo.title.clone()}</h4>
                    <p>{todo.description.clone()}</p>
                    {if todo.completed {
                        view! { <span class="badge bg-success">"Done"</span> }.into_any()
                    } else {
                        view! { <span class="badge bg-warning">"Undone"</span> }.into_any()
                    }}
                    <hr />
                    <button
                        class="btn btn-secondary"
                        disabled=move || ctx.submitting.get()
                        on:click=move |_| spawn_card_action(ctx, app_store, CardAction::Toggle, index)
                    >
                        "Toggle Status"
                    </button>

                    <Show when=move || !confirm_delete.get()>
                        <button
                            class="btn btn-outline-danger ml-2"
                            on:click=move |_| set_confirm_delete.set(true)
                        >
                            "×"
                        </button>
                    </Show>
                    <Show when=move || confirm_delete.get()>
                        <span class="ml-2">
                            <button
                                class="btn btn-danger"
                                disabled=move || ctx.submitting.get()
                                on:click=move |_| {
                                    set_confirm_delete.set(false);
                                    spawn_card_action(ctx, app_store, CardAction::Delete, index);
                                }
                            >
                                "✓"
                            </button>
                            <button
                                class="btn btn-light"
                                on:click=move |_| set_confirm_delete.set(false)
                            >
                                "✗"
                            </button>
                        </span>
                    </Show>
                </div>
            </div>
        </div>
    }
}
