//! Todo Form Component
//!
//! Title/description inputs and the submit flow: validate locally,
//! acquire a fresh signer, submit, await confirmation, re-fetch.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::chain::contract::TodoContract;
use crate::chain::session;
use crate::context::AppContext;
use crate::error::WalletError;
use crate::store::{self, use_app_store};

/// Both fields must be non-empty before anything touches the network.
fn form_is_complete(title: &str, description: &str) -> bool {
    !title.is_empty() && !description.is_empty()
}

#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let app_store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = title.get();
        let description = description.get();

        if !form_is_complete(&title, &description) {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message("All input fields must be filled out");
            }
            return;
        }
        if !ctx.begin_submit() {
            return;
        }

        spawn_local(async move {
            let result: Result<(), WalletError> = async {
                let signer = session::signer().await?;
                let contract = TodoContract::signing(signer);
                let pending = contract.add_todo(&title, &description).await?;
                pending.confirmed().await?;
                store::refresh_todos(&app_store, &contract).await
            }
            .await;
            if let Err(error) = result {
                web_sys::console::error_1(&format!("add todo failed: {error}").into());
            }
            ctx.end_submit();
        });
    };

    view! {
        <div class="row mt-5">
            <div class="col-md-2"></div>

            <div class="col-md-8">
                <div class="card">
                    <div class="card-body">
                        <form on:submit=add_todo>
                            <div class="form-group">
                                <label>"Todo Title"</label>
                                <input
                                    id="title"
                                    type="text"
                                    placeholder="Todo Title"
                                    class="form-control"
                                    prop:value=move || title.get()
                                    on:input=move |ev| {
                                        let target = ev.target().unwrap();
                                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                        set_title.set(input.value());
                                    }
                                />
                            </div>

                            <div class="form-group">
                                <label>"Todo Description"</label>
                                <textarea
                                    id="desc"
                                    rows="10"
                                    placeholder="Todo Description"
                                    class="form-control"
                                    prop:value=move || description.get()
                                    on:input=move |ev| {
                                        let target = ev.target().unwrap();
                                        let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                                        set_description.set(input.value());
                                    }
                                ></textarea>
                            </div>

                            <Show
                                when=move || !ctx.submitting.get()
                                fallback=|| view! { <p>"Loading..."</p> }
                            >
                                <button type="submit" class="btn btn-primary btn-lg btn-block">
                                    "Add Todo"
                                </button>
                            </Show>
                        </form>
                    </div>
                </div>
            </div>

            <div class="col-md-2"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::form_is_complete;

    #[test]
    fn empty_fields_fail_validation() {
        assert!(!form_is_complete("", ""));
        assert!(!form_is_complete("Buy milk", ""));
        assert!(!form_is_complete("", "2%"));
    }

    #[test]
    fn filled_fields_pass_validation() {
        assert!(form_is_complete("Buy milk", "2%"));
    }
}
