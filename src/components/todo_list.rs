use leptos::prelude::*;

use crate::components::TodoCard;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let app_store = use_app_store();

    view! {
        <div class="row mt-5 mb-5">
            <For
                each=move || app_store.todos().get().into_iter().enumerate()
                // Identity is positional, but content has to be part of
                // the key so a toggled card re-renders.
                key=|(index, todo)| (*index, todo.title.clone(), todo.completed)
                children=move |(index, todo)| view! { <TodoCard index=index todo=todo /> }
            />
        </div>
    }
}
