//! Toolbar Component
//!
//! Search box and the Add button above the schedule table.

use leptos::prelude::*;
use schedule_core::BoardAction;

use crate::config::AppConfig;
use crate::input::InputBinding;
use crate::store::{store_dispatch, use_app_store};

#[component]
pub fn Toolbar() -> impl IntoView {
    let store = use_app_store();
    let config = expect_context::<AppConfig>();
    let search = InputBinding::search(store);

    view! {
        <div class="toolbar">
            <input
                type="text"
                class="search-input"
                placeholder=config.search_placeholder
                prop:value=move || search.value()
                on:input=move |ev| search.update(ev)
            />
            <button class="add-btn" on:click=move |_| store_dispatch(&store, BoardAction::OpenAdd)>
                <img src="public/icons/add.svg" alt="" />
                <span>"Add"</span>
            </button>
        </div>
    }
}
