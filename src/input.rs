//! Input Binding
//!
//! One text field as a value plus a single update entry point that accepts
//! either a plain string or the DOM change event of the field.

use leptos::prelude::*;
use schedule_core::{BoardAction, FormField};
use web_sys::Event;

use crate::store::{store_dispatch, AppStateStoreFields, AppStore};

/// A new value for a bound input
pub enum InputChange {
    Value(String),
    Event(Event),
}

impl InputChange {
    pub fn into_value(self) -> String {
        match self {
            InputChange::Value(value) => value,
            InputChange::Event(ev) => event_target_value(&ev),
        }
    }
}

impl From<String> for InputChange {
    fn from(value: String) -> Self {
        InputChange::Value(value)
    }
}

impl From<&str> for InputChange {
    fn from(value: &str) -> Self {
        InputChange::Value(value.to_string())
    }
}

impl From<Event> for InputChange {
    fn from(ev: Event) -> Self {
        InputChange::Event(ev)
    }
}

#[derive(Clone, Copy)]
pub struct InputBinding {
    value: Signal<String>,
    setter: Callback<String>,
}

impl InputBinding {
    pub fn new(value: Signal<String>, setter: Callback<String>) -> Self {
        Self { value, setter }
    }

    /// Bind a free-text field of the schedule form
    pub fn form_field(store: AppStore, field: FormField) -> Self {
        Self::new(
            Signal::derive(move || store.board().read().form().text(field).to_string()),
            Callback::new(move |value: String| store_dispatch(&store, BoardAction::SetText(field, value))),
        )
    }

    /// Bind the search box
    pub fn search(store: AppStore) -> Self {
        Self::new(
            Signal::derive(move || store.board().read().search().to_string()),
            Callback::new(move |value: String| store_dispatch(&store, BoardAction::Search(value))),
        )
    }

    pub fn value(&self) -> String {
        self.value.get()
    }

    pub fn update(&self, change: impl Into<InputChange>) {
        self.setter.run(change.into().into_value());
    }
}
