//! Global Application State Store
//!
//! Uses Leptos reactive_stores; the board is the single owner of all state.

use leptos::prelude::*;
use reactive_stores::Store;
use schedule_core::{Board, BoardAction, ScheduleItem};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Item store, search query, form and modal state
    pub board: Board,
}

impl AppState {
    pub fn new(board: Board) -> Self {
        Self { board }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Run a board action. Rejections are logged; their visible effect
/// (e.g. the empty-fields message) is already part of the board state.
pub fn store_dispatch(store: &AppStore, action: BoardAction) {
    let result = store.board().write().apply(action);
    if let Err(e) = result {
        tracing::debug!(error = %e, "board action rejected");
    }
}

/// Items matching the current search, in store order (tracked)
pub fn store_filtered_items(store: &AppStore) -> Vec<ScheduleItem> {
    store.board().read().filtered().into_iter().cloned().collect()
}
