//! Schedule Board App
//!
//! Application shell: owns the board store and lays out the toolbar,
//! the schedule table and the Add/Edit modals.

use leptos::prelude::*;
use reactive_stores::Store;
use schedule_core::{Board, BoardAction, Repository};

use crate::components::{Modal, ScheduleForm, TableRow, Toolbar};
use crate::config::AppConfig;
use crate::store::{store_dispatch, store_filtered_items, AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig, board: Board) -> impl IntoView {
    let store = Store::new(AppState::new(board));

    // Provide state to all children
    provide_context(store);
    provide_context(config.clone());

    let rows = move || store_filtered_items(&store);
    let modal = move || store.board().read().modal();

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>{config.page_title}</h1>
            </header>

            <main class="main-content">
                <Toolbar />

                <div class="table-wrapper">
                    <table class="schedule-table">
                        <thead>
                            <tr>
                                <th>"Title"</th>
                                <th>"Description"</th>
                                <th>"Subject"</th>
                                <th>"Schedule"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=rows
                                key=|item| {
                                    // Key on every displayed field so edits re-render the row
                                    (
                                        item.id,
                                        item.title.clone(),
                                        item.description.clone(),
                                        item.subject.clone(),
                                        item.recurrence,
                                        item.schedule.clone(),
                                    )
                                }
                                children=move |item| {
                                    let id = item.id;
                                    view! {
                                        <TableRow
                                            item=item
                                            on_edit=Callback::new(move |_: ()| {
                                                store_dispatch(&store, BoardAction::OpenEdit(id))
                                            })
                                            on_delete=Callback::new(move |_: ()| {
                                                store_dispatch(&store, BoardAction::Delete(id))
                                            })
                                        />
                                    }
                                }
                            />
                        </tbody>
                    </table>

                    <Show when=move || rows().is_empty()>
                        <p class="empty-state">"No schedules match your search."</p>
                    </Show>
                </div>

                <p class="item-count">
                    {move || {
                        let board = store.board().read();
                        format!("{} of {} schedules", board.filtered().len(), board.store().list().len())
                    }}
                </p>
            </main>

            <Modal title="Add Schedule" show=Signal::derive(move || modal().is_adding())>
                <ScheduleForm submit_label="Done" />
            </Modal>
            <Modal title="Edit Schedule" show=Signal::derive(move || modal().is_editing())>
                <ScheduleForm submit_label="Update" />
            </Modal>
        </div>
    }
}
