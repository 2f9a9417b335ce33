//! Table Row Component
//!
//! One schedule item as a read-only table row with edit/delete actions.

use leptos::prelude::*;
use schedule_core::ScheduleItem;

/// A single schedule row
#[component]
pub fn TableRow(
    item: ScheduleItem,
    on_edit: Callback<()>,
    on_delete: Callback<()>,
) -> impl IntoView {
    let recurrence = match item.repeat() {
        Some(repeat) => format!("{} · {}", item.frequency(), repeat),
        None => item.frequency().to_string(),
    };

    view! {
        <tr class="schedule-row">
            <td class="cell-title">{item.title}</td>
            <td class="cell-description">{item.description}</td>
            <td class="cell-subject">{item.subject}</td>
            <td class="cell-schedule">
                {item.schedule}
                <span class="recurrence">{recurrence}</span>
            </td>
            <td class="cell-actions">
                <button class="edit-btn" title="Edit" on:click=move |_| on_edit.run(())>
                    <img src="public/icons/edit.svg" alt="Edit" />
                </button>
                <button class="delete-btn" title="Delete" on:click=move |_| on_delete.run(())>
                    <img src="public/icons/delete.svg" alt="Delete" />
                </button>
            </td>
        </tr>
    }
}
