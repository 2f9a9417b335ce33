//! Schedule Form Component
//!
//! Field grid shared by the Add and Edit modals. The repeat options follow
//! the selected frequency.

use leptos::prelude::*;
use schedule_core::{BoardAction, FormField, Frequency, Repeat};

use crate::input::InputBinding;
use crate::store::{store_dispatch, use_app_store, AppStateStoreFields};

/// Form body with Cancel and submit buttons
#[component]
pub fn ScheduleForm(submit_label: &'static str) -> impl IntoView {
    let store = use_app_store();

    let current_frequency = move || store.board().read().form().frequency();
    let current_repeat = move || store.board().read().form().repeat();
    let repeat_options = move || current_frequency().map(|f| f.repeat_options()).unwrap_or_default();

    let on_frequency = move |ev: web_sys::Event| match Frequency::from_label(&event_target_value(&ev)) {
        Ok(frequency) => store_dispatch(&store, BoardAction::SelectFrequency(frequency)),
        Err(e) => tracing::warn!(error = %e, "ignored frequency selection"),
    };

    let on_repeat = move |ev: web_sys::Event| {
        let Some(frequency) = store.board().read_untracked().form().frequency() else {
            return;
        };
        match Repeat::parse_for(frequency, &event_target_value(&ev)) {
            Ok(repeat) => store_dispatch(&store, BoardAction::SelectRepeat(repeat)),
            Err(e) => tracing::warn!(error = %e, "ignored repeat selection"),
        }
    };

    let missing = move || {
        store
            .board()
            .read()
            .form()
            .missing_fields()
            .iter()
            .map(|f| f.label())
            .collect::<Vec<_>>()
            .join(", ")
    };

    view! {
        <div class="form-grid">
            <TextField field=FormField::Title wide=true />
            <TextField field=FormField::Description wide=true />
            <TextField field=FormField::Subject />

            <div class="form-field">
                <label for="schedule-frequency">"Frequency"</label>
                <select id="schedule-frequency" on:change=on_frequency>
                    <option value="" prop:selected=move || current_frequency().is_none()>"Select…"</option>
                    {Frequency::ALL.iter().map(|f| {
                        let f = *f;
                        view! {
                            <option value=f.label() prop:selected=move || current_frequency() == Some(f)>
                                {f.label()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </div>

            <div class="form-field">
                <label for="schedule-repeat">"Repeat"</label>
                <select
                    id="schedule-repeat"
                    on:change=on_repeat
                    prop:disabled=move || current_frequency().is_none()
                >
                    <option value="" prop:selected=move || current_repeat().is_none()>"Select…"</option>
                    {move || repeat_options().into_iter().map(|r| {
                        view! {
                            <option value=r.label() prop:selected=move || current_repeat() == Some(r)>
                                {r.label()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </div>

            <TextField field=FormField::Schedule />
        </div>

        <Show when=move || store.board().read().add_error()>
            <div class="form-error">
                "*Empty Fields are not allowed"
                <span class="form-error-fields">{missing}</span>
            </div>
        </Show>

        <div class="modal-actions">
            <button
                type="button"
                class="btn-secondary"
                on:click=move |_| store_dispatch(&store, BoardAction::Cancel)
            >
                "Cancel"
            </button>
            <button
                type="button"
                class="btn-primary"
                on:click=move |_| store_dispatch(&store, BoardAction::Submit)
            >
                {submit_label}
            </button>
        </div>
    }
}

/// Labelled text input bound to one form field
#[component]
fn TextField(field: FormField, #[prop(optional)] wide: bool) -> impl IntoView {
    let binding = InputBinding::form_field(use_app_store(), field);
    let id = format!("schedule-{}", field.label().to_lowercase());

    view! {
        <div class=if wide { "form-field wide" } else { "form-field" }>
            <label for=id.clone()>{field.label()}</label>
            <input
                type="text"
                id=id
                prop:value=move || binding.value()
                on:input=move |ev| binding.update(ev)
            />
        </div>
    }
}
