//! Modal Component
//!
//! Overlay that renders its title and children only while `show` is true.
//! Opening and closing are entirely up to the parent.

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into)] show: Signal<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || show.get()>
            <div class="modal-overlay">
                <div class="modal-dialog" role="dialog">
                    <h2 class="modal-title">{title.clone()}</h2>
                    <div class="modal-body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
