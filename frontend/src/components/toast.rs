//! Toast stack (display only, notices come from the [`Toaster`]).

use leptos::*;

use crate::services::Toaster;

#[component]
pub fn ToastStack(toaster: Toaster) -> impl IntoView {
    let toasts = toaster.toasts();

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.get()
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    view! {
                        <div class=entry.css_class()>
                            <div class="toast-text">
                                <div class="toast-title">{entry.notice.title.clone()}</div>
                                <div class="toast-description">{entry.notice.description.clone()}</div>
                            </div>
                            <button class="toast-close" on:click=move |_| toaster.dismiss(id)>
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
