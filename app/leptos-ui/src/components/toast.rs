use leptos::prelude::*;

use crate::i18n::t;
use crate::state::use_app_state;

/// Stacked notifications in a corner of the shell. Keys resolve through
/// i18n at render time; a toast stays until dismissed.
#[component]
pub fn ToastStack() -> impl IntoView {
    let state = use_app_state();
    let toasts = state.toasts;

    view! {
        <div class="toast-stack">
            {move || {
                toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let state = state.clone();
                        let id = toast.id;
                        let cls = if toast.error { "toast toast-error" } else { "toast toast-success" };
                        view! {
                            <div class=cls>
                                <span class="toast-title">{t(toast.title_key)}</span>
                                <span class="toast-body">{t(toast.body_key)}</span>
                                <button
                                    class="toast-close"
                                    on:click=move |_| state.dismiss_toast(id)
                                >
                                    "\u{00D7}"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
