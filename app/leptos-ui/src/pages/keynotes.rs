use ch_api_types::{Keynote, KeynoteRequest};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::api;
use crate::components::confirm;
use crate::components::keynote_card::KeynoteCard;
use crate::components::keynote_form::KeynoteForm;
use crate::components::spinner::Spinner;
use crate::i18n::t;
use crate::state::use_app_state;

/// Keynote speaker list: card grid, create/edit via the form modal,
/// delete behind a confirmation, full reload after every mutation.
#[component]
pub fn KeynotesPage() -> impl IntoView {
    let state = use_app_state();

    let (keynotes, set_keynotes) = signal(Vec::<Keynote>::new());
    let (loading, set_loading) = signal(true);
    let (editing, set_editing) = signal(Option::<Keynote>::None);
    let (show_form, set_show_form) = signal(false);

    let do_load = {
        let state = state.clone();
        move || {
            let state = state.clone();
            set_loading.set(true);
            leptos::task::spawn_local(async move {
                match api::keynotes::list().await {
                    Ok(keys) => set_keynotes.set(keys),
                    Err(e) => {
                        leptos::logging::log!("failed to load keynotes: {e}");
                        state.toast_error("toast-load-failed");
                    }
                }
                set_loading.set(false);
            });
        }
    };
    do_load();

    let on_edit = move |keynote: Keynote| {
        set_editing.set(Some(keynote));
        set_show_form.set(true);
    };

    let on_create = move |_: MouseEvent| {
        set_editing.set(None);
        set_show_form.set(true);
    };

    let on_delete = {
        let state = state.clone();
        let do_load = do_load.clone();
        let message = t("confirm-delete-keynote");
        move |id: i64| {
            if !confirm(&message) {
                return;
            }
            let state = state.clone();
            let do_load = do_load.clone();
            leptos::task::spawn_local(async move {
                match api::keynotes::delete(id).await {
                    Ok(()) => {
                        state.toast_success("toast-keynote-deleted");
                        do_load();
                    }
                    Err(e) => {
                        leptos::logging::log!("failed to delete keynote {id}: {e}");
                        state.toast_error("toast-delete-failed");
                    }
                }
            });
        }
    };

    let on_submit = {
        let state = state.clone();
        let do_load = do_load.clone();
        move |request: KeynoteRequest| {
            let editing_id = editing.get_untracked().map(|k| k.id);
            set_show_form.set(false);
            set_editing.set(None);
            let state = state.clone();
            let do_load = do_load.clone();
            leptos::task::spawn_local(async move {
                let result = match editing_id {
                    Some(id) => api::keynotes::update(id, &request).await,
                    None => api::keynotes::create(&request).await,
                };
                match result {
                    Ok(()) => {
                        state.toast_success(if editing_id.is_some() {
                            "toast-keynote-updated"
                        } else {
                            "toast-keynote-created"
                        });
                        do_load();
                    }
                    Err(e) => {
                        leptos::logging::log!("failed to save keynote: {e}");
                        state.toast_error("toast-save-failed");
                    }
                }
            });
        }
    };

    let on_cancel_form = move |_: MouseEvent| {
        set_show_form.set(false);
        set_editing.set(None);
    };

    let on_create_header = on_create.clone();

    view! {
        <div class="page-header">
            <div>
                <h2>{move || t("keynotes-title")}</h2>
                <p class="page-subtitle">{move || t("keynotes-subtitle")}</p>
            </div>
            <button class="btn-new" on:click=on_create_header>
                {move || t("new-keynote")}
            </button>
        </div>

        {move || {
            if loading.get() {
                return view! { <Spinner /> }.into_any();
            }
            let keys = keynotes.get();
            if keys.is_empty() {
                let on_create = on_create.clone();
                return view! {
                    <div class="empty-state">
                        <p>{t("keynotes-empty")}</p>
                        <button class="btn-new-outline" on:click=on_create>
                            {t("keynotes-empty-cta")}
                        </button>
                    </div>
                }
                .into_any();
            }
            view! {
                <div class="card-grid">
                    {keys.into_iter().map(|keynote| {
                        let on_edit = on_edit.clone();
                        let on_delete = on_delete.clone();
                        view! {
                            <KeynoteCard keynote=keynote on_edit=on_edit on_delete=on_delete />
                        }
                    }).collect::<Vec<_>>()}
                </div>
            }
            .into_any()
        }}

        {move || {
            if !show_form.get() {
                return None;
            }
            let on_submit = on_submit.clone();
            let on_cancel = on_cancel_form.clone();
            Some(view! {
                <KeynoteForm
                    keynote=editing.get_untracked()
                    on_submit=on_submit
                    on_cancel=on_cancel
                />
            })
        }}
    }
}
