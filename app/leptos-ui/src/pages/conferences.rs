use ch_api_types::{Conference, ConferenceRequest, Keynote};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::api;
use crate::components::conference_card::ConferenceCard;
use crate::components::conference_form::ConferenceForm;
use crate::components::confirm;
use crate::components::spinner::Spinner;
use crate::i18n::t;
use crate::state::{use_app_state, Route};

/// Conference list: one card per record, create/edit through the form
/// modal, delete behind a confirmation. Every mutation is followed by a
/// full reload; the list never patches itself locally.
#[component]
pub fn ConferencesPage() -> impl IntoView {
    let state = use_app_state();

    let (conferences, set_conferences) = signal(Vec::<Conference>::new());
    let (keynotes, set_keynotes) = signal(Vec::<Keynote>::new());
    let (loading, set_loading) = signal(true);
    let (editing, set_editing) = signal(Option::<Conference>::None);
    let (show_form, set_show_form) = signal(false);

    // Conferences and keynotes load together; the view waits for both.
    // The keynote list feeds the form's speaker select.
    let do_load = {
        let state = state.clone();
        move || {
            let state = state.clone();
            set_loading.set(true);
            leptos::task::spawn_local(async move {
                let (confs, keys) =
                    futures::future::join(api::conferences::list(), api::keynotes::list()).await;
                match (confs, keys) {
                    (Ok(confs), Ok(keys)) => {
                        set_conferences.set(confs);
                        set_keynotes.set(keys);
                    }
                    (Err(e), _) | (_, Err(e)) => {
                        leptos::logging::log!("failed to load conferences: {e}");
                        state.toast_error("toast-load-failed");
                    }
                }
                set_loading.set(false);
            });
        }
    };
    do_load();

    let on_view = {
        let state = state.clone();
        move |id: i64| state.navigate(Route::ConferenceDetail(id))
    };

    let on_edit = move |conference: Conference| {
        set_editing.set(Some(conference));
        set_show_form.set(true);
    };

    let on_create = move |_: MouseEvent| {
        set_editing.set(None);
        set_show_form.set(true);
    };

    let on_delete = {
        let state = state.clone();
        let do_load = do_load.clone();
        let message = t("confirm-delete-conference");
        move |id: i64| {
            if !confirm(&message) {
                return;
            }
            let state = state.clone();
            let do_load = do_load.clone();
            leptos::task::spawn_local(async move {
                match api::conferences::delete(id).await {
                    Ok(()) => {
                        state.toast_success("toast-conference-deleted");
                        do_load();
                    }
                    Err(e) => {
                        leptos::logging::log!("failed to delete conference {id}: {e}");
                        state.toast_error("toast-delete-failed");
                    }
                }
            });
        }
    };

    let on_submit = {
        let state = state.clone();
        let do_load = do_load.clone();
        move |request: ConferenceRequest| {
            let editing_id = editing.get_untracked().map(|c| c.id);
            set_show_form.set(false);
            set_editing.set(None);
            let state = state.clone();
            let do_load = do_load.clone();
            leptos::task::spawn_local(async move {
                let result = match editing_id {
                    Some(id) => api::conferences::update(id, &request).await,
                    None => api::conferences::create(&request).await,
                };
                match result {
                    Ok(()) => {
                        state.toast_success(if editing_id.is_some() {
                            "toast-conference-updated"
                        } else {
                            "toast-conference-created"
                        });
                        do_load();
                    }
                    Err(e) => {
                        leptos::logging::log!("failed to save conference: {e}");
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
                <h2>{move || t("conferences-title")}</h2>
                <p class="page-subtitle">{move || t("conferences-subtitle")}</p>
            </div>
            <button class="btn-new" on:click=on_create_header>
                {move || t("new-conference")}
            </button>
        </div>

        {move || {
            if loading.get() {
                return view! { <Spinner /> }.into_any();
            }
            let confs = conferences.get();
            if confs.is_empty() {
                let on_create = on_create.clone();
                return view! {
                    <div class="empty-state">
                        <p>{t("conferences-empty")}</p>
                        <button class="btn-new-outline" on:click=on_create>
                            {t("conferences-empty-cta")}
                        </button>
                    </div>
                }
                .into_any();
            }
            view! {
                <div class="card-grid">
                    {confs.into_iter().map(|conference| {
                        let on_view = on_view.clone();
                        let on_edit = on_edit.clone();
                        let on_delete = on_delete.clone();
                        view! {
                            <ConferenceCard
                                conference=conference
                                on_view=on_view
                                on_edit=on_edit
                                on_delete=on_delete
                            />
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
                <ConferenceForm
                    conference=editing.get_untracked()
                    keynotes=keynotes.get_untracked()
                    on_submit=on_submit
                    on_cancel=on_cancel
                />
            })
        }}
    }
}
