use ch_api_types::{Conference, ReviewRequest};
use leptos::prelude::*;

use crate::api;
use crate::components::spinner::Spinner;
use crate::components::{confirm, format_datetime};
use crate::i18n::t;
use crate::state::{use_app_state, Route};

/// Single-conference view: every field, the expanded keynote when the
/// relation resolved, and the reviews panel. Adding a review always sends
/// a single-element batch stamped with the current time; add and delete
/// are both followed by a full reload of the record.
#[component]
pub fn ConferenceDetailPage(conference_id: i64) -> impl IntoView {
    let state = use_app_state();

    let (conference, set_conference) = signal(Option::<Conference>::None);
    let (loading, set_loading) = signal(true);
    let (new_review, set_new_review) = signal(String::new());

    // A load failure sends the user back to the list.
    let do_load = {
        let state = state.clone();
        move || {
            let state = state.clone();
            set_loading.set(true);
            leptos::task::spawn_local(async move {
                match api::conferences::get(conference_id).await {
                    Ok(conf) => set_conference.set(Some(conf)),
                    Err(e) => {
                        leptos::logging::log!("failed to load conference {conference_id}: {e}");
                        state.toast_error("toast-load-conference-failed");
                        state.navigate(Route::Conferences);
                    }
                }
                set_loading.set(false);
            });
        }
    };
    do_load();

    let on_back = {
        let state = state.clone();
        move |_| state.navigate(Route::Conferences)
    };

    let on_add_review = {
        let state = state.clone();
        let do_load = do_load.clone();
        move |_| {
            let commentaire = new_review.get_untracked().trim().to_string();
            if commentaire.is_empty() {
                return;
            }
            let state = state.clone();
            let do_load = do_load.clone();
            leptos::task::spawn_local(async move {
                let review = ReviewRequest {
                    date: chrono::Utc::now().to_rfc3339(),
                    commentaire,
                };
                match api::conferences::update_reviews(conference_id, &[review]).await {
                    Ok(()) => {
                        state.toast_success("toast-review-added");
                        set_new_review.set(String::new());
                        do_load();
                    }
                    Err(e) => {
                        leptos::logging::log!("failed to add review: {e}");
                        state.toast_error("toast-review-failed");
                    }
                }
            });
        }
    };

    let on_delete_review = {
        let state = state.clone();
        let do_load = do_load.clone();
        let message = t("confirm-delete-review");
        move |review_id: i64| {
            if !confirm(&message) {
                return;
            }
            let state = state.clone();
            let do_load = do_load.clone();
            leptos::task::spawn_local(async move {
                match api::conferences::delete_review(conference_id, review_id).await {
                    Ok(()) => {
                        state.toast_success("toast-review-deleted");
                        do_load();
                    }
                    Err(e) => {
                        leptos::logging::log!("failed to delete review {review_id}: {e}");
                        state.toast_error("toast-delete-failed");
                    }
                }
            });
        }
    };

    let review_blank = move || new_review.get().trim().is_empty();

    view! {
        <button class="btn-back" on:click=on_back>
            {move || format!("\u{2190} {}", t("back"))}
        </button>

        {move || {
            if loading.get() {
                return view! { <Spinner /> }.into_any();
            }
            let Some(conf) = conference.get() else {
                return view! { <Spinner /> }.into_any();
            };
            let on_delete_review = on_delete_review.clone();
            let on_add_review = on_add_review.clone();

            let speaker = conf.keynote.clone().map(|keynote| view! {
                <div class="detail-panel detail-speaker">
                    <h3>{t("detail-speaker")}</h3>
                    <p class="speaker-name">{keynote.full_name()}</p>
                    <p class="speaker-fonction">{keynote.fonction.clone()}</p>
                    <p class="speaker-email">{keynote.email.clone()}</p>
                </div>
            });

            view! {
                <div class="detail-layout">
                    <div class="detail-main">
                        <div class="detail-panel">
                            <div class="detail-title-row">
                                <h2>{conf.titre.clone()}</h2>
                                <span class="card-badge">{conf.conference_type.label()}</span>
                            </div>
                            <div class="detail-facts">
                                <span>{format_datetime(&conf.date)}</span>
                                <span>{format!("{} {}", conf.duree, t("detail-hours"))}</span>
                                <span>
                                    {format!("{} {}", conf.nombre_inscrits, t("detail-participants"))}
                                </span>
                                <span>{format!("\u{2605} {:.1}/5", conf.score)}</span>
                            </div>
                        </div>
                        {speaker}
                    </div>

                    <div class="detail-panel detail-reviews">
                        <h3>{format!("{} ({})", t("detail-reviews"), conf.reviews.len())}</h3>
                        <textarea
                            placeholder=t("review-placeholder")
                            prop:value=move || new_review.get()
                            on:input=move |ev| set_new_review.set(event_target_value(&ev))
                        ></textarea>
                        <button
                            class="btn-submit"
                            disabled=review_blank
                            on:click=on_add_review
                        >
                            {t("review-add")}
                        </button>

                        <div class="review-list">
                            {conf.reviews.iter().map(|review| {
                                let review_id = review.id;
                                let on_delete_review = on_delete_review.clone();
                                view! {
                                    <div class="review-item">
                                        <div class="review-item-head">
                                            <p class="review-text">{review.commentaire.clone()}</p>
                                            <button
                                                class="btn-delete-review"
                                                on:click=move |_| on_delete_review(review_id)
                                            >
                                                {t("delete")}
                                            </button>
                                        </div>
                                        <p class="review-date">{format_datetime(&review.date)}</p>
                                    </div>
                                }
                            }).collect::<Vec<_>>()}
                        </div>
                    </div>
                </div>
            }
            .into_any()
        }}
    }
}
