use ch_api_types::{Conference, ConferenceType};
use leptos::prelude::*;

use crate::components::format_datetime;
use crate::i18n::t;

/// One conference in the list grid, with detail/edit/delete actions.
#[component]
pub fn ConferenceCard(
    conference: Conference,
    on_view: impl Fn(i64) + Clone + 'static,
    on_edit: impl Fn(Conference) + Clone + 'static,
    on_delete: impl Fn(i64) + Clone + 'static,
) -> impl IntoView {
    let id = conference.id;
    let badge_class = match conference.conference_type {
        ConferenceType::Academic => "card-badge badge-academic",
        ConferenceType::Commercial => "card-badge badge-commercial",
    };
    let speaker = conference.keynote.as_ref().map(|k| k.full_name());
    let conference_for_edit = conference.clone();

    view! {
        <div class="conference-card">
            <div class="card-header">
                <span class="card-title">{conference.titre.clone()}</span>
                <span class=badge_class>{conference.conference_type.label()}</span>
            </div>
            <div class="card-body">
                <div class="card-row">{format_datetime(&conference.date)}</div>
                <div class="card-row">
                    {format!("{} {}", conference.duree, t("detail-hours"))}
                </div>
                <div class="card-row">
                    {format!("{} {}", conference.nombre_inscrits, t("detail-participants"))}
                </div>
                <div class="card-row card-score">
                    {format!("\u{2605} {:.1}/5", conference.score)}
                </div>
                {speaker.map(|name| view! {
                    <div class="card-row card-speaker">{name}</div>
                })}
                <div class="card-row card-reviews">
                    {format!("{} {}", conference.reviews.len(), t("detail-reviews").to_lowercase())}
                </div>
            </div>
            <div class="card-actions">
                <button class="btn-details" on:click=move |_| on_view(id)>
                    {t("view-details")}
                </button>
                <button
                    class="btn-edit"
                    on:click=move |_| on_edit(conference_for_edit.clone())
                >
                    {t("edit")}
                </button>
                <button class="btn-delete" on:click=move |_| on_delete(id)>
                    {t("delete")}
                </button>
            </div>
        </div>
    }
}
