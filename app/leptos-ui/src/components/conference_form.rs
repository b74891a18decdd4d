use ch_api_types::{Conference, ConferenceRequest, ConferenceType, Keynote};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::components::datetime_local_value;
use crate::i18n::t;
use crate::validation::{self, ConferenceFormErrors};

/// Modal create/edit form for a conference. Field values live as raw input
/// strings; nothing is submitted while `validate_conference` reports an
/// error, and the request is only built from validated values.
#[component]
pub fn ConferenceForm(
    conference: Option<Conference>,
    keynotes: Vec<Keynote>,
    on_submit: impl Fn(ConferenceRequest) + Clone + 'static,
    on_cancel: impl Fn(MouseEvent) + Clone + 'static,
) -> impl IntoView {
    let editing = conference.is_some();

    let (titre, set_titre) = signal(
        conference
            .as_ref()
            .map(|c| c.titre.clone())
            .unwrap_or_default(),
    );
    let (conference_type, set_conference_type) = signal(
        conference
            .as_ref()
            .map(|c| c.conference_type)
            .unwrap_or_default(),
    );
    let (date, set_date) = signal(match conference.as_ref() {
        Some(c) => datetime_local_value(&c.date),
        None => chrono::Utc::now().format("%Y-%m-%dT%H:%M").to_string(),
    });
    let (duree, set_duree) = signal(
        conference
            .as_ref()
            .map(|c| c.duree.to_string())
            .unwrap_or_else(|| "2".to_string()),
    );
    let (nombre_inscrits, set_nombre_inscrits) = signal(
        conference
            .as_ref()
            .map(|c| c.nombre_inscrits.to_string())
            .unwrap_or_else(|| "0".to_string()),
    );
    let (score, set_score) = signal(
        conference
            .as_ref()
            .map(|c| c.score.to_string())
            .unwrap_or_else(|| "0".to_string()),
    );
    let (keynote_id, set_keynote_id) = signal(conference.as_ref().map(|c| c.keynote_id));
    let (errors, set_errors) = signal(ConferenceFormErrors::default());

    let on_cancel_bg = on_cancel.clone();

    let do_submit = move |_: MouseEvent| {
        let titre_v = titre.get_untracked();
        let date_v = date.get_untracked();
        let duree_v = duree.get_untracked();
        let inscrits_v = nombre_inscrits.get_untracked();
        let score_v = score.get_untracked();
        let keynote_v = keynote_id.get_untracked();

        let errs = validation::validate_conference(
            &titre_v,
            &date_v,
            &duree_v,
            &inscrits_v,
            &score_v,
            keynote_v,
        );
        if !errs.is_empty() {
            set_errors.set(errs);
            return;
        }

        let request = ConferenceRequest {
            titre: titre_v.trim().to_string(),
            conference_type: conference_type.get_untracked(),
            date: date_v,
            duree: duree_v.trim().parse().unwrap_or(validation::MIN_DUREE),
            nombre_inscrits: inscrits_v.trim().parse().unwrap_or(0),
            score: score_v.trim().parse().unwrap_or(0.0),
            reviews: None,
            keynote_id: keynote_v.unwrap_or(0),
        };
        on_submit(request);
    };

    let field_error = move |key: Option<&'static str>| {
        key.map(|k| view! { <p class="field-error">{t(k)}</p> })
    };

    view! {
        <div class="modal-overlay" on:click=move |ev| on_cancel_bg(ev)></div>
        <div class="modal form-modal">
            <h2>{if editing { t("form-conference-edit") } else { t("form-conference-new") }}</h2>

            <div class="form-group">
                <label>{t("form-titre")}</label>
                <input
                    type="text"
                    prop:value=move || titre.get()
                    on:input=move |ev| set_titre.set(event_target_value(&ev))
                />
                {move || field_error(errors.get().titre)}
            </div>

            <div class="form-group">
                <label>{t("form-type")}</label>
                <select
                    prop:value=move || conference_type.get().as_wire().to_string()
                    on:change=move |ev| {
                        set_conference_type.set(ConferenceType::from_wire(&event_target_value(&ev)));
                    }
                >
                    {ConferenceType::all().iter().map(|ty| view! {
                        <option value=ty.as_wire()>{ty.label()}</option>
                    }).collect::<Vec<_>>()}
                </select>
            </div>

            <div class="form-grid">
                <div class="form-group">
                    <label>{t("form-date")}</label>
                    <input
                        type="datetime-local"
                        prop:value=move || date.get()
                        on:input=move |ev| set_date.set(event_target_value(&ev))
                    />
                    {move || field_error(errors.get().date)}
                </div>
                <div class="form-group">
                    <label>{t("form-duree")}</label>
                    <input
                        type="number"
                        step="0.5"
                        min="0.5"
                        prop:value=move || duree.get()
                        on:input=move |ev| set_duree.set(event_target_value(&ev))
                    />
                    {move || field_error(errors.get().duree)}
                </div>
            </div>

            <div class="form-grid">
                <div class="form-group">
                    <label>{t("form-inscrits")}</label>
                    <input
                        type="number"
                        min="0"
                        prop:value=move || nombre_inscrits.get()
                        on:input=move |ev| set_nombre_inscrits.set(event_target_value(&ev))
                    />
                    {move || field_error(errors.get().nombre_inscrits)}
                </div>
                <div class="form-group">
                    <label>{t("form-score")}</label>
                    <input
                        type="number"
                        step="0.1"
                        min="0"
                        max="5"
                        prop:value=move || score.get()
                        on:input=move |ev| set_score.set(event_target_value(&ev))
                    />
                    {move || field_error(errors.get().score)}
                </div>
            </div>

            <div class="form-group">
                <label>{t("form-keynote")}</label>
                <select
                    prop:value=move || {
                        keynote_id.get().map(|id| id.to_string()).unwrap_or_default()
                    }
                    on:change=move |ev| {
                        set_keynote_id.set(event_target_value(&ev).parse::<i64>().ok());
                    }
                >
                    <option value="">{t("form-keynote-placeholder")}</option>
                    {keynotes.iter().map(|keynote| view! {
                        <option value=keynote.id.to_string()>
                            {format!("{} - {}", keynote.full_name(), keynote.fonction)}
                        </option>
                    }).collect::<Vec<_>>()}
                </select>
                {move || field_error(errors.get().keynote)}
            </div>

            <div class="modal-actions">
                <button class="btn-submit" on:click=do_submit>
                    {if editing { t("form-update") } else { t("form-create") }}
                </button>
                <button class="btn-cancel" on:click=move |ev| on_cancel(ev)>
                    {t("form-cancel")}
                </button>
            </div>
        </div>
    }
}
