use ch_api_types::{Keynote, KeynoteRequest};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::i18n::t;
use crate::validation::{self, KeynoteFormErrors};

/// Modal create/edit form for a keynote speaker.
#[component]
pub fn KeynoteForm(
    keynote: Option<Keynote>,
    on_submit: impl Fn(KeynoteRequest) + Clone + 'static,
    on_cancel: impl Fn(MouseEvent) + Clone + 'static,
) -> impl IntoView {
    let editing = keynote.is_some();

    let (nom, set_nom) = signal(keynote.as_ref().map(|k| k.nom.clone()).unwrap_or_default());
    let (prenom, set_prenom) = signal(
        keynote
            .as_ref()
            .map(|k| k.prenom.clone())
            .unwrap_or_default(),
    );
    let (email, set_email) = signal(
        keynote
            .as_ref()
            .map(|k| k.email.clone())
            .unwrap_or_default(),
    );
    let (fonction, set_fonction) = signal(
        keynote
            .as_ref()
            .map(|k| k.fonction.clone())
            .unwrap_or_default(),
    );
    let (errors, set_errors) = signal(KeynoteFormErrors::default());

    let on_cancel_bg = on_cancel.clone();

    let do_submit = move |_: MouseEvent| {
        let nom_v = nom.get_untracked();
        let prenom_v = prenom.get_untracked();
        let email_v = email.get_untracked();
        let fonction_v = fonction.get_untracked();

        let errs = validation::validate_keynote(&nom_v, &prenom_v, &email_v, &fonction_v);
        if !errs.is_empty() {
            set_errors.set(errs);
            return;
        }

        on_submit(KeynoteRequest {
            nom: nom_v.trim().to_string(),
            prenom: prenom_v.trim().to_string(),
            email: email_v.trim().to_string(),
            fonction: fonction_v.trim().to_string(),
        });
    };

    let field_error = move |key: Option<&'static str>| {
        key.map(|k| view! { <p class="field-error">{t(k)}</p> })
    };

    view! {
        <div class="modal-overlay" on:click=move |ev| on_cancel_bg(ev)></div>
        <div class="modal form-modal">
            <h2>{if editing { t("form-keynote-edit") } else { t("form-keynote-new") }}</h2>

            <div class="form-grid">
                <div class="form-group">
                    <label>{t("form-prenom")}</label>
                    <input
                        type="text"
                        prop:value=move || prenom.get()
                        on:input=move |ev| set_prenom.set(event_target_value(&ev))
                    />
                    {move || field_error(errors.get().prenom)}
                </div>
                <div class="form-group">
                    <label>{t("form-nom")}</label>
                    <input
                        type="text"
                        prop:value=move || nom.get()
                        on:input=move |ev| set_nom.set(event_target_value(&ev))
                    />
                    {move || field_error(errors.get().nom)}
                </div>
            </div>

            <div class="form-group">
                <label>{t("form-email")}</label>
                <input
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                {move || field_error(errors.get().email)}
            </div>

            <div class="form-group">
                <label>{t("form-fonction")}</label>
                <input
                    type="text"
                    prop:value=move || fonction.get()
                    on:input=move |ev| set_fonction.set(event_target_value(&ev))
                />
                {move || field_error(errors.get().fonction)}
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
