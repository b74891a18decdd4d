use ch_api_types::Keynote;
use leptos::prelude::*;

use crate::i18n::t;

fn initials(keynote: &Keynote) -> String {
    let mut out = String::new();
    if let Some(c) = keynote.prenom.chars().next() {
        out.extend(c.to_uppercase());
    }
    if let Some(c) = keynote.nom.chars().next() {
        out.extend(c.to_uppercase());
    }
    out
}

/// One speaker in the keynote grid, with edit/delete actions.
#[component]
pub fn KeynoteCard(
    keynote: Keynote,
    on_edit: impl Fn(Keynote) + Clone + 'static,
    on_delete: impl Fn(i64) + Clone + 'static,
) -> impl IntoView {
    let id = keynote.id;
    let avatar = initials(&keynote);
    let keynote_for_edit = keynote.clone();

    view! {
        <div class="keynote-card">
            <div class="card-header">
                <span class="keynote-avatar">{avatar}</span>
                <div class="keynote-identity">
                    <span class="card-title">{keynote.full_name()}</span>
                    <span class="keynote-fonction">{keynote.fonction.clone()}</span>
                </div>
            </div>
            <div class="card-body">
                <div class="card-row keynote-email">{keynote.email.clone()}</div>
            </div>
            <div class="card-actions">
                <button
                    class="btn-edit"
                    on:click=move |_| on_edit(keynote_for_edit.clone())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_come_from_first_and_last_name() {
        let keynote = Keynote {
            id: 1,
            nom: "curie".into(),
            prenom: "marie".into(),
            email: "marie@curie.fr".into(),
            fonction: "Chercheuse".into(),
        };
        assert_eq!(initials(&keynote), "MC");
    }

    #[test]
    fn initials_tolerate_empty_names() {
        let keynote = Keynote {
            id: 1,
            nom: String::new(),
            prenom: String::new(),
            email: String::new(),
            fonction: String::new(),
        };
        assert_eq!(initials(&keynote), "");
    }
}
