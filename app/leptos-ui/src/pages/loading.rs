use leptos::prelude::*;

use crate::components::spinner::Spinner;
use crate::i18n::t;

/// Shown while the session bootstrap is unresolved. There is deliberately
/// no error state here: without a token the app never advances past this.
#[component]
pub fn LoadingPage() -> impl IntoView {
    view! {
        <div class="loading-page">
            <Spinner />
            <p class="loading-label">{move || t("loading")}</p>
        </div>
    }
}
