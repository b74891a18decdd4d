use leptos::prelude::*;

use crate::auth;
use crate::i18n::{t, Locale};
use crate::state::{use_app_state, Route};

/// Top bar: app name, the two sections, locale toggle, user identity and
/// logout. Navigation is signal-driven; there is no URL router.
#[component]
pub fn NavBar() -> impl IntoView {
    let state = use_app_state();
    let route = state.route;
    let set_route = state.set_route;

    let set_locale: WriteSignal<Locale> = expect_context();
    let locale: ReadSignal<Locale> = expect_context();

    let username = auth::username();
    let initial = username
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();

    let conferences_active = move || {
        matches!(
            route.get(),
            Route::Conferences | Route::ConferenceDetail(_)
        )
    };
    let keynotes_active = move || route.get() == Route::Keynotes;

    view! {
        <nav class="nav-bar">
            <div class="nav-left">
                <span class="nav-brand" on:click=move |_| set_route.set(Route::Conferences)>
                    {move || t("app-title")}
                </span>
                <button
                    class="nav-item"
                    class:active=conferences_active
                    on:click=move |_| set_route.set(Route::Conferences)
                >
                    {move || t("nav-conferences")}
                </button>
                <button
                    class="nav-item"
                    class:active=keynotes_active
                    on:click=move |_| set_route.set(Route::Keynotes)
                >
                    {move || t("nav-keynotes")}
                </button>
            </div>
            <div class="nav-right">
                {Locale::all().iter().map(|loc| {
                    let loc = *loc;
                    view! {
                        <button
                            class="nav-locale"
                            class:active=(move || locale.get() == loc)
                            on:click=move |_| set_locale.set(loc)
                        >
                            {loc.label()}
                        </button>
                    }
                }).collect::<Vec<_>>()}
                <span class="nav-avatar" title=username.clone()>{initial}</span>
                <span class="nav-username">{username}</span>
                <button class="nav-logout" on:click=move |_| auth::logout()>
                    {move || t("logout")}
                </button>
            </div>
        </nav>
    }
}
