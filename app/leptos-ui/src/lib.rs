use leptos::prelude::*;

pub mod api;
pub mod auth;
pub mod components;
pub mod i18n;
pub mod pages;
pub mod state;
pub mod validation;

use wasm_bindgen::prelude::*;

use crate::state::Route;

#[component]
pub fn App() -> impl IntoView {
    i18n::provide_i18n();
    state::provide_app_state();

    // Session bootstrap happens before anything else renders. Without a
    // token the browser is on its way to the identity broker; all the user
    // ever sees here is the loading page.
    if !auth::init() {
        return view! { <pages::loading::LoadingPage /> }.into_any();
    }

    let state = state::use_app_state();
    let route = state.route;

    view! {
        <components::nav_bar::NavBar />
        <main class="content">
            {move || match route.get() {
                Route::Conferences => {
                    view! { <pages::conferences::ConferencesPage /> }.into_any()
                }
                Route::ConferenceDetail(id) => {
                    view! { <pages::conference_detail::ConferenceDetailPage conference_id=id /> }
                        .into_any()
                }
                Route::Keynotes => view! { <pages::keynotes::KeynotesPage /> }.into_any(),
            }}
        </main>
        <components::toast::ToastStack />
    }
    .into_any()
}

#[wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
