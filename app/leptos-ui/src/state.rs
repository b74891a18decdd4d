use std::cell::Cell;

use leptos::prelude::*;

/// Screens of the shell. Navigation is a signal, not a URL router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Conferences,
    ConferenceDetail(i64),
    Keynotes,
}

/// One user-facing notification. Keys are resolved through the i18n layer
/// at render time so locale switches apply to queued toasts too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title_key: &'static str,
    pub body_key: &'static str,
    pub error: bool,
}

thread_local! {
    static NEXT_TOAST_ID: Cell<u64> = const { Cell::new(0) };
}

fn next_toast_id() -> u64 {
    NEXT_TOAST_ID.with(|id| {
        let v = id.get();
        id.set(v + 1);
        v
    })
}

#[derive(Clone)]
pub struct AppState {
    pub route: ReadSignal<Route>,
    pub set_route: WriteSignal<Route>,
    pub toasts: ReadSignal<Vec<Toast>>,
    pub set_toasts: WriteSignal<Vec<Toast>>,
}

impl AppState {
    pub fn navigate(&self, route: Route) {
        self.set_route.set(route);
    }

    pub fn toast_success(&self, body_key: &'static str) {
        self.push_toast(body_key, false);
    }

    pub fn toast_error(&self, body_key: &'static str) {
        self.push_toast(body_key, true);
    }

    fn push_toast(&self, body_key: &'static str, error: bool) {
        let toast = Toast {
            id: next_toast_id(),
            title_key: if error { "toast-error" } else { "toast-success" },
            body_key,
            error,
        };
        self.set_toasts.update(|toasts| toasts.push(toast));
    }

    pub fn dismiss_toast(&self, id: u64) {
        self.set_toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

pub fn provide_app_state() {
    let (route, set_route) = signal(Route::Conferences);
    let (toasts, set_toasts) = signal(Vec::<Toast>::new());

    provide_context(AppState {
        route,
        set_route,
        toasts,
        set_toasts,
    });
}

pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}
