use leptos::prelude::*;

/// Centered loading indicator shown while a view waits on the backend.
#[component]
pub fn Spinner(#[prop(default = "")] label: &'static str) -> impl IntoView {
    view! {
        <div class="spinner-container">
            <span class="spinner-circle"></span>
            {(!label.is_empty()).then(|| view! {
                <span class="spinner-label">{label}</span>
            })}
        </div>
    }
}
