//! Inline, dismissible error banner with a retry action.

use leptos::prelude::*;

/// Shows `error` while it is set. Dismiss clears it; retry calls `on_retry`.
#[component]
pub fn ErrorBanner(error: RwSignal<Option<String>>, #[prop(optional)] on_retry: Option<Callback<()>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some)>
            <div class="error-banner" role="alert">
                <span class="error-banner__text">"ERROR: " {move || error.get().unwrap_or_default()}</span>
                {on_retry.map(|retry| view! {
                    <button class="btn btn--small" on:click=move |_| retry.run(())>"RETRY"</button>
                })}
                <button class="btn btn--small btn--ghost" on:click=move |_| error.set(None)>"DISMISS"</button>
            </div>
        </Show>
    }
}
