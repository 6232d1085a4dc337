//! `/capture` (daemon only): pick a free network admin and capture them.
//!
//! The target list comes from `ApiClient::capture_targets`, which degrades
//! to an empty list when the backend forbids the lookup.

#[cfg(test)]
#[path = "capture_test.rs"]
mod capture_test;

use console_core::model::{CaptureReceipt, UserProfile, UserStatus};
use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::loading::Loading;
use crate::state::remote::Remote;
use crate::util::display::{shout, status_class};

/// Admins that can still be captured.
fn capturable(admins: &[UserProfile]) -> Vec<UserProfile> {
    admins.iter().filter(|a| a.status != UserStatus::Captured).cloned().collect()
}

fn receipt_line(receipt: &CaptureReceipt) -> String {
    let message = if receipt.message.trim().is_empty() { "TARGET CAPTURED SUCCESSFULLY!" } else { &receipt.message };
    format!("{message} (+{} PTS)", receipt.points_awarded)
}

#[component]
pub fn CapturePage() -> impl IntoView {
    let targets = Remote::<Vec<UserProfile>>::new();
    let receipt = RwSignal::new(None::<String>);
    let capturing = RwSignal::new(None::<u64>);
    let refresh = move || {
        targets.load(|auth| async move { auth.api().capture_targets().await.map(|all| capturable(&all)) });
    };
    refresh();

    let capture = move |id: u64| {
        if capturing.get_untracked().is_some() {
            return;
        }
        capturing.set(Some(id));
        receipt.set(None);
        targets.mounted().spawn(
            move |auth| async move { auth.api().capture(id).await },
            move |result| {
                capturing.set(None);
                match result {
                    Ok(done) => {
                        receipt.set(Some(receipt_line(&done)));
                        refresh();
                    }
                    Err(err) => targets.error.set(Some(err.to_string())),
                }
            },
        );
    };

    view! {
        <section class="page">
            <header class="page__header">
                <div>
                    <h1 class="glitch">"CAPTURE OPERATIONS"</h1>
                    <p class="text-cyan">"NETWORK ADMIN HUNTING INTERFACE"</p>
                </div>
                <button class="btn btn--small" on:click=move |_| refresh()>"REFRESH"</button>
            </header>
            <ErrorBanner error=targets.error on_retry=Callback::new(move |()| refresh())/>
            <Show when=move || receipt.with(Option::is_some)>
                <div class="card card--ok">
                    <p class="text-cyan">{move || receipt.get().unwrap_or_default()}</p>
                </div>
            </Show>
            <div class="card">
                <h2 class="text-cyan">"TARGET SELECTION"</h2>
                <Show when=move || targets.loading.get() && targets.data.with(Option::is_none)>
                    <Loading label="SCANNING FOR TARGETS..."/>
                </Show>
                <Show when=move || targets.data.with(|d| d.as_ref().is_some_and(Vec::is_empty))>
                    <p class="text-primary">"ALL TARGETS ELIMINATED"</p>
                </Show>
                <ul class="target-list">
                    <For
                        each=move || targets.data.get().unwrap_or_default()
                        key=|admin| (admin.id, admin.status)
                        children=move |admin| {
                            let id = admin.id;
                            view! {
                                <li class="target">
                                    <span class="target__name">{admin.name.clone()}</span>
                                    <span class="text-muted">"@" {admin.username.clone()}</span>
                                    <span class=status_class(admin.status.as_str())>{shout(admin.status.as_str())}</span>
                                    <button
                                        class="btn btn--danger btn--small"
                                        disabled=move || capturing.get().is_some()
                                        on:click=move |_| capture(id)
                                    >
                                        {move || if capturing.get() == Some(id) { "CAPTURING..." } else { "CAPTURE" }}
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </div>
        </section>
    }
}
