//! Login page: username/password form with inline errors.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use console_core::model::Credentials;
use console_core::navigation::{Route, resolve};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;

use crate::state::remote::Mounted;
use crate::state::auth::use_auth;

/// Shown when the backend rejects without a message of its own.
pub const LOGIN_FAILED: &str = "LOGIN FAILED. ACCESS DENIED.";

/// Development accounts offered as one-click fills.
const QUICK_ACCESS: [(&str, &str, &str); 3] = [
    ("LOGIN AS ANDREI (SUPREME LEADER)", "andrei", "AndreI2024!"),
    ("LOGIN AS DAEMON (HACKER)", "daemon_alpha", "DaemonAlpha123!"),
    ("LOGIN AS NETWORK ADMIN (RESISTANCE)", "netadmin_alice", "NetworkAlice123!"),
];

fn login_error_text(message: &str) -> String {
    if message.trim().is_empty() { LOGIN_FAILED.to_owned() } else { message.to_owned() }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let (_, session) = use_auth();
    move || match resolve("/login", &session.read()) {
        Route::Redirect(screen) => view! { <Redirect path=screen.path()/> }.into_any(),
        _ => view! { <LoginForm/> }.into_any(),
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let mounted = Mounted::new();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = Credentials::new(username.get_untracked().trim(), password.get_untracked());
        if let Err(err) = credentials.validate() {
            error.set(Some(err.to_string()));
            return;
        }
        busy.set(true);
        error.set(None);
        let navigate = navigate.clone();
        mounted.spawn(
            move |auth| async move { auth.login(&credentials).await },
            move |result| {
                busy.set(false);
                match result {
                    Ok(_) => navigate("/dashboard", NavigateOptions::default()),
                    Err(err) => error.set(Some(login_error_text(&err.to_string()))),
                }
            },
        );
    };

    let quick_access = QUICK_ACCESS
        .into_iter()
        .map(|(label, user, pass)| {
            view! {
                <button
                    type="button"
                    class="btn btn--secondary btn--block"
                    on:click=move |_| {
                        username.set(user.to_owned());
                        password.set(pass.to_owned());
                    }
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="login-page">
            <div class="terminal-window">
                <h1 class="glitch">"DEVOPS CHAOS"</h1>
                <p class="text-cyan">"SYSTEM ACCESS TERMINAL"</p>
                <p class="text-muted text-xs">"UNAUTHORIZED ACCESS WILL BE TERMINATED"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="form-label" for="username">"USER_ID:"</label>
                    <input
                        id="username"
                        class="form-input"
                        type="text"
                        placeholder="Enter username..."
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <label class="form-label" for="password">"ACCESS_KEY:"</label>
                    <input
                        id="password"
                        class="form-input"
                        type="password"
                        placeholder="Enter password..."
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || error.with(Option::is_some)>
                        <p class="login-error">"ERROR: " {move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "AUTHENTICATING..." } else { "GRANT ACCESS" }}
                    </button>
                </form>
                <div class="login-quick">
                    <p class="text-muted">"QUICK ACCESS (DEV MODE)"</p>
                    {quick_access}
                </div>
            </div>
        </div>
    }
}
