//! `/users` (andrei only): the user directory, status changes, and account
//! creation.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use console_core::Role;
use console_core::model::{NewUser, UserProfile, UserStatus, UserUpdate};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::error_banner::ErrorBanner;
use crate::components::loading::Loading;
use crate::components::stat_card::StatCard;
use crate::state::remote::{Mounted, Remote};
use crate::util::display::{short_date_or_dash, shout, status_class};
use crate::util::filter::selected;

/// Head counts per role, in [`Role::ALL`] order.
fn role_counts(users: &[UserProfile]) -> [usize; 3] {
    Role::ALL.map(|role| users.iter().filter(|u| u.role == role).count())
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let users = Remote::<Vec<UserProfile>>::new();
    let filter = RwSignal::new(None::<Role>);
    let refresh = move || {
        let role = filter.get_untracked();
        users.load(move |auth| async move { auth.api().users(role).await });
    };
    refresh();

    let counts = move || users.data.with(|d| d.as_deref().map(role_counts).unwrap_or_default());

    view! {
        <section class="page">
            <header class="page__header">
                <h1 class="glitch">"USER MANAGEMENT"</h1>
                <button class="btn btn--small" on:click=move |_| refresh()>"REFRESH"</button>
            </header>
            <ErrorBanner error=users.error on_retry=Callback::new(move |()| refresh())/>
            <div class="stat-grid">
                <StatCard label="ANDREI" value=Signal::derive(move || counts()[0].to_string())/>
                <StatCard label="DAEMONS" value=Signal::derive(move || counts()[1].to_string())/>
                <StatCard label="NETWORK ADMINS" value=Signal::derive(move || counts()[2].to_string())/>
            </div>
            <div class="card">
                <header class="card__header">
                    <h2 class="text-cyan">"SYSTEM ENTITIES DATABASE"</h2>
                    <select
                        class="form-input form-input--inline"
                        on:change=move |ev| {
                            filter.set(selected(&event_target_value(&ev)));
                            refresh();
                        }
                    >
                        <option value="all">"ALL ROLES"</option>
                        {Role::ALL
                            .map(|role| view! { <option value=role.as_str()>{shout(role.as_str())}</option> })
                            .into_iter()
                            .collect_view()}
                    </select>
                </header>
                <Show when=move || users.loading.get() && users.data.with(Option::is_none)>
                    <Loading label="SCANNING USER DATABASE..."/>
                </Show>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"USERNAME"</th>
                            <th>"EMAIL"</th>
                            <th>"ROLE"</th>
                            <th>"STATUS"</th>
                            <th>"SINCE"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || users.data.get().unwrap_or_default()
                            key=|user| (user.id, user.status)
                            children=move |user| view! { <UserRow user=user on_changed=Callback::new(move |()| refresh())/> }
                        />
                    </tbody>
                </table>
            </div>
            <NewUserForm on_created=Callback::new(move |()| refresh())/>
        </section>
    }
}

#[component]
fn UserRow(user: UserProfile, on_changed: Callback<()>) -> impl IntoView {
    let mounted = Mounted::new();
    let error = RwSignal::new(None::<String>);
    let id = user.id;

    let set_status = move |raw: String| {
        let status = match raw.parse::<UserStatus>() {
            Ok(status) => status,
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };
        let update = UserUpdate { status: Some(status), ..UserUpdate::default() };
        mounted.spawn(
            move |auth| async move { auth.api().update_user(id, &update).await },
            move |result| match result {
                Ok(()) => on_changed.run(()),
                Err(err) => error.set(Some(err.to_string())),
            },
        );
    };

    let current = user.status;
    let punish_link = (user.role != Role::Andrei).then(|| {
        view! { <A href=format!("/punishments?target={id}")>"PUNISH"</A> }
    });

    view! {
        <tr>
            <td class="text-cyan">"#" {id}</td>
            <td>{user.username.clone()}</td>
            <td class="text-muted">{user.email.clone()}</td>
            <td>{shout(user.role.as_str())}</td>
            <td>
                <select
                    class=status_class(current.as_str())
                    on:change=move |ev| set_status(event_target_value(&ev))
                >
                    {UserStatus::ALL
                        .map(|status| {
                            view! {
                                <option value=status.as_str() selected=status == current>
                                    {shout(status.as_str())}
                                </option>
                            }
                        })
                        .into_iter()
                        .collect_view()}
                </select>
                <Show when=move || error.with(Option::is_some)>
                    <span class="form-error">{move || error.get().unwrap_or_default()}</span>
                </Show>
            </td>
            <td class="text-muted">{short_date_or_dash(user.created_at.as_deref()).to_owned()}</td>
            <td>{punish_link}</td>
        </tr>
    }
}

#[component]
fn NewUserForm(on_created: Callback<()>) -> impl IntoView {
    let mounted = Mounted::new();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Daemon);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let user = NewUser {
            username: username.get_untracked().trim().to_owned(),
            email: email.get_untracked().trim().to_owned(),
            password: password.get_untracked(),
            role: role.get_untracked(),
        };
        if let Err(err) = user.validate() {
            error.set(Some(err.to_string()));
            return;
        }
        busy.set(true);
        error.set(None);
        mounted.spawn(
            move |auth| async move { auth.api().register_user(&user).await },
            move |result| {
                busy.set(false);
                match result {
                    Ok(_) => {
                        username.set(String::new());
                        email.set(String::new());
                        password.set(String::new());
                        on_created.run(());
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            },
        );
    };

    view! {
        <form class="card" on:submit=on_submit>
            <h2 class="text-cyan">"REGISTER NEW ENTITY"</h2>
            <label class="form-label">"USERNAME:"</label>
            <input
                class="form-input"
                type="text"
                prop:value=move || username.get()
                on:input=move |ev| username.set(event_target_value(&ev))
            />
            <label class="form-label">"EMAIL:"</label>
            <input
                class="form-input"
                type="email"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <label class="form-label">"PASSWORD:"</label>
            <input
                class="form-input"
                type="password"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <label class="form-label">"ROLE:"</label>
            <select
                class="form-input"
                on:change=move |ev| {
                    if let Some(picked) = selected(&event_target_value(&ev)) {
                        role.set(picked);
                    }
                }
            >
                {Role::ALL
                    .map(|r| view! { <option value=r.as_str() selected=move || role.get() == r>{shout(r.as_str())}</option> })
                    .into_iter()
                    .collect_view()}
            </select>
            <Show when=move || error.with(Option::is_some)>
                <p class="form-error">"ERROR: " {move || error.get().unwrap_or_default()}</p>
            </Show>
            <button class="btn btn--block" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "REGISTERING..." } else { "REGISTER" }}
            </button>
        </form>
    }
}
