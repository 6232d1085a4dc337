//! Console chrome: role-titled sidebar menu, operator badge, and logout.

use console_core::navigation::menu;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use crate::state::auth::use_auth;
use crate::util::display::shout;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let (auth, session) = use_auth();
    let navigate = use_navigate();
    let pathname = use_location().pathname;

    let title = move || session.read().role().map(|r| r.console_title()).unwrap_or_default();
    let operator = move || {
        session
            .read()
            .user()
            .map(|u| format!("{} [{}]", u.name, shout(u.role.as_str())))
            .unwrap_or_default()
    };

    let entries = move || {
        let Some(role) = session.read().role() else {
            return Vec::new();
        };
        menu(role)
            .iter()
            .map(|item| {
                let path = item.screen.path();
                let navigate = navigate.clone();
                let class = move || {
                    if pathname.get() == path { "sidebar__item sidebar__item--active" } else { "sidebar__item" }
                };
                view! {
                    <li>
                        <button
                            class=class
                            on:click=move |_| navigate(path, NavigateOptions::default())
                        >
                            {item.label}
                        </button>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    let on_logout = move |_| auth.logout();

    view! {
        <div class="console">
            <aside class="sidebar">
                <h2 class="sidebar__title">{title}</h2>
                <p class="sidebar__operator">{operator}</p>
                <ul class="sidebar__menu">{entries}</ul>
                <button class="btn btn--danger sidebar__logout" on:click=on_logout>"DISCONNECT"</button>
            </aside>
            <main class="console__main">{children()}</main>
        </div>
    }
}
