//! `/punishments`: disciplinary records. Everyone sees the list (the
//! backend scopes it to the caller); Andrei can also issue punishments and
//! mark them completed.

#[cfg(test)]
#[path = "punishments_test.rs"]
mod punishments_test;

use console_core::Role;
use console_core::model::punishment::with_status;
use console_core::model::{NewPunishment, Punishment, PunishmentKind, PunishmentStatus, PunishmentUpdate, UserProfile};
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::error_banner::ErrorBanner;
use crate::components::loading::Loading;
use crate::state::auth::use_auth;
use crate::state::remote::{Mounted, Remote};
use crate::util::display::{short_date_or_dash, shout, status_class};
use crate::util::filter::selected;

/// Users Andrei may punish: everyone but Andrei.
fn punishable(users: &[UserProfile]) -> Vec<UserProfile> {
    users.iter().filter(|u| u.role != Role::Andrei).cloned().collect()
}

/// Target id from the `?target=` query, `0` (none) when absent or invalid.
fn target_from_query(raw: Option<&str>) -> u64 {
    raw.and_then(|r| r.trim().parse().ok()).unwrap_or(0)
}

/// Date input value as the RFC 3339 timestamp the backend expects.
fn expiry_timestamp(date: &str) -> Option<String> {
    let date = date.trim();
    (!date.is_empty()).then(|| format!("{date}T23:59:59Z"))
}

#[component]
pub fn PunishmentsPage() -> impl IntoView {
    let (_, session) = use_auth();
    let punishments = Remote::<Vec<Punishment>>::new();
    let filter = RwSignal::new(None::<PunishmentStatus>);
    let details = RwSignal::new(None::<Punishment>);
    let refresh = move || punishments.load(|auth| async move { auth.api().punishments().await });
    refresh();

    let is_andrei = Memo::new(move |_| session.read().role() == Some(Role::Andrei));
    let visible = move || {
        punishments.data.with(|d| d.as_deref().map(|all| with_status(all, filter.get())).unwrap_or_default())
    };

    view! {
        <section class="page">
            <header class="page__header">
                <h1 class="glitch">"PUNISHMENT SYSTEM"</h1>
                <button class="btn btn--small" on:click=move |_| refresh()>"REFRESH"</button>
            </header>
            <ErrorBanner error=punishments.error on_retry=Callback::new(move |()| refresh())/>
            <Show when=move || is_andrei.get()>
                <IssuePunishmentForm on_issued=Callback::new(move |()| refresh())/>
            </Show>
            <div class="card">
                <header class="card__header">
                    <h2 class="text-cyan">"DISCIPLINARY RECORDS"</h2>
                    <select
                        class="form-input form-input--inline"
                        on:change=move |ev| filter.set(selected(&event_target_value(&ev)))
                    >
                        <option value="all">"ALL"</option>
                        {PunishmentStatus::ALL
                            .map(|s| view! { <option value=s.as_str()>{shout(s.as_str())}</option> })
                            .into_iter()
                            .collect_view()}
                    </select>
                </header>
                <Show when=move || punishments.loading.get() && punishments.data.with(Option::is_none)>
                    <Loading label="LOADING DISCIPLINARY RECORDS..."/>
                </Show>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"TARGET"</th>
                            <th>"TYPE"</th>
                            <th>"STATUS"</th>
                            <th>"ASSIGNED BY"</th>
                            <th>"EXPIRES"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=visible
                            key=|p| (p.id, p.status)
                            children=move |punishment| {
                                view! {
                                    <PunishmentRow
                                        punishment=punishment
                                        can_complete=is_andrei.get_untracked()
                                        on_open=Callback::new(move |p| details.set(Some(p)))
                                        on_changed=Callback::new(move |()| refresh())
                                    />
                                }
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || punishments.data.with(Option::is_some) && visible().is_empty()>
                    <p class="text-muted">"NO PUNISHMENTS ON RECORD"</p>
                </Show>
            </div>
            {move || details.get().map(|p| view! { <PunishmentDetails summary=p on_close=Callback::new(move |()| details.set(None))/> })}
        </section>
    }
}

#[component]
fn PunishmentRow(
    punishment: Punishment,
    can_complete: bool,
    on_open: Callback<Punishment>,
    on_changed: Callback<()>,
) -> impl IntoView {
    let mounted = Mounted::new();
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let id = punishment.id;

    let complete = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        mounted.spawn(
            move |auth| async move { auth.api().update_punishment(id, &PunishmentUpdate::completed()).await },
            move |result| {
                busy.set(false);
                match result {
                    Ok(()) => on_changed.run(()),
                    Err(err) => error.set(Some(err.to_string())),
                }
            },
        );
    };

    let complete_button = (can_complete && punishment.is_active()).then(|| {
        view! {
            <button class="btn btn--small" disabled=move || busy.get() on:click=complete>
                "COMPLETE"
            </button>
        }
    });
    let assigner = punishment.assigner.as_ref().map_or("UNKNOWN", |a| a.display_name()).to_owned();
    let opened = punishment.clone();

    view! {
        <tr>
            <td>{punishment.target.display_name().to_owned()}</td>
            <td>{shout(punishment.kind.as_str())}</td>
            <td><span class=status_class(punishment.status.as_str())>{shout(punishment.status.as_str())}</span></td>
            <td class="text-muted">{assigner}</td>
            <td class="text-muted">{short_date_or_dash(punishment.expires_at.as_deref()).to_owned()}</td>
            <td class="button-row">
                <button class="btn btn--small btn--ghost" on:click=move |_| on_open.run(opened.clone())>"DETAILS"</button>
                {complete_button}
                <Show when=move || error.with(Option::is_some)>
                    <span class="form-error">{move || error.get().unwrap_or_default()}</span>
                </Show>
            </td>
        </tr>
    }
}

/// Detail panel: shows the list row at once, then the full record.
#[component]
fn PunishmentDetails(summary: Punishment, on_close: Callback<()>) -> impl IntoView {
    let full = Remote::<Punishment>::new();
    let id = summary.id;
    full.data.set(Some(summary));
    full.load(move |auth| async move { auth.api().punishment(id).await });

    let body = move || {
        full.data.get().map(|p| {
            view! {
                <dl class="details">
                    <dt>"TARGET"</dt>
                    <dd>{p.target.display_name().to_owned()}</dd>
                    <dt>"TYPE"</dt>
                    <dd>{shout(p.kind.as_str())}</dd>
                    <dt>"STATUS"</dt>
                    <dd>{shout(p.status.as_str())}</dd>
                    <dt>"DESCRIPTION"</dt>
                    <dd>{p.description.clone().unwrap_or_default()}</dd>
                    <dt>"ISSUED"</dt>
                    <dd>{short_date_or_dash(p.created_at.as_deref()).to_owned()}</dd>
                    <dt>"EXPIRES"</dt>
                    <dd>{short_date_or_dash(p.expires_at.as_deref()).to_owned()}</dd>
                </dl>
            }
        })
    };

    view! {
        <div class="card card--danger">
            <header class="card__header">
                <h2 class="text-danger">"PUNISHMENT DETAILS #" {id}</h2>
                <button class="btn btn--small btn--ghost" on:click=move |_| on_close.run(())>"CLOSE"</button>
            </header>
            <ErrorBanner error=full.error/>
            {body}
        </div>
    }
}

#[component]
fn IssuePunishmentForm(on_issued: Callback<()>) -> impl IntoView {
    let query = use_query_map();
    let targets = Remote::<Vec<UserProfile>>::new();
    targets.load(|auth| async move { auth.api().users(None).await.map(|users| punishable(&users)) });

    let target = RwSignal::new(query.with_untracked(|q| target_from_query(q.get("target").as_deref())));
    let kind = RwSignal::new(PunishmentKind::Timeout);
    let description = RwSignal::new(String::new());
    let expires = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let mounted = targets.mounted();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let punishment = NewPunishment {
            target_id: target.get_untracked(),
            kind: kind.get_untracked(),
            description: description.get_untracked().trim().to_owned(),
            expires_at: expiry_timestamp(&expires.get_untracked()),
        };
        if let Err(err) = punishment.validate() {
            error.set(Some(err.to_string()));
            return;
        }
        busy.set(true);
        error.set(None);
        mounted.spawn(
            move |auth| async move { auth.api().create_punishment(&punishment).await },
            move |result| {
                busy.set(false);
                match result {
                    Ok(_) => {
                        description.set(String::new());
                        expires.set(String::new());
                        on_issued.run(());
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            },
        );
    };

    let target_options = move || {
        targets
            .data
            .get()
            .unwrap_or_default()
            .into_iter()
            .map(|user| {
                let id = user.id;
                view! {
                    <option value=id.to_string() selected=move || target.get() == id>
                        {format!("{} [{}]", user.username, shout(user.role.as_str()))}
                    </option>
                }
            })
            .collect_view()
    };

    view! {
        <form class="card card--danger" on:submit=on_submit>
            <h2 class="text-danger">"ISSUE PUNISHMENT"</h2>
            <ErrorBanner error=targets.error/>
            <label class="form-label">"TARGET:"</label>
            <select
                class="form-input"
                on:change=move |ev| target.set(target_from_query(Some(&event_target_value(&ev))))
            >
                <option value="0">"Select a target..."</option>
                {target_options}
            </select>
            <label class="form-label">"TYPE:"</label>
            <select
                class="form-input"
                on:change=move |ev| {
                    if let Some(picked) = selected(&event_target_value(&ev)) {
                        kind.set(picked);
                    }
                }
            >
                {PunishmentKind::ALL
                    .map(|k| view! { <option value=k.as_str() selected=move || kind.get() == k>{shout(k.as_str())}</option> })
                    .into_iter()
                    .collect_view()}
            </select>
            <label class="form-label">"DESCRIPTION:"</label>
            <textarea
                class="form-input form-textarea"
                prop:value=move || description.get()
                on:input=move |ev| description.set(event_target_value(&ev))
            ></textarea>
            <label class="form-label">"EXPIRES (OPTIONAL):"</label>
            <input
                class="form-input"
                type="date"
                prop:value=move || expires.get()
                on:input=move |ev| expires.set(event_target_value(&ev))
            />
            <Show when=move || error.with(Option::is_some)>
                <p class="form-error">"ERROR: " {move || error.get().unwrap_or_default()}</p>
            </Show>
            <button class="btn btn--danger btn--block" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "ISSUING..." } else { "ISSUE PUNISHMENT" }}
            </button>
        </form>
    }
}
