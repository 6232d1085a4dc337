//! Daemon terminal: personal stats, missions, leaderboard, captures,
//! punishments, and the chaos feed.

use console_core::model::DaemonDashboard;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::error_banner::ErrorBanner;
use crate::components::loading::Loading;
use crate::components::stat_card::StatCard;
use crate::state::remote::Remote;
use crate::util::display::{short_date, short_date_or_dash, shout, status_class};

#[component]
pub fn DaemonTerminal() -> impl IntoView {
    let dashboard = Remote::<DaemonDashboard>::new();
    let refresh = move || dashboard.load(|auth| async move { auth.api().daemon_dashboard().await });
    refresh();

    view! {
        <section class="page">
            <header class="page__header">
                <h1 class="glitch">"DAEMON TERMINAL"</h1>
                <button class="btn btn--small" on:click=move |_| refresh()>"REFRESH"</button>
            </header>
            <ErrorBanner error=dashboard.error on_retry=Callback::new(move |()| refresh())/>
            <Show when=move || dashboard.loading.get() && dashboard.data.with(Option::is_none)>
                <Loading label="CONNECTING TO DAEMON NETWORK..."/>
            </Show>
            {move || dashboard.data.get().map(daemon_terminal_body)}
        </section>
    }
}

fn daemon_terminal_body(data: DaemonDashboard) -> impl IntoView {
    let stats = data.stats;
    let status = stats.status.map(|s| shout(s.as_str())).unwrap_or_else(|| "UNKNOWN".to_owned());
    let ranking = if stats.ranking == 0 { "-".to_owned() } else { format!("#{}", stats.ranking) };

    let leaderboard = data
        .leaderboard
        .into_iter()
        .map(|entry| {
            view! {
                <li class="ranking__row">
                    <span class="ranking__position">"#" {entry.position}</span>
                    <span class="ranking__name">{entry.display_name().to_owned()}</span>
                    <span class="ranking__points">{entry.points} " PTS"</span>
                </li>
            }
        })
        .collect_view();
    let missions = data
        .missions
        .into_iter()
        .map(|mission| {
            view! {
                <li class="feed__row">
                    <span class="feed__title">{mission.title}</span>
                    <span class="text-muted">{shout(&mission.difficulty)}</span>
                    <span class="text-cyan">"+" {mission.points} " PTS"</span>
                </li>
            }
        })
        .collect_view();
    let captures = data
        .recent_captures
        .into_iter()
        .map(|capture| {
            view! {
                <li class="feed__row">
                    <span class="feed__title">{capture.target_name}</span>
                    <span class="text-muted">{short_date_or_dash(capture.captured_at.as_deref()).to_owned()}</span>
                    <span class="text-cyan">"+" {capture.points} " PTS"</span>
                </li>
            }
        })
        .collect_view();
    let punishments = data
        .active_punishments
        .into_iter()
        .map(|punishment| {
            view! {
                <li class="feed__row">
                    <span class=status_class(punishment.status.as_str())>{shout(punishment.kind.as_str())}</span>
                    <span class="feed__title">{punishment.description.unwrap_or_default()}</span>
                    <span class="text-muted">"EXPIRES " {short_date_or_dash(punishment.expires_at.as_deref()).to_owned()}</span>
                </li>
            }
        })
        .collect_view();
    let chaos = data
        .recent_chaos
        .into_iter()
        .map(|event| {
            view! {
                <li class="feed__row">
                    <span class="text-muted">{short_date(&event.timestamp).to_owned()}</span>
                    <span class="feed__title">{event.description}</span>
                    <span class="text-cyan">"+" {event.points}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <p class="page__welcome">{data.welcome_message}</p>
        <div class="stat-grid">
            <StatCard label="CAPTURES" value=stats.captures.to_string()/>
            <StatCard label="REPORTS FILED" value=stats.reports.to_string()/>
            <StatCard label="CHAOS POINTS" value=stats.points.to_string() accent="warn"/>
            <StatCard label="RANKING" value=ranking/>
            <StatCard label="STATUS" value=status/>
        </div>
        <div class="panel-grid">
            <div class="card">
                <h2 class="text-cyan">"DAEMON LEADERBOARD"</h2>
                <ul class="ranking">{leaderboard}</ul>
            </div>
            <div class="card">
                <h2 class="text-cyan">"ACTIVE MISSIONS"</h2>
                <ul class="feed">{missions}</ul>
            </div>
        </div>
        <div class="panel-grid">
            <div class="card">
                <h2 class="text-danger">"MY RECENT CAPTURES"</h2>
                <ul class="feed">{captures}</ul>
            </div>
            <div class="card">
                <h2 class="text-danger">"ACTIVE PUNISHMENTS"</h2>
                <ul class="feed">{punishments}</ul>
            </div>
        </div>
        <div class="card">
            <h2 class="text-cyan">"DAEMON OPERATIONS"</h2>
            <div class="button-row">
                <A href="/capture">"START CAPTURE MISSION"</A>
                <A href="/reports">"FILE REPORT"</A>
                <A href="/leaderboard">"LEADERBOARD"</A>
            </div>
        </div>
        <div class="card">
            <h2 class="text-cyan">"CHAOS ACTIVITY FEED"</h2>
            <ul class="feed">{chaos}</ul>
        </div>
    }
}
