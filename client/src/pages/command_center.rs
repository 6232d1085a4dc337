//! Andrei's command center: system stats, top daemons, intel, activity.

use console_core::model::AndreiDashboard;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::error_banner::ErrorBanner;
use crate::components::loading::Loading;
use crate::components::stat_card::StatCard;
use crate::state::remote::Remote;
use crate::util::display::{short_date, shout, status_class};

#[component]
pub fn CommandCenter() -> impl IntoView {
    let dashboard = Remote::<AndreiDashboard>::new();
    let refresh = move || dashboard.load(|auth| async move { auth.api().andrei_dashboard().await });
    refresh();

    view! {
        <section class="page">
            <header class="page__header">
                <h1 class="glitch">"ANDREI COMMAND CENTER"</h1>
                <button class="btn btn--small" on:click=move |_| refresh()>"REFRESH"</button>
            </header>
            <ErrorBanner error=dashboard.error on_retry=Callback::new(move |()| refresh())/>
            <Show when=move || dashboard.loading.get() && dashboard.data.with(Option::is_none)>
                <Loading label="LOADING COMMAND DATA..."/>
            </Show>
            {move || dashboard.data.get().map(command_center_body)}
        </section>
    }
}

fn command_center_body(data: AndreiDashboard) -> impl IntoView {
    let stats = data.stats;
    let top_daemons = data
        .top_daemons
        .into_iter()
        .map(|daemon| {
            view! {
                <li class="ranking__row">
                    <span class="ranking__position">"#" {daemon.position}</span>
                    <span class="ranking__name">{daemon.display_name().to_owned()}</span>
                    <span class="ranking__points">{daemon.points} " PTS"</span>
                    <span class="text-muted">{daemon.captures} " captures"</span>
                </li>
            }
        })
        .collect_view();
    let reports = data
        .recent_reports
        .into_iter()
        .map(|report| {
            view! {
                <li class="feed__row">
                    <span class=status_class(report.status.as_str())>{shout(report.status.as_str())}</span>
                    <span class="feed__title">{report.title.clone()}</span>
                    <span class="text-muted">{report.author_name().to_owned()}</span>
                </li>
            }
        })
        .collect_view();
    let activity = data
        .recent_activity
        .into_iter()
        .map(|entry| {
            view! {
                <li class="feed__row">
                    <span class="text-muted">{short_date(&entry.timestamp).to_owned()}</span>
                    <span class="feed__title">{entry.message}</span>
                    <span class="text-cyan">{entry.username}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <p class="page__welcome">{data.welcome_message}</p>
        <div class="stat-grid">
            <StatCard label="TOTAL USERS" value=stats.total_users.to_string()/>
            <StatCard label="ACTIVE DAEMONS" value=stats.total_daemons.to_string()/>
            <StatCard label="NETWORK ADMINS" value=stats.total_network_admins.to_string()/>
            <StatCard label="CAPTURED ADMINS" value=stats.captured_admins.to_string() accent="danger"/>
            <StatCard label="PENDING REPORTS" value=stats.pending_reports.to_string() accent="warn"/>
            <StatCard label="PUNISHED DAEMONS" value=stats.punished_daemons.to_string()/>
        </div>
        <div class="panel-grid">
            <div class="card">
                <h2 class="text-cyan">"TOP PERFORMING DAEMONS"</h2>
                <ul class="ranking">{top_daemons}</ul>
            </div>
            <div class="card">
                <h2 class="text-cyan">"RECENT INTEL REPORTS"</h2>
                <ul class="feed">{reports}</ul>
            </div>
        </div>
        <div class="card">
            <h2 class="text-cyan">"COMMAND OPERATIONS"</h2>
            <div class="button-row">
                <A href="/users">"MANAGE USERS"</A>
                <A href="/reports">"REVIEW REPORTS"</A>
                <A href="/punishments">"PUNISHMENTS"</A>
                <A href="/leaderboard">"LEADERBOARD"</A>
            </div>
        </div>
        <div class="card">
            <h2 class="text-cyan">"RECENT SYSTEM ACTIVITY"</h2>
            <ul class="feed">{activity}</ul>
        </div>
    }
}
