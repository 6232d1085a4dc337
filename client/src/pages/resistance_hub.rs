//! Resistance hub for network admins: morale stats, survival tips,
//! emergency contacts, memes, and the anonymous intel form.

use console_core::model::{ReportKind, ResistanceOverview};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::error_banner::ErrorBanner;
use crate::components::loading::Loading;
use crate::components::report_form::ReportForm;
use crate::components::stat_card::StatCard;
use crate::state::remote::Remote;
use crate::util::display::shout;

#[component]
pub fn ResistanceHub() -> impl IntoView {
    let overview = Remote::<ResistanceOverview>::new();
    let refresh = move || overview.load(|auth| async move { auth.api().resistance_overview().await });
    refresh();

    view! {
        <section class="page">
            <header class="page__header">
                <h1 class="glitch">"RESISTANCE NETWORK"</h1>
                <button class="btn btn--small" on:click=move |_| refresh()>"REFRESH"</button>
            </header>
            <ErrorBanner error=overview.error on_retry=Callback::new(move |()| refresh())/>
            <Show when=move || overview.loading.get() && overview.data.with(Option::is_none)>
                <Loading label="ESTABLISHING SECURE CHANNEL..."/>
            </Show>
            {move || overview.data.get().map(resistance_hub_body)}
            <div class="card">
                <h2 class="text-cyan">"ANONYMOUS INTEL REPORT"</h2>
                <ReportForm kind=ReportKind::Anonymous submit_label="TRANSMIT REPORT"/>
                <p class="text-muted text-sm">
                    "All reports are transmitted anonymously. No personal information is stored."
                </p>
            </div>
        </section>
    }
}

fn resistance_hub_body(data: ResistanceOverview) -> impl IntoView {
    let stats = data.stats;
    let status = data.user_status.map(|s| shout(s.as_str())).unwrap_or_else(|| "UNKNOWN".to_owned());

    let tips = data
        .survival_tips
        .into_iter()
        .map(|tip| {
            view! {
                <li class="feed__row">
                    <span class="badge">{shout(&tip.priority)}</span>
                    <span class="feed__title">{tip.title}</span>
                    <span class="text-muted">{tip.description}</span>
                </li>
            }
        })
        .collect_view();
    let contacts = data
        .emergency_contacts
        .into_iter()
        .map(|contact| {
            view! {
                <li class="feed__row">
                    <span class="feed__title">{contact.name}</span>
                    <span class="text-muted">{contact.role}</span>
                    <span class="text-cyan">{contact.contact}</span>
                </li>
            }
        })
        .collect_view();
    let memes = data
        .memes
        .into_iter()
        .map(|meme| {
            view! {
                <li class="meme">
                    <p class="meme__title">{meme.title}</p>
                    <p class="text-muted text-xs">{meme.description}</p>
                    <p class="text-xs">{meme.upvotes} " UPVOTES"</p>
                </li>
            }
        })
        .collect_view();

    view! {
        <p class="page__welcome">{data.welcome_message}</p>
        <div class="stat-grid">
            <StatCard label="YOUR STATUS" value=status/>
            <StatCard label="NETWORK ADMINS" value=stats.total_network_admins.to_string()/>
            <StatCard label="STILL FREE" value=stats.free_admins.to_string() accent="ok"/>
            <StatCard label="CAPTURED" value=stats.captured_admins.to_string() accent="danger"/>
            <StatCard label="YOUR ANONYMOUS REPORTS" value=data.anonymous_reports_sent.to_string()/>
        </div>
        <div class="panel-grid">
            <div class="card">
                <h2 class="text-cyan">"SURVIVAL GUIDE"</h2>
                <ul class="feed">{tips}</ul>
                <A href="/guide">"OPEN FULL GUIDE"</A>
            </div>
            <div class="card">
                <h2 class="text-cyan">"EMERGENCY CONTACTS"</h2>
                <ul class="feed">{contacts}</ul>
                <A href="/contacts">"OPEN CONTACT DIRECTORY"</A>
                <p class="text-danger text-sm">"USE ONLY IN EMERGENCIES"</p>
            </div>
        </div>
        <div class="card">
            <h2 class="text-cyan">"RESISTANCE MEMES"</h2>
            <ul class="meme-list">{memes}</ul>
        </div>
    }
}
