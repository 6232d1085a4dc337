//! `/leaderboard`: daemon rankings with a sort toggle, rating badges, and
//! a profile panel for the selected row.

use console_core::leaderboard::{PerformanceRating, SortKey, sorted};
use console_core::model::LeaderboardEntry;
use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::loading::Loading;
use crate::components::stat_card::StatCard;
use crate::state::remote::Remote;

/// Totals for the stats strip: daemons, points, captures.
fn totals(entries: &[LeaderboardEntry]) -> (usize, i64, u64) {
    (entries.len(), entries.iter().map(|e| e.points).sum(), entries.iter().map(|e| e.captures).sum())
}

#[component]
pub fn LeaderboardPage() -> impl IntoView {
    let board = Remote::<Vec<LeaderboardEntry>>::new();
    let sort = RwSignal::new(SortKey::default());
    let picked = RwSignal::new(None::<LeaderboardEntry>);
    let refresh = move || board.load(|auth| async move { auth.api().leaderboard().await });
    refresh();

    let rows = move || board.data.with(|d| d.as_deref().map(|all| sorted(all, sort.get())).unwrap_or_default());
    let stats = Memo::new(move |_| board.data.with(|d| d.as_deref().map(totals).unwrap_or_default()));

    let sort_button = move |key: SortKey, label: &'static str| {
        view! {
            <button
                class=move || if sort.get() == key { "btn btn--small" } else { "btn btn--small btn--ghost" }
                on:click=move |_| sort.set(key)
            >
                {label}
            </button>
        }
    };

    view! {
        <section class="page">
            <header class="page__header">
                <h1 class="glitch">"DAEMON LEADERBOARD"</h1>
                <button class="btn btn--small" on:click=move |_| refresh()>"REFRESH"</button>
            </header>
            <ErrorBanner error=board.error on_retry=Callback::new(move |()| refresh())/>
            <div class="stat-grid">
                <StatCard label="RANKED DAEMONS" value=Signal::derive(move || stats.get().0.to_string())/>
                <StatCard label="TOTAL POINTS" value=Signal::derive(move || stats.get().1.to_string())/>
                <StatCard label="TOTAL CAPTURES" value=Signal::derive(move || stats.get().2.to_string())/>
            </div>
            <div class="card">
                <header class="card__header">
                    <h2 class="text-cyan">"RANKING TABLE"</h2>
                    <div class="button-row">
                        {sort_button(SortKey::Points, "BY POINTS")}
                        {sort_button(SortKey::Captures, "BY CAPTURES")}
                    </div>
                </header>
                <Show when=move || board.loading.get() && board.data.with(Option::is_none)>
                    <Loading label="CALCULATING RANKINGS..."/>
                </Show>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"RANK"</th>
                            <th>"DAEMON"</th>
                            <th>"POINTS"</th>
                            <th>"CAPTURES"</th>
                            <th>"REPORTS"</th>
                            <th>"RATING"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=rows
                            key=|e| (e.position, e.username.clone(), e.points, e.captures)
                            children=move |entry| {
                                let rating = PerformanceRating::for_points(entry.points);
                                let chosen = entry.clone();
                                view! {
                                    <tr class="table__row--clickable" on:click=move |_| picked.set(Some(chosen.clone()))>
                                        <td class="text-cyan">"#" {entry.position}</td>
                                        <td>{entry.display_name().to_owned()}</td>
                                        <td>{entry.points}</td>
                                        <td>{entry.captures}</td>
                                        <td>{entry.reports}</td>
                                        <td><span class="badge">{rating.label()}</span></td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
            {move || picked.get().map(profile_panel)}
        </section>
    }
}

fn profile_panel(entry: LeaderboardEntry) -> impl IntoView {
    let rating = PerformanceRating::for_points(entry.points);
    view! {
        <div class="card">
            <h2 class="text-cyan">"DAEMON PROFILE"</h2>
            <dl class="details">
                <dt>"CODENAME"</dt>
                <dd>{entry.display_name().to_owned()}</dd>
                <dt>"RANK"</dt>
                <dd>"#" {entry.position}</dd>
                <dt>"CHAOS POINTS"</dt>
                <dd>{entry.points}</dd>
                <dt>"CAPTURES"</dt>
                <dd>{entry.captures}</dd>
                <dt>"RATING"</dt>
                <dd>{rating.label()}</dd>
            </dl>
        </div>
    }
}
