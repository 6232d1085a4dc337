//! `/reports`: the report list with a status filter, a filing form, and
//! Andrei's approve/reject actions.

use console_core::Role;
use console_core::model::report::with_status;
use console_core::model::{Report, ReportKind, ReportStatus};
use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::loading::Loading;
use crate::components::report_form::ReportForm;
use crate::state::auth::use_auth;
use crate::state::remote::{Mounted, Remote};
use crate::util::display::{short_date_or_dash, shout, status_class};
use crate::util::filter::selected;

#[component]
pub fn ReportsPage() -> impl IntoView {
    let (_, session) = use_auth();
    let reports = Remote::<Vec<Report>>::new();
    let filter = RwSignal::new(None::<ReportStatus>);
    let refresh = move || reports.load(|auth| async move { auth.api().reports().await });
    refresh();

    let role = Memo::new(move |_| session.read().role());
    let can_review = move || role.get() == Some(Role::Andrei);
    let visible = move || {
        reports.data.with(|d| d.as_deref().map(|all| with_status(all, filter.get())).unwrap_or_default())
    };

    let form = move || {
        role.get().map(|role| {
            let kind = ReportKind::for_author(role);
            view! {
                <div class="card">
                    <h2 class="text-cyan">"FILE " {shout(kind.as_str())} " REPORT"</h2>
                    <ReportForm kind=kind submit_label="SUBMIT REPORT" on_filed=Callback::new(move |_| refresh())/>
                </div>
            }
        })
    };

    view! {
        <section class="page">
            <header class="page__header">
                <h1 class="glitch">"INTELLIGENCE REPORTS"</h1>
                <button class="btn btn--small" on:click=move |_| refresh()>"REFRESH"</button>
            </header>
            <ErrorBanner error=reports.error on_retry=Callback::new(move |()| refresh())/>
            {form}
            <div class="card">
                <header class="card__header">
                    <h2 class="text-cyan">"REPORT ARCHIVE"</h2>
                    <select
                        class="form-input form-input--inline"
                        on:change=move |ev| filter.set(selected(&event_target_value(&ev)))
                    >
                        <option value="all">"ALL"</option>
                        {ReportStatus::ALL
                            .map(|s| view! { <option value=s.as_str()>{shout(s.as_str())}</option> })
                            .into_iter()
                            .collect_view()}
                    </select>
                </header>
                <Show when=move || reports.loading.get() && reports.data.with(Option::is_none)>
                    <Loading label="DECRYPTING REPORTS..."/>
                </Show>
                <Show when=move || reports.data.with(Option::is_some)>
                    <ul class="report-list">
                        <For
                            each=visible
                            key=|report| (report.id, report.status)
                            children=move |report| {
                                view! {
                                    <ReportRow
                                        report=report
                                        can_review=can_review()
                                        on_changed=Callback::new(move |()| refresh())
                                    />
                                }
                            }
                        />
                    </ul>
                    <Show when=move || visible().is_empty()>
                        <p class="text-muted">"NO REPORTS MATCH THIS FILTER"</p>
                    </Show>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn ReportRow(report: Report, can_review: bool, on_changed: Callback<()>) -> impl IntoView {
    let mounted = Mounted::new();
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let id = report.id;

    let review = move |status: ReportStatus| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        mounted.spawn(
            move |auth| async move { auth.api().update_report_status(id, status).await },
            move |result| {
                busy.set(false);
                match result {
                    Ok(()) => on_changed.run(()),
                    Err(err) => error.set(Some(err.to_string())),
                }
            },
        );
    };

    let actions = (can_review && report.status == ReportStatus::Pending).then(|| {
        view! {
            <div class="button-row">
                <button class="btn btn--small" disabled=move || busy.get() on:click=move |_| review(ReportStatus::Approved)>
                    "APPROVE"
                </button>
                <button
                    class="btn btn--small btn--danger"
                    disabled=move || busy.get()
                    on:click=move |_| review(ReportStatus::Rejected)
                >
                    "REJECT"
                </button>
            </div>
        }
    });

    view! {
        <li class="report">
            <div class="report__header">
                <span class="text-cyan">"#" {id}</span>
                <span class="report__title">{report.title.clone()}</span>
                <span class="badge">{shout(report.kind.as_str())}</span>
                <span class=status_class(report.status.as_str())>{shout(report.status.as_str())}</span>
            </div>
            <p class="report__body">{report.description.clone()}</p>
            <p class="text-muted text-xs">
                "FILED BY " {report.author_name().to_owned()} " ON "
                {short_date_or_dash(report.created_at.as_deref()).to_owned()}
            </p>
            {actions}
            <Show when=move || error.with(Option::is_some)>
                <p class="form-error">"ERROR: " {move || error.get().unwrap_or_default()}</p>
            </Show>
        </li>
    }
}
