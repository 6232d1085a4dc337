//! Title + description form that files one report.
//!
//! The report kind is fixed by the caller: the reports screen derives it
//! from the author's role, the resistance hub always files anonymously.

use console_core::model::{NewReport, Report, ReportKind};
use leptos::prelude::*;

use crate::state::remote::Mounted;

#[component]
pub fn ReportForm(
    kind: ReportKind,
    #[prop(into)] submit_label: String,
    #[prop(optional)] on_filed: Option<Callback<Report>>,
) -> impl IntoView {
    let mounted = Mounted::new();
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let sent = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let report = NewReport::new(title.get_untracked().trim(), description.get_untracked().trim(), kind);
        if let Err(err) = report.validate() {
            error.set(Some(err.to_string()));
            return;
        }
        busy.set(true);
        error.set(None);
        mounted.spawn(
            move |auth| async move { auth.api().create_report(&report).await },
            move |result| {
                busy.set(false);
                match result {
                    Ok(filed) => {
                        title.set(String::new());
                        description.set(String::new());
                        sent.set(true);
                        if let Some(on_filed) = on_filed {
                            on_filed.run(filed);
                        }
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            },
        );
    };

    let button_label = move || if busy.get() { "TRANSMITTING...".to_owned() } else { submit_label.clone() };

    view! {
        <form class="report-form" on:submit=on_submit>
            <label class="form-label" for="report-title">"INCIDENT_TITLE:"</label>
            <input
                id="report-title"
                class="form-input"
                type="text"
                placeholder="Brief description of the incident..."
                prop:value=move || title.get()
                on:input=move |ev| {
                    sent.set(false);
                    title.set(event_target_value(&ev));
                }
            />
            <label class="form-label" for="report-description">"DETAILED_REPORT:"</label>
            <textarea
                id="report-description"
                class="form-input form-textarea"
                placeholder="Provide detailed information..."
                prop:value=move || description.get()
                on:input=move |ev| description.set(event_target_value(&ev))
            ></textarea>
            <Show when=move || error.with(Option::is_some)>
                <p class="form-error">"ERROR: " {move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || sent.get()>
                <p class="form-success">"REPORT TRANSMITTED SUCCESSFULLY"</p>
            </Show>
            <button class="btn btn--block" type="submit" disabled=move || busy.get()>
                {button_label}
            </button>
        </form>
    }
}
