//! Labelled number tile used by the dashboards.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] accent: Option<&'static str>,
) -> impl IntoView {
    let class = match accent {
        Some(accent) => format!("stat-card stat-card--{accent}"),
        None => "stat-card".to_owned(),
    };
    view! {
        <div class=class>
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}
