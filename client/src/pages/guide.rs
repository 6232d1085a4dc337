//! `/guide` (network admins): survival guide with a difficulty filter.

use leptos::prelude::*;

use crate::content::guide::{Level, Section, at_level};
use crate::util::display::shout;
use crate::util::filter::selected;

#[component]
pub fn GuidePage() -> impl IntoView {
    let level = RwSignal::new(None::<Level>);
    let sections = move || at_level(level.get()).into_iter().map(section_card).collect_view();

    view! {
        <section class="page">
            <header class="page__header">
                <h1 class="glitch">"SURVIVAL GUIDE"</h1>
                <select
                    class="form-input form-input--inline"
                    on:change=move |ev| level.set(selected(&event_target_value(&ev)))
                >
                    <option value="all">"ALL LEVELS"</option>
                    {Level::ALL
                        .map(|l| view! { <option value=l.as_str()>{shout(l.as_str())}</option> })
                        .into_iter()
                        .collect_view()}
                </select>
            </header>
            <div class="guide">{sections}</div>
        </section>
    }
}

fn section_card(section: Section) -> impl IntoView {
    let content = section.content.iter().map(|line| view! { <li>{*line}</li> }).collect_view();
    let tips = section.tips.iter().map(|tip| view! { <li class="text-cyan">{*tip}</li> }).collect_view();
    view! {
        <article class="card">
            <header class="card__header">
                <h2>{section.title}</h2>
                <span class=format!("badge badge--{}", section.level.as_str())>{shout(section.level.as_str())}</span>
            </header>
            <ul>{content}</ul>
            <h3 class="text-muted">"TIPS"</h3>
            <ul>{tips}</ul>
            {section.warning.map(|w| view! { <p class="text-danger">"WARNING: " {w}</p> })}
        </article>
    }
}
