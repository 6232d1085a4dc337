//! `/contacts` (network admins): searchable emergency contact directory.

use leptos::prelude::*;

use crate::content::contacts::{Contact, ContactStatus, matching};
use crate::util::display::shout;
use crate::util::filter::selected;

#[component]
pub fn ContactsPage() -> impl IntoView {
    let search = RwSignal::new(String::new());
    let status = RwSignal::new(None::<ContactStatus>);
    let picked = RwSignal::new(None::<Contact>);

    let rows = move || {
        search.with(|s| matching(s, status.get()))
            .into_iter()
            .map(|contact| {
                view! {
                    <li class="contact" on:click=move |_| picked.set(Some(contact))>
                        <span class="contact__name">{contact.name}</span>
                        <span class="text-cyan">{contact.code}</span>
                        <span class=format!("badge badge--{}", contact.status.as_str())>{shout(contact.status.as_str())}</span>
                        <span class="text-muted">{contact.frequency}</span>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <section class="page">
            <header class="page__header">
                <h1 class="glitch">"EMERGENCY CONTACTS"</h1>
            </header>
            <div class="card">
                <div class="button-row">
                    <input
                        class="form-input"
                        type="search"
                        placeholder="Search by name or code..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <select
                        class="form-input form-input--inline"
                        on:change=move |ev| status.set(selected(&event_target_value(&ev)))
                    >
                        <option value="all">"ALL STATUSES"</option>
                        {ContactStatus::ALL
                            .map(|s| view! { <option value=s.as_str()>{shout(s.as_str())}</option> })
                            .into_iter()
                            .collect_view()}
                    </select>
                </div>
                <ul class="contact-list">{rows}</ul>
            </div>
            {move || picked.get().map(|c| view! {
                <div class="card">
                    <h2 class="text-cyan">{c.name} " [" {c.code} "]"</h2>
                    <dl class="details">
                        <dt>"FREQUENCY"</dt>
                        <dd>{c.frequency}</dd>
                        <dt>"LOCATION"</dt>
                        <dd>{c.location}</dd>
                        <dt>"LAST CONTACT"</dt>
                        <dd>{c.last_contact}</dd>
                        <dt>"SECURITY LEVEL"</dt>
                        <dd>{shout(c.security.as_str())}</dd>
                    </dl>
                    <p>{c.description}</p>
                </div>
            })}
            <p class="text-danger text-sm">"USE ONLY IN EMERGENCIES. COMMUNICATIONS MAY BE MONITORED."</p>
        </section>
    }
}
