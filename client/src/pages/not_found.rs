//! Fallback for unknown paths.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="access-denied">
            <div class="card card--danger">
                <h1>"404: SECTOR NOT FOUND"</h1>
                <p class="text-muted">"THE REQUESTED PATH DOES NOT EXIST ON THIS NETWORK."</p>
                <A href="/dashboard">"RETURN TO DASHBOARD"</A>
            </div>
        </div>
    }
}
