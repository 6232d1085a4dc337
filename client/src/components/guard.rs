//! Route guard component.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every protected route. The decision itself is
//! `console_core::guard::evaluate`; this component only maps each outcome to
//! a view: a loading indicator, a redirect to `/login`, the access-denied
//! panel, or the screen inside the console layout.

use console_core::guard::{GuardState, evaluate};
use console_core::Screen;
use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::layout::Layout;
use crate::components::loading::Loading;
use crate::state::auth::use_auth;

#[component]
pub fn Protected(screen: Screen, children: ChildrenFn) -> impl IntoView {
    let (_, session) = use_auth();

    move || match evaluate(&session.read(), screen.access()) {
        GuardState::Loading => view! { <Loading label="VERIFYING CREDENTIALS..."/> }.into_any(),
        GuardState::Unauthenticated => view! { <Redirect path="/login"/> }.into_any(),
        state @ GuardState::Forbidden { .. } => {
            let (role_line, clearance_line) = state.denial_lines().unwrap_or_default();
            view! {
                <div class="access-denied">
                    <div class="card card--danger">
                        <h1>"ACCESS DENIED"</h1>
                        <p class="text-muted">{role_line}</p>
                        <p class="text-muted text-sm">{clearance_line}</p>
                    </div>
                </div>
            }
            .into_any()
        }
        GuardState::Authorized => {
            let children = children.clone();
            view! { <Layout>{children()}</Layout> }.into_any()
        }
    }
}
