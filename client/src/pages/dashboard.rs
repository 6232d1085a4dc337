//! `/dashboard`: one of three role dashboards.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard has already admitted a signed-in user by the time this renders.
//! The view is picked by `DashboardView::for_role`, so each role always lands
//! on its own dashboard and nothing else.

use console_core::navigation::DashboardView;
use leptos::prelude::*;

use crate::pages::command_center::CommandCenter;
use crate::pages::daemon_terminal::DaemonTerminal;
use crate::pages::resistance_hub::ResistanceHub;
use crate::state::auth::use_auth;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (_, session) = use_auth();
    let view = Memo::new(move |_| session.read().role().map(DashboardView::for_role));

    move || match view.get() {
        Some(DashboardView::CommandCenter) => view! { <CommandCenter/> }.into_any(),
        Some(DashboardView::DaemonTerminal) => view! { <DaemonTerminal/> }.into_any(),
        Some(DashboardView::ResistanceHub) => view! { <ResistanceHub/> }.into_any(),
        None => ().into_any(),
    }
}
