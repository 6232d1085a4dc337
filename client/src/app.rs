//! Root application component: auth context, bootstrap, and routing.

use console_core::Screen;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Redirect, Route, Router, Routes};

use crate::components::guard::Protected;
use crate::pages::capture::CapturePage;
use crate::pages::contacts::ContactsPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::guide::GuidePage;
use crate::pages::leaderboard::LeaderboardPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::punishments::PunishmentsPage;
use crate::pages::reports::ReportsPage;
use crate::pages::users::UsersPage;
use crate::state::auth::new_web_auth;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth context, restores a persisted session once in the
/// browser, and routes every screen except login through the guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let (auth, session) = new_web_auth();
    provide_context(auth.clone());
    provide_context(session);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        auth.bootstrap().await;
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = auth;

    view! {
        <Title text="DevOps Chaos Console"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=Screen::Dashboard.path()/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <Protected screen=Screen::Dashboard><DashboardPage/></Protected> }
                />
                <Route
                    path=StaticSegment("users")
                    view=|| view! { <Protected screen=Screen::Users><UsersPage/></Protected> }
                />
                <Route
                    path=StaticSegment("reports")
                    view=|| view! { <Protected screen=Screen::Reports><ReportsPage/></Protected> }
                />
                <Route
                    path=StaticSegment("punishments")
                    view=|| view! { <Protected screen=Screen::Punishments><PunishmentsPage/></Protected> }
                />
                <Route
                    path=StaticSegment("leaderboard")
                    view=|| view! { <Protected screen=Screen::Leaderboard><LeaderboardPage/></Protected> }
                />
                <Route
                    path=StaticSegment("capture")
                    view=|| view! { <Protected screen=Screen::Capture><CapturePage/></Protected> }
                />
                <Route
                    path=StaticSegment("contacts")
                    view=|| view! { <Protected screen=Screen::Contacts><ContactsPage/></Protected> }
                />
                <Route
                    path=StaticSegment("guide")
                    view=|| view! { <Protected screen=Screen::Guide><GuidePage/></Protected> }
                />
            </Routes>
        </Router>
    }
}
