//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{login::LoginPage, register::RegisterPage, student::StudentPage};
use crate::state::session::SessionState;

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
/// Provides the shared session context and sets up client-side routing.
/// The session lifecycle is explicit: restored from the session store
/// when the client mounts, replaced on login, cleared on logout.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    // Effects only run in the browser, so this settles the restore after
    // hydration and never during SSR.
    Effect::new(move || {
        session.set(SessionState::restored(crate::util::session_store::load()));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/portal-client.css"/>
        <Title text="Reporting Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("") view=StudentPage/>
            </Routes>
        </Router>
    }
}
