//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::protected_route::RequireRole;
use crate::net::types::ROLE_OWNER;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, signup::SignupPage};
use crate::state::auth::{AuthState, restore_session};
use crate::util::session::BrowserSession;

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
/// Provides the shared session context, rehydrates it from the durable
/// store once the browser takes over, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Session state starts in the restoring (loading) phase so route guards
    // render nothing instead of redirecting before storage has been read.
    let auth = RwSignal::new(AuthState::restoring());
    provide_context(auth);

    Effect::new(move || {
        if auth.get_untracked().loading {
            auth.set(restore_session(&BrowserSession));
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/courtside-owner.css"/>
        <Title text="Courtside Owner"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/login"/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=(StaticSegment("owner"), StaticSegment("signup")) view=SignupPage/>
                <Route
                    path=(StaticSegment("owner"), StaticSegment("dashboard"))
                    view=|| {
                        view! {
                            <RequireRole required_role=ROLE_OWNER>
                                <DashboardPage/>
                            </RequireRole>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
