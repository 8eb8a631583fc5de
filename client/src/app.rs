//! Root application component and route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! `shell` is the SSR document used by `leptos_axum`; `App` provides the
//! app-wide `AuthChannel` and declares the routes. Organization-scoped
//! stores are not provided here: each `OrganizationScopeLayout` owns its own.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::{ParamSegment, StaticSegment};

use crate::net::auth_events::AuthChannel;
use crate::pages::home::HomePage;
use crate::pages::organization::OrganizationPage;

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

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let channel = AuthChannel::new();
    #[cfg(feature = "hydrate")]
    crate::net::auth_events::install_storage_bridge(channel.clone());
    provide_context(channel);

    view! {
        <Title text="Orgscope"/>
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("dashboard") view=OrganizationPage/>
                <Route path=(StaticSegment("dashboard"), ParamSegment("organization")) view=OrganizationPage/>
            </Routes>
        </Router>
    }
}
