//! Public landing page. Also the destination after a live sign-out.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Orgscope"</h1>
            <p>"Sign in to open your organization dashboard."</p>
            <a class="btn btn--primary" href="/dashboard">"Open dashboard"</a>
        </div>
    }
}
