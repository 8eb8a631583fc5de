//! Collapsible sidebar for organization-scoped pages.

#[cfg(test)]
#[path = "app_sidebar_test.rs"]
mod app_sidebar_test;

use identity::{Organization, UserSession};
use leptos::prelude::*;

use crate::components::sign_out_button::SignOutButton;
use crate::state::organization::OrganizationStore;
use crate::state::session::SessionStore;
use crate::state::sidebar::SidebarState;

fn display_name(session: Option<&UserSession>) -> String {
    session
        .and_then(UserSession::profile)
        .and_then(|profile| profile.display_name.as_deref())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or("Guest")
        .to_owned()
}

fn organization_label(organization: Option<&Organization>) -> String {
    organization
        .map(|org| org.name.trim())
        .filter(|name| !name.is_empty())
        .unwrap_or("No organization")
        .to_owned()
}

fn dashboard_href(organization: Option<&Organization>) -> String {
    match organization.and_then(Organization::identifier) {
        Some(id) => format!("/dashboard/{id}"),
        None => "/dashboard".to_owned(),
    }
}

#[component]
pub fn AppSidebar() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let organization = expect_context::<OrganizationStore>();
    let sidebar = expect_context::<SidebarState>();
    let collapsed = sidebar.collapsed_signal();

    let org_for_label = organization.clone();
    let label = move || organization_label(org_for_label.current().as_ref());
    let href = move || dashboard_href(organization.current().as_ref());
    let name = move || display_name(session.current().as_ref());

    view! {
        <aside class=move || if collapsed.get() { "app-sidebar app-sidebar--collapsed" } else { "app-sidebar" }>
            <button
                class="btn app-sidebar__toggle"
                title="Toggle sidebar"
                on:click=move |_| sidebar.toggle()
            >
                {move || if collapsed.get() { "»" } else { "«" }}
            </button>
            <Show when=move || !collapsed.get()>
                <div class="app-sidebar__org">{label.clone()}</div>
                <a class="app-sidebar__link" href=href.clone()>"Dashboard"</a>
                <div class="app-sidebar__user">{name}</div>
                <Show when=move || session.is_authenticated()>
                    <SignOutButton/>
                </Show>
            </Show>
        </aside>
    }
}
