//! Organization overview shown inside the scope layout.

use identity::{MembershipRole, UserSession};
use leptos::prelude::*;

use crate::state::organization::OrganizationStore;
use crate::state::session::SessionStore;

fn role_label(session: Option<&UserSession>) -> &'static str {
    match session.and_then(|s| s.role) {
        Some(MembershipRole::Owner) => "Owner",
        Some(MembershipRole::Admin) => "Admin",
        Some(MembershipRole::Member) => "Member",
        None => "No membership",
    }
}

#[component]
pub fn OrganizationOverview() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let organization = expect_context::<OrganizationStore>();

    let org_for_name = organization.clone();
    let name = move || org_for_name.current().map(|o| o.name).unwrap_or_else(|| "Choose an organization".to_owned());
    let logo = move || organization.current().and_then(|o| o.logo_url);
    let role = move || role_label(session.current().as_ref());

    view! {
        <section class="org-overview">
            {move || logo().map(|src| view! { <img class="org-overview__logo" src=src alt=""/> })}
            <h1 class="org-overview__name">{name}</h1>
            <p class="org-overview__role">{role}</p>
        </section>
    }
}
