//! Organization dashboard route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves `/dashboard` and `/dashboard/:organization`. The `AppData` snapshot
//! comes from the `load_app_data` server function, awaited during SSR, and is
//! refetched when the route parameter changes.
//!
//! TRADE-OFFS
//! ==========
//! While a refetch is in flight the layout keeps the previous snapshot rather
//! than unmounting, so the stores and the auth listener survive navigation
//! between organizations.

use identity::AppData;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::organization_overview::OrganizationOverview;
use crate::components::organization_scope_layout::OrganizationScopeLayout;
use crate::net::api::load_app_data;

#[component]
pub fn OrganizationPage() -> impl IntoView {
    let params = use_params_map();
    let organization = Memo::new(move |_| params.with(|p| p.get("organization")));

    let app_data = Resource::new(move || organization.get(), load_app_data);

    let latest = Memo::new(move |previous: Option<&AppData>| match app_data.get() {
        Some(Ok(data)) => data,
        Some(Err(e)) => {
            log::warn!("load_app_data failed: {e}");
            previous.cloned().unwrap_or_default()
        }
        None => previous.cloned().unwrap_or_default(),
    });

    view! {
        <Transition fallback=|| view! { <div class="scope-loading">"Loading…"</div> }>
            <Show when=move || app_data.get().is_some()>
                <OrganizationScopeLayout data=latest>
                    <OrganizationOverview/>
                </OrganizationScopeLayout>
            </Show>
        </Transition>
    }
}
