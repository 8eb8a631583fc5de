//! Sidebar collapsed flag with cookie persistence.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use identity::SidebarPreference;
use identity::cookies::SIDEBAR_STATE_COOKIE;
use leptos::prelude::*;

use crate::util::storage::SharedStorage;

#[derive(Clone)]
pub struct SidebarState {
    collapsed: RwSignal<bool>,
    storage: SharedStorage,
}

impl SidebarState {
    pub fn new(initial: SidebarPreference, storage: SharedStorage) -> Self {
        Self { collapsed: RwSignal::new(initial.is_collapsed()), storage }
    }

    pub fn collapsed_signal(&self) -> ReadSignal<bool> {
        self.collapsed.read_only()
    }

    pub fn set_collapsed(&self, collapsed: bool) {
        self.collapsed.set(collapsed);
        self.storage.set_value(
            SIDEBAR_STATE_COOKIE,
            SidebarPreference::from_collapsed(collapsed).as_cookie_value(),
        );
    }

    pub fn toggle(&self) {
        self.set_collapsed(!self.collapsed.get_untracked());
    }
}
