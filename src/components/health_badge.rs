//! Health Badge Component

use leptos::prelude::*;

use crate::context::use_items_context;
use crate::store::ItemsStateStoreFields;

/// "Online" only while the last probe reported exactly `healthy`
#[component]
pub fn HealthBadge() -> impl IntoView {
    let store = use_items_context().store;

    view! {
        <div class="status-badge">
            <span>"API Status:"</span>
            <span class=move || store.health().get().css_class()>
                {move || store.health().get().label()}
            </span>
        </div>
    }
}
