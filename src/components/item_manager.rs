//! Item Manager Component
//!
//! Form, list and health badge for backend items. Owns the view state and
//! starts the health probe and the item fetch when mounted.

use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::{HealthBadge, ItemListView, NewItemForm};
use crate::config::ViewConfig;
use crate::context::ItemsContext;
use crate::lifecycle::ViewLifetime;
use crate::models::HealthStatus;
use crate::store::{
    store_set_error, store_set_health, store_set_loaded, store_set_loading, ItemsState,
    ItemsStateStoreFields, ItemsStore, FETCH_ERROR,
};

#[component]
pub fn ItemManager(config: ViewConfig) -> impl IntoView {
    let store: ItemsStore = Store::new(ItemsState::new());
    let client = ApiClient::new(config.api);
    let lifetime = ViewLifetime::new();
    let list_ref = NodeRef::<Div>::new();

    // Aborts whatever this view still has in flight
    on_cleanup(move || lifetime.end());

    provide_context(ItemsContext::new(store, client.clone(), lifetime));

    // Health probe and item fetch run independently
    Effect::new({
        let client = client.clone();
        move |_| {
            let client = client.clone();
            spawn_local(async move {
                let signal = lifetime.signal();
                let health = match client.check_health(signal.as_ref()).await {
                    Ok(health) => health,
                    Err(_) if !lifetime.is_alive() => return,
                    Err(e) => {
                        web_sys::console::error_1(&format!("[HEALTH] Health check failed: {}", e).into());
                        HealthStatus::Down
                    }
                };
                if lifetime.is_alive() {
                    store_set_health(&store, health);
                }
            });
        }
    });

    Effect::new(move |_| {
        let client = client.clone();
        spawn_local(async move {
            store_set_loading(&store, true);
            let signal = lifetime.signal();
            let result = client.list_items(signal.as_ref()).await;
            if !lifetime.is_alive() {
                return;
            }
            match result {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[ITEMS] Loaded {} items", loaded.len()).into());
                    store_set_loaded(&store, loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[ITEMS] Fetch failed: {}", e).into());
                    store_set_error(&store, FETCH_ERROR);
                }
            }
            store_set_loading(&store, false);
        });
    });

    view! {
        <section class="item-manager">
            <HealthBadge />

            {move || store.error().get().map(|message| view! { <div class="error">{message}</div> })}

            <div class="card">
                <h2>"Add New Item"</h2>
                <NewItemForm seed=config.seed list_ref=list_ref />
            </div>

            <ItemListView list_ref=list_ref />
        </section>
    }
}
