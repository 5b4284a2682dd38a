//! Item Manager State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::item_list;
use crate::models::{HealthStatus, Item};

/// Banner shown when the initial item fetch fails
pub const FETCH_ERROR: &str = "Error fetching items. Is the backend running?";
/// Banner shown when creating an item fails
pub const CREATE_ERROR: &str = "Error creating item";

/// How long the list stays highlighted after a create
pub const HIGHLIGHT_MS: u32 = 2000;
/// Delay before scrolling the list into view after a create
pub const SCROLL_DELAY_MS: u32 = 100;

/// State of one item manager view
#[derive(Clone, Debug, Default, Store)]
pub struct ItemsState {
    /// Cache of backend items, newest first
    pub items: Vec<Item>,
    /// True while the initial fetch is in flight
    pub loading: bool,
    /// User-visible error banner
    pub error: Option<String>,
    pub health: HealthStatus,
    /// Transient highlight after a successful create
    pub highlighted: bool,
    /// Bumped by each create so only the newest highlight timer clears it
    pub highlight_generation: u64,
}

impl ItemsState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

pub type ItemsStore = Store<ItemsState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the list with a fresh load and clear the banner
pub fn store_set_loaded(store: &ItemsStore, items: Vec<Item>) {
    *store.items().write() = item_list::newest_first(items);
    *store.error().write() = None;
}

/// Add a created item on top and clear the banner
pub fn store_prepend_item(store: &ItemsStore, item: Item) {
    item_list::prepend(&mut store.items().write(), item);
    *store.error().write() = None;
}

pub fn store_set_loading(store: &ItemsStore, loading: bool) {
    *store.loading().write() = loading;
}

pub fn store_set_error(store: &ItemsStore, message: &str) {
    *store.error().write() = Some(message.to_string());
}

pub fn store_set_health(store: &ItemsStore, health: HealthStatus) {
    *store.health().write() = health;
}

/// Turn the highlight on and return the generation its timer must match
pub fn store_begin_highlight(store: &ItemsStore) -> u64 {
    let generation = store.highlight_generation().get_untracked() + 1;
    *store.highlight_generation().write() = generation;
    *store.highlighted().write() = true;
    generation
}

/// Turn the highlight off unless a later create has restarted it
pub fn store_end_highlight(store: &ItemsStore, generation: u64) {
    if store.highlight_generation().get_untracked() == generation {
        *store.highlighted().write() = false;
    }
}
