//! Item Manager Context
//!
//! Per-view state shared with child components via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::lifecycle::ViewLifetime;
use crate::store::ItemsStore;

/// Everything a child of the item manager needs
#[derive(Clone)]
pub struct ItemsContext {
    pub store: ItemsStore,
    pub client: ApiClient,
    /// Ends when the owning view is cleaned up
    pub lifetime: ViewLifetime,
}

impl ItemsContext {
    pub fn new(store: ItemsStore, client: ApiClient, lifetime: ViewLifetime) -> Self {
        Self { store, client, lifetime }
    }
}

/// Get the item manager context
pub fn use_items_context() -> ItemsContext {
    expect_context::<ItemsContext>()
}
