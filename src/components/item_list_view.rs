//! Item List View Component
//!
//! Renders the cached items newest first, with loading and empty placeholders.

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::context::use_items_context;
use crate::models::Item;
use crate::store::{ItemsStateStoreFields, ItemsStore};

/// Locale-formatted creation time, as the browser renders it
fn format_created_at(created_at: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(created_at));
    date.to_locale_string("default", &JsValue::UNDEFINED).into()
}

#[component]
fn ItemEntry(item: Item) -> impl IntoView {
    let description = item.description_text().to_string();
    let created = format_created_at(&item.created_at);

    view! {
        <li class="item">
            <h3>{item.name}</h3>
            <p>{description}</p>
            <div class="item-meta">
                <span>"ID: " {item.id}</span>
                <span>"Created: " {created}</span>
            </div>
        </li>
    }
}

/// Changes only when the list goes from empty to non-empty or back
fn list_is_empty(store: ItemsStore) -> Memo<bool> {
    Memo::new(move |_| store.items().read().is_empty())
}

/// List container; also the highlight and scroll target after a create
#[component]
pub fn ItemListView(list_ref: NodeRef<Div>) -> impl IntoView {
    let store = use_items_context().store;
    // Keeps the list mounted while items are added
    let is_empty = list_is_empty(store);

    view! {
        <div
            node_ref=list_ref
            class=move || if store.highlighted().get() { "items-container highlight" } else { "items-container" }
        >
            <h2>"Database Items"</h2>
            {move || {
                if store.loading().get() {
                    view! { <p>"Loading items from the database..."</p> }.into_any()
                } else if is_empty.get() {
                    view! { <p>"No items found in the database. Add some above!"</p> }.into_any()
                } else {
                    view! {
                        <ul class="items-list">
                            <For
                                each=move || store.items().get()
                                key=|item| item.id
                                children=move |item| view! { <ItemEntry item=item /> }
                            />
                        </ul>
                    }.into_any()
                }
            }}
        </div>
    }
}
